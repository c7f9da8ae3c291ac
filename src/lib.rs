// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod runner;
pub mod trigger;
pub use crate::core::engine::{PromptEngine, Section};
pub use crate::error::{PromptError, Result};
