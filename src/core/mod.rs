// src/core/mod.rs
pub mod engine;
pub mod rarity;
pub mod renderer;
pub mod resolver;
pub mod sampler;
pub mod tables;
pub mod types;
pub mod usage;
