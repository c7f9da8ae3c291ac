// File: src/runner.rs
use crate::config::{Config, DICTIONARY_BLOB, PROMPTS_BLOB, USAGE_BLOB};
use crate::core::engine::{PromptEngine, Section};
use crate::core::resolver::WordResolver;
use crate::error::Result;
use crate::persistence::{fetch_cached, read_local, read_text_or_empty, write_atomic, BlobStore};
use crate::trigger::TriggerEvent;
use chrono::NaiveDateTime;
use rand::Rng;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Generate and return the section without touching the document.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub section: Section,
    /// Full document content after the run (what was, or would be, written).
    pub document: String,
    pub written: bool,
}

/// Handles one trigger: fetches inputs, generates a section and appends it
/// to the prompt document. Nothing is written unless every step succeeds.
pub fn run_once<R: Rng + ?Sized>(
    config: &Config,
    store: &dyn BlobStore,
    event: &TriggerEvent,
    options: RunOptions,
    generated_at: NaiveDateTime,
    rng: &mut R,
) -> Result<RunReport> {
    let payload = event.decode()?;
    match serde_json::from_str::<Value>(&payload) {
        Ok(json) => info!(payload = %json, "trigger received"),
        Err(_) => info!(%payload, "trigger received as text"),
    }
    info!(bucket = %config.output_bucket, sample_size = config.sample_size, "run started");

    let existing = read_text_or_empty(store, PROMPTS_BLOB)?;
    if existing.is_empty() {
        warn!(blob = PROMPTS_BLOB, "no existing prompt document, starting a new one");
    }

    // Usage changes between runs, the corpus does not.
    let usage_path = fetch_cached(store, USAGE_BLOB, &config.cache_dir, true)?;
    let dictionary_path = fetch_cached(store, DICTIONARY_BLOB, &config.cache_dir, false)?;

    let usage_log = read_local(&usage_path)?;
    let resolver = WordResolver::from_json(&read_local(&dictionary_path)?)?;
    info!(words = resolver.word_count(), "dictionary loaded");

    let engine = PromptEngine::new(resolver, config.sample_size);
    let section = engine.generate(&usage_log, generated_at, rng)?;
    info!(prompts = section.prompts.len(), "section generated");

    let mut document = existing;
    document.push_str(&section.text);

    if options.dry_run {
        info!("dry run, document left unchanged");
        return Ok(RunReport {
            section,
            document,
            written: false,
        });
    }

    let local_document = config.cache_dir.join(PROMPTS_BLOB);
    write_atomic(&local_document, document.as_bytes())?;
    store.upload_from(&local_document, PROMPTS_BLOB)?;
    info!(blob = PROMPTS_BLOB, bytes = document.len(), "prompt document updated");

    Ok(RunReport {
        section,
        document,
        written: true,
    })
}
