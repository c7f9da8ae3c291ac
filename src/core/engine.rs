use crate::core::rarity::rare_combinations;
use crate::core::renderer::{render_line, render_section};
use crate::core::resolver::WordResolver;
use crate::core::sampler::CombinationSampler;
use crate::core::types::{CombinationKey, UsageTable};
use crate::core::usage::aggregate_log;
use crate::error::{PromptError, Result};
use chrono::NaiveDateTime;
use rand::Rng;
use tracing::debug;

/// One generated prompt: the rare combination, how often it was practiced,
/// and the example word picked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub key: CombinationKey,
    pub usage_count: u64,
    pub word: String,
    pub line: String,
}

/// The outcome of one run, rendered but not yet persisted.
#[derive(Debug, Clone)]
pub struct Section {
    pub generated_at: NaiveDateTime,
    pub prompts: Vec<Prompt>,
    pub text: String,
}

// The engine owns the dictionary index and the sampler. Usage data is passed
// in per call since it is re-read on every trigger.
pub struct PromptEngine {
    pub resolver: WordResolver,
    pub sampler: CombinationSampler,
}

impl PromptEngine {
    pub fn new(resolver: WordResolver, sample_size: usize) -> Self {
        Self {
            resolver,
            sampler: CombinationSampler::new(sample_size),
        }
    }

    /// Runs aggregation, filtering and sampling over a usage log, then
    /// resolves and renders every sampled combination.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        usage_log: &str,
        generated_at: NaiveDateTime,
        rng: &mut R,
    ) -> Result<Section> {
        let table = aggregate_log(usage_log)?;
        self.generate_from_table(&table, generated_at, rng)
    }

    pub fn generate_from_table<R: Rng + ?Sized>(
        &self,
        table: &UsageTable,
        generated_at: NaiveDateTime,
        rng: &mut R,
    ) -> Result<Section> {
        if table.is_empty() {
            return Err(PromptError::EmptyUsage);
        }

        // 1. Rare combinations relative to the most practiced one
        let rare = rare_combinations(table);
        debug!(combinations = table.len(), rare = rare.len(), "usage table filtered");

        // 2. Bounded random subset
        let selected = self.sampler.sample(&rare, rng);

        // 3. Word and line per combination. Any failure aborts the whole section.
        let mut prompts = Vec::with_capacity(selected.len());
        for key in selected {
            let entry = self.resolver.resolve(&key.gradation_class, key.transformation_id, rng)?;
            let line = render_line(&key, &entry.word)?;
            debug!(%key, word = %entry.word, "prompt selected");
            prompts.push(Prompt {
                usage_count: rare.get(&key).copied().unwrap_or_default(),
                word: entry.word.clone(),
                key,
                line,
            });
        }

        let lines: Vec<String> = prompts.iter().map(|p| p.line.clone()).collect();
        Ok(Section {
            generated_at,
            text: render_section(generated_at, &lines),
            prompts,
        })
    }
}
