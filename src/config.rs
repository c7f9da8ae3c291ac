// File: src/config.rs
use crate::core::sampler::DEFAULT_SAMPLE_SIZE;
use crate::error::{PromptError, Result};
use std::path::PathBuf;

pub const OUTPUT_BUCKET_VAR: &str = "OUTPUT_BUCKET";
pub const STORAGE_ROOT_VAR: &str = "PROMPT_STORAGE_ROOT";
pub const CACHE_DIR_VAR: &str = "PROMPT_CACHE_DIR";
pub const SAMPLE_SIZE_VAR: &str = "PROMPT_SAMPLE_SIZE";

/// Blob holding the usage log.
pub const USAGE_BLOB: &str = "all.csv";
/// Blob holding the word corpus.
pub const DICTIONARY_BLOB: &str = "kotus_all.json";
/// Blob holding the accumulated prompt document.
pub const PROMPTS_BLOB: &str = "prompts.md";

/// Runtime settings of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the bucket the blobs live in.
    pub output_bucket: String,
    /// Directory containing buckets for the filesystem-backed store.
    pub storage_root: PathBuf,
    /// Local download cache.
    pub cache_dir: PathBuf,
    pub sample_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any name → value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_bucket = lookup(OUTPUT_BUCKET_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(PromptError::MissingConfig(OUTPUT_BUCKET_VAR))?;

        let sample_size = match lookup(SAMPLE_SIZE_VAR) {
            Some(raw) => parse_sample_size(&raw)?,
            None => DEFAULT_SAMPLE_SIZE,
        };

        Ok(Self {
            output_bucket,
            storage_root: lookup(STORAGE_ROOT_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            cache_dir: lookup(CACHE_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("downloads")),
            sample_size,
        })
    }
}

fn parse_sample_size(raw: &str) -> Result<usize> {
    let invalid = |reason: String| PromptError::InvalidConfig {
        name: SAMPLE_SIZE_VAR,
        reason,
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(format!("'{}': {}", raw, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn bucket_is_required() {
        assert!(matches!(
            Config::from_lookup(lookup(&[])),
            Err(PromptError::MissingConfig(OUTPUT_BUCKET_VAR))
        ));
        assert!(Config::from_lookup(lookup(&[(OUTPUT_BUCKET_VAR, "  ")])).is_err());
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[(OUTPUT_BUCKET_VAR, "prompts")])).unwrap();
        assert_eq!(config.output_bucket, "prompts");
        assert_eq!(config.storage_root, PathBuf::from("."));
        assert_eq!(config.cache_dir, PathBuf::from("downloads"));
        assert_eq!(config.sample_size, DEFAULT_SAMPLE_SIZE);
    }

    #[test]
    fn sample_size_must_be_positive_integer() {
        let ok = Config::from_lookup(lookup(&[(OUTPUT_BUCKET_VAR, "b"), (SAMPLE_SIZE_VAR, "3")]));
        assert_eq!(ok.unwrap().sample_size, 3);
        for bad in ["0", "ten", "-1"] {
            let vars = [(OUTPUT_BUCKET_VAR, "b"), (SAMPLE_SIZE_VAR, bad)];
            let res = Config::from_lookup(lookup(&vars));
            assert!(matches!(res, Err(PromptError::InvalidConfig { .. })), "{bad}");
        }
    }
}
