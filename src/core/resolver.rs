// --- File: src/core/resolver.rs
use crate::core::types::{DictionaryEntry, WordId};
use crate::error::{PromptError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Finds example words for a (gradation class, transformation id) pair.
///
/// Entries are stored once and indexed by pair, so each lookup is a single
/// hash lookup instead of a scan over the whole corpus.
pub struct WordResolver {
    entries: Vec<DictionaryEntry>,
    index: HashMap<(String, u32), Vec<WordId>>,
}

impl WordResolver {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        let mut index: HashMap<(String, u32), Vec<WordId>> = HashMap::new();
        for (id, entry) in entries.iter().enumerate() {
            index
                .entry((entry.gradation_class.clone(), entry.transformation_id))
                .or_default()
                .push(id);
        }
        Self { entries, index }
    }

    /// Parses a JSON array of dictionary entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Number of entries in the corpus.
    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    /// All entries sharing the given pair, in corpus order.
    pub fn matches(&self, gradation_class: &str, transformation_id: u32) -> Vec<&DictionaryEntry> {
        self.index
            .get(&(gradation_class.to_string(), transformation_id))
            .map(|ids| ids.iter().map(|&id| &self.entries[id]).collect())
            .unwrap_or_default()
    }

    /// Picks one matching entry uniformly at random. A pair with no word in
    /// the dictionary means the usage log and the corpus disagree, which is
    /// reported rather than skipped.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        gradation_class: &str,
        transformation_id: u32,
        rng: &mut R,
    ) -> Result<&DictionaryEntry> {
        self.matches(gradation_class, transformation_id)
            .choose(rng)
            .copied()
            .ok_or_else(|| PromptError::NoMatchingWord {
                gradation_class: gradation_class.to_string(),
                transformation_id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CORPUS: &str = r#"[
        {"word": "aakkonen", "av": "_", "tn": 38},
        {"word": "aika", "av": "D", "tn": 9},
        {"word": "reikä", "av": "D", "tn": 10},
        {"word": "nahka", "av": "D", "tn": 9},
        {"word": "aste", "av": "C", "tn": 48}
    ]"#;

    #[test]
    fn matches_require_both_fields() {
        let resolver = WordResolver::from_json(CORPUS).unwrap();
        assert_eq!(resolver.word_count(), 5);
        let words: Vec<&str> = resolver
            .matches("D", 9)
            .iter()
            .map(|e| e.word.as_str())
            .collect();
        assert_eq!(words, vec!["aika", "nahka"]);
        assert!(resolver.matches("C", 9).is_empty());
    }

    #[test]
    fn resolved_word_always_has_the_queried_pair() {
        let resolver = WordResolver::from_json(CORPUS).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let entry = resolver.resolve("D", 9, &mut rng).unwrap();
            assert_eq!(entry.gradation_class, "D");
            assert_eq!(entry.transformation_id, 9);
        }
    }

    #[test]
    fn missing_pair_is_a_consistency_error() {
        let resolver = WordResolver::from_json(CORPUS).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let err = resolver.resolve("D", 3, &mut rng).unwrap_err();
        match err {
            PromptError::NoMatchingWord {
                gradation_class,
                transformation_id,
            } => {
                assert_eq!(gradation_class, "D");
                assert_eq!(transformation_id, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_corpus_is_a_json_error() {
        assert!(matches!(
            WordResolver::from_json(r#"[{"word": "aika"}]"#),
            Err(PromptError::Json(_))
        ));
    }
}
