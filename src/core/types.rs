// src/core/types.rs
use crate::error::PromptError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Index of an entry inside the loaded dictionary.
pub type WordId = usize;

/// Separator used in the textual form of a [`CombinationKey`].
/// None of the case, number, gradation or transformation codes contain it.
pub const KEY_SEPARATOR: char = ':';

/// Grammatical number of a practiced form. Values other than `singular`
/// and `plural` are kept verbatim so they still count as their own
/// combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Number {
    Singular,
    Plural,
    Other(String),
}

impl Number {
    pub fn as_str(&self) -> &str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
            Number::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Number {
    fn from(s: &str) -> Self {
        match s {
            "singular" => Number::Singular,
            "plural" => Number::Plural,
            other => Number::Other(other.to_string()),
        }
    }
}

/// One line of the usage log, after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    /// 1-based line of the log this record came from.
    pub line: usize,
    pub timestamp: String,
    pub filename: String,
    pub case: String,
    pub number: Number,
    pub gradation_class: String,
    pub transformation_id: u32,
    pub count: u64,
}

impl UsageRecord {
    pub fn key(&self) -> CombinationKey {
        CombinationKey {
            case: self.case.clone(),
            number: self.number.clone(),
            gradation_class: self.gradation_class.clone(),
            transformation_id: self.transformation_id,
        }
    }
}

/// The unit that usage is counted against and prompts are generated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CombinationKey {
    pub case: String,
    pub number: Number,
    pub gradation_class: String,
    pub transformation_id: u32,
}

impl fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{case}{sep}{number}{sep}{av}{sep}{tn}",
            case = self.case,
            number = self.number,
            av = self.gradation_class,
            tn = self.transformation_id,
            sep = KEY_SEPARATOR
        )
    }
}

impl FromStr for CombinationKey {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| PromptError::InvalidKey {
            key: s.to_string(),
            reason,
        };
        let parts: Vec<&str> = s.split(KEY_SEPARATOR).collect();
        let [case, number, av, tn] = parts.as_slice() else {
            return Err(invalid(format!("expected 4 fields, got {}", parts.len())));
        };
        Ok(Self {
            case: case.to_string(),
            number: Number::from(*number),
            gradation_class: av.to_string(),
            transformation_id: tn
                .parse::<u32>()
                .map_err(|e| invalid(format!("transformation id: {}", e)))?,
        })
    }
}

/// Cumulative usage count per combination.
/// A BTreeMap keeps iteration order stable, so a seeded RNG reproduces a run.
pub type UsageTable = BTreeMap<CombinationKey, u64>;

fn no_gradation() -> String {
    "_".to_string()
}

/// A word from the reference corpus. Fields the generator has no use for
/// (declension examples, notes) are skipped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(rename = "av", default = "no_gradation")]
    pub gradation_class: String,
    #[serde(rename = "tn")]
    pub transformation_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_text_form_round_trips() {
        let key = CombinationKey {
            case: "sisatulento".to_string(),
            number: Number::Plural,
            gradation_class: "D".to_string(),
            transformation_id: 3,
        };
        let text = key.to_string();
        assert_eq!(text, "sisatulento:plural:D:3");
        assert_eq!(text.parse::<CombinationKey>().unwrap(), key);
    }

    #[test]
    fn key_parse_rejects_wrong_arity() {
        assert!("nimento:singular:A".parse::<CombinationKey>().is_err());
        assert!("nimento:singular:A:1:extra".parse::<CombinationKey>().is_err());
        assert!("nimento:singular:A:x".parse::<CombinationKey>().is_err());
    }

    #[test]
    fn unusual_number_round_trips_verbatim() {
        assert_eq!(Number::from("Plural"), Number::Other("Plural".to_string()));
        let key: CombinationKey = "nimento:Plural:A:1".parse().unwrap();
        assert_eq!(key.number.as_str(), "Plural");
        assert_eq!(key.to_string(), "nimento:Plural:A:1");
    }

    #[test]
    fn dictionary_entry_ignores_extra_fields() {
        let json = r#"{"word": "aakkonen", "av": "_", "tn": 38, "notes": "x"}"#;
        let entry: DictionaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.word, "aakkonen");
        assert_eq!(entry.gradation_class, "_");
        assert_eq!(entry.transformation_id, 38);
    }

    #[test]
    fn dictionary_entry_without_av_has_no_gradation() {
        let entry: DictionaryEntry =
            serde_json::from_str(r#"{"word": "talo", "tn": 1}"#).unwrap();
        assert_eq!(entry.gradation_class, "_");
    }
}
