//! Error types for the prompt generator.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PromptError>;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Missing required configuration value {0}")]
    MissingConfig(&'static str),

    #[error("Invalid configuration value {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    #[error("Malformed usage record on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Invalid combination key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Usage log contains no records")]
    EmptyUsage,

    #[error("No dictionary word with gradation '{gradation_class}' and transformation {transformation_id}")]
    NoMatchingWord {
        gradation_class: String,
        transformation_id: u32,
    },

    #[error("Unknown noun case '{0}'")]
    UnknownCase(String),

    #[error("Unknown gradation class '{0}'")]
    UnknownGradation(String),

    #[error("Blob '{0}' not found in store")]
    MissingBlob(String),

    #[error("Trigger payload error: {0}")]
    Trigger(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl PromptError {
    /// True for failures caused by the usage log or dictionary contents,
    /// as opposed to configuration or infrastructure problems.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            PromptError::MalformedInput { .. }
                | PromptError::InvalidKey { .. }
                | PromptError::EmptyUsage
                | PromptError::NoMatchingWord { .. }
                | PromptError::UnknownCase(_)
                | PromptError::UnknownGradation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_errors_are_classified() {
        assert!(PromptError::EmptyUsage.is_data_error());
        assert!(PromptError::UnknownCase("x".into()).is_data_error());
        assert!(!PromptError::MissingConfig("OUTPUT_BUCKET").is_data_error());
        assert!(!PromptError::MissingBlob("all.csv".into()).is_data_error());
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = PromptError::NoMatchingWord {
            gradation_class: "D".into(),
            transformation_id: 3,
        };
        assert_eq!(
            err.to_string(),
            "No dictionary word with gradation 'D' and transformation 3"
        );
    }
}
