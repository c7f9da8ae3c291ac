// File: src/core/renderer.rs
use crate::core::tables::{gradation_pairs, noun_form};
use crate::core::types::CombinationKey;
use crate::error::{PromptError, Result};
use chrono::NaiveDateTime;

/// `strftime` pattern of section headers: extended ISO-8601, second precision.
pub const HEADER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Renders a gradation class as `from -> to` pairs in their declared order,
/// e.g. `k -> -, - -> k` for class D.
pub fn render_gradation(gradation_class: &str) -> Result<String> {
    let pairs = gradation_pairs(gradation_class)
        .ok_or_else(|| PromptError::UnknownGradation(gradation_class.to_string()))?;
    Ok(pairs
        .iter()
        .map(|(from, to)| format!("{} -> {}", from, to))
        .collect::<Vec<_>>()
        .join(", "))
}

/// Renders one newline-terminated prompt line.
pub fn render_line(key: &CombinationKey, word: &str) -> Result<String> {
    let form = noun_form(&key.case).ok_or_else(|| PromptError::UnknownCase(key.case.clone()))?;
    let gradation = render_gradation(&key.gradation_class)?;
    Ok(format!(
        "- {} Astevaihtelu: {} ({} {})\n",
        word,
        gradation,
        key.number,
        form.describe()
    ))
}

/// The markdown header that opens each run's section.
pub fn render_header(generated_at: NaiveDateTime) -> String {
    format!("## Prompts for {}\n", generated_at.format(HEADER_TIME_FORMAT))
}

/// Header followed by the already rendered lines.
pub fn render_section(generated_at: NaiveDateTime, lines: &[String]) -> String {
    let mut section = render_header(generated_at);
    for line in lines {
        section.push_str(line);
    }
    section
}
