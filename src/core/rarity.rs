// File: src/core/rarity.rs
use crate::core::types::UsageTable;

/// A combination is rare when its count is below this share of the
/// most practiced combination.
pub const RARITY_RATIO: f64 = 0.05;

/// Returns the combinations whose count is strictly below
/// `RARITY_RATIO * max(count)`. The input table is left untouched.
///
/// The table is expected to be non-empty; the pipeline rejects an empty usage
/// log before calling this. An empty table simply yields an empty result.
pub fn rare_combinations(table: &UsageTable) -> UsageTable {
    let Some(&max_count) = table.values().max() else {
        return UsageTable::new();
    };
    let threshold = max_count as f64 * RARITY_RATIO;

    table
        .iter()
        .filter(|(_, count)| (**count as f64) < threshold)
        .map(|(key, &count)| (key.clone(), count))
        .collect()
}
