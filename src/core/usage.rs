// File: src/core/usage.rs
use crate::core::types::{Number, UsageRecord, UsageTable};
use crate::error::{PromptError, Result};

/// Number of comma separated fields in a usage log line:
/// `timestamp,filename,sijamuoto,number,av,tn,count`
pub const USAGE_FIELDS: usize = 7;

/// Parses one usage log line. `line_no` is 1-based and only used for errors.
pub fn parse_record(line: &str, line_no: usize) -> Result<UsageRecord> {
    let malformed = |reason: String| PromptError::MalformedInput {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < USAGE_FIELDS {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            USAGE_FIELDS,
            fields.len()
        )));
    }

    let transformation_id = fields[5]
        .parse::<u32>()
        .map_err(|e| malformed(format!("transformation id '{}': {}", fields[5], e)))?;
    let count = fields[6]
        .parse::<u64>()
        .map_err(|e| malformed(format!("count '{}': {}", fields[6], e)))?;

    Ok(UsageRecord {
        line: line_no,
        timestamp: fields[0].to_string(),
        filename: fields[1].to_string(),
        case: fields[2].to_string(),
        number: Number::from(fields[3]),
        gradation_class: fields[4].to_string(),
        transformation_id,
        count,
    })
}

/// Parses every non-blank line of a usage log. Stops at the first bad line.
pub fn parse_log(text: &str) -> Result<Vec<UsageRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_record(line, idx + 1))
        .collect()
}

/// Sums record counts per combination. A total that no longer fits in a
/// `u64` is reported against the record that pushed it over.
pub fn aggregate<'a, I>(records: I) -> Result<UsageTable>
where
    I: IntoIterator<Item = &'a UsageRecord>,
{
    let mut table = UsageTable::new();
    for record in records {
        let key = record.key();
        let total = table.entry(key).or_insert(0);
        *total = total
            .checked_add(record.count)
            .ok_or_else(|| PromptError::MalformedInput {
                line: record.line,
                reason: format!("total count of {} exceeds {}", record.key(), u64::MAX),
            })?;
    }
    Ok(table)
}

/// Parses and aggregates a whole usage log. Nothing is returned if any line
/// fails to parse.
pub fn aggregate_log(text: &str) -> Result<UsageTable> {
    let records = parse_log(text)?;
    aggregate(&records)
}
