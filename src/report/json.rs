#![forbid(unsafe_code)]

//! JSON record output for machine-readable value dumps
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One value record per option (sorted by option name)
//! 2. One status record with counts

use crate::model::{ResolvedOptions, ResolvedValue};
use serde::Serialize;

/// JSON record formatter
///
/// Formats a resolved option mapping as JSON Lines (one object per line).
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JsonFormatter
    pub fn new() -> Self {
        JsonFormatter
    }

    /// Format the resolved mapping as JSON records
    ///
    /// Returns a string with one JSON object per line: first a `value`
    /// record per option sorted by name, then a single `status` record
    /// carrying the option counts.
    pub fn format(&self, values: &ResolvedOptions) -> String {
        let mut output = String::new();

        let mut records: Vec<ValueRecord> = values
            .iter()
            .map(|(name, value)| ValueRecord {
                record_type: "value".to_string(),
                option: name.clone(),
                value: value.clone(),
            })
            .collect();

        records.sort_by(|a, b| a.option.cmp(&b.option));

        let scalar_values = records
            .iter()
            .filter(|r| matches!(r.value, ResolvedValue::Scalar(_)))
            .count() as u64;
        let list_values = records.len() as u64 - scalar_values;

        for record in records {
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let status = StatusRecord {
            record_type: "status".to_string(),
            options: values.len() as u64,
            scalar_values,
            list_values,
        };

        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Value record for JSON output
#[derive(Debug, Serialize)]
struct ValueRecord {
    #[serde(rename = "type")]
    record_type: String,
    option: String,
    value: ResolvedValue,
}

/// Status record closing the output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: String,
    options: u64,
    scalar_values: u64,
    list_values: u64,
}
