//! Defensive decoding of the scoring service's result text.
//!
//! The payload is only promised to be text. Strategies are tried in order and
//! the first that yields a fully valid record array wins:
//!
//! 1. [`ParseStrategy::WholeDocument`] - the text is a JSON array of records.
//! 2. [`ParseStrategy::WrappedArray`] - the text is a JSON object with a
//!    property holding such an array (`matches` is checked first).
//! 3. [`ParseStrategy::BracketSlice`] - the span from the first `[` to the last
//!    `]` is a JSON array of records.
//!
//! A candidate array is all-or-nothing: one malformed element rejects the
//! whole array and the next strategy is tried. Parse errors are never
//! surfaced; total failure yields an empty list.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::record::RecommendationRecord;

/// Property checked first when the payload is a wrapping object.
pub const MATCHES_KEY: &str = "matches";

/// Which decoding strategy produced the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    WholeDocument,
    WrappedArray,
    BracketSlice,
}

/// Records together with the strategy that found them.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecords {
    pub strategy: ParseStrategy,
    pub records: Vec<RecommendationRecord>,
}

/// Stateless decoder from raw result text to records.
pub struct ResponseParser;

impl ResponseParser {
    /// Decodes `raw`, returning an empty list when no strategy succeeds.
    pub fn parse(raw: &str) -> Vec<RecommendationRecord> {
        Self::parse_detailed(raw)
            .map(|parsed| parsed.records)
            .unwrap_or_default()
    }

    /// Decodes `raw` and reports the winning strategy.
    pub fn parse_detailed(raw: &str) -> Option<ParsedRecords> {
        match serde_json::from_str::<Value>(raw) {
            Ok(document) => {
                if let Some(records) = record_array(&document) {
                    return Some(found(ParseStrategy::WholeDocument, records));
                }
                if let Some(records) = wrapped_record_array(&document) {
                    return Some(found(ParseStrategy::WrappedArray, records));
                }
                debug!("Result text is JSON but holds no record array");
            }
            Err(e) => debug!(error = %e, "Result text is not a JSON document"),
        }

        let slice = bracket_slice(raw)?;
        match serde_json::from_str::<Value>(slice) {
            Ok(candidate) => {
                record_array(&candidate).map(|records| found(ParseStrategy::BracketSlice, records))
            }
            Err(e) => {
                debug!(error = %e, "Bracketed span is not valid JSON");
                None
            }
        }
    }
}

fn found(strategy: ParseStrategy, records: Vec<RecommendationRecord>) -> ParsedRecords {
    debug!(?strategy, count = records.len(), "Decoded recommendation records");
    ParsedRecords { strategy, records }
}

/// Decodes `value` as an array whose every element is a record object.
fn record_array(value: &Value) -> Option<Vec<RecommendationRecord>> {
    value
        .as_array()?
        .iter()
        .map(|item| {
            // Structs also deserialize from positional arrays; only objects count.
            if !item.is_object() {
                return None;
            }
            RecommendationRecord::deserialize(item).ok()
        })
        .collect()
}

/// Finds a record array inside a wrapping object.
///
/// `matches` wins when it holds a valid array, even an empty one. Otherwise
/// the first other property with a non-empty valid array is used.
fn wrapped_record_array(document: &Value) -> Option<Vec<RecommendationRecord>> {
    let object = document.as_object()?;

    if let Some(records) = object.get(MATCHES_KEY).and_then(record_array) {
        return Some(records);
    }

    object
        .iter()
        .filter(|(key, _)| key.as_str() != MATCHES_KEY)
        .filter_map(|(_, value)| record_array(value))
        .find(|records| !records.is_empty())
}

/// Span from the first `[` to the last `]`, inclusive.
fn bracket_slice(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end > start {
        Some(&raw[start..=end])
    } else {
        None
    }
}
