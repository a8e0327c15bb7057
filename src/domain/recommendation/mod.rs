//! Recommendation module - records returned by the scoring service and the
//! parser that extracts them from untrusted text.

mod parser;
mod record;

pub use parser::{ParseStrategy, ParsedRecords, ResponseParser, MATCHES_KEY};
pub use record::RecommendationRecord;
