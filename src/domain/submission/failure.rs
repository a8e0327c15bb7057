//! User-visible submission failures.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Shown when the result text could not be decoded into any record.
pub const UNINTERPRETABLE_MESSAGE: &str = "결과를 해석할 수 없습니다. 관리자에게 문의해주세요.";

/// Why the latest submission did not produce records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionFailure {
    /// Submitting or fetching failed; carries the service's reason.
    #[error("{0}")]
    Service(String),

    /// The fetched text held no valid records. Parser diagnostics are
    /// deliberately not carried.
    #[error("{}", UNINTERPRETABLE_MESSAGE)]
    Uninterpretable,
}

impl SubmissionFailure {
    /// Message for the results panel.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SubmissionFailure::Service(_) => ErrorCode::ScoringServiceFailed,
            SubmissionFailure::Uninterpretable => ErrorCode::UninterpretableResult,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_failure_shows_reason() {
        let failure = SubmissionFailure::Service("POST /recommendations failed: 502".into());
        assert_eq!(failure.user_message(), "POST /recommendations failed: 502");
        assert_eq!(failure.code(), ErrorCode::ScoringServiceFailed);
    }

    #[test]
    fn uninterpretable_shows_generic_message() {
        let failure = SubmissionFailure::Uninterpretable;
        assert_eq!(failure.user_message(), UNINTERPRETABLE_MESSAGE);
        assert_eq!(failure.code(), ErrorCode::UninterpretableResult);
    }
}
