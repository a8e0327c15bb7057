//! Mock Scoring Service for testing.
//!
//! Provides a scriptable implementation of the `ScoringService` port so
//! submission flows can be tested without a backend.
//!
//! # Features
//!
//! - Queued submit and fetch outcomes (consumed in order)
//! - A gate that holds `submit_answers` until opened, for in-flight tests
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let service = MockScoringService::new()
//!     .with_result_text(r#"{"matches": []}"#)
//!     .with_submit_gate();
//!
//! // ... start a submission, observe it in flight ...
//! service.open_gate();
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

use crate::domain::survey::Answers;
use crate::ports::{ScoringService, ScoringServiceError};

/// Scriptable scoring service.
#[derive(Debug, Clone, Default)]
pub struct MockScoringService {
    /// Outcomes for `submit_answers`; empty queue means success.
    submit_outcomes: Arc<Mutex<VecDeque<Result<(), ScoringServiceError>>>>,
    /// Outcomes for `fetch_result_text`; empty queue means an error.
    fetch_outcomes: Arc<Mutex<VecDeque<Result<String, ScoringServiceError>>>>,
    /// Answers received, in call order.
    submitted: Arc<Mutex<Vec<Answers>>>,
    /// Number of fetch calls.
    fetch_calls: Arc<Mutex<usize>>,
    /// When set, `submit_answers` waits for `open_gate`.
    gate: Option<Arc<Notify>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockScoringService {
    /// Creates a mock whose submit succeeds and whose fetch has no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a result text for the next fetch.
    pub fn with_result_text(self, text: impl Into<String>) -> Self {
        lock(&self.fetch_outcomes).push_back(Ok(text.into()));
        self
    }

    /// Queues a failure for the next fetch.
    pub fn with_fetch_error(self, error: ScoringServiceError) -> Self {
        lock(&self.fetch_outcomes).push_back(Err(error));
        self
    }

    /// Queues a failure for the next submit.
    pub fn with_submit_error(self, error: ScoringServiceError) -> Self {
        lock(&self.submit_outcomes).push_back(Err(error));
        self
    }

    /// Makes every submit wait until [`open_gate`](Self::open_gate) is called.
    pub fn with_submit_gate(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Releases one waiting (or the next) gated submit.
    pub fn open_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Number of submit calls made.
    pub fn submit_count(&self) -> usize {
        lock(&self.submitted).len()
    }

    /// Number of fetch calls made.
    pub fn fetch_count(&self) -> usize {
        *lock(&self.fetch_calls)
    }

    /// All answers received, in call order.
    pub fn submitted_answers(&self) -> Vec<Answers> {
        lock(&self.submitted).clone()
    }
}

#[async_trait]
impl ScoringService for MockScoringService {
    async fn submit_answers(&self, answers: &Answers) -> Result<(), ScoringServiceError> {
        lock(&self.submitted).push(answers.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        lock(&self.submit_outcomes).pop_front().unwrap_or(Ok(()))
    }

    async fn fetch_result_text(&self) -> Result<String, ScoringServiceError> {
        *lock(&self.fetch_calls) += 1;

        lock(&self.fetch_outcomes).pop_front().unwrap_or_else(|| {
            Err(ScoringServiceError::InvalidResponse(
                "no scripted result text".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::AnswerDraft;
    use std::time::Duration;

    #[tokio::test]
    async fn outcomes_are_consumed_in_order() {
        let service = MockScoringService::new()
            .with_result_text("first")
            .with_fetch_error(ScoringServiceError::http("GET /matches", 503));

        assert_eq!(service.fetch_result_text().await.unwrap(), "first");
        assert_eq!(
            service.fetch_result_text().await,
            Err(ScoringServiceError::http("GET /matches", 503))
        );
        assert!(service.fetch_result_text().await.is_err());
        assert_eq!(service.fetch_count(), 3);
    }

    #[tokio::test]
    async fn submit_records_answers() {
        let service = MockScoringService::new();
        let answers = AnswerDraft::new().finalize();

        service.submit_answers(&answers).await.unwrap();

        assert_eq!(service.submit_count(), 1);
        assert_eq!(service.submitted_answers(), vec![answers]);
    }

    #[tokio::test]
    async fn gate_holds_submit_until_opened() {
        let service = MockScoringService::new().with_submit_gate();
        let answers = AnswerDraft::new().finalize();

        let held =
            tokio::time::timeout(Duration::from_millis(20), service.submit_answers(&answers)).await;
        assert!(held.is_err());

        service.open_gate();
        assert!(service.submit_answers(&answers).await.is_ok());
    }
}
