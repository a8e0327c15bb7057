//! SubmitAnswersHandler - sends finalized answers to the scoring service and
//! turns the result text into recommendation records.
//!
//! One run is: mark in flight → submit answers → fetch result text → parse →
//! record the outcome. The in-flight mark is always released, including when
//! the run's future is dropped before finishing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use crate::domain::foundation::SubmissionId;
use crate::domain::recommendation::{RecommendationRecord, ResponseParser};
use crate::domain::submission::{SubmissionFailure, SubmissionState};
use crate::domain::survey::Answers;
use crate::ports::ScoringService;

/// Failure recorded when a run is dropped before it resolves.
pub const ABANDONED_MESSAGE: &str = "submission was cancelled before completing";

/// Command to submit a finalized answer snapshot.
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub answers: Answers,
}

/// Result of a submission request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAnswersResult {
    /// Records were decoded and stored.
    Completed {
        attempt: SubmissionId,
        records: Vec<RecommendationRecord>,
    },
    /// The attempt finished with a user-visible failure.
    Failed {
        attempt: SubmissionId,
        failure: SubmissionFailure,
    },
    /// Another attempt is in flight; nothing was sent.
    AlreadyInFlight,
    /// The state was reset while this attempt ran; its outcome was dropped.
    Superseded { attempt: SubmissionId },
}

/// Handler for submitting answers.
pub struct SubmitAnswersHandler {
    scoring_service: Arc<dyn ScoringService>,
    state: Arc<Mutex<SubmissionState>>,
}

fn lock(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SubmitAnswersHandler {
    pub fn new(scoring_service: Arc<dyn ScoringService>) -> Self {
        Self::with_state(scoring_service, Arc::new(Mutex::new(SubmissionState::new())))
    }

    /// Creates a handler writing into an existing shared state.
    pub fn with_state(
        scoring_service: Arc<dyn ScoringService>,
        state: Arc<Mutex<SubmissionState>>,
    ) -> Self {
        Self {
            scoring_service,
            state,
        }
    }

    /// Snapshot of the current submission state.
    pub fn state(&self) -> SubmissionState {
        lock(&self.state).clone()
    }

    /// Shared handle to the submission state.
    pub fn shared_state(&self) -> Arc<Mutex<SubmissionState>> {
        Arc::clone(&self.state)
    }

    /// Returns the state to idle. A run still in flight will be discarded
    /// when it resolves.
    pub fn reset(&self) {
        info!("Submission state reset");
        lock(&self.state).reset();
    }

    pub async fn handle(&self, cmd: SubmitAnswersCommand) -> SubmitAnswersResult {
        // 1. Claim the in-flight slot
        let Some(attempt) = lock(&self.state).begin() else {
            info!("Submission ignored, another is in flight");
            return SubmitAnswersResult::AlreadyInFlight;
        };
        let guard = InFlightGuard {
            state: &self.state,
            attempt,
            resolved: false,
        };
        info!(%attempt, "Submission started");

        // 2. Talk to the scoring service and decode
        let outcome = self.run(&cmd.answers).await;

        // 3. Record the outcome
        if !guard.resolve(outcome.clone()) {
            return SubmitAnswersResult::Superseded { attempt };
        }

        match outcome {
            Ok(records) => {
                info!(%attempt, count = records.len(), "Submission finished");
                SubmitAnswersResult::Completed { attempt, records }
            }
            Err(failure) => {
                warn!(%attempt, code = %failure.code(), "Submission failed");
                SubmitAnswersResult::Failed { attempt, failure }
            }
        }
    }

    async fn run(&self, answers: &Answers) -> Result<Vec<RecommendationRecord>, SubmissionFailure> {
        self.scoring_service
            .submit_answers(answers)
            .await
            .map_err(|e| {
                warn!(error = %e, "Submitting answers failed");
                SubmissionFailure::Service(e.to_string())
            })?;

        let text = self
            .scoring_service
            .fetch_result_text()
            .await
            .map_err(|e| {
                warn!(error = %e, "Fetching result text failed");
                SubmissionFailure::Service(e.to_string())
            })?;

        let records = ResponseParser::parse(&text);
        if records.is_empty() {
            warn!(bytes = text.len(), "Result text held no recommendation records");
            return Err(SubmissionFailure::Uninterpretable);
        }
        Ok(records)
    }
}

/// Releases the in-flight mark of one attempt exactly once.
struct InFlightGuard<'a> {
    state: &'a Mutex<SubmissionState>,
    attempt: SubmissionId,
    resolved: bool,
}

impl InFlightGuard<'_> {
    fn resolve(mut self, outcome: Result<Vec<RecommendationRecord>, SubmissionFailure>) -> bool {
        self.resolved = true;
        lock(self.state).resolve(self.attempt, outcome)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            warn!(attempt = %self.attempt, "Submission dropped before resolving");
            lock(self.state).resolve(
                self.attempt,
                Err(SubmissionFailure::Service(ABANDONED_MESSAGE.to_string())),
            );
        }
    }
}
