//! SubmissionState - in-flight guard, outcome and records of the latest
//! submission attempt.

use tracing::{debug, warn};

use super::failure::SubmissionFailure;
use super::status::SubmissionStatus;
use crate::domain::foundation::{StateMachine, SubmissionId, Timestamp};
use crate::domain::recommendation::RecommendationRecord;

/// State shared between the wizard's host and the submission handler.
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    status: SubmissionStatus,
    attempt: Option<SubmissionId>,
    failure: Option<SubmissionFailure>,
    records: Vec<RecommendationRecord>,
    finished_at: Option<Timestamp>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an attempt: marks it in flight and clears the previous outcome.
    ///
    /// Returns `None`, changing nothing, while another attempt is in flight.
    pub fn begin(&mut self) -> Option<SubmissionId> {
        let next = match self.status.transition_to(SubmissionStatus::InFlight) {
            Ok(next) => next,
            Err(_) => {
                debug!(attempt = ?self.attempt, "Submission already in flight");
                return None;
            }
        };

        let attempt = SubmissionId::new();
        self.status = next;
        self.attempt = Some(attempt);
        self.failure = None;
        self.records.clear();
        self.finished_at = None;
        Some(attempt)
    }

    /// Records the outcome of `attempt` and leaves the in-flight state.
    ///
    /// Outcomes of attempts that are no longer current (the state was reset
    /// meanwhile) are discarded; returns whether the outcome was applied.
    pub fn resolve(
        &mut self,
        attempt: SubmissionId,
        outcome: Result<Vec<RecommendationRecord>, SubmissionFailure>,
    ) -> bool {
        if self.attempt != Some(attempt) {
            warn!(%attempt, "Discarding outcome of superseded submission");
            return false;
        }
        let next = match self.status.transition_to(SubmissionStatus::Finished) {
            Ok(next) => next,
            Err(e) => {
                warn!(%attempt, error = %e, "Submission resolved twice");
                return false;
            }
        };

        self.status = next;
        self.finished_at = Some(Timestamp::now());
        match outcome {
            Ok(records) => {
                self.records = records;
                self.failure = None;
            }
            Err(failure) => {
                self.records.clear();
                self.failure = Some(failure);
            }
        }
        true
    }

    /// Forgets everything, including the current attempt.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == SubmissionStatus::InFlight
    }

    pub fn is_finished(&self) -> bool {
        self.status == SubmissionStatus::Finished
    }

    pub fn current_attempt(&self) -> Option<SubmissionId> {
        self.attempt
    }

    pub fn failure(&self) -> Option<&SubmissionFailure> {
        self.failure.as_ref()
    }

    /// User-visible error of the last attempt, if it failed.
    pub fn error_message(&self) -> Option<String> {
        self.failure.as_ref().map(SubmissionFailure::user_message)
    }

    pub fn records(&self) -> &[RecommendationRecord] {
        &self.records
    }

    pub fn finished_at(&self) -> Option<Timestamp> {
        self.finished_at
    }
}
