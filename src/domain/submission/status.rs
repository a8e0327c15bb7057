//! Submission lifecycle status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the latest submission attempt stands.
///
/// ```text
/// Idle ──► InFlight ──► Finished
///              ▲            │
///              └────────────┘  (explicit resubmit)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Waiting on the scoring service.
    InFlight,
    /// The last attempt resolved, successfully or not.
    Finished,
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Idle, InFlight) | (InFlight, Finished) | (Finished, InFlight)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Idle => vec![InFlight],
            InFlight => vec![Finished],
            Finished => vec![InFlight],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn in_flight_cannot_restart() {
        assert!(SubmissionStatus::InFlight
            .transition_to(SubmissionStatus::InFlight)
            .is_err());
    }

    #[test]
    fn finished_can_resubmit() {
        assert_eq!(
            SubmissionStatus::Finished.transition_to(SubmissionStatus::InFlight),
            Ok(SubmissionStatus::InFlight)
        );
    }

    #[test]
    fn idle_cannot_finish_without_submitting() {
        assert!(!SubmissionStatus::Idle.can_transition_to(&SubmissionStatus::Finished));
    }

    #[test]
    fn no_status_is_terminal() {
        for status in [
            SubmissionStatus::Idle,
            SubmissionStatus::InFlight,
            SubmissionStatus::Finished,
        ] {
            assert!(!status.is_terminal());
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }
}
