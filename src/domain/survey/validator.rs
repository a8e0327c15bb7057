//! Per-step advancement rules.
//!
//! Validation reads only what the user entered. Finalize-time defaults are
//! never consulted here, so an unanswered required question always blocks.

use thiserror::Error;

use super::answers::{parse_years, AnswerDraft};
use super::step::Step;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Message shown under a step that cannot be advanced yet.
pub const REQUIRED_MESSAGE: &str = "필수 항목을 입력해주세요.";

/// A step that cannot be advanced past yet.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct StepValidationError {
    pub step: Step,
    pub message: String,
    /// Underlying value error, if the step has a typed value (q3).
    pub reason: Option<ValidationError>,
}

impl StepValidationError {
    fn required(step: Step) -> Self {
        Self {
            step,
            message: REQUIRED_MESSAGE.to_string(),
            reason: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::StepIncomplete
    }
}

/// Stateless rule set deciding whether the wizard may leave a step.
pub struct StepValidator;

impl StepValidator {
    /// Checks the rule for `step` against the draft.
    pub fn validate(step: Step, draft: &AnswerDraft) -> Result<(), StepValidationError> {
        let answered = match step {
            Step::FarmingExperience => draft.farmed_before.is_some(),
            Step::YearsOfExperience => {
                return parse_years(&draft.years_text).map(|_| ()).map_err(|reason| {
                    StepValidationError {
                        reason: Some(reason),
                        ..StepValidationError::required(step)
                    }
                });
            }
            Step::Stamina => draft.stamina.is_some(),
            Step::LaborIntensity => draft.labor_intensity.is_some(),
            Step::SettlementRegion => draft.region.is_some(),
            Step::LongTermGoal => draft.goal.is_some(),
            Step::Sectors
            | Step::Roles
            | Step::CultivationMethods
            | Step::WorkEnvironments
            | Step::LearningInterests
            | Step::OtherJobs => true,
        };

        if answered {
            Ok(())
        } else {
            Err(StepValidationError::required(step))
        }
    }

    /// Whether the wizard may advance from `step`.
    pub fn can_advance(step: Step, draft: &AnswerDraft) -> bool {
        Self::validate(step, draft).is_ok()
    }

    /// Index-based form of [`can_advance`](Self::can_advance). Indices
    /// outside the wizard have no rule and pass.
    pub fn can_advance_at(index: usize, draft: &AnswerDraft) -> bool {
        Step::from_index(index).map_or(true, |step| Self::can_advance(step, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::vocabulary::{
        LaborIntensity, LongTermGoal, SettlementRegion, StaminaLevel, YesNo,
    };

    #[test]
    fn required_steps_fail_on_empty_draft() {
        let draft = AnswerDraft::new();
        for step in Step::ORDER {
            assert_eq!(
                StepValidator::can_advance(step, &draft),
                !step.is_required(),
                "unexpected rule for {:?}",
                step
            );
        }
    }

    #[test]
    fn required_steps_pass_once_answered() {
        let mut draft = AnswerDraft::new();
        draft.farmed_before = Some(YesNo::No);
        draft.years_text = "3".into();
        draft.stamina = Some(StaminaLevel::Low);
        draft.labor_intensity = Some(LaborIntensity::HighOk);
        draft.region = Some(SettlementRegion::Jeolla);
        draft.goal = Some(LongTermGoal::TechnicalRole);

        for step in Step::ORDER {
            assert!(StepValidator::can_advance(step, &draft), "{:?}", step);
        }
    }

    #[test]
    fn years_rule_rejects_invalid_text() {
        let mut draft = AnswerDraft::new();
        for text in ["-1", "81", "", "abc", "   "] {
            draft.years_text = text.into();
            assert!(
                !StepValidator::can_advance(Step::YearsOfExperience, &draft),
                "{:?} should fail",
                text
            );
        }
    }

    #[test]
    fn years_rule_accepts_range() {
        let mut draft = AnswerDraft::new();
        for text in ["0", "80", "45"] {
            draft.years_text = text.into();
            assert!(
                StepValidator::can_advance(Step::YearsOfExperience, &draft),
                "{:?} should pass",
                text
            );
        }
    }

    #[test]
    fn years_error_carries_value_reason() {
        let mut draft = AnswerDraft::new();
        draft.years_text = "81".into();

        let err = StepValidator::validate(Step::YearsOfExperience, &draft).unwrap_err();
        assert_eq!(err.step, Step::YearsOfExperience);
        assert_eq!(err.message, REQUIRED_MESSAGE);
        assert!(matches!(err.reason, Some(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn error_displays_user_message() {
        let err = StepValidator::validate(Step::Stamina, &AnswerDraft::new()).unwrap_err();
        assert_eq!(err.to_string(), REQUIRED_MESSAGE);
        assert_eq!(err.code(), ErrorCode::StepIncomplete);
    }

    #[test]
    fn index_form_matches_step_form() {
        let draft = AnswerDraft::new();
        assert!(!StepValidator::can_advance_at(0, &draft));
        assert!(StepValidator::can_advance_at(1, &draft));
        assert!(!StepValidator::can_advance_at(2, &draft));
        assert!(StepValidator::can_advance_at(99, &draft));
    }
}
