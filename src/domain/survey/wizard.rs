//! Wizard - navigation over the twelve steps.
//!
//! The wizard owns the answer draft and per-step error messages. It never
//! talks to the scoring service: advancing from the last step hands back a
//! finalized [`Answers`] snapshot for the submission handler to send.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::answers::{AnswerDraft, Answers};
use super::step::Step;
use super::validator::{StepValidationError, StepValidator};
use crate::domain::submission::SubmissionState;

/// Result of an advance request.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved forward to `to`.
    Moved { to: Step },
    /// Current step is incomplete; nothing changed except its error message.
    Blocked(StepValidationError),
    /// Last step is complete; submit this snapshot.
    ReadyToSubmit(Answers),
}

/// What the primary button does right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Submit,
    Exit,
}

/// Step-by-step survey state.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    index: usize,
    draft: AnswerDraft,
    errors: HashMap<Step, String>,
}

impl Wizard {
    /// Creates a wizard at the first step with nothing answered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> Step {
        Step::from_index(self.index).unwrap_or(Step::LAST)
    }

    pub fn draft(&self) -> &AnswerDraft {
        &self.draft
    }

    /// Mutable access for answer edits (toggles, picks, text entry).
    pub fn draft_mut(&mut self) -> &mut AnswerDraft {
        &mut self.draft
    }

    /// Whether the current step's rule passes.
    pub fn can_advance(&self) -> bool {
        StepValidator::can_advance_at(self.index, &self.draft)
    }

    /// Tries to leave the current step.
    ///
    /// On failure the index and answers stay as they are and the step gets an
    /// error message. On success the step's error is cleared; from the last
    /// step the finalized answers are returned instead of moving.
    pub fn advance(&mut self) -> Advance {
        let step = self.current_step();

        if let Err(err) = StepValidator::validate(step, &self.draft) {
            warn!(step = %step, reason = ?err.reason, "Step incomplete, advance blocked");
            self.errors.insert(step, err.message.clone());
            return Advance::Blocked(err);
        }

        self.errors.remove(&step);

        match step.next() {
            Some(next) => {
                self.index = next.index();
                debug!(from = %step, to = %next, "Advanced");
                Advance::Moved { to: next }
            }
            None => {
                debug!(step = %step, "Last step complete, answers finalized");
                Advance::ReadyToSubmit(self.draft.finalize())
            }
        }
    }

    /// Moves back one step. Errors and answers are left alone.
    ///
    /// Returns false at the first step.
    pub fn retreat(&mut self) -> bool {
        match self.current_step().previous() {
            Some(previous) => {
                debug!(from = %self.current_step(), to = %previous, "Retreated");
                self.index = previous.index();
                true
            }
            None => false,
        }
    }

    /// Error message recorded for `step`, if any.
    pub fn step_error(&self, step: Step) -> Option<&str> {
        self.errors.get(&step).map(String::as_str)
    }

    pub fn current_error(&self) -> Option<&str> {
        self.step_error(self.current_step())
    }

    /// Completion percentage shown in the progress bar.
    pub fn progress_percent(&self) -> u8 {
        (((self.index + 1) as f64 / Step::COUNT as f64) * 100.0).round() as u8
    }

    /// Action bound to the primary button given the submission state.
    pub fn primary_action(&self, submission: &SubmissionState) -> PrimaryAction {
        if !self.current_step().is_last() {
            PrimaryAction::Next
        } else if submission.is_finished() && !submission.is_in_flight() {
            PrimaryAction::Exit
        } else {
            PrimaryAction::Submit
        }
    }

    /// Returns to the first step with an empty draft and no errors.
    pub fn reset(&mut self) {
        debug!("Wizard reset");
        *self = Self::new();
    }
}
