//! Survey module - the twelve-question wizard.
//!
//! - `vocabulary` - fixed option lists per question
//! - `selection` - multi-select containers and the "other" sentinel
//! - `answers` - the editable draft and the finalized submission snapshot
//! - `step` - step order and metadata
//! - `validator` - per-step advancement rules
//! - `wizard` - navigation state machine

#[macro_use]
mod macros;

mod answers;
mod selection;
mod step;
mod validator;
mod vocabulary;
mod wizard;

pub use answers::{digits_only, parse_years, AnswerDraft, Answers, MAX_YEARS, MIN_YEARS};
pub use selection::{Choice, MultiSelect, OpenSelect};
pub use step::Step;
pub use validator::{StepValidationError, StepValidator, REQUIRED_MESSAGE};
pub use vocabulary::{
    CultivationMethod, FarmRole, FarmingSector, LaborIntensity, LearningInterest, LongTermGoal,
    SettlementRegion, StaminaLevel, Vocabulary, WorkEnvironment, YesNo, OTHER_LABEL,
};
pub use wizard::{Advance, PrimaryAction, Wizard};
