//! Survey answers: the mutable draft edited by the wizard and the immutable
//! snapshot sent to the scoring service.
//!
//! Validation and defaulting are separate. [`StepValidator`] only looks at
//! what the user actually entered; [`AnswerDraft::finalize`] fills defaults
//! for questions the user never answered, once, at submission time.
//!
//! [`StepValidator`]: super::StepValidator

use serde::Serialize;

use super::selection::{MultiSelect, OpenSelect};
use super::vocabulary::{
    CultivationMethod, FarmRole, FarmingSector, LaborIntensity, LearningInterest, LongTermGoal,
    SettlementRegion, StaminaLevel, WorkEnvironment, YesNo,
};
use crate::domain::foundation::ValidationError;

/// Inclusive lower bound for years of farming experience.
pub const MIN_YEARS: f64 = 0.0;

/// Inclusive upper bound for years of farming experience.
pub const MAX_YEARS: f64 = 80.0;

const YEARS_FIELD: &str = "years_of_experience";

/// Parses the years-of-experience entry (q3).
///
/// The text must be non-blank, parse to a finite number, and lie within
/// `MIN_YEARS..=MAX_YEARS`.
pub fn parse_years(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(YEARS_FIELD));
    }

    let years: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::invalid_format(YEARS_FIELD, "not a number"))?;
    if !years.is_finite() {
        return Err(ValidationError::invalid_format(YEARS_FIELD, "not a finite number"));
    }
    if !(MIN_YEARS..=MAX_YEARS).contains(&years) {
        return Err(ValidationError::out_of_range(
            YEARS_FIELD,
            MIN_YEARS,
            MAX_YEARS,
            years,
        ));
    }

    Ok(years)
}

/// Strips every non-digit character, as the years input box does while typing.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Answers as currently entered in the wizard.
///
/// Single-choice questions are `None` until the user picks something; q3 is
/// kept as the raw text so validation can see exactly what was typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerDraft {
    /// q1
    pub farmed_before: Option<YesNo>,
    /// q2
    pub sectors: MultiSelect<FarmingSector>,
    /// q3, raw text
    pub years_text: String,
    /// q4
    pub roles: OpenSelect<FarmRole>,
    /// q5
    pub methods: OpenSelect<CultivationMethod>,
    /// q6
    pub environments: MultiSelect<WorkEnvironment>,
    /// q7
    pub stamina: Option<StaminaLevel>,
    /// q8
    pub interests: OpenSelect<LearningInterest>,
    /// q9
    pub labor_intensity: Option<LaborIntensity>,
    /// q10
    pub other_jobs: String,
    /// q11
    pub region: Option<SettlementRegion>,
    /// q12
    pub goal: Option<LongTermGoal>,
}

impl AnswerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the submission snapshot, substituting defaults for unanswered
    /// questions.
    ///
    /// | question | default |
    /// |----------|---------|
    /// | q1 | `N` |
    /// | q3 | `0` when blank or not a finite number, otherwise clamped to 0..=80 |
    /// | q7 | `보통` |
    /// | q9 | `중간 정도가 좋다` |
    /// | q11 | `상관없음` |
    /// | q12 | `아직 모르겠다` |
    pub fn finalize(&self) -> Answers {
        Answers {
            q1: self.farmed_before.unwrap_or(YesNo::No),
            q2: self.sectors.clone(),
            q3: finalize_years(&self.years_text),
            q4: self.roles.clone(),
            q5: self.methods.clone(),
            q6: self.environments.clone(),
            q7: self.stamina.unwrap_or(StaminaLevel::Medium),
            q8: self.interests.clone(),
            q9: self.labor_intensity.unwrap_or(LaborIntensity::Moderate),
            q10: self.other_jobs.clone(),
            q11: self.region.unwrap_or(SettlementRegion::NoPreference),
            q12: self.goal.unwrap_or(LongTermGoal::Undecided),
            run_model: true,
        }
    }
}

fn finalize_years(text: &str) -> u8 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<f64>() {
        Ok(years) if years.is_finite() => years.clamp(MIN_YEARS, MAX_YEARS).trunc() as u8,
        _ => 0,
    }
}

/// Immutable answer snapshot; serializes to the scoring service payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answers {
    q1: YesNo,
    q2: MultiSelect<FarmingSector>,
    q3: u8,
    q4: OpenSelect<FarmRole>,
    q5: OpenSelect<CultivationMethod>,
    q6: MultiSelect<WorkEnvironment>,
    q7: StaminaLevel,
    q8: OpenSelect<LearningInterest>,
    q9: LaborIntensity,
    q10: String,
    q11: SettlementRegion,
    q12: LongTermGoal,
    run_model: bool,
}

impl Answers {
    pub fn farmed_before(&self) -> YesNo {
        self.q1
    }

    pub fn sectors(&self) -> &MultiSelect<FarmingSector> {
        &self.q2
    }

    pub fn years_of_experience(&self) -> u8 {
        self.q3
    }

    pub fn roles(&self) -> &OpenSelect<FarmRole> {
        &self.q4
    }

    pub fn methods(&self) -> &OpenSelect<CultivationMethod> {
        &self.q5
    }

    pub fn environments(&self) -> &MultiSelect<WorkEnvironment> {
        &self.q6
    }

    pub fn stamina(&self) -> StaminaLevel {
        self.q7
    }

    pub fn interests(&self) -> &OpenSelect<LearningInterest> {
        &self.q8
    }

    pub fn labor_intensity(&self) -> LaborIntensity {
        self.q9
    }

    pub fn other_jobs(&self) -> &str {
        &self.q10
    }

    pub fn region(&self) -> SettlementRegion {
        self.q11
    }

    pub fn goal(&self) -> LongTermGoal {
        self.q12
    }

    pub fn run_model(&self) -> bool {
        self.run_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_years_accepts_bounds_and_middle() {
        assert_eq!(parse_years("0"), Ok(0.0));
        assert_eq!(parse_years("80"), Ok(80.0));
        assert_eq!(parse_years("45"), Ok(45.0));
    }

    #[test]
    fn parse_years_rejects_blank_garbage_and_out_of_range() {
        assert!(matches!(
            parse_years(""),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(matches!(
            parse_years("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_years("-1"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_years("81"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(parse_years("inf").is_err());
        assert!(parse_years("NaN").is_err());
    }

    #[test]
    fn digits_only_strips_everything_else() {
        assert_eq!(digits_only("-1"), "1");
        assert_eq!(digits_only("약 12년"), "12");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn finalize_fills_defaults_for_untouched_draft() {
        let answers = AnswerDraft::new().finalize();

        assert_eq!(answers.farmed_before(), YesNo::No);
        assert_eq!(answers.years_of_experience(), 0);
        assert_eq!(answers.stamina(), StaminaLevel::Medium);
        assert_eq!(answers.labor_intensity(), LaborIntensity::Moderate);
        assert_eq!(answers.region(), SettlementRegion::NoPreference);
        assert_eq!(answers.goal(), LongTermGoal::Undecided);
        assert!(answers.run_model());
        assert!(answers.sectors().is_empty());
    }

    #[test]
    fn finalize_clamps_years() {
        let mut draft = AnswerDraft::new();

        draft.years_text = "200".into();
        assert_eq!(draft.finalize().years_of_experience(), 80);

        draft.years_text = "-5".into();
        assert_eq!(draft.finalize().years_of_experience(), 0);

        draft.years_text = "abc".into();
        assert_eq!(draft.finalize().years_of_experience(), 0);

        draft.years_text = "12".into();
        assert_eq!(draft.finalize().years_of_experience(), 12);
    }

    #[test]
    fn finalize_keeps_entered_values() {
        let mut draft = AnswerDraft::new();
        draft.farmed_before = Some(YesNo::Yes);
        draft.stamina = Some(StaminaLevel::High);
        draft.goal = Some(LongTermGoal::StartFarm);

        let answers = draft.finalize();
        assert_eq!(answers.farmed_before(), YesNo::Yes);
        assert_eq!(answers.stamina(), StaminaLevel::High);
        assert_eq!(answers.goal(), LongTermGoal::StartFarm);
    }

    #[test]
    fn finalize_does_not_touch_the_draft() {
        let draft = AnswerDraft::new();
        let _ = draft.finalize();
        assert_eq!(draft, AnswerDraft::new());
        assert_eq!(draft.farmed_before, None);
    }

    #[test]
    fn answers_serialize_to_payload_shape() {
        let mut draft = AnswerDraft::new();
        draft.farmed_before = Some(YesNo::Yes);
        draft.sectors.toggle(FarmingSector::RicePaddy);
        draft.years_text = "7".into();
        draft.roles.toggle(FarmRole::Cultivation);
        draft.roles.toggle_other();
        draft.roles.commit_other_text("양봉");
        draft.other_jobs = "건설 현장".into();
        draft.region = Some(SettlementRegion::Gangwon);

        let payload = serde_json::to_value(draft.finalize()).unwrap();

        assert_eq!(
            payload,
            json!({
                "q1": "Y",
                "q2": ["논농사(쌀)"],
                "q3": 7,
                "q4": ["경작/재배", "양봉"],
                "q5": [],
                "q6": [],
                "q7": "보통",
                "q8": [],
                "q9": "중간 정도가 좋다",
                "q10": "건설 현장",
                "q11": "강원",
                "q12": "아직 모르겠다",
                "run_model": true
            })
        );
    }
}
