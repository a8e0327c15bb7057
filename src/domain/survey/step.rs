//! Step - the twelve fixed wizard positions, one per question.
//!
//! # Step Order
//!
//! 1. FarmingExperience (q1) → 2. Sectors (q2) → 3. YearsOfExperience (q3) →
//! 4. Roles (q4) → 5. CultivationMethods (q5) → 6. WorkEnvironments (q6) →
//! 7. Stamina (q7) → 8. LearningInterests (q8) → 9. LaborIntensity (q9) →
//! 10. OtherJobs (q10) → 11. SettlementRegion (q11) → 12. LongTermGoal (q12)

use serde::{Deserialize, Serialize};
use std::fmt;

/// One wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    FarmingExperience,
    Sectors,
    YearsOfExperience,
    Roles,
    CultivationMethods,
    WorkEnvironments,
    Stamina,
    LearningInterests,
    LaborIntensity,
    OtherJobs,
    SettlementRegion,
    LongTermGoal,
}

impl Step {
    /// Number of steps in the wizard.
    pub const COUNT: usize = 12;

    /// The canonical step order.
    pub const ORDER: [Step; Step::COUNT] = [
        Step::FarmingExperience,
        Step::Sectors,
        Step::YearsOfExperience,
        Step::Roles,
        Step::CultivationMethods,
        Step::WorkEnvironments,
        Step::Stamina,
        Step::LearningInterests,
        Step::LaborIntensity,
        Step::OtherJobs,
        Step::SettlementRegion,
        Step::LongTermGoal,
    ];

    /// First step of the wizard.
    pub const FIRST: Step = Step::FarmingExperience;

    /// Final step; advancing from it submits.
    pub const LAST: Step = Step::LongTermGoal;

    /// Returns the step at a 0-based index.
    pub fn from_index(index: usize) -> Option<Step> {
        Self::ORDER.get(index).copied()
    }

    /// Returns the 0-based index of this step.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the next step, or None at the end.
    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the previous step, or None at the start.
    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// Payload key of the question bound to this step.
    pub fn question_key(self) -> &'static str {
        match self {
            Step::FarmingExperience => "q1",
            Step::Sectors => "q2",
            Step::YearsOfExperience => "q3",
            Step::Roles => "q4",
            Step::CultivationMethods => "q5",
            Step::WorkEnvironments => "q6",
            Step::Stamina => "q7",
            Step::LearningInterests => "q8",
            Step::LaborIntensity => "q9",
            Step::OtherJobs => "q10",
            Step::SettlementRegion => "q11",
            Step::LongTermGoal => "q12",
        }
    }

    /// Question shown to the user.
    pub fn prompt(self) -> &'static str {
        match self {
            Step::FarmingExperience => "농업을 하셨나요?",
            Step::Sectors => "어느 분야를 하셨나요?",
            Step::YearsOfExperience => "얼마나 오래 하셨나요?",
            Step::Roles => "북한에서 주로 맡았던 역할은 무엇인가요?",
            Step::CultivationMethods => "사용해본 재배 시스템/방식은 무엇인가요?",
            Step::WorkEnvironments => "선호하는 작업 환경을 선택해주세요",
            Step::Stamina => "본인의 체력 수준은 어느 정도라고 생각하시나요?",
            Step::LearningInterests => "남한 농업에서 배우고 싶은 분야가 있나요?",
            Step::LaborIntensity => "노동 강도에 대한 선호를 말씀해주세요",
            Step::OtherJobs => "농업 외에 다른 직업 경험도 있나요?",
            Step::SettlementRegion => "정착 희망 지역이 있나요?",
            Step::LongTermGoal => "장기적으로 어떤 형태의 농업을 원하시나요?",
        }
    }

    /// Whether the step blocks advancement until answered.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Step::FarmingExperience
                | Step::YearsOfExperience
                | Step::Stamina
                | Step::LaborIntensity
                | Step::SettlementRegion
                | Step::LongTermGoal
        )
    }

    pub fn is_multi_select(self) -> bool {
        matches!(
            self,
            Step::Sectors
                | Step::Roles
                | Step::CultivationMethods
                | Step::WorkEnvironments
                | Step::LearningInterests
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.question_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_indices_match_positions() {
        for (i, step) in Step::ORDER.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(Step::from_index(i), Some(*step));
        }
        assert_eq!(Step::from_index(Step::COUNT), None);
    }

    #[test]
    fn next_and_previous_walk_the_order() {
        assert_eq!(Step::FarmingExperience.next(), Some(Step::Sectors));
        assert_eq!(Step::LongTermGoal.next(), None);
        assert_eq!(Step::Sectors.previous(), Some(Step::FarmingExperience));
        assert_eq!(Step::FarmingExperience.previous(), None);
    }

    #[test]
    fn question_keys_follow_order() {
        for (i, step) in Step::ORDER.iter().enumerate() {
            assert_eq!(step.question_key(), format!("q{}", i + 1));
        }
    }

    #[test]
    fn six_steps_are_required() {
        let required: Vec<_> = Step::ORDER.iter().filter(|s| s.is_required()).collect();
        assert_eq!(
            required,
            vec![
                &Step::FarmingExperience,
                &Step::YearsOfExperience,
                &Step::Stamina,
                &Step::LaborIntensity,
                &Step::SettlementRegion,
                &Step::LongTermGoal,
            ]
        );
    }

    #[test]
    fn only_last_step_is_last() {
        assert!(Step::LAST.is_last());
        assert_eq!(Step::ORDER.iter().filter(|s| s.is_last()).count(), 1);
    }
}
