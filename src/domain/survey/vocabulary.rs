//! Fixed option vocabularies for the twelve survey questions.
//!
//! Labels are the exact strings the scoring service expects; changing one
//! changes the wire protocol.

/// Label of the "other" sentinel shared by the open multi-select questions
/// (q4, q5, q8).
pub const OTHER_LABEL: &str = "기타(직접 입력)";

/// A closed, ordered set of permitted options for one question.
pub trait Vocabulary: Copy + Eq + std::fmt::Debug + 'static {
    /// Every option in display order.
    const ALL: &'static [Self];

    /// Wire and display label.
    fn label(&self) -> &'static str;

    /// Looks up an option by its exact label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.label() == label)
    }
}

vocabulary! {
    /// q1: has the respondent farmed before.
    pub enum YesNo {
        Yes => "Y",
        No => "N",
    }
}

vocabulary! {
    /// q2: farming sectors the respondent has worked in.
    pub enum FarmingSector {
        RicePaddy => "논농사(쌀)",
        DryField => "밭농사(옥수수·콩·감자 등)",
        Orchard => "과수(사과·배·복숭아 등)",
        GreenhouseVegetables => "시설채소(온실·비닐하우스)",
        Livestock => "축산(돼지·소·닭 등)",
        ForestryHerbs => "산림·약초",
        Fisheries => "수산(양식 포함)",
    }
}

vocabulary! {
    /// q4: roles held on northern farms (the sentinel is modelled separately).
    pub enum FarmRole {
        Cultivation => "경작/재배",
        Supervision => "관리감독(분조장·작업반장 등)",
        MachineryOperation => "기계·설비 운전(트랙터·양수기 등)",
        ProcessingSorting => "가공/선별",
        BarnManagement => "축사 관리",
    }
}

vocabulary! {
    /// q5: cultivation systems the respondent has used.
    pub enum CultivationMethod {
        OpenField => "노지 재배",
        Highland => "고랭지 재배",
        Irrigation => "관수(점적/스프링클러) 운용",
        NoTill => "무경운/보존농업",
        OrganicLowInput => "유기/저투입 농법",
        Hydroponics => "수경재배(양액재배)",
        SmartFarming => "스마트 농업 요소(센서·자동제어)",
        ManureComposting => "축분·퇴비 자원화 경험",
    }
}

vocabulary! {
    /// q6: preferred working environments.
    pub enum WorkEnvironment {
        Outdoor => "야외(논·밭)",
        Greenhouse => "온실/시설",
        MachineryCentric => "기계·장비 중심",
        AnimalCare => "동물 돌봄(축산)",
        RecordsAndData => "관리/기록/데이터 기반 작업",
        NoPreference => "상관없음",
    }
}

vocabulary! {
    /// q7: self-assessed physical stamina.
    pub enum StaminaLevel {
        High => "높음",
        Medium => "보통",
        Low => "낮음",
    }
}

vocabulary! {
    /// q8: southern farming fields the respondent wants to learn.
    pub enum LearningInterest {
        SmartFarm => "스마트팜",
        Orchard => "과수원",
        VegetablesSpecialty => "채소·특용작물",
        Livestock => "축산",
        UrbanFarming => "도시농업",
        FoodProcessing => "농산물 가공",
        MachineryDrones => "농기계·드론 기술",
    }
}

vocabulary! {
    /// q9: preferred labor intensity.
    pub enum LaborIntensity {
        HighOk => "바빠도 괜찮다(높음 가능)",
        Moderate => "중간 정도가 좋다",
        Low => "낮은 노동 강도 선호",
    }
}

vocabulary! {
    /// q11: preferred settlement region.
    pub enum SettlementRegion {
        Capital => "수도권",
        Gangwon => "강원",
        Chungcheong => "충청",
        Jeolla => "전라",
        Gyeongsang => "경상",
        Jeju => "제주",
        NoPreference => "상관없음",
    }
}

vocabulary! {
    /// q12: long-term farming intent.
    pub enum LongTermGoal {
        FarmEmployment => "취업(농장 근로)",
        StartFarm => "창업(귀농·작물 재배)",
        TechnicalRole => "기술직(스마트팜 운영·드론 등)",
        StableSimpleWork => "안정적인 단순작업",
        Undecided => "아직 모르겠다",
    }
}
