//! RecommendationRecord - one suggested farming path returned by the scoring
//! service.

use serde::{Deserialize, Serialize};

/// One recommended field/path.
///
/// Field names on the wire are the service's Korean keys. Unknown keys are
/// rejected, so a record either has exactly these six fields or does not
/// parse at all.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationRecord {
    /// Recommended field (`분야`).
    #[serde(rename = "분야")]
    pub field: String,

    /// Why the field suits the respondent (`적합_이유`).
    #[serde(rename = "적합_이유")]
    pub rationale: String,

    /// Regions/crops; the first entry is primary, the rest alternatives
    /// (`권장_지역_작목`).
    #[serde(rename = "권장_지역_작목")]
    pub regions_and_crops: Vec<String>,

    /// Ways into the field (`진입경로`).
    #[serde(rename = "진입경로")]
    pub entry_pathways: Vec<String>,

    /// Required skills, equipment and capital (`필요역량_장비_자본`).
    #[serde(rename = "필요역량_장비_자본")]
    pub requirements: String,

    /// Concrete next actions (`다음단계`).
    #[serde(rename = "다음단계")]
    pub next_steps: Vec<String>,
}

impl RecommendationRecord {
    /// Primary region/crop, if any were given.
    pub fn primary_region(&self) -> Option<&str> {
        self.regions_and_crops.first().map(String::as_str)
    }

    /// Regions/crops after the primary one.
    pub fn alternative_regions(&self) -> &[String] {
        self.regions_and_crops.get(1..).unwrap_or(&[])
    }
}

// Region order only matters for display (primary first), not for identity.
impl PartialEq for RecommendationRecord {
    fn eq(&self, other: &Self) -> bool {
        let mut ours: Vec<&String> = self.regions_and_crops.iter().collect();
        let mut theirs: Vec<&String> = other.regions_and_crops.iter().collect();
        ours.sort();
        theirs.sort();

        self.field == other.field
            && self.rationale == other.rationale
            && ours == theirs
            && self.entry_pathways == other.entry_pathways
            && self.requirements == other.requirements
            && self.next_steps == other.next_steps
    }
}
