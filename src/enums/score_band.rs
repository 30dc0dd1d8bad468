use serde::{Deserialize, Serialize};

/// Grade buckets used by assignment analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            90.. => ScoreBand::Excellent,
            75..=89 => ScoreBand::Good,
            60..=74 => ScoreBand::Average,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent (90+)",
            ScoreBand::Good => "Good (75-89)",
            ScoreBand::Average => "Average (60-74)",
            ScoreBand::NeedsImprovement => "Needs Work (<60)",
        }
    }
}
