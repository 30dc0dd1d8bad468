use serde::Serialize;
use crate::enums::score_band::ScoreBand;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreDistribution {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub needs_improvement: usize,
}

impl ScoreDistribution {
    pub fn record(&mut self, score: u32) {
        match ScoreBand::for_score(score) {
            ScoreBand::Excellent => self.excellent += 1,
            ScoreBand::Good => self.good += 1,
            ScoreBand::Average => self.average += 1,
            ScoreBand::NeedsImprovement => self.needs_improvement += 1,
        }
    }

    pub fn count(&self, band: ScoreBand) -> usize {
        match band {
            ScoreBand::Excellent => self.excellent,
            ScoreBand::Good => self.good,
            ScoreBand::Average => self.average,
            ScoreBand::NeedsImprovement => self.needs_improvement,
        }
    }
}

/// Present only when at least one analyzed repository has a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreStats {
    pub average: f64,
    pub max: u32,
    pub min: u32,
}
