use crate::structs::analysis_result::AnalysisResult;

/// What one analysis run produced once the GitHub fetch went through.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Analyzed {
        score: Option<u32>,
        result: AnalysisResult,
    },
    ModelFailed {
        error: String,
    },
}
