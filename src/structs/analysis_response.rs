use serde::{Deserialize, Serialize};
use crate::structs::analysis_result::AnalysisResult;

/// A successful model call: the interpreted result plus the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis: AnalysisResult,
    pub raw_response: String,
}
