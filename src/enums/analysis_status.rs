use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Success,
    Failed,
    Pending,
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AnalysisStatus::Success => "Success",
            AnalysisStatus::Failed => "Failed",
            AnalysisStatus::Pending => "Pending",
        };
        write!(f, "{}", label)
    }
}
