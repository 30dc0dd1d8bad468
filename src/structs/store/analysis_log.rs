use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::analysis_status::AnalysisStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisLog {
    pub id: u64,
    pub repo_id: u64,
    pub analysis_date: DateTime<Utc>,
    pub status: AnalysisStatus,
    #[serde(default)]
    pub error_message: Option<String>,
}
