use serde::{Deserialize, Serialize};
use crate::structs::store::analysis_log::AnalysisLog;
use crate::structs::store::assignment::Assignment;
use crate::structs::store::student_repo::StudentRepo;

/// On-disk layout of the JSON store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub last_assignment_id: u64,
    #[serde(default)]
    pub last_repo_id: u64,
    #[serde(default)]
    pub last_log_id: u64,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub repos: Vec<StudentRepo>,
    #[serde(default)]
    pub logs: Vec<AnalysisLog>,
}
