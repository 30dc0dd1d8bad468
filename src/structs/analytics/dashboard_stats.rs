use serde::Serialize;
use crate::structs::store::assignment::Assignment;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_assignments: usize,
    pub total_repos: usize,
    pub analyzed_repos: usize,
    pub pending_repos: usize,
    pub recent_assignments: Vec<Assignment>,
}
