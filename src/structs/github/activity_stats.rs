use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub total_commits: usize,
    pub recent_commits_7days: usize,
    pub recent_activity: String,
    pub commit_frequency: String,
}
