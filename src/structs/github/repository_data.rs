use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::github::commit_info::CommitInfo;
use crate::structs::github::contributor::Contributor;
use crate::structs::github::repo_info::RepoInfo;

/// Everything fetched from GitHub for one student repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryData {
    pub repo_name: String,
    /// Commits on the first page only, so at most one page worth.
    pub commit_count: usize,
    pub commits: Vec<CommitInfo>,
    pub last_commit: Option<CommitInfo>,
    pub languages: BTreeMap<String, u64>,
    pub readme_content: String,
    pub contributors: Vec<Contributor>,
    pub repo_info: RepoInfo,
    pub authenticated: bool,
    pub fetched_at: DateTime<Utc>,
}

impl RepositoryData {
    pub fn empty(repo_name: &str) -> Self {
        Self {
            repo_name: repo_name.to_string(),
            commit_count: 0,
            commits: Vec::new(),
            last_commit: None,
            languages: BTreeMap::new(),
            readme_content: String::new(),
            contributors: Vec::new(),
            repo_info: RepoInfo::default(),
            authenticated: false,
            fetched_at: Utc::now(),
        }
    }
}
