use serde::{Deserialize, Serialize};

const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, alias = "stargazers_count")]
    pub stars: Option<u64>,
    #[serde(default, alias = "forks_count")]
    pub forks: Option<u64>,
    #[serde(default)]
    pub default_branch: Option<String>,
}

impl RepoInfo {
    pub fn default_branch(&self) -> &str {
        self.default_branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }
}
