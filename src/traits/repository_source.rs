use async_trait::async_trait;
use crate::enums::github_error::GitHubError;
use crate::structs::github::repository_data::RepositoryData;

/// Where repository metadata comes from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_repo_data(&self, repo_url: String) -> Result<RepositoryData, GitHubError>;
}
