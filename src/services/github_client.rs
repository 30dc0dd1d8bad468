use std::collections::BTreeMap;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Duration, DateTime, Utc};
use reqwest::{Client, StatusCode};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use crate::config::constants::{
    ACTIVITY_WINDOW_DAYS, COMMITS_PER_PAGE, CONTRIBUTORS_PER_PAGE, GITHUB_ACCEPT_HEADER, README_MAX_CHARS,
    RECENT_COMMITS_KEPT,
};
use crate::enums::github_error::GitHubError;
use crate::structs::config::github_config::GitHubConfig;
use crate::structs::github::activity_stats::ActivityStats;
use crate::structs::github::commit_info::CommitInfo;
use crate::structs::github::contributor::Contributor;
use crate::structs::github::repo_info::RepoInfo;
use crate::structs::github::repository_data::RepositoryData;
use crate::traits::repository_source::RepositorySource;

const GITHUB_HOST_MARKER: &str = "github.com/";

#[derive(Debug, Deserialize)]
struct CommitPayload {
    #[serde(default)]
    sha: Option<String>,
    #[serde(default)]
    commit: Option<CommitDetail>,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
struct CommitAuthor {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReadmePayload {
    #[serde(default)]
    content: String,
}

impl From<CommitPayload> for CommitInfo {
    fn from(payload: CommitPayload) -> Self {
        let (message, author) = match payload.commit {
            Some(detail) => (detail.message, detail.author),
            None => (None, None),
        };
        let (name, date) = match author {
            Some(author) => (author.name, author.date),
            None => (None, None),
        };

        CommitInfo {
            sha: payload.sha,
            message,
            date,
            author: name,
        }
    }
}

/// Read-only GitHub REST v3 client. Works without a token for public
/// repositories at a much lower rate limit.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    user_agent: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            token,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `https://github.com/owner/repo` -> `owner/repo`
    pub fn parse_repo_url(repo_url: &str) -> Option<String> {
        if !repo_url.contains(GITHUB_HOST_MARKER) {
            return None;
        }

        let path = repo_url.rsplit(GITHUB_HOST_MARKER).next()?.trim_matches('/');
        let mut parts = path.split('/');
        let owner = parts.next().filter(|owner| !owner.is_empty())?;
        let repo = parts.next().filter(|repo| !repo.is_empty())?;
        let repo = repo.strip_suffix(".git").unwrap_or(repo);

        Some(format!("{}/{}", owner, repo))
    }

    pub async fn fetch(&self, repo_url: &str) -> Result<RepositoryData, GitHubError> {
        let repo_name = Self::parse_repo_url(repo_url)
            .ok_or_else(|| GitHubError::InvalidUrl(repo_url.to_string()))?;

        log::info!("📡 Fetching GitHub data for {}", repo_name);

        let repo_info = self.get_repo_info(&repo_name).await?;
        let commits = self.get_commits(&repo_name).await?;
        let languages = self.get_languages(&repo_name).await?;
        let readme_content = self.get_readme(&repo_name).await?;
        let contributors = self.get_contributors(&repo_name).await?;

        let activity = Self::activity_stats(&commits, Utc::now());
        log::debug!(
            "GitHub data for {}: {} commits ({}, {}), {} languages, {} contributors",
            repo_name,
            commits.len(),
            activity.recent_activity,
            activity.commit_frequency,
            languages.len(),
            contributors.len()
        );

        Ok(RepositoryData {
            commit_count: commits.len(),
            last_commit: commits.first().cloned(),
            commits: commits.into_iter().take(RECENT_COMMITS_KEPT).collect(),
            repo_name,
            languages,
            readme_content,
            contributors,
            repo_info,
            authenticated: self.is_authenticated(),
            fetched_at: Utc::now(),
        })
    }

    async fn get_repo_info(&self, repo_name: &str) -> Result<RepoInfo, GitHubError> {
        let path = format!("repos/{}", repo_name);
        Ok(self.get_json(&path, &[]).await?.unwrap_or_default())
    }

    async fn get_commits(&self, repo_name: &str) -> Result<Vec<CommitInfo>, GitHubError> {
        let path = format!("repos/{}/commits", repo_name);
        let commits: Option<Vec<CommitPayload>> = self
            .get_json(&path, &[("per_page", COMMITS_PER_PAGE.to_string())])
            .await?;

        Ok(commits
            .unwrap_or_default()
            .into_iter()
            .map(CommitInfo::from)
            .collect())
    }

    async fn get_languages(&self, repo_name: &str) -> Result<BTreeMap<String, u64>, GitHubError> {
        let path = format!("repos/{}/languages", repo_name);
        Ok(self.get_json(&path, &[]).await?.unwrap_or_default())
    }

    async fn get_readme(&self, repo_name: &str) -> Result<String, GitHubError> {
        let path = format!("repos/{}/readme", repo_name);
        let readme: Option<ReadmePayload> = self.get_json(&path, &[]).await?;

        Ok(readme
            .map(|payload| Self::decode_readme(&payload.content))
            .unwrap_or_default())
    }

    async fn get_contributors(&self, repo_name: &str) -> Result<Vec<Contributor>, GitHubError> {
        let path = format!("repos/{}/contributors", repo_name);
        Ok(self
            .get_json(&path, &[("per_page", CONTRIBUTORS_PER_PAGE.to_string())])
            .await?
            .unwrap_or_default())
    }

    /// `Ok(None)` for any non-200 answer; only transport and decoding
    /// problems are errors.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<Option<T>, GitHubError> {
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT_HEADER)
            .header(USER_AGENT, &self.user_agent)
            .query(query);

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await.map_err(|e| GitHubError::Request {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        if response.status() != StatusCode::OK {
            log::debug!("GitHub answered {} for {}", response.status(), url);
            return Ok(None);
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| GitHubError::Request {
                url,
                reason: e.to_string(),
            })
    }

    /// README payloads are base64 with embedded line breaks. Anything that
    /// does not decode to UTF-8 counts as no README.
    pub fn decode_readme(content: &str) -> String {
        let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();

        STANDARD
            .decode(compact)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .map(|text| text.chars().take(README_MAX_CHARS).collect())
            .unwrap_or_default()
    }

    pub fn activity_stats(commits: &[CommitInfo], now: DateTime<Utc>) -> ActivityStats {
        if commits.is_empty() {
            return ActivityStats {
                total_commits: 0,
                recent_commits_7days: 0,
                recent_activity: "No recent activity".to_string(),
                commit_frequency: "Unknown".to_string(),
            };
        }

        let window_start = now - Duration::days(ACTIVITY_WINDOW_DAYS);
        let recent_commits = commits
            .iter()
            .filter_map(CommitInfo::parsed_date)
            .filter(|date| *date > window_start)
            .count();

        ActivityStats {
            total_commits: commits.len(),
            recent_commits_7days: recent_commits,
            recent_activity: format!("{} commits in last {} days", recent_commits, ACTIVITY_WINDOW_DAYS),
            commit_frequency: if recent_commits > 0 { "Active" } else { "Inactive" }.to_string(),
        }
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn fetch_repo_data(&self, repo_url: String) -> Result<RepositoryData, GitHubError> {
        self.fetch(&repo_url).await
    }
}
