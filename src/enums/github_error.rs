use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitHubError {
    #[error("Invalid GitHub URL: {0}")]
    InvalidUrl(String),
    #[error("GitHub request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}
