use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::github_error::GitHubError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EdutrackError {
    // Configuration
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Store
    NotFound {
        entity: String,
        id: u64,
    },
    DuplicateRepository {
        assignment_id: u64,
        repo_url: String,
    },
    StorageError {
        path: String,
        operation: String,
        reason: String,
    },

    // Input
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Remote services
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },

    SystemError {
        operation: String,
        reason: String,
    },
}

impl EdutrackError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(str::to_string),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn not_found(entity: &str, id: u64) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id,
        }
    }

    pub fn storage_error(path: &str, operation: &str, reason: &str) -> Self {
        Self::StorageError {
            path: path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(str::to_string),
        }
    }

    /// Whether running the same command again, after fixing input or
    /// waiting, can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::ValidationError { .. } | Self::ConfigurationError { .. } | Self::DuplicateRepository { .. }
        )
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::StorageError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::NotFound { .. } | Self::ParseError { .. } | Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } | Self::DuplicateRepository { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration problem: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" [{}]", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Cannot use config file {}: {}\n💡 Run 'edutrack init' for a fresh sample", path, reason)
            }
            Self::NotFound { entity, id } => {
                format!("{} #{} not found\n💡 Use the list commands to see available ids", entity, id)
            }
            Self::DuplicateRepository { assignment_id, repo_url } => {
                format!("Repository '{}' is already added to assignment #{}", repo_url, assignment_id)
            }
            Self::StorageError { path, operation, reason } => {
                format!("Could not {} {}: {}", operation, path, reason)
            }
            Self::ParseError { content_type, line_number, reason } => match line_number {
                Some(line) => format!("Malformed {} at line {}: {}", content_type, line, reason),
                None => format!("Malformed {}: {}", content_type, reason),
            },
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Invalid {} '{}': {}", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 {}", suggestion));
                }
                msg
            }
            Self::NetworkError { operation, url, reason } => {
                let mut msg = format!("{} failed: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" ({})", url));
                }
                msg.push_str("\n💡 Check your connection and API credentials, then retry");
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("Unexpected failure during {}: {}", operation, reason)
            }
        }
    }
}

impl fmt::Display for EdutrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for EdutrackError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

pub type EdutrackResult<T> = Result<T, EdutrackError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Debug form to the log, readable form to stderr.
    pub fn handle_error(error: &EdutrackError) {
        let severity = error.severity();

        log::error!("[{}] {:?}", severity.name(), error);
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 Fix the problem above and run the command again");
        }
    }
}

impl From<std::io::Error> for EdutrackError {
    fn from(error: std::io::Error) -> Self {
        EdutrackError::SystemError {
            operation: "file access".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for EdutrackError {
    fn from(error: serde_json::Error) -> Self {
        EdutrackError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()).filter(|line| *line > 0),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for EdutrackError {
    fn from(error: toml::de::Error) -> Self {
        EdutrackError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<AiProviderError> for EdutrackError {
    fn from(error: AiProviderError) -> Self {
        match error {
            AiProviderError::NotConfigured(reason) => EdutrackError::ConfigurationError {
                message: reason,
                field: Some("ai.api_key_env".to_string()),
                suggestion: Some("Export the API key variable named in your config".to_string()),
            },
            AiProviderError::NetworkError(reason) => EdutrackError::NetworkError {
                operation: "AI request".to_string(),
                url: None,
                reason,
            },
            other => EdutrackError::SystemError {
                operation: "AI request".to_string(),
                reason: other.to_string(),
            },
        }
    }
}

impl From<GitHubError> for EdutrackError {
    fn from(error: GitHubError) -> Self {
        match error {
            GitHubError::InvalidUrl(url) => EdutrackError::ValidationError {
                field: "repo_url".to_string(),
                value: url,
                constraint: "expected https://github.com/<owner>/<repo>".to_string(),
                suggestion: None,
            },
            GitHubError::Request { url, reason } => EdutrackError::NetworkError {
                operation: "GitHub request".to_string(),
                url: Some(url),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_from_low_to_critical() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
        assert!(ErrorSeverity::High < ErrorSeverity::Critical);
        assert_eq!(EdutrackError::from(std::io::Error::other("disk gone")).severity(), ErrorSeverity::Critical);
        assert_eq!(EdutrackError::not_found("Assignment", 3).severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let message = EdutrackError::not_found("Repository", 42).user_message();
        assert!(message.starts_with("Repository #42 not found"));
    }

    #[test]
    fn invalid_github_url_becomes_validation_error() {
        let error: EdutrackError = GitHubError::InvalidUrl("https://gitlab.com/a/b".to_string()).into();
        assert!(matches!(error, EdutrackError::ValidationError { ref field, .. } if field == "repo_url"));
        assert!(error.is_recoverable());
    }

    #[test]
    fn missing_api_key_becomes_configuration_error() {
        let error: EdutrackError = AiProviderError::NotConfigured("Gemini API key not configured".to_string()).into();
        assert!(error.user_message().contains("Gemini API key not configured"));
        assert_eq!(error.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn rate_limit_is_not_retried_as_a_network_problem() {
        let error: EdutrackError = AiProviderError::ApiError("Rate limit exceeded: quota".to_string()).into();
        assert!(matches!(error, EdutrackError::SystemError { .. }));
        assert!(!error.is_recoverable());
    }
}
