use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber { value: String, strategy: String, reason: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidNumber { value, strategy, reason } => {
                write!(f, "Invalid score '{}' from {} pattern: {}", value, strategy, reason)
            }
        }
    }
}

impl std::error::Error for ParseError {}
