use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub sha: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
}

impl CommitInfo {
    /// Commit date as reported by GitHub (`2024-03-01T10:00:00Z`).
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|date| date.with_timezone(&Utc))
            .ok()
    }
}
