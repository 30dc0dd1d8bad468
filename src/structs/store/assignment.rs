use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u64,
    pub teacher: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl Assignment {
    /// `Intro to Python` -> `Intro_to_Python_report.md`
    pub fn report_file_name(&self) -> String {
        format!("{}_report.md", self.title.replace(' ', "_"))
    }
}
