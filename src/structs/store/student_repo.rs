use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::github::contributor::Contributor;
use crate::structs::github::repository_data::RepositoryData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRepo {
    pub id: u64,
    pub assignment_id: u64,
    pub student_name: String,
    pub repo_url: String,

    // GitHub data
    #[serde(default)]
    pub commit_count: usize,
    #[serde(default)]
    pub languages: BTreeMap<String, u64>,
    #[serde(default)]
    pub readme_content: Option<String>,
    #[serde(default)]
    pub last_commit_message: Option<String>,
    #[serde(default)]
    pub last_commit_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub contributors: Vec<Contributor>,

    // AI analysis
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub performance_score: Option<u32>,
    #[serde(default)]
    pub suggestions: Option<String>,

    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub is_analyzed: bool,
}

impl StudentRepo {
    pub fn new(id: u64, assignment_id: u64, student_name: &str, repo_url: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            assignment_id,
            student_name: student_name.to_string(),
            repo_url: repo_url.to_string(),
            commit_count: 0,
            languages: BTreeMap::new(),
            readme_content: None,
            last_commit_message: None,
            last_commit_date: None,
            contributors: Vec::new(),
            ai_summary: None,
            performance_score: None,
            suggestions: None,
            created_at: now,
            last_updated: now,
            is_analyzed: false,
        }
    }

    /// Copies freshly fetched GitHub data. A missing last commit leaves the
    /// previous commit fields alone.
    pub fn apply_repository_data(&mut self, data: &RepositoryData) {
        self.commit_count = data.commit_count;
        self.languages = data.languages.clone();
        self.readme_content = Some(data.readme_content.clone());
        self.contributors = data.contributors.clone();

        if let Some(commit) = &data.last_commit {
            self.last_commit_message = commit.message.clone();
            if let Some(date) = commit.parsed_date() {
                self.last_commit_date = Some(date);
            }
        }

        self.last_updated = Utc::now();
    }

    /// Projects an interpreted response onto the stored fields: the full
    /// text, the score and the combined suggestions.
    pub fn apply_analysis(&mut self, result: &AnalysisResult) {
        self.ai_summary = Some(result.full_text.clone());
        self.performance_score = result.score;
        self.suggestions = Some(result.suggestions());
        self.is_analyzed = true;
        self.last_updated = Utc::now();
    }

    pub fn language_names(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }
}
