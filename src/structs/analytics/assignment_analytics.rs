use serde::Serialize;
use crate::structs::analytics::score_stats::{ScoreDistribution, ScoreStats};
use crate::structs::analytics::student_row::StudentRow;
use crate::structs::language_stat::LanguageStat;
use crate::structs::store::assignment::Assignment;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentAnalytics {
    pub assignment: Assignment,
    pub total_students: usize,
    pub analyzed_repos: usize,
    pub pending_repos: usize,
    pub total_commits: usize,
    pub avg_commits: f64,
    pub language_stats: Vec<LanguageStat>,
    pub total_languages: usize,
    pub scores: Option<ScoreStats>,
    pub distribution: ScoreDistribution,
    pub top_performers: Vec<StudentRow>,
    pub most_active: Vec<StudentRow>,
    pub students: Vec<StudentRow>,
}
