use std::collections::BTreeMap;
use crate::config::constants::{ANALYTICS_LEADERBOARD_SIZE, ANALYTICS_TOP_LANGUAGES, DASHBOARD_RECENT_ASSIGNMENTS};
use crate::errors::EdutrackResult;
use crate::services::assignment_store::AssignmentStore;
use crate::structs::analytics::assignment_analytics::AssignmentAnalytics;
use crate::structs::analytics::dashboard_stats::DashboardStats;
use crate::structs::analytics::score_stats::{ScoreDistribution, ScoreStats};
use crate::structs::analytics::student_row::StudentRow;
use crate::structs::language_stat::LanguageStat;
use crate::structs::store::student_repo::StudentRepo;

pub struct Analytics;

impl Analytics {
    pub fn dashboard(store: &AssignmentStore, teacher: &str) -> DashboardStats {
        let assignments = store.list_assignments(teacher);
        let repos = store.repos_for_teacher(teacher);
        let analyzed_repos = repos.iter().filter(|repo| repo.is_analyzed).count();

        DashboardStats {
            total_assignments: assignments.len(),
            total_repos: repos.len(),
            analyzed_repos,
            pending_repos: repos.len() - analyzed_repos,
            recent_assignments: assignments
                .into_iter()
                .take(DASHBOARD_RECENT_ASSIGNMENTS)
                .cloned()
                .collect(),
        }
    }

    pub fn assignment_analytics(store: &AssignmentStore, assignment_id: u64, teacher: &str) -> EdutrackResult<AssignmentAnalytics> {
        let assignment = store.get_assignment(assignment_id, teacher)?.clone();
        let repos = store.repos_for_assignment(assignment_id);

        let total_students = repos.len();
        let analyzed_repos = repos.iter().filter(|repo| repo.is_analyzed).count();
        let total_commits = Self::total_commits(&repos);

        let languages = Self::aggregate_languages(&repos);
        let language_stats = LanguageStat::from_counts(&languages)
            .into_iter()
            .take(ANALYTICS_TOP_LANGUAGES)
            .map(|stat| LanguageStat {
                percentage: round_one(stat.percentage),
                ..stat
            })
            .collect();

        let scores: Vec<u32> = Self::scored(&repos).iter().filter_map(|repo| repo.performance_score).collect();
        let mut distribution = ScoreDistribution::default();
        scores.iter().for_each(|score| distribution.record(*score));

        let mut top_performers = Self::scored(&repos);
        top_performers.sort_by(|a, b| b.performance_score.cmp(&a.performance_score));

        let mut most_active: Vec<&StudentRepo> = repos.iter().copied().filter(|repo| repo.commit_count > 0).collect();
        most_active.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));

        Ok(AssignmentAnalytics {
            assignment,
            total_students,
            analyzed_repos,
            pending_repos: total_students - analyzed_repos,
            total_commits,
            avg_commits: Self::average_commits(&repos),
            language_stats,
            total_languages: languages.len(),
            scores: Self::score_stats(&scores),
            distribution,
            top_performers: top_performers.into_iter().take(ANALYTICS_LEADERBOARD_SIZE).map(student_row).collect(),
            most_active: most_active.into_iter().take(ANALYTICS_LEADERBOARD_SIZE).map(student_row).collect(),
            students: repos.iter().copied().map(student_row).collect(),
        })
    }

    /// Byte counts per language summed over every repository.
    pub fn aggregate_languages(repos: &[&StudentRepo]) -> BTreeMap<String, u64> {
        let mut totals = BTreeMap::new();
        for repo in repos {
            for (language, bytes) in &repo.languages {
                *totals.entry(language.clone()).or_insert(0) += bytes;
            }
        }
        totals
    }

    pub fn total_commits(repos: &[&StudentRepo]) -> usize {
        repos.iter().map(|repo| repo.commit_count).sum()
    }

    /// Zero for an empty assignment.
    pub fn average_commits(repos: &[&StudentRepo]) -> f64 {
        if repos.is_empty() {
            return 0.0;
        }
        round_one(Self::total_commits(repos) as f64 / repos.len() as f64)
    }

    /// Average over analyzed repositories that carry a score.
    pub fn average_score(repos: &[&StudentRepo]) -> Option<f64> {
        let scores: Vec<u32> = Self::scored(repos).iter().filter_map(|repo| repo.performance_score).collect();
        Self::score_stats(&scores).map(|stats| stats.average)
    }

    fn scored<'a>(repos: &[&'a StudentRepo]) -> Vec<&'a StudentRepo> {
        repos
            .iter()
            .copied()
            .filter(|repo| repo.is_analyzed && repo.performance_score.is_some())
            .collect()
    }

    fn score_stats(scores: &[u32]) -> Option<ScoreStats> {
        let max = *scores.iter().max()?;
        let min = *scores.iter().min()?;
        let sum: u64 = scores.iter().map(|score| u64::from(*score)).sum();

        Some(ScoreStats {
            average: round_one(sum as f64 / scores.len() as f64),
            max,
            min,
        })
    }
}

fn student_row(repo: &StudentRepo) -> StudentRow {
    StudentRow {
        repo_id: repo.id,
        name: repo.student_name.clone(),
        commits: repo.commit_count,
        languages: repo.language_names().into_iter().map(str::to_string).collect(),
        score: repo.performance_score,
        analyzed: repo.is_analyzed,
    }
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
