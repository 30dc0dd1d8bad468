use crate::enums::analysis_outcome::AnalysisOutcome;
use crate::enums::score_band::ScoreBand;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::analytics::assignment_analytics::AssignmentAnalytics;
use crate::structs::analytics::dashboard_stats::DashboardStats;
use crate::structs::analytics::student_row::StudentRow;
use crate::structs::store::analysis_log::AnalysisLog;
use crate::structs::store::assignment::Assignment;
use crate::structs::store::student_repo::StudentRepo;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Terminal rendering for everything the CLI shows on stdout.
pub struct ReportLogger;

impl ReportLogger {
    pub fn print_analysis_result(result: &AnalysisResult) {
        println!("🔍 REPOSITORY FEEDBACK");
        println!("{}", RULE);

        if !result.summary.is_empty() {
            println!("\n📝 Summary:\n{}", result.summary);
        }

        Self::print_items("💪 Strengths", &result.strengths);
        Self::print_items("🔧 Areas for Improvement", &result.improvements);

        match result.score {
            Some(score) => println!("\n🎯 Performance Score: {}/100 ({})", score, ScoreBand::for_score(score).label()),
            None => println!("\n🎯 Performance Score: N/A"),
        }

        Self::print_items("💡 Recommendations", &result.recommendations);

        if let Some(parse_error) = &result.parse_error {
            println!("\n⚠️ Partial result: {}", parse_error);
        }

        if result.summary.is_empty() && result.strengths.is_empty() && result.improvements.is_empty() && result.recommendations.is_empty() {
            println!("\n📄 Full response:\n{}", result.full_text);
        }

        println!("{}", RULE);
    }

    pub fn print_outcome(repo: &StudentRepo, outcome: &AnalysisOutcome) {
        match outcome {
            AnalysisOutcome::Analyzed { result, .. } => {
                println!("\n👤 {} ({})", repo.student_name, repo.repo_url);
                Self::print_analysis_result(result);
            }
            AnalysisOutcome::ModelFailed { error } => {
                println!("\n⚠️ GitHub data for {} was updated, but AI analysis failed:", repo.student_name);
                println!("   {}", error);
            }
        }
    }

    fn print_items(title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        println!("\n{}:", title);
        for item in items {
            println!("  {}", item);
        }
    }

    pub fn print_assignments(assignments: &[&Assignment]) {
        if assignments.is_empty() {
            println!("📭 No assignments yet. Create one with 'edutrack assignment create'.");
            return;
        }

        println!("📚 ASSIGNMENTS ({} total)", assignments.len());
        println!("{}", RULE);
        for assignment in assignments {
            Self::print_assignment_line(assignment);
        }
    }

    fn print_assignment_line(assignment: &Assignment) {
        let deadline = assignment
            .deadline
            .map(|deadline| format!(" (due {})", deadline.format("%Y-%m-%d %H:%M")))
            .unwrap_or_default();
        println!("  #{:<4} {}{}", assignment.id, assignment.title, deadline);
    }

    pub fn print_assignment_detail(assignment: &Assignment, repos: &[&StudentRepo]) {
        println!("📘 #{} {}", assignment.id, assignment.title);
        println!("{}", RULE);
        if let Some(description) = &assignment.description {
            println!("{}\n", description);
        }
        println!("Created: {}", assignment.created_at.format("%B %d, %Y"));
        if let Some(deadline) = assignment.deadline {
            println!("Deadline: {}", deadline.format("%B %d, %Y %H:%M"));
        }

        println!("\n👥 Student repositories ({}):", repos.len());
        for repo in repos {
            let status = match (repo.is_analyzed, repo.performance_score) {
                (true, Some(score)) => format!("score {}", score),
                (true, None) => "analyzed, score N/A".to_string(),
                (false, _) => "not analyzed".to_string(),
            };
            println!("  #{:<4} {:<24} {} [{}]", repo.id, repo.student_name, repo.repo_url, status);
        }
    }

    pub fn print_repo_detail(repo: &StudentRepo, logs: &[&AnalysisLog]) {
        println!("👤 {} (repository #{})", repo.student_name, repo.id);
        println!("{}", RULE);
        println!("Repository: {}", repo.repo_url);
        println!("Commits: {}", repo.commit_count);
        if !repo.languages.is_empty() {
            println!("Languages: {}", repo.language_names().join(", "));
        }
        if let Some(message) = &repo.last_commit_message {
            let date = repo
                .last_commit_date
                .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "N/A".to_string());
            println!("Last commit: {} ({})", message.lines().next().unwrap_or_default(), date);
        }
        println!("Contributors: {}", repo.contributors.len());

        if repo.is_analyzed {
            let score = repo.performance_score.map(|s| s.to_string()).unwrap_or_else(|| "N/A".to_string());
            println!("\n🎯 Performance Score: {}", score);
            if let Some(summary) = &repo.ai_summary {
                println!("\n📝 AI Feedback:\n{}", summary);
            }
            if let Some(suggestions) = repo.suggestions.as_deref().filter(|s| !s.is_empty()) {
                println!("\n💡 Suggestions:\n{}", suggestions);
            }
        } else {
            println!("\nStatus: Not yet analyzed");
        }

        if !logs.is_empty() {
            println!("\n🕑 Analysis history:");
            for log in logs {
                let error = log.error_message.as_deref().map(|e| format!(" - {}", e)).unwrap_or_default();
                println!("  {} {}{}", log.analysis_date.format("%Y-%m-%d %H:%M"), log.status, error);
            }
        }
    }

    pub fn print_dashboard(teacher: &str, stats: &DashboardStats) {
        println!("🏫 DASHBOARD for {}", teacher);
        println!("{}", RULE);
        println!("Assignments:          {}", stats.total_assignments);
        println!("Student repositories: {}", stats.total_repos);
        println!("Analyzed:             {}", stats.analyzed_repos);
        println!("Pending analysis:     {}", stats.pending_repos);

        if !stats.recent_assignments.is_empty() {
            println!("\n📚 Recent assignments:");
            for assignment in &stats.recent_assignments {
                Self::print_assignment_line(assignment);
            }
        }
    }

    pub fn print_analytics(analytics: &AssignmentAnalytics) {
        println!("📊 ANALYTICS: {}", analytics.assignment.title);
        println!("{}", RULE);
        println!("Students: {} ({} analyzed, {} pending)", analytics.total_students, analytics.analyzed_repos, analytics.pending_repos);
        println!("Commits: {} total, {} average", analytics.total_commits, analytics.avg_commits);

        println!("\n💻 Languages ({} used):", analytics.total_languages);
        for stat in &analytics.language_stats {
            println!("  {:<16} {:>5.1}%", stat.language, stat.percentage);
        }

        match &analytics.scores {
            Some(scores) => {
                println!("\n🎯 Scores: average {}, highest {}, lowest {}", scores.average, scores.max, scores.min);
                for band in [ScoreBand::Excellent, ScoreBand::Good, ScoreBand::Average, ScoreBand::NeedsImprovement] {
                    println!("  {:<18} {}", band.label(), analytics.distribution.count(band));
                }
            }
            None => println!("\n🎯 Scores: not yet analyzed"),
        }

        Self::print_rows("🏆 Top performers", &analytics.top_performers);
        Self::print_rows("🔥 Most active", &analytics.most_active);
        Self::print_rows("👥 Students", &analytics.students);
    }

    fn print_rows(title: &str, rows: &[StudentRow]) {
        if rows.is_empty() {
            return;
        }
        println!("\n{}:", title);
        for row in rows {
            let score = row.score.map(|s| s.to_string()).unwrap_or_else(|| "N/A".to_string());
            println!("  #{:<4} {:<24} commits {:<5} score {}", row.repo_id, row.name, row.commits, score);
        }
    }
}
