use chrono::{DateTime, Utc};
use crate::config::constants::REPORT_SUMMARY_PREVIEW_CHARS;
use crate::errors::EdutrackResult;
use crate::services::analytics::Analytics;
use crate::services::assignment_store::AssignmentStore;
use crate::structs::language_stat::LanguageStat;
use crate::structs::store::assignment::Assignment;
use crate::structs::store::student_repo::StudentRepo;

const SECTION_BREAK: &str = "\n---\n";

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate(store: &AssignmentStore, assignment_id: u64, teacher: &str) -> EdutrackResult<String> {
        let assignment = store.get_assignment(assignment_id, teacher)?;
        let repos = store.repos_for_assignment(assignment_id);
        Ok(Self::render(assignment, &repos, Utc::now()))
    }

    pub fn render(assignment: &Assignment, repos: &[&StudentRepo], generated_at: DateTime<Utc>) -> String {
        let mut lines = Self::overview(assignment, repos, generated_at);
        lines.extend(Self::languages(repos));
        lines.extend(Self::student_details(repos));

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }

    fn overview(assignment: &Assignment, repos: &[&StudentRepo], generated_at: DateTime<Utc>) -> Vec<String> {
        let total_students = repos.len();
        let analyzed = repos.iter().filter(|repo| repo.is_analyzed).count();

        // An empty assignment shows a bare 0 rather than 0.0.
        let average_commits = if repos.is_empty() {
            "0".to_string()
        } else {
            format!("{:.1}", Analytics::average_commits(repos))
        };
        let average_score = Analytics::average_score(repos)
            .map(|score| format!("{:.1}", score))
            .unwrap_or_else(|| "Not yet analyzed".to_string());

        vec![
            format!("# Assignment Analysis Report: {}", assignment.title),
            String::new(),
            format!("**Generated:** {}", generated_at.format("%B %d, %Y")),
            format!("**Teacher:** {}", assignment.teacher),
            SECTION_BREAK.to_string(),
            "## 📊 Overview Statistics\n".to_string(),
            format!("- **Total Students:** {}", total_students),
            format!("- **Repositories Analyzed:** {} / {}", analyzed, total_students),
            format!("- **Total Commits (All Students):** {}", Analytics::total_commits(repos)),
            format!("- **Average Commits per Student:** {}", average_commits),
            format!("- **Average Performance Score:** {}", average_score),
            SECTION_BREAK.to_string(),
        ]
    }

    fn languages(repos: &[&StudentRepo]) -> Vec<String> {
        let mut lines = vec!["## 💻 Programming Languages Used\n".to_string()];

        let stats = LanguageStat::from_counts(&Analytics::aggregate_languages(repos));
        if stats.is_empty() {
            lines.push("- No language data available".to_string());
        }
        lines.extend(stats.iter().map(|stat| format!("- **{}:** {:.1}%", stat.language, stat.percentage)));

        lines.push(SECTION_BREAK.to_string());
        lines
    }

    fn student_details(repos: &[&StudentRepo]) -> Vec<String> {
        let mut students: Vec<&StudentRepo> = repos.to_vec();
        students.sort_by(|a, b| a.student_name.cmp(&b.student_name).then(a.id.cmp(&b.id)));

        let mut lines = vec!["## 👥 Student Details\n".to_string()];
        for repo in students {
            lines.extend(Self::student_section(repo));
        }
        lines
    }

    fn student_section(repo: &StudentRepo) -> Vec<String> {
        let mut lines = vec![
            format!("\n### {}", repo.student_name),
            format!("- **Repository:** {}", repo.repo_url),
            format!("- **Commits:** {}", repo.commit_count),
        ];

        if !repo.languages.is_empty() {
            lines.push(format!("- **Languages:** {}", repo.language_names().join(", ")));
        }

        if repo.is_analyzed {
            let score = repo
                .performance_score
                .map(|score| score.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            lines.push(format!("- **Performance Score:** {}", score));

            if let Some(summary) = repo.ai_summary.as_deref().filter(|summary| !summary.is_empty()) {
                let preview: String = summary.chars().take(REPORT_SUMMARY_PREVIEW_CHARS).collect();
                lines.push(format!("- **AI Summary:** {}...", preview));
            }
        } else {
            lines.push("- **Status:** Not yet analyzed".to_string());
        }

        lines.push(String::new());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::structs::analysis_result::AnalysisResult;

    fn assignment() -> Assignment {
        let created = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
        Assignment {
            id: 1,
            teacher: "ms-frizzle".to_string(),
            title: "Intro to Python".to_string(),
            description: None,
            created_at: created,
            updated_at: created,
            deadline: None,
        }
    }

    fn analyzed(id: u64, name: &str, score: Option<u32>, summary: &str) -> StudentRepo {
        let mut repo = StudentRepo::new(id, 1, name, &format!("https://github.com/{}/py", name.to_lowercase()));
        repo.commit_count = 8;
        repo.languages.insert("Python".to_string(), 300);
        repo.languages.insert("Shell".to_string(), 100);
        repo.apply_analysis(&AnalysisResult {
            score,
            ..AnalysisResult::new(summary)
        });
        repo
    }

    #[test]
    fn header_and_overview() {
        let ada = analyzed(1, "Ada", Some(90), "Great work");
        let pending = StudentRepo::new(2, 1, "Bob", "https://github.com/bob/py");
        let generated = Utc.with_ymd_and_hms(2024, 10, 5, 12, 0, 0).unwrap();

        let report = ReportGenerator::render(&assignment(), &[&ada, &pending], generated);

        assert!(report.starts_with("# Assignment Analysis Report: Intro to Python\n\n**Generated:** October 05, 2024\n**Teacher:** ms-frizzle\n"));
        assert!(report.contains("- **Repositories Analyzed:** 1 / 2\n"));
        assert!(report.contains("- **Total Commits (All Students):** 8\n"));
        assert!(report.contains("- **Average Commits per Student:** 4.0\n"));
        assert!(report.contains("- **Average Performance Score:** 90.0\n"));
        assert!(report.contains("- **Python:** 75.0%\n- **Shell:** 25.0%\n"));
    }

    #[test]
    fn whole_number_averages_keep_one_decimal() {
        let mut solo = analyzed(1, "Ada", Some(85), "Solid");
        solo.commit_count = 30;

        let report = ReportGenerator::render(&assignment(), &[&solo], Utc::now());

        assert!(report.contains("- **Average Commits per Student:** 30.0\n"));
        assert!(report.contains("- **Average Performance Score:** 85.0\n"));
    }

    #[test]
    fn fractional_averages_are_rounded_to_one_decimal() {
        let ada = analyzed(1, "Ada", Some(90), "a");
        let bob = analyzed(2, "Bob", Some(85), "b");
        let mut cy = analyzed(3, "Cy", Some(80), "c");
        cy.commit_count = 9;

        let report = ReportGenerator::render(&assignment(), &[&ada, &bob, &cy], Utc::now());

        assert!(report.contains("- **Average Commits per Student:** 8.3\n"));
        assert!(report.contains("- **Average Performance Score:** 85.0\n"));
    }

    #[test]
    fn zero_score_is_reported_as_zero() {
        let zed = analyzed(1, "Zed", Some(0), "Nothing submitted");

        let report = ReportGenerator::render(&assignment(), &[&zed], Utc::now());

        assert!(report.contains("- **Average Performance Score:** 0.0\n"));
        assert!(report.contains("- **Performance Score:** 0\n"));
        assert!(!report.contains("N/A"));
        assert!(!report.contains("Not yet analyzed"));
    }

    #[test]
    fn students_are_listed_by_name() {
        let zoe = analyzed(1, "Zoe", Some(70), "Solid");
        let ada = analyzed(2, "Ada", None, "No score given");
        let bob = StudentRepo::new(3, 1, "Bob", "https://github.com/bob/py");

        let report = ReportGenerator::render(&assignment(), &[&zoe, &ada, &bob], Utc::now());
        let ada_at = report.find("### Ada").unwrap();
        let bob_at = report.find("### Bob").unwrap();
        let zoe_at = report.find("### Zoe").unwrap();

        assert!(ada_at < bob_at && bob_at < zoe_at);
        assert!(report.contains("### Ada\n- **Repository:** https://github.com/ada/py\n- **Commits:** 8\n- **Languages:** Python, Shell\n- **Performance Score:** N/A\n"));
        assert!(report.contains("### Bob\n- **Repository:** https://github.com/bob/py\n- **Commits:** 0\n- **Status:** Not yet analyzed\n"));
    }

    #[test]
    fn summary_preview_is_truncated() {
        let long = analyzed(1, "Ada", Some(88), &"a".repeat(250));

        let report = ReportGenerator::render(&assignment(), &[&long], Utc::now());

        assert!(report.contains(&format!("- **AI Summary:** {}...\n", "a".repeat(200))));
        assert!(!report.contains(&"a".repeat(201)));
    }

    #[test]
    fn empty_assignment_report() {
        let report = ReportGenerator::render(&assignment(), &[], Utc::now());

        assert!(report.contains("- **Total Students:** 0\n"));
        assert!(report.contains("- **Average Commits per Student:** 0\n"));
        assert!(report.contains("- **Average Performance Score:** Not yet analyzed\n"));
        assert!(report.contains("- No language data available\n"));
    }
}
