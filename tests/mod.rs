use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use tempfile::TempDir;
use edutrack::config::config_manager::ConfigManager;
use edutrack::enums::analysis_status::AnalysisStatus;
use edutrack::errors::EdutrackError;
use edutrack::services::analytics::Analytics;
use edutrack::services::assignment_store::AssignmentStore;
use edutrack::services::github_client::GitHubClient;
use edutrack::services::report_generator::ReportGenerator;
use edutrack::services::response_interpreter::ResponseInterpreter;
use edutrack::structs::bulk_import_summary::BulkImportSummary;

const TEACHER: &str = "ms-frizzle";

const FULL_RESPONSE: &str = "**1. Summary (50-75 words):**
The project is a small budget tracker with a clear layout.

**2. Strengths (3-5 points):**
- Consistent commit history
- Readable module names
Mostly idiomatic code.

**3. Areas for Improvement (3-5 points):**
* No automated tests
* README lacks setup steps

**4. Performance Score (0-100):**

82/100

**5. Recommendations:**
- Add a test suite
- Document installation";

#[test]
fn interprets_a_complete_response() {
    let result = ResponseInterpreter::interpret(FULL_RESPONSE);

    assert_eq!(result.summary, "The project is a small budget tracker with a clear layout.");
    assert_eq!(result.strengths, vec!["- Consistent commit history", "- Readable module names"]);
    assert_eq!(result.improvements, vec!["* No automated tests", "* README lacks setup steps"]);
    assert_eq!(result.score, Some(82));
    assert_eq!(result.recommendations, vec!["- Add a test suite", "- Document installation"]);
    assert_eq!(result.full_text, FULL_RESPONSE);
    assert!(result.parse_error.is_none());
}

#[test]
fn score_falls_back_to_labelled_value() {
    let result = ResponseInterpreter::interpret("**Performance Score (0-100):**\n\nScore: 72");
    assert_eq!(result.score, Some(72));
}

#[test]
fn fullwidth_digits_score_like_ascii_ones() {
    let text = "**4. Performance Score (0-100):**\n\n８５/100\n\n**5. Recommendations:**\n- Set up CI\n";
    let result = ResponseInterpreter::interpret(text);

    assert_eq!(result.score, Some(85));
    assert_eq!(result.recommendations, vec!["- Set up CI"]);
    assert!(result.parse_error.is_none());
}

#[test]
fn out_of_scale_fraction_passes_through() {
    let result = ResponseInterpreter::interpret("**Performance Score (0-100):**\n\n150/100");
    assert_eq!(result.score, Some(150));
}

#[test]
fn plain_prose_yields_only_full_text() {
    let text = "Nice work overall, keep committing regularly.";
    let result = ResponseInterpreter::interpret(text);

    assert!(result.summary.is_empty());
    assert!(result.strengths.is_empty());
    assert!(result.improvements.is_empty());
    assert!(result.recommendations.is_empty());
    assert_eq!(result.score, None);
    assert_eq!(result.full_text, text);
}

proptest! {
    #[test]
    fn full_text_is_always_the_input(text in any::<String>()) {
        prop_assert_eq!(ResponseInterpreter::interpret(&text).full_text, text);
    }

    #[test]
    fn interpretation_is_deterministic(text in "(\\*\\*[A-Za-z ():0-9-]{0,20}\\*\\*|[- *a-z0-9/:\n]{0,30}){0,8}") {
        prop_assert_eq!(ResponseInterpreter::interpret(&text), ResponseInterpreter::interpret(&text));
    }

    #[test]
    fn fraction_score_is_read_back(score in 0u32..=100) {
        let text = format!("**4. Performance Score (0-100):**\n\n{}/100", score);
        prop_assert_eq!(ResponseInterpreter::interpret(&text).score, Some(score));
    }
}

#[test]
fn github_urls_are_normalised() {
    assert_eq!(GitHubClient::parse_repo_url("https://github.com/octo/hello.git").as_deref(), Some("octo/hello"));
    assert_eq!(GitHubClient::parse_repo_url("https://github.com/octo/hello/").as_deref(), Some("octo/hello"));
    assert_eq!(GitHubClient::parse_repo_url("https://gitlab.com/octo/hello"), None);
}

#[test]
fn classroom_workflow_survives_a_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edutrack.json");

    let mut store = AssignmentStore::open(&path).unwrap();
    let assignment = store
        .create_assignment(TEACHER, "Budget Tracker", Some("Build a CLI budget tracker"), None)
        .unwrap();
    let summary = store
        .bulk_add_repos(
            assignment.id,
            TEACHER,
            "Ada Lovelace, https://github.com/ada/budget\n\nGrace Hopper,https://github.com/grace/budget\nmissing url\n",
        )
        .unwrap();
    assert_eq!(summary, BulkImportSummary { added: 2, skipped: 0 });

    let ada = store
        .repos_for_assignment(assignment.id)
        .into_iter()
        .find(|repo| repo.student_name == "Ada Lovelace")
        .unwrap()
        .id;
    store
        .update_repo(ada, TEACHER, |repo| {
            repo.commit_count = 20;
            repo.languages.insert("Python".to_string(), 900);
            repo.apply_analysis(&ResponseInterpreter::interpret(FULL_RESPONSE));
        })
        .unwrap();
    let log = store.create_log(ada);
    store.update_log(log.id, AnalysisStatus::Success, None).unwrap();
    store.save().unwrap();

    let store = AssignmentStore::open(&path).unwrap();
    let repo = store.get_repo(ada, TEACHER).unwrap();
    assert_eq!(repo.performance_score, Some(82));
    assert_eq!(repo.suggestions.as_deref(), Some("* No automated tests\n* README lacks setup steps\n- Add a test suite\n- Document installation"));
    assert_eq!(store.logs_for_repo(ada)[0].status, AnalysisStatus::Success);

    let analytics = Analytics::assignment_analytics(&store, assignment.id, TEACHER).unwrap();
    assert_eq!(analytics.total_students, 2);
    assert_eq!(analytics.analyzed_repos, 1);
    assert_eq!(analytics.avg_commits, 10.0);
    assert_eq!(analytics.distribution.good, 1);

    let report = ReportGenerator::generate(&store, assignment.id, TEACHER).unwrap();
    assert!(report.starts_with("# Assignment Analysis Report: Budget Tracker\n"));
    assert!(report.contains("- **Average Performance Score:** 82.0\n"));
    assert!(report.contains("### Grace Hopper\n- **Repository:** https://github.com/grace/budget\n- **Commits:** 0\n- **Status:** Not yet analyzed\n"));
    assert_eq!(store.get_assignment(assignment.id, TEACHER).unwrap().report_file_name(), "Budget_Tracker_report.md");
}

#[test]
fn deleting_an_assignment_hides_its_repositories() {
    let mut store = AssignmentStore::in_memory();
    let id = store.create_assignment(TEACHER, "Short lived", None, None).unwrap().id;
    let repo = store.add_repo(id, TEACHER, "Ada", "https://github.com/ada/x").unwrap();

    store.delete_assignment(id, TEACHER).unwrap();

    assert_eq!(store.get_repo(repo.id, TEACHER).unwrap_err(), EdutrackError::not_found("Repository", repo.id));
    assert_eq!(Analytics::dashboard(&store, TEACHER).total_repos, 0);
}

#[test]
fn report_renders_with_a_fixed_clock() {
    let mut store = AssignmentStore::in_memory();
    let assignment = store.create_assignment(TEACHER, "Clocked", None, None).unwrap();
    let repos = store.repos_for_assignment(assignment.id);

    let report = ReportGenerator::render(&assignment, &repos, Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap());

    assert!(report.contains("**Generated:** January 02, 2025\n**Teacher:** ms-frizzle\n"));
}

#[test]
fn sample_config_is_valid_out_of_the_box() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".edutrack").join("config.toml");

    ConfigManager::create_sample_config_at(&path).unwrap();

    let config = ConfigManager::load_from(&path).unwrap();
    assert!(ConfigManager::validate_config(&config).is_ok());
    assert!(ConfigManager::gemini_settings(&config, |_| None).api_key.is_none());
}
