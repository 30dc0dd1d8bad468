use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use crate::enums::analysis_status::AnalysisStatus;
use crate::errors::{EdutrackError, EdutrackResult};
use crate::helpers::bulk_import::parse_bulk_lines;
use crate::structs::bulk_import_summary::BulkImportSummary;
use crate::structs::store::analysis_log::AnalysisLog;
use crate::structs::store::assignment::Assignment;
use crate::structs::store::database::Database;
use crate::structs::store::student_repo::StudentRepo;

const ASSIGNMENT: &str = "Assignment";
const REPOSITORY: &str = "Repository";
const ANALYSIS_LOG: &str = "Analysis log";

/// Assignments, student repositories and analysis logs kept in one JSON
/// file. Every lookup is scoped to the teacher that owns the assignment.
pub struct AssignmentStore {
    path: Option<PathBuf>,
    data: Database,
}

impl AssignmentStore {
    pub fn open(path: &Path) -> EdutrackResult<Self> {
        let data = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| EdutrackError::storage_error(&path.display().to_string(), "read", &e.to_string()))?;
            serde_json::from_str(&content)?
        } else {
            log::debug!("No data file at {}, starting empty", path.display());
            Database::default()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: Database::default(),
        }
    }

    pub fn save(&self) -> EdutrackResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let display = path.display().to_string();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| EdutrackError::storage_error(&display, "create directory", &e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.data)?;
        fs::write(path, content).map_err(|e| EdutrackError::storage_error(&display, "write", &e.to_string()))?;
        log::debug!("💾 Saved store to {}", display);
        Ok(())
    }

    // Assignments

    pub fn create_assignment(
        &mut self,
        teacher: &str,
        title: &str,
        description: Option<&str>,
        deadline: Option<DateTime<Utc>>,
    ) -> EdutrackResult<Assignment> {
        let title = title.trim();
        if title.is_empty() {
            return Err(EdutrackError::validation_error("title", title, "must not be empty", None));
        }

        self.data.last_assignment_id += 1;
        let now = Utc::now();
        let assignment = Assignment {
            id: self.data.last_assignment_id,
            teacher: teacher.to_string(),
            title: title.to_string(),
            description: description.map(str::trim).filter(|d| !d.is_empty()).map(str::to_string),
            created_at: now,
            updated_at: now,
            deadline,
        };

        self.data.assignments.push(assignment.clone());
        Ok(assignment)
    }

    /// Newest first.
    pub fn list_assignments(&self, teacher: &str) -> Vec<&Assignment> {
        let mut assignments: Vec<&Assignment> = self
            .data
            .assignments
            .iter()
            .filter(|assignment| assignment.teacher == teacher)
            .collect();

        assignments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        assignments
    }

    pub fn get_assignment(&self, id: u64, teacher: &str) -> EdutrackResult<&Assignment> {
        self.data
            .assignments
            .iter()
            .find(|assignment| assignment.id == id && assignment.teacher == teacher)
            .ok_or_else(|| EdutrackError::not_found(ASSIGNMENT, id))
    }

    /// Removes the assignment together with its repositories and their logs.
    pub fn delete_assignment(&mut self, id: u64, teacher: &str) -> EdutrackResult<Assignment> {
        let position = self
            .data
            .assignments
            .iter()
            .position(|assignment| assignment.id == id && assignment.teacher == teacher)
            .ok_or_else(|| EdutrackError::not_found(ASSIGNMENT, id))?;

        let assignment = self.data.assignments.remove(position);
        let repo_ids: Vec<u64> = self
            .data
            .repos
            .iter()
            .filter(|repo| repo.assignment_id == id)
            .map(|repo| repo.id)
            .collect();

        self.data.repos.retain(|repo| repo.assignment_id != id);
        self.data.logs.retain(|log| !repo_ids.contains(&log.repo_id));

        log::debug!("Deleted assignment #{} with {} repositories", id, repo_ids.len());
        Ok(assignment)
    }

    // Repositories

    pub fn add_repo(&mut self, assignment_id: u64, teacher: &str, student_name: &str, repo_url: &str) -> EdutrackResult<StudentRepo> {
        self.get_assignment(assignment_id, teacher)?;

        let student_name = student_name.trim();
        let repo_url = repo_url.trim();
        if student_name.is_empty() {
            return Err(EdutrackError::validation_error("student_name", student_name, "must not be empty", None));
        }
        if repo_url.is_empty() {
            return Err(EdutrackError::validation_error("repo_url", repo_url, "must not be empty", None));
        }

        if self.has_repo(assignment_id, repo_url) {
            return Err(EdutrackError::DuplicateRepository {
                assignment_id,
                repo_url: repo_url.to_string(),
            });
        }

        Ok(self.insert_repo(assignment_id, student_name, repo_url))
    }

    /// Imports `student name,repository url` lines. Already registered URLs
    /// are counted as skipped.
    pub fn bulk_add_repos(&mut self, assignment_id: u64, teacher: &str, text: &str) -> EdutrackResult<BulkImportSummary> {
        self.get_assignment(assignment_id, teacher)?;

        let mut summary = BulkImportSummary::default();
        for entry in parse_bulk_lines(text) {
            if self.has_repo(assignment_id, &entry.repo_url) {
                summary.skipped += 1;
            } else {
                self.insert_repo(assignment_id, &entry.student_name, &entry.repo_url);
                summary.added += 1;
            }
        }

        Ok(summary)
    }

    fn has_repo(&self, assignment_id: u64, repo_url: &str) -> bool {
        self.data
            .repos
            .iter()
            .any(|repo| repo.assignment_id == assignment_id && repo.repo_url == repo_url)
    }

    fn insert_repo(&mut self, assignment_id: u64, student_name: &str, repo_url: &str) -> StudentRepo {
        self.data.last_repo_id += 1;
        let repo = StudentRepo::new(self.data.last_repo_id, assignment_id, student_name, repo_url);
        self.data.repos.push(repo.clone());
        repo
    }

    /// Newest first.
    pub fn repos_for_assignment(&self, assignment_id: u64) -> Vec<&StudentRepo> {
        let mut repos: Vec<&StudentRepo> = self
            .data
            .repos
            .iter()
            .filter(|repo| repo.assignment_id == assignment_id)
            .collect();

        repos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        repos
    }

    pub fn repos_for_teacher(&self, teacher: &str) -> Vec<&StudentRepo> {
        let assignment_ids: Vec<u64> = self.list_assignments(teacher).iter().map(|a| a.id).collect();

        self.data
            .repos
            .iter()
            .filter(|repo| assignment_ids.contains(&repo.assignment_id))
            .collect()
    }

    pub fn get_repo(&self, id: u64, teacher: &str) -> EdutrackResult<&StudentRepo> {
        let repo = self
            .data
            .repos
            .iter()
            .find(|repo| repo.id == id)
            .ok_or_else(|| EdutrackError::not_found(REPOSITORY, id))?;

        // A repository under someone else's assignment does not exist for this teacher.
        self.get_assignment(repo.assignment_id, teacher)
            .map_err(|_| EdutrackError::not_found(REPOSITORY, id))?;

        Ok(repo)
    }

    /// Applies `update` to the repository and returns the updated copy.
    pub fn update_repo(&mut self, id: u64, teacher: &str, update: impl FnOnce(&mut StudentRepo)) -> EdutrackResult<StudentRepo> {
        self.get_repo(id, teacher)?;

        let repo = self
            .data
            .repos
            .iter_mut()
            .find(|repo| repo.id == id)
            .ok_or_else(|| EdutrackError::not_found(REPOSITORY, id))?;

        update(repo);
        Ok(repo.clone())
    }

    // Analysis logs

    pub fn create_log(&mut self, repo_id: u64) -> AnalysisLog {
        self.data.last_log_id += 1;
        let log = AnalysisLog {
            id: self.data.last_log_id,
            repo_id,
            analysis_date: Utc::now(),
            status: AnalysisStatus::Pending,
            error_message: None,
        };

        self.data.logs.push(log.clone());
        log
    }

    pub fn update_log(&mut self, log_id: u64, status: AnalysisStatus, error_message: Option<String>) -> EdutrackResult<()> {
        let log = self
            .data
            .logs
            .iter_mut()
            .find(|log| log.id == log_id)
            .ok_or_else(|| EdutrackError::not_found(ANALYSIS_LOG, log_id))?;

        log.status = status;
        log.error_message = error_message;
        Ok(())
    }

    /// Newest first.
    pub fn logs_for_repo(&self, repo_id: u64) -> Vec<&AnalysisLog> {
        let mut logs: Vec<&AnalysisLog> = self.data.logs.iter().filter(|log| log.repo_id == repo_id).collect();
        logs.sort_by(|a, b| b.analysis_date.cmp(&a.analysis_date).then(b.id.cmp(&a.id)));
        logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEACHER: &str = "ms-frizzle";

    fn store_with_assignment() -> (AssignmentStore, u64) {
        let mut store = AssignmentStore::in_memory();
        let assignment = store.create_assignment(TEACHER, "Intro to Python", Some("Week 1"), None).unwrap();
        (store, assignment.id)
    }

    #[test]
    fn ids_increase_and_listing_is_newest_first() {
        let mut store = AssignmentStore::in_memory();
        let first = store.create_assignment(TEACHER, "First", None, None).unwrap();
        let second = store.create_assignment(TEACHER, "Second", None, None).unwrap();
        store.create_assignment("someone-else", "Hidden", None, None).unwrap();

        let titles: Vec<&str> = store.list_assignments(TEACHER).iter().map(|a| a.title.as_str()).collect();

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut store = AssignmentStore::in_memory();
        assert!(matches!(
            store.create_assignment(TEACHER, "   ", None, None),
            Err(EdutrackError::ValidationError { .. })
        ));
    }

    #[test]
    fn other_teachers_assignments_are_not_found() {
        let (store, id) = store_with_assignment();

        assert!(store.get_assignment(id, TEACHER).is_ok());
        assert_eq!(store.get_assignment(id, "intruder").unwrap_err(), EdutrackError::not_found("Assignment", id));
    }

    #[test]
    fn duplicate_repository_is_refused() {
        let (mut store, id) = store_with_assignment();
        store.add_repo(id, TEACHER, "Ada", "https://github.com/ada/one").unwrap();

        let error = store.add_repo(id, TEACHER, "Ada again", "https://github.com/ada/one").unwrap_err();

        assert!(matches!(error, EdutrackError::DuplicateRepository { assignment_id, .. } if assignment_id == id));
        assert_eq!(store.repos_for_assignment(id).len(), 1);
    }

    #[test]
    fn same_url_may_join_another_assignment() {
        let (mut store, first) = store_with_assignment();
        let second = store.create_assignment(TEACHER, "Week 2", None, None).unwrap().id;

        store.add_repo(first, TEACHER, "Ada", "https://github.com/ada/one").unwrap();
        assert!(store.add_repo(second, TEACHER, "Ada", "https://github.com/ada/one").is_ok());
    }

    #[test]
    fn bulk_import_counts_added_and_skipped() {
        let (mut store, id) = store_with_assignment();
        store.add_repo(id, TEACHER, "Ada", "https://github.com/ada/one").unwrap();

        let summary = store
            .bulk_add_repos(
                id,
                TEACHER,
                "Ada,https://github.com/ada/one\nGrace,https://github.com/grace/two\nno comma here\nGrace,https://github.com/grace/two\n",
            )
            .unwrap();

        assert_eq!(summary, BulkImportSummary { added: 1, skipped: 2 });
        assert_eq!(store.repos_for_assignment(id).len(), 2);
    }

    #[test]
    fn repositories_are_scoped_to_their_teacher() {
        let (mut store, id) = store_with_assignment();
        let repo = store.add_repo(id, TEACHER, "Ada", "https://github.com/ada/one").unwrap();

        assert!(store.get_repo(repo.id, TEACHER).is_ok());
        assert_eq!(store.get_repo(repo.id, "intruder").unwrap_err(), EdutrackError::not_found("Repository", repo.id));
        assert!(store.update_repo(repo.id, "intruder", |repo| repo.commit_count = 99).is_err());
        assert_eq!(store.update_repo(repo.id, TEACHER, |repo| repo.commit_count = 7).unwrap().commit_count, 7);
        assert!(store.add_repo(id, "intruder", "Eve", "https://github.com/eve/x").is_err());
    }

    #[test]
    fn delete_cascades_to_repositories_and_logs() {
        let (mut store, id) = store_with_assignment();
        let keep = store.create_assignment(TEACHER, "Keep me", None, None).unwrap().id;
        let doomed = store.add_repo(id, TEACHER, "Ada", "https://github.com/ada/one").unwrap();
        let kept = store.add_repo(keep, TEACHER, "Grace", "https://github.com/grace/two").unwrap();
        store.create_log(doomed.id);
        store.create_log(kept.id);

        store.delete_assignment(id, TEACHER).unwrap();

        assert!(store.get_assignment(id, TEACHER).is_err());
        assert!(store.get_repo(doomed.id, TEACHER).is_err());
        assert!(store.logs_for_repo(doomed.id).is_empty());
        assert_eq!(store.logs_for_repo(kept.id).len(), 1);
        assert_eq!(store.repos_for_teacher(TEACHER).len(), 1);
    }

    #[test]
    fn log_lifecycle() {
        let (mut store, id) = store_with_assignment();
        let repo = store.add_repo(id, TEACHER, "Ada", "https://github.com/ada/one").unwrap();
        let first = store.create_log(repo.id);
        let second = store.create_log(repo.id);

        store.update_log(first.id, AnalysisStatus::Failed, Some("Invalid GitHub URL".to_string())).unwrap();
        store.update_log(second.id, AnalysisStatus::Success, None).unwrap();

        let logs = store.logs_for_repo(repo.id);
        assert_eq!(logs[0].id, second.id);
        assert_eq!(logs[0].status, AnalysisStatus::Success);
        assert_eq!(logs[1].error_message.as_deref(), Some("Invalid GitHub URL"));
        assert!(store.update_log(99, AnalysisStatus::Success, None).is_err());
    }

    #[test]
    fn persists_between_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("edutrack.json");

        let mut store = AssignmentStore::open(&path).unwrap();
        let id = store.create_assignment(TEACHER, "Persisted", None, None).unwrap().id;
        store.add_repo(id, TEACHER, "Ada", "https://github.com/ada/one").unwrap();
        store.save().unwrap();

        let mut reopened = AssignmentStore::open(&path).unwrap();
        assert_eq!(reopened.get_assignment(id, TEACHER).unwrap().title, "Persisted");
        assert_eq!(reopened.repos_for_assignment(id).len(), 1);

        assert_eq!(reopened.create_assignment(TEACHER, "Next", None, None).unwrap().id, id + 1);
    }

    #[test]
    fn corrupt_data_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("edutrack.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(AssignmentStore::open(&path), Err(EdutrackError::ParseError { .. })));
    }
}
