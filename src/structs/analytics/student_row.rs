use serde::Serialize;

/// One line of the per-student table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRow {
    pub repo_id: u64,
    pub name: String,
    pub commits: usize,
    pub languages: Vec<String>,
    pub score: Option<u32>,
    pub analyzed: bool,
}
