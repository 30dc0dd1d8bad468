/// One `student name,repository url` line from a bulk import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkImportEntry {
    pub student_name: String,
    pub repo_url: String,
}

/// Lines with fewer than two comma-separated fields are dropped without
/// complaint; fields after the second are ignored.
pub fn parse_bulk_lines(text: &str) -> Vec<BulkImportEntry> {
    text.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let mut parts = line.split(',');
            let student_name = parts.next()?.trim();
            let repo_url = parts.next()?.trim();

            Some(BulkImportEntry {
                student_name: student_name.to_string(),
                repo_url: repo_url.to_string(),
            })
        })
        .collect()
}
