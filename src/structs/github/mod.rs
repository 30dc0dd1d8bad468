pub mod repo_info;
pub mod commit_info;
pub mod contributor;
pub mod activity_stats;
pub mod repository_data;
