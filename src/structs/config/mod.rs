pub mod config;
pub mod ai_config;
pub mod github_config;
pub mod storage_config;
pub mod teacher_config;
