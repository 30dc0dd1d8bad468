pub mod response_interpreter;
pub mod github_client;
pub mod ai_providers;
pub mod assignment_store;
pub mod repository_analyzer;
pub mod analytics;
pub mod report_generator;
