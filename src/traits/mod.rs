pub mod ai_provider;
pub mod repository_source;
