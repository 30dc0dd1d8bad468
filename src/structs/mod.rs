pub mod cli;
pub mod ai;
pub mod config;
pub mod github;
pub mod store;
pub mod analytics;
pub mod analysis_result;
pub mod analysis_request;
pub mod analysis_response;
pub mod parse_error;
pub mod language_stat;
pub mod bulk_import_summary;
