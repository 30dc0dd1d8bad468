pub mod commands;
pub mod ai_provider_error;
pub mod github_error;
pub mod analysis_status;
pub mod analysis_outcome;
pub mod score_band;
