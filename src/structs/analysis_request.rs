use crate::structs::github::repository_data::RepositoryData;

/// The filled-in prompt together with the metadata it was built from.
/// Lives for one model call.
#[derive(Debug, Clone)]
pub struct AnalysisRequest<'a> {
    pub prompt: String,
    pub source: &'a RepositoryData,
}
