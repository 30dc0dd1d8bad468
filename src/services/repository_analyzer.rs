use std::sync::Arc;
use crate::enums::analysis_outcome::AnalysisOutcome;
use crate::enums::analysis_status::AnalysisStatus;
use crate::errors::EdutrackResult;
use crate::helpers::prompt_generator;
use crate::services::assignment_store::AssignmentStore;
use crate::services::response_interpreter::ResponseInterpreter;
use crate::traits::ai_provider::AiProvider;
use crate::traits::repository_source::RepositorySource;

/// Fetch, prompt, interpret and persist for one student repository.
pub struct RepositoryAnalyzer {
    source: Arc<dyn RepositorySource>,
    provider: Arc<dyn AiProvider>,
}

impl RepositoryAnalyzer {
    pub fn new(source: Arc<dyn RepositorySource>, provider: Arc<dyn AiProvider>) -> Self {
        Self { source, provider }
    }

    /// A GitHub failure aborts the run with an error. A model failure still
    /// keeps the fetched GitHub data and comes back as `ModelFailed`.
    pub async fn analyze(&self, store: &mut AssignmentStore, repo_id: u64, teacher: &str) -> EdutrackResult<AnalysisOutcome> {
        let repo_url = store.get_repo(repo_id, teacher)?.repo_url.clone();
        let log_id = store.create_log(repo_id).id;

        log::debug!("Analyzing repository #{} ({})", repo_id, repo_url);
        let data = match self.source.fetch_repo_data(repo_url.clone()).await {
            Ok(data) => data,
            Err(e) => {
                log::error!("❌ Failed to fetch {}: {}", repo_url, e);
                store.update_log(log_id, AnalysisStatus::Failed, Some(e.to_string()))?;
                store.save()?;
                return Err(e.into());
            }
        };

        store.update_repo(repo_id, teacher, |repo| repo.apply_repository_data(&data))?;
        log::info!("🤖 Requesting feedback for {}", data.repo_name);

        let request = prompt_generator::generate_analysis_request(&data);
        let outcome = match self.provider.generate(request.prompt).await {
            Ok(raw_response) => {
                let result = ResponseInterpreter::interpret(&raw_response);
                if let Some(parse_error) = &result.parse_error {
                    log::warn!("⚠️ Partial interpretation for {}: {}", repo_url, parse_error);
                }

                store.update_repo(repo_id, teacher, |repo| repo.apply_analysis(&result))?;
                store.update_log(log_id, AnalysisStatus::Success, None)?;
                AnalysisOutcome::Analyzed {
                    score: result.score,
                    result,
                }
            }
            Err(e) => {
                log::error!("❌ Model call failed for {}: {}", repo_url, e);
                store.update_log(log_id, AnalysisStatus::Failed, Some(e.to_string()))?;
                AnalysisOutcome::ModelFailed { error: e.to_string() }
            }
        };

        store.save()?;
        Ok(outcome)
    }
}
