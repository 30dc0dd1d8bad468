use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::analysis_outcome::AnalysisOutcome;
use crate::enums::commands::{AssignmentCommands, Commands, RepoCommands};
use crate::errors::{EdutrackError, EdutrackResult};
use crate::helpers::date_helper::parse_deadline;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_logger::ReportLogger;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::analytics::Analytics;
use crate::services::assignment_store::AssignmentStore;
use crate::services::github_client::GitHubClient;
use crate::services::report_generator::ReportGenerator;
use crate::services::repository_analyzer::RepositoryAnalyzer;
use crate::services::response_interpreter::ResponseInterpreter;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> EdutrackResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Dashboard => self.dashboard_command(),
            Commands::Assignment(command) => self.assignment_command(command),
            Commands::Repo(command) => self.repo_command(command),
            Commands::Analyze { repo_id } => self.analyze_command(repo_id).await,
            Commands::Analytics { assignment_id, json } => self.analytics_command(assignment_id, json),
            Commands::Report { assignment_id, output } => self.report_command(assignment_id, output),
            Commands::Interpret { file, json } => self.interpret_command(&file, json),
            Commands::Summarize { file, max_words } => self.summarize_command(&file, max_words).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> EdutrackResult<()> {
        log::info!("🚀 Initializing edutrack configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to set your teacher name and model.", path.display());
        log::info!("🔧 Run 'edutrack validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> EdutrackResult<()> {
        log::info!("🔍 Validating configuration at {}", ConfigManager::config_path().display());
        let config = ConfigManager::load()?;

        for warning in ConfigManager::environment_warnings(&config, ConfigManager::env_lookup) {
            log::warn!("⚠️ {}", warning);
        }

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("❌ {}", error);
                }
                Err(EdutrackError::config_error(
                    &format!("{} problem(s) found", errors.len()),
                    None,
                    Some("Fix the listed fields or run 'edutrack init' for a fresh sample"),
                ))
            }
        }
    }

    fn dashboard_command(&self) -> EdutrackResult<()> {
        let (config, store) = Self::open_store()?;
        let stats = Analytics::dashboard(&store, &config.teacher.name);
        ReportLogger::print_dashboard(&config.teacher.name, &stats);
        Ok(())
    }

    fn assignment_command(&self, command: AssignmentCommands) -> EdutrackResult<()> {
        let (config, mut store) = Self::open_store()?;
        let teacher = config.teacher.name.as_str();

        match command {
            AssignmentCommands::Create { title, description, deadline } => {
                let deadline = deadline.as_deref().map(parse_deadline).transpose()?;
                let assignment = store.create_assignment(teacher, &title, description.as_deref(), deadline)?;
                store.save()?;
                log::info!("✅ Created assignment #{}: {}", assignment.id, assignment.title);
            }
            AssignmentCommands::List => {
                ReportLogger::print_assignments(&store.list_assignments(teacher));
            }
            AssignmentCommands::Show { assignment_id } => {
                let assignment = store.get_assignment(assignment_id, teacher)?;
                ReportLogger::print_assignment_detail(assignment, &store.repos_for_assignment(assignment_id));
            }
            AssignmentCommands::Delete { assignment_id } => {
                let assignment = store.delete_assignment(assignment_id, teacher)?;
                store.save()?;
                log::info!("🗑️ Deleted assignment #{}: {}", assignment.id, assignment.title);
            }
        }

        Ok(())
    }

    fn repo_command(&self, command: RepoCommands) -> EdutrackResult<()> {
        let (config, mut store) = Self::open_store()?;
        let teacher = config.teacher.name.as_str();

        match command {
            RepoCommands::Add { assignment_id, student, url } => {
                if GitHubClient::parse_repo_url(&url).is_none() {
                    log::warn!("⚠️ {} does not look like a GitHub repository URL; analysis will fail", url);
                }
                let repo = store.add_repo(assignment_id, teacher, &student, &url)?;
                store.save()?;
                log::info!("✅ Added {}'s repository as #{}", repo.student_name, repo.id);
            }
            RepoCommands::BulkAdd { assignment_id, file } => {
                let text = Self::read_input(&file)?;
                let summary = store.bulk_add_repos(assignment_id, teacher, &text)?;
                store.save()?;
                log::info!("✅ Added {} repositories ({} already present)", summary.added, summary.skipped);
            }
            RepoCommands::Show { repo_id } => {
                let repo = store.get_repo(repo_id, teacher)?;
                ReportLogger::print_repo_detail(repo, &store.logs_for_repo(repo_id));
            }
        }

        Ok(())
    }

    async fn analyze_command(&self, repo_id: u64) -> EdutrackResult<()> {
        let (config, mut store) = Self::open_store()?;
        let teacher = config.teacher.name.clone();

        let token = ConfigManager::github_token(&config, ConfigManager::env_lookup);
        let github = GitHubClient::new(&config.github, token);
        if !github.is_authenticated() {
            log::warn!("⚠️ No GitHub token, requests are rate limited to 60/hour");
        }

        let provider = GeminiProvider::new(ConfigManager::gemini_settings(&config, ConfigManager::env_lookup));
        if !provider.is_configured() {
            log::warn!("⚠️ {} is not set, only GitHub data will be refreshed", config.ai.api_key_env);
        }

        let analyzer = RepositoryAnalyzer::new(Arc::new(github), Arc::new(provider));

        let mut spinner = AnimatedLogger::new(format!("🤖 Analyzing repository #{}", repo_id));
        spinner.start();
        let outcome = match analyzer.analyze(&mut store, repo_id, &teacher).await {
            Ok(outcome) => outcome,
            Err(e) => {
                spinner.error("Analysis failed").await;
                return Err(e);
            }
        };

        match &outcome {
            AnalysisOutcome::Analyzed { .. } => spinner.stop("Analysis complete").await,
            AnalysisOutcome::ModelFailed { .. } => spinner.error("AI analysis failed").await,
        }

        ReportLogger::print_outcome(store.get_repo(repo_id, &teacher)?, &outcome);
        Ok(())
    }

    fn analytics_command(&self, assignment_id: u64, json: bool) -> EdutrackResult<()> {
        let (config, store) = Self::open_store()?;
        let analytics = Analytics::assignment_analytics(&store, assignment_id, &config.teacher.name)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&analytics)?);
        } else {
            ReportLogger::print_analytics(&analytics);
        }
        Ok(())
    }

    fn report_command(&self, assignment_id: u64, output: Option<PathBuf>) -> EdutrackResult<()> {
        let (config, store) = Self::open_store()?;
        let teacher = config.teacher.name.as_str();

        let report = ReportGenerator::generate(&store, assignment_id, teacher)?;
        let path = match output {
            Some(path) => path,
            None => PathBuf::from(store.get_assignment(assignment_id, teacher)?.report_file_name()),
        };

        fs::write(&path, report)
            .map_err(|e| EdutrackError::storage_error(&path.display().to_string(), "write report", &e.to_string()))?;
        log::info!("📄 Report written to {}", path.display());
        Ok(())
    }

    fn interpret_command(&self, file: &Path, json: bool) -> EdutrackResult<()> {
        let text = Self::read_input(file)?;
        let result = ResponseInterpreter::interpret(&text);

        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            ReportLogger::print_analysis_result(&result);
        }
        Ok(())
    }

    async fn summarize_command(&self, file: &Path, max_words: usize) -> EdutrackResult<()> {
        let config = ConfigManager::load()?;
        let text = Self::read_input(file)?;
        let provider = GeminiProvider::new(ConfigManager::gemini_settings(&config, ConfigManager::env_lookup));

        let mut spinner = AnimatedLogger::new(format!("🤖 Summarizing with {}", provider.model()));
        spinner.start();
        match provider.summarize(&text, max_words).await {
            Ok(summary) => {
                spinner.stop("Summary ready").await;
                println!("{}", summary.trim());
                Ok(())
            }
            Err(e) => {
                spinner.error("Summary failed").await;
                Err(e.into())
            }
        }
    }

    fn open_store() -> EdutrackResult<(Config, AssignmentStore)> {
        let config = ConfigManager::load()?;
        let store = AssignmentStore::open(&config.storage.data_file_path())?;
        Ok((config, store))
    }

    fn read_input(path: &Path) -> EdutrackResult<String> {
        fs::read_to_string(path)
            .map_err(|e| EdutrackError::storage_error(&path.display().to_string(), "read", &e.to_string()))
    }
}
