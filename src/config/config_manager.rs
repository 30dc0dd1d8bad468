use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, GITHUB_TOKEN_PLACEHOLDER};
use crate::errors::{EdutrackError, EdutrackResult};
use crate::structs::ai::gemini::gemini_settings::GeminiSettings;
use crate::structs::config::config::Config;

const SUPPORTED_PROVIDERS: &[&str] = &["gemini"];

const SAMPLE_CONFIG: &str = r#"# EduTrack Configuration

[teacher]
# Owner of every assignment created from this machine
name = "teacher"

# AI Configuration
[ai]
provider = "gemini"
# gemini-2.5-pro is the most capable; gemini-2.5-flash is faster
model = "gemini-2.5-pro"
# Name of the environment variable holding the API key
api_key_env = "GEMINI_API_KEY"
base_url = "https://generativelanguage.googleapis.com/v1beta"
# temperature = 0.7
# max_output_tokens = 8192

# GitHub Configuration
[github]
# Without a token the API allows 60 requests/hour for public repos only.
# With a token: 5,000 requests/hour, private repos included.
token_env = "GITHUB_TOKEN"
base_url = "https://api.github.com"

# Storage Configuration
[storage]
# data_file = "/home/teacher/.edutrack/edutrack.json"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn load() -> EdutrackResult<Config> {
        Self::load_from(&Self::config_path())
    }

    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> EdutrackResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| EdutrackError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> EdutrackResult<PathBuf> {
        let path = Self::config_path();
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    pub fn create_sample_config_at(path: &Path) -> EdutrackResult<()> {
        if path.exists() {
            return Err(EdutrackError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: "configuration file already exists".to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.teacher.name.trim().is_empty() {
            errors.push("teacher.name must not be empty".to_string());
        }

        if !SUPPORTED_PROVIDERS.contains(&config.ai.provider.as_str()) {
            errors.push(format!(
                "Unsupported AI provider '{}' (supported: {})",
                config.ai.provider,
                SUPPORTED_PROVIDERS.join(", ")
            ));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if let Some(temperature) = config.ai.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                errors.push(format!("ai.temperature {} is outside 0.0-2.0", temperature));
            }
        }

        for (field, url) in [("ai.base_url", &config.ai.base_url), ("github.base_url", &config.github.base_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push(format!("{} is not an http(s) URL: {}", field, url));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Problems that do not stop the CLI but limit what it can do.
    pub fn environment_warnings(config: &Config, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        if Self::non_empty(lookup(&config.ai.api_key_env)).is_none() {
            warnings.push(format!(
                "{} is not set - repository analysis will fail until an API key is exported",
                config.ai.api_key_env
            ));
        }

        if Self::github_token(config, &lookup).is_none() {
            warnings.push(format!(
                "{} is not set - GitHub requests are unauthenticated (60 requests/hour, public repos only)",
                config.github.token_env
            ));
        }

        warnings
    }

    pub fn gemini_settings(config: &Config, lookup: impl Fn(&str) -> Option<String>) -> GeminiSettings {
        GeminiSettings {
            api_key: Self::non_empty(lookup(&config.ai.api_key_env)),
            model: config.ai.model.clone(),
            base_url: config.ai.base_url.clone(),
            temperature: config.ai.temperature,
            max_output_tokens: config.ai.max_output_tokens,
        }
    }

    /// The placeholder token shipped in sample env files counts as no token.
    pub fn github_token(config: &Config, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        Self::non_empty(lookup(&config.github.token_env)).filter(|token| token != GITHUB_TOKEN_PLACEHOLDER)
    }

    pub fn env_lookup(name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn non_empty(value: Option<String>) -> Option<String> {
        value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| pairs.iter().find(|(key, _)| *key == name).map(|(_, value)| value.to_string())
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("nope.toml")).unwrap();

        assert_eq!(config.ai.model, "gemini-2.5-pro");
        assert_eq!(config.ai.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.github.base_url, "https://api.github.com");
    }

    #[test]
    fn sample_config_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ConfigManager::create_sample_config_at(&path).unwrap();
        let config = ConfigManager::load_from(&path).unwrap();

        assert_eq!(config.teacher.name, "teacher");
        assert_eq!(config.ai.provider, "gemini");
        assert_eq!(config.github.token_env, "GITHUB_TOKEN");
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn sample_config_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[teacher]\nname = \"ms-frizzle\"\n").unwrap();

        let error = ConfigManager::create_sample_config_at(&path).unwrap_err();

        assert!(matches!(error, EdutrackError::ConfigurationFileError { .. }));
        assert!(fs::read_to_string(&path).unwrap().contains("ms-frizzle"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai]\nmodel = \"gemini-2.5-flash\"\n").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();

        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert_eq!(config.ai.provider, "gemini");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai\nmodel = ").unwrap();

        let error = ConfigManager::load_from(&path).unwrap_err();
        assert!(matches!(error, EdutrackError::ParseError { ref content_type, .. } if content_type == "TOML"));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = Config::default();
        config.teacher.name = " ".to_string();
        config.ai.provider = "openai".to_string();
        config.ai.temperature = Some(3.5);
        config.github.base_url = "api.github.com".to_string();

        let errors = ConfigManager::validate_config(&config).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("openai")));
        assert!(errors.iter().any(|e| e.contains("github.base_url")));
    }

    #[test]
    fn api_key_comes_from_named_variable() {
        let mut config = Config::default();
        config.ai.api_key_env = "MY_KEY".to_string();

        let settings = ConfigManager::gemini_settings(&config, lookup_from(&[("MY_KEY", " abc123 ")]));

        assert_eq!(settings.api_key.as_deref(), Some("abc123"));
        assert_eq!(settings.model, "gemini-2.5-pro");
    }

    #[test]
    fn placeholder_github_token_is_ignored() {
        let config = Config::default();

        assert_eq!(ConfigManager::github_token(&config, lookup_from(&[("GITHUB_TOKEN", "your_github_token_here")])), None);
        assert_eq!(
            ConfigManager::github_token(&config, lookup_from(&[("GITHUB_TOKEN", "ghp_real")])).as_deref(),
            Some("ghp_real")
        );
    }

    #[test]
    fn warns_about_missing_secrets() {
        let warnings = ConfigManager::environment_warnings(&Config::default(), lookup_from(&[]));

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("GEMINI_API_KEY"));
        assert!(warnings[1].contains("GITHUB_TOKEN"));
    }
}
