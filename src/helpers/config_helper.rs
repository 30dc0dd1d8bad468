pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_teacher_name() -> String {
        std::env::var("USER")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "teacher".to_string())
    }

    pub fn default_provider() -> String {
        "gemini".to_string()
    }

    pub fn default_model() -> String {
        "gemini-2.5-pro".to_string()
    }

    pub fn default_ai_api_key_env() -> String {
        "GEMINI_API_KEY".to_string()
    }

    pub fn default_ai_base_url() -> String {
        "https://generativelanguage.googleapis.com/v1beta".to_string()
    }

    pub fn default_github_token_env() -> String {
        "GITHUB_TOKEN".to_string()
    }

    pub fn default_github_base_url() -> String {
        "https://api.github.com".to_string()
    }

    pub fn default_user_agent() -> String {
        format!("edutrack-cli/{}", env!("CARGO_PKG_VERSION"))
    }
}
