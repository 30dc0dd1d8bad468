use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    #[serde(default = "ConfigHelper::default_github_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_github_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token_env: ConfigHelper::default_github_token_env(),
            base_url: ConfigHelper::default_github_base_url(),
            user_agent: ConfigHelper::default_user_agent(),
        }
    }
}
