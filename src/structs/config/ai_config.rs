use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_ai_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_ai_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            api_key_env: ConfigHelper::default_ai_api_key_env(),
            base_url: ConfigHelper::default_ai_base_url(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}
