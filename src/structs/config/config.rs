use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::github_config::GitHubConfig;
use crate::structs::config::storage_config::StorageConfig;
use crate::structs::config::teacher_config::TeacherConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub teacher: TeacherConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}
