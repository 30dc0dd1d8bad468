use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TeacherConfig {
    #[serde(default = "ConfigHelper::default_teacher_name")]
    pub name: String,
}

impl Default for TeacherConfig {
    fn default() -> Self {
        Self {
            name: ConfigHelper::default_teacher_name(),
        }
    }
}
