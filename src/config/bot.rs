//! Bot runtime configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Configuration of the external dialogue engine processes
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Template directory holding the compiled artifacts and model output
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Shell command that trains a new model from the artifacts
    #[serde(default = "default_train_command")]
    pub train_command: String,

    /// Shell command that relaunches the serving process
    #[serde(default = "default_serve_command")]
    pub serve_command: String,
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("./chatbot-template")
}

fn default_train_command() -> String {
    "rasa train --augmentation 0".to_string()
}

fn default_serve_command() -> String {
    "rasa run -m models --enable-api".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            train_command: default_train_command(),
            serve_command: default_serve_command(),
        }
    }
}

impl BotConfig {
    /// Validate bot configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.template_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyTemplateDir);
        }
        if self.train_command.trim().is_empty() || self.serve_command.trim().is_empty() {
            return Err(ValidationError::EmptyCommand);
        }
        Ok(())
    }
}
