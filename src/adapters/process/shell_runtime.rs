//! Shell-based bot runtime.
//!
//! Runs the dialogue engine's training command in the template directory and
//! relaunches the serving process. Output of both processes is logged; the
//! serving relaunch is fire-and-forget.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::info;

use crate::ports::{BotRuntime, BotRuntimeError};

/// Bot runtime driving external shell processes.
#[derive(Debug, Clone)]
pub struct ShellBotRuntime {
    template_dir: PathBuf,
    train_command: String,
    serve_command: String,
}

impl ShellBotRuntime {
    /// Creates a runtime running commands inside the template directory.
    pub fn new<P: AsRef<Path>>(
        template_dir: P,
        train_command: impl Into<String>,
        serve_command: impl Into<String>,
    ) -> Self {
        Self {
            template_dir: template_dir.as_ref().to_path_buf(),
            train_command: train_command.into(),
            serve_command: serve_command.into(),
        }
    }

    fn shell(&self, command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command).current_dir(&self.template_dir);
        cmd
    }
}

#[async_trait]
impl BotRuntime for ShellBotRuntime {
    async fn train(&self) -> Result<(), BotRuntimeError> {
        info!(command = %self.train_command, "starting bot training");
        let output = self
            .shell(&self.train_command)
            .output()
            .await
            .map_err(|e| BotRuntimeError::SpawnFailed {
                command: self.train_command.clone(),
                reason: e.to_string(),
            })?;

        info!(
            stdout = %String::from_utf8_lossy(&output.stdout),
            stderr = %String::from_utf8_lossy(&output.stderr),
            "bot training finished"
        );

        if !output.status.success() {
            return Err(BotRuntimeError::ProcessFailed {
                command: self.train_command.clone(),
                status: output.status.code().unwrap_or(-1),
            });
        }
        Ok(())
    }

    async fn restart(&self) -> Result<(), BotRuntimeError> {
        info!(command = %self.serve_command, "relaunching serving process");
        // Fire-and-forget: the serving process outlives this call.
        self.shell(&self.serve_command)
            .spawn()
            .map_err(|e| BotRuntimeError::SpawnFailed {
                command: self.serve_command.clone(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
