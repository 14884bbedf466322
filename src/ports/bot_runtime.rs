//! Bot runtime port.
//!
//! Abstracts the external training process and the serving process relaunch.
//! Both are long-running, fire-and-forget shell invocations whose output the
//! orchestrator logs; neither is cancellable mid-flight from here.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the external bot runtime.
#[derive(Debug, Clone, Error)]
pub enum BotRuntimeError {
    #[error("Failed to spawn process '{command}': {reason}")]
    SpawnFailed { command: String, reason: String },

    #[error("Process '{command}' exited with status {status}")]
    ProcessFailed { command: String, status: i32 },
}

/// Port over the external dialogue engine processes.
#[async_trait]
pub trait BotRuntime: Send + Sync {
    /// Runs the training process against the previously written artifacts.
    /// Blocks until training completes; this can take minutes.
    ///
    /// # Errors
    ///
    /// - `SpawnFailed` / `ProcessFailed` on any process error
    async fn train(&self) -> Result<(), BotRuntimeError>;

    /// Relaunches the serving process so it picks up the new model.
    ///
    /// # Errors
    ///
    /// - `SpawnFailed` / `ProcessFailed` on any process error
    async fn restart(&self) -> Result<(), BotRuntimeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_runtime_is_object_safe() {
        fn _accepts_dyn(_runtime: &dyn BotRuntime) {}
    }
}
