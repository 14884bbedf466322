//! External process adapters.

mod shell_runtime;

pub use shell_runtime::ShellBotRuntime;
