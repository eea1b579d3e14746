//! External process execution boundary.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Captured result of one finished external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the process exited with status zero. Exit status is the
    /// sole success signal; output content is never inspected for it.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Boundary over spawning an external command and capturing its output.
///
/// The orchestrators await exactly one call per invocation. A non-zero
/// exit status is not an error at this layer; it comes back through
/// [`CommandOutput::success`].
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` to completion, capturing both output
    /// streams as text.
    ///
    /// # Errors
    ///
    /// [`Error::ToolNotFound`] when the executable cannot be located,
    /// [`Error::Io`] for any other spawn failure.
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Production runner backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        log::debug!("running {program} {args:?}");
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::ToolNotFound {
                        program: program.to_string(),
                    }
                } else {
                    Error::Io(e)
                }
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
