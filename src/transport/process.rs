//! Process Transport
//!
//! Spawns the external cache executable, pipes the payload into its stdin and
//! collects stdout and stderr.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{BufferError, Result};
use crate::transport::{Response, Transport};

/// Transport backed by one child process per send.
#[derive(Debug, Clone)]
pub struct ProcessTransport {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessTransport {
    /// Creates a transport for `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Adds an argument passed on every launch.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Transport for ProcessTransport {
    async fn send(&mut self, payload: &[u8]) -> Result<Response> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                warn!("Failed to launch {}: {}", self.program.display(), e);
                BufferError::Io(e)
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| BufferError::Transport("child stdin unavailable".to_string()))?;
        match stdin.write_all(payload).await {
            Ok(()) => {}
            // child exited or closed stdin early; its output is still the response
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("{} closed stdin before reading the payload", self.program.display());
            }
            Err(e) => return Err(e.into()),
        }
        // closing stdin signals end of input
        drop(stdin);

        let output = child.wait_with_output().await?;
        debug!(
            "{} exited with {:?} after {} byte payload",
            self.program.display(),
            output.status.code(),
            payload.len()
        );

        Ok(Response {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
