//! Hand-off of a composed `mailto:` URI to the user's mail client.
//!
//! There is no response channel: once the opener starts without error the
//! hand-off counts as delivered.

use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("failed to launch mail opener '{program}': {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("mail opener '{program}' exited with {status}")]
    Exited {
        program: &'static str,
        status: ExitStatus,
    },

    #[error("mail hand-off unavailable: {0}")]
    Unavailable(String),
}

/// Something that can take a `mailto:` URI off our hands.
pub trait MailHandoff {
    fn open(&self, uri: &str) -> Result<(), HandoffError>;
}

impl<F> MailHandoff for F
where
    F: Fn(&str) -> Result<(), HandoffError>,
{
    fn open(&self, uri: &str) -> Result<(), HandoffError> {
        self(uri)
    }
}

/// Opens URIs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMailClient;

impl SystemMailClient {
    #[cfg(target_os = "macos")]
    fn command(uri: &str) -> (&'static str, Command) {
        let mut cmd = Command::new("open");
        cmd.arg(uri);
        ("open", cmd)
    }

    #[cfg(target_os = "windows")]
    fn command(uri: &str) -> (&'static str, Command) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", uri]);
        ("cmd", cmd)
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn command(uri: &str) -> (&'static str, Command) {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(uri);
        ("xdg-open", cmd)
    }
}

impl MailHandoff for SystemMailClient {
    fn open(&self, uri: &str) -> Result<(), HandoffError> {
        let (program, mut cmd) = Self::command(uri);
        debug!(program, "Opening mail client");

        let status = cmd
            .status()
            .map_err(|source| HandoffError::Launch { program, source })?;

        if !status.success() {
            return Err(HandoffError::Exited { program, status });
        }

        Ok(())
    }
}
