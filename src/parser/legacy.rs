//! Legacy format bridge (`.doc`, `.rtf`) through an external `pandoc`.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Environment variable naming the pandoc executable.
pub const PANDOC_ENV: &str = "DOCDOWN_PANDOC";

const DEFAULT_PROGRAM: &str = "pandoc";

/// A pandoc executable known to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyBridge {
    program: OsString,
}

impl LegacyBridge {
    /// Look for pandoc (or `$DOCDOWN_PANDOC`) and check that it starts.
    pub fn probe() -> Option<Self> {
        let program = std::env::var_os(PANDOC_ENV).unwrap_or_else(|| DEFAULT_PROGRAM.into());
        Self::probe_program(program)
    }

    /// Check a specific executable.
    pub fn probe_program(program: impl Into<OsString>) -> Option<Self> {
        let program = program.into();
        let status = Command::new(&program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => {
                log::debug!("Legacy converter found: {}", program.to_string_lossy());
                Some(Self { program })
            }
            Ok(status) => {
                log::debug!(
                    "{} --version exited with {}",
                    program.to_string_lossy(),
                    status
                );
                None
            }
            Err(e) => {
                log::debug!("{} not runnable: {}", program.to_string_lossy(), e);
                None
            }
        }
    }

    /// Executable this bridge runs.
    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Convert a file to Markdown. The output is used as-is.
    pub fn convert(&self, input: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .arg(input)
            .args(["-t", "markdown"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Bridge(format!(
                "{} failed on {}: {}",
                self.program.to_string_lossy(),
                input.display(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
