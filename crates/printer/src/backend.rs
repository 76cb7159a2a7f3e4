//! Print backend trait and host detection

use crate::shell::ShellPrintBackend;
use crate::spooler::SpoolerPrintBackend;
use crate::{PrintError, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// A way of handing a finished PDF to the host's printing system
pub trait PrintBackend {
    /// Short name for logs and errors
    fn name(&self) -> &'static str;

    /// Submit `file` for printing; returns once the job is handed off
    fn submit(&self, file: &Path) -> Result<()>;
}

/// Pick the backend for the host OS
///
/// `printer` names a queue; `None` uses the system default printer.
pub fn detect_backend(printer: Option<String>) -> Box<dyn PrintBackend> {
    if cfg!(windows) {
        Box::new(ShellPrintBackend::new(printer))
    } else {
        Box::new(SpoolerPrintBackend::new(printer))
    }
}

/// Run `program` to completion, failing on a non-zero exit
pub(crate) fn run_command<I, S>(backend: &'static str, program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    log::debug!("Running {command:?}");

    let output = command.output().map_err(|source| PrintError::Spawn {
        command: program.to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(PrintError::Failed {
            backend,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
