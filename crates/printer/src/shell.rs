//! Windows shell "print" verb backend

use crate::backend::{run_command, PrintBackend};
use crate::{PrintError, Result};
use std::path::Path;

/// Prints through the file's registered shell handler via PowerShell
///
/// Without a printer the `Print` verb sends the file to the default
/// printer; with one, the `PrintTo` verb targets it by name.
///
/// Submission is fire-and-forget. `Start-Process -Verb Print` returns once
/// the handler process is launched, not when it has accepted the job, so
/// only a failure to start PowerShell or the handler is reported. A job the
/// handler later drops or rejects still counts as submitted.
#[derive(Debug, Clone, Default)]
pub struct ShellPrintBackend {
    printer: Option<String>,
}

impl ShellPrintBackend {
    pub fn new(printer: Option<String>) -> Self {
        Self { printer }
    }
}

impl PrintBackend for ShellPrintBackend {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn submit(&self, file: &Path) -> Result<()> {
        let file = if file.is_absolute() {
            file.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| PrintError::Unsupported(e.to_string()))?
                .join(file)
        };
        let path = file.to_str().ok_or_else(|| {
            PrintError::Unsupported(format!("path is not valid UTF-8: {}", file.display()))
        })?;

        log::info!("Sending {path} to the shell print verb");
        let script = shell_print_command(path, self.printer.as_deref());
        run_command(
            self.name(),
            "powershell",
            ["-NoProfile", "-NonInteractive", "-Command", script.as_str()],
        )
    }
}

/// PowerShell command invoking the print verb on `path`
pub fn shell_print_command(path: &str, printer: Option<&str>) -> String {
    match printer {
        None => format!("Start-Process -FilePath {} -Verb Print", quote(path)),
        Some(printer) => format!(
            "Start-Process -FilePath {} -Verb PrintTo -ArgumentList {}",
            quote(path),
            quote(&format!("\"{printer}\""))
        ),
    }
}

/// Single-quoted PowerShell string literal
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
