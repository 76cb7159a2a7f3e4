//! CUPS spooler backend (`lp`)

use crate::backend::{run_command, PrintBackend};
use crate::Result;
use std::ffi::OsString;
use std::path::Path;

/// Submits files with the CUPS `lp` command
#[derive(Debug, Clone)]
pub struct SpoolerPrintBackend {
    /// Destination queue; `None` uses the default printer
    queue: Option<String>,
    program: String,
}

impl SpoolerPrintBackend {
    pub fn new(queue: Option<String>) -> Self {
        Self {
            queue,
            program: "lp".to_string(),
        }
    }

    /// Use a different submit program with `lp`-compatible arguments
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    pub fn queue(&self) -> Option<&str> {
        self.queue.as_deref()
    }
}

impl Default for SpoolerPrintBackend {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PrintBackend for SpoolerPrintBackend {
    fn name(&self) -> &'static str {
        "lp"
    }

    fn submit(&self, file: &Path) -> Result<()> {
        log::info!(
            "Submitting {} to {}",
            file.display(),
            self.queue.as_deref().unwrap_or("the default printer")
        );
        run_command(self.name(), &self.program, lp_args(self.queue.as_deref(), file))
    }
}

/// Arguments for `lp`: an optional `-d <queue>` followed by the file
pub fn lp_args(queue: Option<&str>, file: &Path) -> Vec<OsString> {
    let mut args = Vec::with_capacity(3);
    if let Some(queue) = queue {
        args.push(OsString::from("-d"));
        args.push(OsString::from(queue));
    }
    args.push(file.as_os_str().to_os_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrintError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lp_args_default_queue() {
        let args = lp_args(None, Path::new("output.pdf"));
        assert_eq!(args, vec![OsString::from("output.pdf")]);
    }

    #[test]
    fn test_lp_args_named_queue() {
        let args = lp_args(Some("Zebra_GK420d"), Path::new("/tmp/output.pdf"));
        assert_eq!(
            args,
            vec![
                OsString::from("-d"),
                OsString::from("Zebra_GK420d"),
                OsString::from("/tmp/output.pdf"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_submit_reports_failure() {
        let backend = SpoolerPrintBackend::new(Some("labels".to_string())).with_program("false");
        let result = backend.submit(Path::new("output.pdf"));
        assert!(matches!(result, Err(PrintError::Failed { backend: "lp", .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_submit_success() {
        let backend = SpoolerPrintBackend::default().with_program("true");
        assert!(backend.submit(Path::new("output.pdf")).is_ok());
    }
}
