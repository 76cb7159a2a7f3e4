//! Printer - send rendered labels to a local printer
//!
//! This crate provides:
//! - The [`PrintBackend`] strategy trait and the host backends
//!   (PowerShell print verb on Windows, CUPS `lp` elsewhere)
//! - [`LabelPrinter`], which renders a label to a fixed file and submits it
//!
//! # Example
//!
//! ```ignore
//! use printer::LabelPrinter;
//!
//! let printer = LabelPrinter::builder().printer("Zebra_GK420d").build();
//! printer.print_label(&template, &["text:Hello", "code128:ABC123"])?;
//! ```

mod backend;
mod dispatcher;
mod shell;
mod spooler;

pub use backend::{detect_backend, PrintBackend};
pub use dispatcher::{LabelPrinter, LabelPrinterBuilder, DEFAULT_OUTPUT_PATH};
pub use shell::{shell_print_command, ShellPrintBackend};
pub use spooler::{lp_args, SpoolerPrintBackend};

use thiserror::Error;

/// Errors that can occur while printing a label
#[derive(Debug, Error)]
pub enum PrintError {
    #[error(transparent)]
    Render(#[from] template::TemplateError),

    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{backend} print failed ({status}): {stderr}")]
    Failed {
        backend: &'static str,
        status: String,
        stderr: String,
    },

    #[error("Cannot print: {0}")]
    Unsupported(String),
}

/// Result type for print operations
pub type Result<T> = std::result::Result<T, PrintError>;
