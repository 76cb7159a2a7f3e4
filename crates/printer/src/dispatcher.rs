//! Render-then-print façade

use crate::backend::{detect_backend, PrintBackend};
use crate::Result;
use std::path::{Path, PathBuf};
use template::{LabelRenderer, Template};

/// File a label is rendered to before it is printed
pub const DEFAULT_OUTPUT_PATH: &str = "output.pdf";

/// Renders labels to a fixed file and submits them to a print backend
///
/// The backend is chosen once, when the printer is built.
pub struct LabelPrinter {
    output_path: PathBuf,
    backend: Box<dyn PrintBackend>,
}

impl LabelPrinter {
    /// Printer for the host's default queue, writing to [`DEFAULT_OUTPUT_PATH`]
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LabelPrinterBuilder {
        LabelPrinterBuilder::default()
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Name of the selected backend
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Render `data` into `template` and submit the file for printing
    ///
    /// Returns the path of the rendered file. Render errors leave the
    /// output file untouched and nothing is submitted.
    pub fn print_label<S: AsRef<str>>(&self, template: &Template, data: &[S]) -> Result<PathBuf> {
        LabelRenderer::new(template).render(data, &self.output_path)?;
        log::info!(
            "Printing {} via {}",
            self.output_path.display(),
            self.backend.name()
        );
        self.backend.submit(&self.output_path)?;
        Ok(self.output_path.clone())
    }
}

impl Default for LabelPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`LabelPrinter`]
#[derive(Default)]
pub struct LabelPrinterBuilder {
    output_path: Option<PathBuf>,
    printer: Option<String>,
    backend: Option<Box<dyn PrintBackend>>,
}

impl LabelPrinterBuilder {
    /// File to render into (default [`DEFAULT_OUTPUT_PATH`])
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Printer queue for the detected backend
    pub fn printer(mut self, printer: impl Into<String>) -> Self {
        self.printer = Some(printer.into());
        self
    }

    /// Use `backend` instead of detecting one from the host OS
    pub fn backend(mut self, backend: impl PrintBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    pub fn build(self) -> LabelPrinter {
        let printer = self.printer;
        LabelPrinter {
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            backend: self.backend.unwrap_or_else(|| detect_backend(printer)),
        }
    }
}
