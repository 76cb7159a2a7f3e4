//! # labelpdf
//!
//! Command-line interface for rendering and printing label templates.
//!
//! ## Usage
//!
//! ```bash
//! # Render a label
//! labelpdf render label.json data.json -o label.pdf
//!
//! # Outline the page and boxes to check a layout
//! labelpdf bounds label.json
//!
//! # Render to output.pdf and send it to a printer queue
//! labelpdf print label.json data.json --printer Zebra_GK420d
//!
//! # Check a template without rendering
//! labelpdf validate label.json
//! ```
//!
//! `data.json` is a JSON array with one tagged string per box, e.g.
//! `["text:ACME", "qr:https://example.com", "code128:ABC123"]`.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::{Path, PathBuf};

use printer::{LabelPrinter, DEFAULT_OUTPUT_PATH};
use template::{parse_data, parse_template, LabelRenderer, Template};

/// labelpdf - label templates to PDF
#[derive(Parser, Debug)]
#[command(name = "labelpdf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render data into a template
    Render {
        /// Template JSON file
        template: PathBuf,

        /// Data JSON file: an array with one entry per box
        data: PathBuf,

        /// Output PDF file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },

    /// Outline the page and every box, without content
    Bounds {
        /// Template JSON file
        template: PathBuf,

        /// Output PDF file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },

    /// Render data into a template and print the result
    Print {
        /// Template JSON file
        template: PathBuf,

        /// Data JSON file: an array with one entry per box
        data: PathBuf,

        /// Printer queue (defaults to the system default printer)
        #[arg(long, env = "LABELPDF_PRINTER")]
        printer: Option<String>,

        /// File the label is rendered to before printing
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },

    /// Check a template without rendering it
    Validate {
        /// Template JSON file
        template: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            template,
            data,
            output,
        } => {
            let template = load_template(&template)?;
            let data = load_data(&data)?;
            LabelRenderer::new(&template)
                .render(&data, &output)
                .with_context(|| format!("Failed to render {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
        Commands::Bounds { template, output } => {
            let template = load_template(&template)?;
            LabelRenderer::new(&template)
                .render_bounds(&output)
                .with_context(|| format!("Failed to render bounds to {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
        Commands::Print {
            template,
            data,
            printer,
            output,
        } => {
            let template = load_template(&template)?;
            let data = load_data(&data)?;

            let mut builder = LabelPrinter::builder().output_path(output);
            if let Some(printer) = printer {
                builder = builder.printer(printer);
            }
            let label_printer = builder.build();

            let path = label_printer
                .print_label(&template, &data)
                .context("Failed to print label")?;
            println!("Sent {} to {}", path.display(), label_printer.backend_name());
        }
        Commands::Validate { template } => {
            let parsed = load_template(&template)?;
            println!(
                "{}: ok ({} box{})",
                template.display(),
                parsed.boxes.len(),
                if parsed.boxes.len() == 1 { "" } else { "es" }
            );
        }
    }

    Ok(())
}

/// Log at warn by default, raised by each `-v`; `RUST_LOG` overrides
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn load_template(path: &Path) -> Result<Template> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))?;
    parse_template(&json).with_context(|| format!("Invalid template {}", path.display()))
}

fn load_data(path: &Path) -> Result<Vec<String>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data {}", path.display()))?;
    parse_data(&json).with_context(|| format!("Invalid data {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["labelpdf", "-vv", "render", "t.json", "d.json", "-o", "x.pdf"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Render { output, .. } => assert_eq!(output, PathBuf::from("x.pdf")),
            other => panic!("Expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_output_defaults() {
        let cli = Cli::parse_from(["labelpdf", "bounds", "t.json"]);
        match cli.command {
            Commands::Bounds { output, .. } => {
                assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT_PATH))
            }
            other => panic!("Expected bounds, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_print_with_printer() {
        let cli = Cli::parse_from(["labelpdf", "print", "t.json", "d.json", "--printer", "labels"]);
        match cli.command {
            Commands::Print { printer, .. } => assert_eq!(printer.as_deref(), Some("labels")),
            other => panic!("Expected print, got {other:?}"),
        }
    }
}
