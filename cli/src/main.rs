//! docdown CLI - document to Markdown conversion tool

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docdown::convert::{batch_inputs, BatchOutcome};
use docdown::{Capabilities, ConvertOptions, Docdown, ExtractMethod, PdfLineMode};

#[derive(Parser)]
#[command(name = "docdown")]
#[command(author = "iyulab")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(
    about = "Convert DOCX, HTML, text and PDF documents to Markdown",
    long_about = None
)]
struct Cli {
    /// Input file (shorthand for `convert` or `pdf`, chosen by extension)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Classify PDF lines with the plain-text rules
    #[arg(long, global = true)]
    plain_lines: bool,

    /// Do not prepend the title and provenance header
    #[arg(long, global = true)]
    no_header: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document (DOCX, DOC, HTML, TXT, RTF) to Markdown
    Convert {
        /// Input file, or directory with --batch
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file, or output directory with --batch
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Convert every supported file in the input directory
        #[arg(long)]
        batch: bool,
    },

    /// Convert a PDF to Markdown
    Pdf {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to <FILE stem>.md)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Extraction strategy to try first
        #[arg(long, value_enum, default_value = "layout", env = "DOCDOWN_PDF_METHOD")]
        method: MethodArg,
    },

    /// Show which format bridges are available
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    /// Layout-aware text extraction (falls back to stream)
    Layout,
    /// Content stream text (falls back to layout)
    Stream,
}

impl From<MethodArg> for ExtractMethod {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Layout => ExtractMethod::Layout,
            MethodArg::Stream => ExtractMethod::Stream,
        }
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ConvertOptions::new()
        .with_header(!cli.no_header)
        .with_pdf_line_mode(if cli.plain_lines {
            PdfLineMode::Plain
        } else {
            PdfLineMode::Pdf
        });

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            batch,
        }) => {
            if batch {
                cmd_batch(&input, output.as_deref(), options)
            } else {
                cmd_convert(&input, output.as_deref(), options)
            }
        }
        Some(Commands::Pdf {
            input,
            output,
            method,
        }) => cmd_pdf(&input, output.as_deref(), method.into(), options),
        Some(Commands::Info { json }) => cmd_info(json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: pick the converter from the extension
            if let Some(input) = cli.input {
                cmd_auto(&input, cli.output.as_deref(), options)
            } else {
                println!("{}", "Usage: docdown <FILE> [OUTPUT]".yellow());
                println!("       docdown --help for more information");
                Ok(())
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn cmd_convert(input: &Path, output: Option<&Path>, options: ConvertOptions) -> CliResult {
    let converter = Docdown::new().with_options(options).document_converter();
    let written = converter.convert(input, output)?;
    println!("{} {}", "Saved to".green(), written.display());
    Ok(())
}

fn cmd_pdf(
    input: &Path,
    output: Option<&Path>,
    method: ExtractMethod,
    options: ConvertOptions,
) -> CliResult {
    let converter = Docdown::new()
        .with_options(options.with_pdf_method(method))
        .pdf_converter();
    let written = converter.convert(input, output, method)?;
    println!("{} {}", "Saved to".green(), written.display());
    Ok(())
}

fn cmd_auto(input: &Path, output: Option<&Path>, options: ConvertOptions) -> CliResult {
    let written = Docdown::new().with_options(options).convert(input, output)?;
    println!("{} {}", "Saved to".green(), written.display());
    Ok(())
}

fn cmd_batch(dir: &Path, out_dir: Option<&Path>, options: ConvertOptions) -> CliResult {
    let total = batch_inputs(dir)?.len();
    let converter = Docdown::new().with_options(options).document_converter();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut failed = Vec::new();
    let converted = converter.batch_convert_with(dir, out_dir, |file, outcome| {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let BatchOutcome::Failed(e) = outcome {
            failed.push(format!("{}: {}", name, e));
        }
        pb.set_message(name);
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    println!(
        "{} {} of {} file(s)",
        "Converted".green().bold(),
        converted.len(),
        total
    );
    for failure in &failed {
        println!("  {} {}", "✗".red(), failure);
    }

    Ok(())
}

fn cmd_info(json: bool) -> CliResult {
    let capabilities = Capabilities::detect();

    if json {
        let report: serde_json::Map<String, serde_json::Value> = capabilities
            .report()
            .into_iter()
            .map(|(c, available)| (c.name().to_string(), serde_json::Value::Bool(available)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Format Bridges".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (capability, available) in capabilities.report() {
        if available {
            println!("  {} {}", "✓".green(), capability);
        } else {
            println!("  {} {} ({})", "✗".red(), capability, capability.hint().dimmed());
        }
    }

    println!();
    println!("{}", "Supported Extensions".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("  {}", docdown::detect::supported_list());
    println!("  .pdf (docdown pdf <FILE>)");

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docdown".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document to Markdown conversion tool");
    println!();
    println!("License: MIT");
}
