//! Command-line interface for clipcat.
//!
//! Collects the text files under the given paths into one annotated buffer and
//! copies it to the clipboard, then lists the files that were included.

use clap::Parser;
#[cfg(feature = "clipboard")]
use clipcat::ClipboardSink;
use clipcat::output::{ReportFormat, format_report};
use clipcat::{
    ClipcatBuilder, ClipcatError, ClipcatOptions, Sink, StdoutSink, TextDetection, clipcat,
};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// clipcat — copy the text files under some paths to the clipboard
#[derive(Parser)]
#[command(name = "clipcat", version, about, long_about = None)]
struct Cli {
    /// Files or directories to collect
    paths: Vec<PathBuf>,

    /// Comma-separated substrings; paths containing any of them are skipped
    #[arg(short, long, env = "CLIPCAT_EXCLUDE", value_name = "LIST")]
    exclude: Option<String>,

    /// Glob ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore_patterns: Vec<String>,

    /// Text detection strategy
    #[arg(long, default_value = "sniff", value_parser = parse_text_detection)]
    detection: TextDetection,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Honour .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Keep filesystem enumeration order instead of sorting by name
    #[arg(long)]
    unsorted: bool,

    /// Write the buffer to standard output instead of the clipboard
    #[arg(long)]
    stdout: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Indent the JSON report
    #[arg(short, long)]
    pretty: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse string into TextDetection enum.
fn parse_text_detection(s: &str) -> Result<TextDetection, String> {
    match s {
        "sniff" => Ok(TextDetection::Sniff),
        "inspect" => Ok(TextDetection::Inspect),
        "none" => Ok(TextDetection::None),
        _ => Err(format!("invalid text detection method: {}", s)),
    }
}

impl Cli {
    fn to_options(&self) -> ClipcatOptions {
        let mut builder = ClipcatBuilder::new(self.paths.iter().cloned())
            .ignore_patterns(self.ignore_patterns.clone())
            .text_detection(self.detection)
            .respect_gitignore(self.gitignore)
            .include_hidden(!self.no_hidden)
            .follow_links(self.follow_links)
            .sort_entries(!self.unsorted);

        if let Some(exclude) = &self.exclude {
            builder = builder.exclude_list(exclude);
        }

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        builder.build()
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("CLIPCAT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("clipcat={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "clipboard")]
fn clipboard_sink() -> Result<Box<dyn Sink>, ClipcatError> {
    Ok(Box::new(ClipboardSink))
}

#[cfg(not(feature = "clipboard"))]
fn clipboard_sink() -> Result<Box<dyn Sink>, ClipcatError> {
    Err(ClipcatError::Clipboard(
        "built without clipboard support; use --stdout".to_string(),
    ))
}

fn sink_for(cli: &Cli) -> Result<Box<dyn Sink>, ClipcatError> {
    if cli.stdout {
        Ok(Box::new(StdoutSink))
    } else {
        clipboard_sink()
    }
}

fn run(cli: &Cli) -> Result<(), ClipcatError> {
    let result = clipcat(cli.to_options())?;
    let mut sink = sink_for(cli)?;
    sink.deliver(&result.buffer)?;

    if cli.stdout {
        return Ok(());
    }
    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    let report = format_report(&result.report(), format, cli.pretty)?;
    print!("{}", report);
    if format == ReportFormat::Json {
        println!();
    }
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            exit(code);
        }
    };
    init_logging(cli.verbose);

    if cli.paths.is_empty() {
        eprintln!("Please provide file or directory names as command-line arguments.");
        exit(1);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
