//! # locc
//!
//! A CLI tool that counts files and lines of code per language in a
//! directory tree.
//!
//! ## Overview
//!
//! locc is built on top of locclib. It asks for a directory (or takes one as
//! an argument), walks it recursively, classifies every file by extension,
//! and prints a table of languages ordered by line count.
//!
//! ## Usage
//!
//! ```bash
//! # Prompt for the directory to scan
//! locc
//!
//! # Scan a directory directly
//! locc path/to/project
//!
//! # Output as JSON
//! locc path/to/project --output json
//!
//! # Descend into symlinked directories
//! locc path/to/project --follow-links
//! ```
//!
//! Diagnostics go to stderr; set `LOCC_LOG=debug` to see files whose
//! contents could not be read.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::{style, Term};
use locclib::{render_report, scan_directory, ScanOptions};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Enter the directory path: ";

/// Environment variable holding the log filter
const LOG_ENV: &str = "LOCC_LOG";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("locc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count files and lines of code per language in a directory tree")
        .arg(Arg::new("path").help("Directory to scan (prompted for when omitted)"))
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("follow-links")
                .short('L')
                .long("follow-links")
                .action(ArgAction::SetTrue)
                .help("Descend into symlinked directories"),
        )
}

/// Install the stderr log subscriber
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Ask for the scan root on stdin. The prompt goes to stderr so stdout
/// carries nothing but the report.
fn prompt_for_root() -> anyhow::Result<PathBuf> {
    let term = Term::stderr();
    term.write_str(PROMPT)?;
    term.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read directory path")?;

    match parse_prompt_line(&line) {
        Some(path) => Ok(path),
        None => anyhow::bail!("no directory path given"),
    }
}

/// Strip the line ending only; spaces may be part of a directory name.
fn parse_prompt_line(line: &str) -> Option<PathBuf> {
    let path = line.trim_end_matches(['\r', '\n']);
    if path.is_empty() {
        return None;
    }
    Some(PathBuf::from(path))
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let root = match matches.get_one::<String>("path") {
        Some(path) => PathBuf::from(path),
        None => prompt_for_root()?,
    };
    let options = ScanOptions::new().follow_links(matches.get_flag("follow-links"));

    let result = scan_directory(&root, &options)?;

    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print!("{}", render_report(&result)),
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold().for_stderr());
            ExitCode::FAILURE
        }
    }
}
