//! Poliscan CLI — analyze an insurance policy document and write the
//! report.
//!
//! Usage:
//!   poliscan [DOCUMENT] [--output path] [--json]
//!
//! With no DOCUMENT argument the path is asked for interactively, as is
//! the password for an encrypted PDF.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use poliscan::config;
use poliscan::pipeline::extraction::{DocumentExtractor, PasswordPrompt};
use poliscan::report;
use poliscan::PolicyAnalyzer;

#[derive(Parser)]
#[command(
    name = "poliscan",
    version,
    about = "Analyze an insurance policy document: pros, cons, and the fine print"
)]
struct Cli {
    /// Path to the insurance document (prompted for when omitted)
    document: Option<PathBuf>,

    /// Where to write the report (default: <stem>_analysis.txt)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Emit the full analysis as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

/// Interactive password prompt on stdin.
struct StdinPasswordPrompt;

impl PasswordPrompt for StdinPasswordPrompt {
    fn request_password(&self, path: &Path) -> Option<String> {
        println!(
            "{} appears to be password-protected.",
            path.file_name().and_then(|n| n.to_str()).unwrap_or("The document")
        );
        print!("Enter PDF password (press Enter if none): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let password = line.trim_end_matches(['\r', '\n']).to_string();
        if password.is_empty() {
            None
        } else {
            Some(password)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> io::Result<()> {
    println!("==== Insurance Document Analyzer ====");

    let document = match cli.document {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    if !document.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such document: {}", document.display()),
        ));
    }

    let extractor =
        DocumentExtractor::with_defaults().with_password_prompt(Box::new(StdinPasswordPrompt));
    let analyzer = PolicyAnalyzer::with_extractor(extractor);
    let results = analyzer.analyze(&document);

    let output = cli
        .output
        .unwrap_or_else(|| config::analysis_output_path(&document));

    if cli.json {
        let json = serde_json::to_string_pretty(&results)?;
        std::fs::write(&output, json)?;
    } else {
        report::write_report(&results, &output)?;
    }

    println!("\nAnalysis complete! Results saved to {}", output.display());
    print_quick_summary(&results);

    Ok(())
}

fn prompt_for_path() -> io::Result<PathBuf> {
    print!("Enter the path to your insurance document: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

/// Top three of each triage bucket, printed to the terminal.
fn print_quick_summary(results: &poliscan::DocumentAnalysis) {
    println!("\n=== Quick Summary ===");

    println!("\nPROS:");
    for item in results.summary.pros.iter().take(3) {
        println!("\u{2022} {item}");
    }

    println!("\nCONS:");
    for item in results.summary.cons.iter().take(3) {
        println!("\u{2022} {item}");
    }

    println!("\nHIDDEN DETAILS:");
    for item in results.summary.hidden_details.iter().take(3) {
        println!("\u{2022} {item}");
    }
}
