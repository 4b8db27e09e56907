// src/bin/redflag.rs
//! Standalone CLI entry point. No args: auto-mode, scanning pending
//! changes if inside a repository with any, else printing usage and
//! exiting 1. `--diff`: scan the pending push diff only. `<file>`: scan a
//! single file. Findings are printed as a JSON array on stdout; exit code
//! is 0 with no findings, 1 with findings or on error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use redflag_core::detect::{scan_content, Finding};
use redflag_core::scanner::scan_changed_lines;
use redflag_core::vcs::{GitClient, VcsClient};

#[derive(Parser)]
#[command(name = "redflag", about = "Scan source files for leaked secrets")]
struct Cli {
    /// Scan only the diff about to be pushed, rather than auto-detecting.
    #[arg(long)]
    diff: bool,

    /// Scan a single file instead of the repository or its diff.
    file: Option<PathBuf>,
}

#[derive(Serialize)]
struct FindingJson {
    file: String,
    line_number: usize,
    line: String,
    pattern: String,
    detection: &'static str,
}

impl From<&Finding> for FindingJson {
    fn from(f: &Finding) -> Self {
        Self {
            file: f.path.clone(),
            line_number: f.line_number,
            line: f.line.clone(),
            pattern: f.kind.clone(),
            detection: match f.detection_method {
                redflag_core::detect::DetectionMethod::PatternMatch => "pattern",
                redflag_core::detect::DetectionMethod::VariableScan => "assignment",
                redflag_core::detect::DetectionMethod::Entropy => "entropy",
            },
        }
    }
}

fn emit(findings: &[Finding]) -> ExitCode {
    let json: Vec<FindingJson> = findings.iter().map(FindingJson::from).collect();
    match serde_json::to_string_pretty(&json) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("redflag: failed to serialize findings: {err}");
            return ExitCode::FAILURE;
        }
    }
    if findings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn scan_single_file(path: &PathBuf) -> Vec<Finding> {
    let Ok(content) = std::fs::read_to_string(path) else {
        eprintln!("redflag: could not read {}", path.display());
        return Vec::new();
    };
    scan_content(&content, &path.to_string_lossy())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(file) = &cli.file {
        return emit(&scan_single_file(file));
    }

    let vcs = GitClient::new();

    if cli.diff {
        let pending = match redflag_core::selector::list_staged_for_push(&vcs) {
            Ok(files) => files,
            Err(err) => {
                eprintln!("redflag: {err}");
                return ExitCode::FAILURE;
            }
        };
        return emit(&scan_changed_lines(&vcs, &pending));
    }

    // Auto-mode: scan pending changes if inside a repo with any; else usage + exit 1.
    let has_changes = vcs
        .diff_unstaged()
        .map(|diff| !diff.trim().is_empty())
        .unwrap_or(false);

    if !vcs.in_git_repo() || !has_changes {
        eprintln!("usage: redflag [--diff] [<file>]");
        return ExitCode::FAILURE;
    }

    let pending = match redflag_core::selector::list_staged_for_push(&vcs) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("redflag: {err}");
            return ExitCode::FAILURE;
        }
    };

    emit(&scan_changed_lines(&vcs, &pending))
}
