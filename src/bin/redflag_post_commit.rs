// src/bin/redflag_post_commit.rs
//! Post-commit hook entry point. Scans the full repository, merges
//! in whatever the pre-push hook handed off (if anything), renders the
//! consolidated HTML report, and opens it in the default browser.
//! Consumes and deletes the handoff file written by the pre-push hook.

use std::path::PathBuf;
use std::process::{Command, ExitCode};

use redflag_core::config::ScanConfig;
use redflag_core::detect::Finding;
use redflag_core::prompt::ValidationDecision;
use redflag_core::reporting::render_report;
use redflag_core::scanner::{find_disallowed_files, scan_files};
use redflag_core::selector::list_repository;
use redflag_core::vcs::{GitClient, VcsClient};
use serde::Deserialize;

const HANDOFF_FILE_NAME: &str = ".redflag_push_metadata.json";
const REPORT_FILE_NAME: &str = "redflag_report.html";

#[derive(Deserialize, Default)]
struct Handoff {
    #[serde(default)]
    secrets_found: Vec<Finding>,
    #[allow(dead_code)]
    #[serde(default)]
    validation_results: Option<ValidationDecision>,
}

fn take_handoff(path: &PathBuf) -> Vec<Finding> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    let handoff: Handoff = serde_json::from_str(&content).unwrap_or_default();
    let _ = std::fs::remove_file(path);
    handoff.secrets_found
}

fn open_in_browser(path: &PathBuf) {
    let path = path.to_string_lossy().to_string();
    let result = if cfg!(target_os = "macos") {
        Command::new("open").arg(&path).status()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", "", &path]).status()
    } else {
        Command::new("xdg-open").arg(&path).status()
    };
    if let Err(err) = result {
        eprintln!("redflag-post-commit: could not open report in browser: {err}");
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let vcs = GitClient::new();
    if !vcs.in_git_repo() {
        eprintln!("redflag-post-commit: not inside a git repository");
        return ExitCode::FAILURE;
    }

    let config = ScanConfig::load();
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let (repo_findings, disallowed_files) = if config.should_scan_repo() {
        let repo_files = list_repository(&vcs, &root);
        let findings = scan_files(&vcs, &repo_files, true);
        let disallowed = find_disallowed_files(&repo_files);
        (findings, disallowed)
    } else {
        (Vec::new(), Vec::new())
    };

    let handoff_path = vcs.hooks_dir().join(HANDOFF_FILE_NAME);
    let diff_findings = take_handoff(&handoff_path);

    let metadata = vcs.metadata();
    let output_path = PathBuf::from(REPORT_FILE_NAME);

    if !render_report(&diff_findings, &repo_findings, &disallowed_files, &metadata, None, &output_path) {
        eprintln!("redflag-post-commit: failed to render report");
        return ExitCode::FAILURE;
    }

    println!("redflag: report written to {}", output_path.display());
    open_in_browser(&output_path);

    if diff_findings.is_empty() && repo_findings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
