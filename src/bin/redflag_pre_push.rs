// src/bin/redflag_pre_push.rs
//! Pre-push hook entry point. Scans the files about to be pushed,
//! and if findings exist, asks the validation adapter to classify them.
//! A `proceed=false` verdict aborts the push (exit 1); a `proceed=true,
//! reviewed` verdict prints the justification so the calling shell can
//! fold it into the upcoming commit message. Either way the findings and
//! the decision are serialized to the handoff file for the post-commit
//! hook to pick up.

use std::io::{self, Write};
use std::process::ExitCode;

use redflag_core::config::ScanConfig;
use redflag_core::detect::Finding;
use redflag_core::prompt::{Classification, ValidationDecision, ValidationPrompt};
use redflag_core::scanner::scan_changed_lines;
use redflag_core::selector::list_staged_for_push;
use redflag_core::vcs::{GitClient, VcsClient};
use serde::Serialize;

const HANDOFF_FILE_NAME: &str = ".redflag_push_metadata.json";

#[derive(Serialize)]
struct Handoff<'a> {
    secrets_found: &'a [Finding],
    validation_results: &'a ValidationDecision,
}

/// Reads a yes/no-then-justification prompt from stdin. This is hook-
/// layer glue, not core behavior -- the core only defines the
/// `ValidationPrompt` contract.
struct InteractivePrompt;

impl ValidationPrompt for InteractivePrompt {
    fn classify(&self, findings: &[Finding]) -> ValidationDecision {
        println!("redflag: {} potential secret(s) found in files to be pushed:", findings.len());
        for group in redflag_core::prompt::group_by_kind(findings) {
            println!("  {} ({} finding(s))", group.0, group.1.len());
            for f in &group.1 {
                println!("    {}:{}", f.path, f.line_number);
            }
        }

        print!("Proceed with push? Mark as [r]eviewed, [f]alse positive, or [a]bort: ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return ValidationDecision::abort();
        }

        match answer.trim().to_lowercase().as_str() {
            "r" | "reviewed" => {
                print!("Justification: ");
                let _ = io::stdout().flush();
                let mut justification = String::new();
                let _ = io::stdin().read_line(&mut justification);
                ValidationDecision::reviewed(justification.trim())
            }
            "f" | "false_positive" | "false-positive" => ValidationDecision::false_positive(),
            _ => ValidationDecision::abort(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let vcs = GitClient::new();
    if !vcs.in_git_repo() {
        eprintln!("redflag-pre-push: not inside a git repository");
        return ExitCode::FAILURE;
    }

    let config = ScanConfig::load();
    if !config.should_scan_diff() {
        return ExitCode::SUCCESS;
    }

    let pending = match list_staged_for_push(&vcs) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("redflag-pre-push: {err}");
            return ExitCode::FAILURE;
        }
    };

    let findings = scan_changed_lines(&vcs, &pending);

    let decision = if findings.is_empty() {
        ValidationDecision::false_positive()
    } else {
        InteractivePrompt.classify(&findings)
    };

    let handoff_path = vcs.hooks_dir().join(HANDOFF_FILE_NAME);
    let handoff = Handoff {
        secrets_found: &findings,
        validation_results: &decision,
    };
    if let Ok(json) = serde_json::to_string_pretty(&handoff) {
        if let Some(parent) = handoff_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = std::fs::write(&handoff_path, json) {
            eprintln!("redflag-pre-push: could not write handoff file: {err}");
        }
    }

    if decision.proceed {
        if decision.classification == Classification::Reviewed {
            if let Some(justification) = &decision.justification {
                println!("redflag-reviewed: {justification}");
            }
        }
        ExitCode::SUCCESS
    } else {
        eprintln!("redflag-pre-push: push aborted by validation decision");
        ExitCode::FAILURE
    }
}
