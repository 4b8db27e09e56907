// src/vcs.rs
//! A small capability trait over version control so the rest of the
//! engine never shells out to `git` directly, plus a real subprocess
//! implementation.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RedflagError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitMetadata {
    pub repo_name: String,
    pub branch: String,
    pub commit_hash: String,
    pub author: String,
    pub timestamp: String,
}

impl Default for GitMetadata {
    fn default() -> Self {
        Self {
            repo_name: "Unknown Repo".to_string(),
            branch: "Unknown Branch".to_string(),
            commit_hash: "Unknown Commit".to_string(),
            author: "Unknown Author".to_string(),
            timestamp: "Unknown".to_string(),
        }
    }
}

/// Capability interface over version control, so tests can swap in fixture
/// data instead of shelling out to a real `git` repository.
pub trait VcsClient {
    fn list_tracked(&self) -> Result<Vec<PathBuf>>;
    fn list_pending_push(&self) -> Result<Vec<PathBuf>>;
    fn diff_unstaged(&self) -> Result<String>;
    /// Reads a file's staged (index) content if tracked, else falls back to
    /// the working-tree copy. UTF-8 first, Latin-1 on decode failure; a NUL
    /// byte anywhere in the content marks it binary and is rejected rather
    /// than decoded.
    fn show_index(&self, path: &Path) -> Result<String>;
    fn metadata(&self) -> GitMetadata;
}

pub struct GitClient {
    root: Option<PathBuf>,
}

impl GitClient {
    #[must_use]
    pub fn new() -> Self {
        Self { root: None }
    }

    #[must_use]
    pub fn at(root: PathBuf) -> Self {
        Self { root: Some(root) }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        if let Some(root) = &self.root {
            cmd.current_dir(root);
        }
        cmd.args(args);
        cmd
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.command(args).output()?;
        if !output.status.success() {
            return Err(RedflagError::Vcs(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    #[must_use]
    pub fn in_git_repo(&self) -> bool {
        self.command(&["rev-parse", "--is-inside-work-tree"])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Directory hook scripts live in (`.git/hooks` by default), used as
    /// the well-known location for the pre-push/post-commit handoff file.
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        self.run(&["rev-parse", "--git-path", "hooks"])
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".git/hooks"))
    }
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsClient for GitClient {
    fn list_tracked(&self) -> Result<Vec<PathBuf>> {
        if !self.in_git_repo() {
            return Err(RedflagError::NotInGitRepo);
        }

        let out = self.command(&["ls-files", "-z", "--exclude-standard"]).output()?;
        if !out.status.success() {
            return Err(RedflagError::Vcs(format!(
                "git ls-files failed: {}",
                out.status
            )));
        }

        Ok(out
            .stdout
            .split(|&b| b == 0)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| PathBuf::from(String::from_utf8_lossy(chunk).as_ref()))
            .collect())
    }

    fn list_pending_push(&self) -> Result<Vec<PathBuf>> {
        if !self.in_git_repo() {
            return Err(RedflagError::NotInGitRepo);
        }

        let upstream = self.run(&["diff", "--name-only", "@{u}.."]);
        let names = match upstream {
            Ok(out) if !out.trim().is_empty() => out,
            _ => {
                debug!("no upstream found, falling back to all tracked files");
                self.run(&["ls-files"])?
            }
        };

        Ok(names
            .lines()
            .filter(|l| !l.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    fn diff_unstaged(&self) -> Result<String> {
        self.run(&["diff", "--unified=0", "--no-color"])
    }

    fn show_index(&self, path: &Path) -> Result<String> {
        let spec = format!(":0:{}", path.to_string_lossy());
        let output = self.command(&["show", &spec]).output()?;

        if output.status.success() {
            return decode_bytes(path, &output.stdout);
        }

        debug!(
            "{} not in git index, reading from working tree",
            path.display()
        );
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        let bytes = std::fs::read(root.join(path))?;
        decode_bytes(path, &bytes)
    }

    fn metadata(&self) -> GitMetadata {
        let repo_name = self
            .root
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_else(|| "Unknown Repo".to_string());

        let branch = self
            .run(&["rev-parse", "--abbrev-ref", "HEAD"])
            .unwrap_or_else(|_| "Unknown Branch".to_string());
        let commit_hash = self
            .run(&["rev-parse", "HEAD"])
            .unwrap_or_else(|_| "Unknown Commit".to_string());
        let author = self
            .run(&["log", "-1", "--pretty=format:%an"])
            .unwrap_or_else(|_| "Unknown Author".to_string());
        let timestamp = self
            .run(&[
                "log",
                "-1",
                "--pretty=format:%cd",
                "--date=format:%Y-%m-%d %I:%M:%S %p",
            ])
            .unwrap_or_else(|_| "Unknown".to_string());

        GitMetadata {
            repo_name,
            branch,
            commit_hash,
            author,
            timestamp,
        }
    }
}

/// A NUL byte anywhere in the content marks it binary; no text encoding
/// legitimately embeds one, and it's the same heuristic `git` itself uses
/// to decide whether to diff a file as text.
fn is_binary(bytes: &[u8]) -> bool {
    bytes.contains(&0)
}

fn decode_bytes(path: &Path, bytes: &[u8]) -> Result<String> {
    if is_binary(bytes) {
        return Err(RedflagError::Binary(path.to_path_buf()));
    }
    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => Ok(bytes.iter().map(|&b| b as char).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metadata_reports_unknown_fields() {
        let meta = GitMetadata::default();
        assert_eq!(meta.branch, "Unknown Branch");
        assert_eq!(meta.author, "Unknown Author");
    }

    #[test]
    fn decode_bytes_falls_back_to_latin1_on_invalid_utf8() {
        let bytes = vec![0xff, 0xfe, b'a'];
        let decoded = decode_bytes(Path::new("a.txt"), &bytes).unwrap();
        assert!(decoded.ends_with('a'));
    }

    #[test]
    fn decode_bytes_rejects_content_with_a_nul_byte() {
        let bytes = vec![b'a', 0, b'b'];
        let err = decode_bytes(Path::new("binary.dat"), &bytes).unwrap_err();
        assert!(matches!(err, RedflagError::Binary(_)));
    }
}
