// src/selector.rs
//! Enumerates candidate files for a scan and applies the exclusion policy,
//! git-first with a filesystem-walk fallback outside a repository.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::warn;

use crate::catalog::should_exclude_file;
use crate::error::Result;
use crate::vcs::VcsClient;

/// The exclusion policy applied uniformly whether files were discovered via
/// git or via a plain filesystem walk.
pub struct ExclusionPolicy;

impl ExclusionPolicy {
    #[must_use]
    pub fn should_keep(path: &Path) -> bool {
        let normalized = path.to_string_lossy().replace('\\', "/");
        !should_exclude_file(&normalized)
    }

    #[must_use]
    pub fn filter(paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.into_iter().filter(|p| Self::should_keep(p)).collect()
    }
}

/// Lists every tracked file in the repository, filtered by the exclusion
/// policy. Falls back to a pruned filesystem walk outside a git repo.
pub fn list_repository(vcs: &dyn VcsClient, root: &Path) -> Vec<PathBuf> {
    let files = match vcs.list_tracked() {
        Ok(files) => files,
        Err(err) => {
            warn!("not a git repository ({err}), walking filesystem instead");
            walk_filesystem(root)
        }
    };
    ExclusionPolicy::filter(files)
}

/// Lists files pending push (diff against upstream, or all tracked files on
/// a first push), filtered by the exclusion policy.
pub fn list_staged_for_push(vcs: &dyn VcsClient) -> Result<Vec<PathBuf>> {
    let files = vcs.list_pending_push()?;
    Ok(ExclusionPolicy::filter(files))
}

fn walk_filesystem(root: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for entry in WalkBuilder::new(root).hidden(false).build() {
        match entry {
            Ok(entry) if entry.file_type().map(|t| t.is_file()).unwrap_or(false) => {
                let p = entry.path().strip_prefix(root).unwrap_or(entry.path());
                paths.push(p.to_path_buf());
            }
            Err(err) => warn!("error walking filesystem: {err}"),
            _ => {}
        }
    }
    paths
}

/// Reads a file's text content, preferring the git index (so staged-but-
/// uncommitted content is what gets scanned) and falling back to the
/// working tree. UTF-8 then Latin-1; binary files are rejected rather than
/// scanned, so callers should treat an error here as "skip this file."
pub fn read_text(vcs: &dyn VcsClient, path: &Path) -> Result<String> {
    vcs.show_index(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ordinary_source_file() {
        assert!(ExclusionPolicy::should_keep(Path::new("src/main.rs")));
    }

    #[test]
    fn drops_excluded_extension() {
        assert!(!ExclusionPolicy::should_keep(Path::new("dist/bundle.zip")));
    }

    #[test]
    fn drops_excluded_directory() {
        assert!(!ExclusionPolicy::should_keep(Path::new(
            "node_modules/pkg/index.js"
        )));
    }
}
