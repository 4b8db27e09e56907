// src/config.rs
//! User-scoped scan-mode preference: a small JSON file under the user's
//! home directory selecting whether scans cover the diff, the
//! repository, or both. Independent of the frozen rule catalog, which is
//! never user-editable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const CONFIG_DIR_NAME: &str = ".redflag";
const CONFIG_FILE_NAME: &str = ".redflag_scan_config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    Diff,
    Repo,
    Both,
}

impl Default for ScanMode {
    fn default() -> Self {
        ScanMode::Both
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub scan_mode: ScanMode,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_mode: ScanMode::default(),
            last_updated: None,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn should_scan_diff(&self) -> bool {
        matches!(self.scan_mode, ScanMode::Diff | ScanMode::Both)
    }

    #[must_use]
    pub fn should_scan_repo(&self) -> bool {
        matches!(self.scan_mode, ScanMode::Repo | ScanMode::Both)
    }

    /// Loads the user-scoped config, falling back to defaults on any
    /// missing file, unreadable file, or malformed JSON -- absence is not
    /// an error, it just means "scan both."
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Persists the config, stamping `last_updated` with `now` (an
    /// ISO-8601 timestamp supplied by the caller, since this crate never
    /// calls into wall-clock time itself).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    pub fn save(&mut self, now: &str) -> Result<()> {
        self.last_updated = Some(now.to_string());
        let path = config_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

fn config_path() -> PathBuf {
    let home = home_dir();
    home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_both() {
        let cfg = ScanConfig::default();
        assert!(cfg.should_scan_diff());
        assert!(cfg.should_scan_repo());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = ScanConfig::load_from(Path::new("/nonexistent/path/redflag.json"));
        assert_eq!(cfg.scan_mode, ScanMode::Both);
        assert!(cfg.last_updated.is_none());
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        let cfg = ScanConfig::load_from(&path);
        assert_eq!(cfg.scan_mode, ScanMode::Both);
    }

    #[test]
    fn round_trips_through_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("redflag.json");
        let cfg = ScanConfig {
            scan_mode: ScanMode::Diff,
            last_updated: Some("2026-07-28T00:00:00".to_string()),
        };
        let content = serde_json::to_string_pretty(&cfg).unwrap();
        fs::write(&path, content).unwrap();

        let loaded = ScanConfig::load_from(&path);
        assert_eq!(loaded.scan_mode, ScanMode::Diff);
        assert!(!loaded.should_scan_repo());
        assert!(loaded.should_scan_diff());
    }
}
