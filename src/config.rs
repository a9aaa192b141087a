//! Optional front-end settings read from `cd_calculator.json`.
//!
//! The rate catalog is compiled in and cannot be changed here. Every field
//! has a default, so a missing file or a partial file is fine:
//!
//! ```json
//! { "title": "My CD Calculator", "log_file": "cd_calculator.log", "log_level": "debug" }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "cd_calculator.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Heading of the term selection screen
    pub title: String,
    /// Where log output goes; nothing is logged when unset
    pub log_file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Certificate of Deposit Calculator".to_string(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading settings file: {}", path.display()))?;
    parse_settings(&raw, path)
}

/// Like `load_settings`, but a file that does not exist yields the defaults.
/// Any other read failure, or a file that does not parse, is still an error.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(raw) => parse_settings(&raw, path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => {
            Err(e).with_context(|| format!("Reading settings file: {}", path.display()))
        }
    }
}

/// Settings from `cd_calculator.json` in the working directory.
pub fn load_settings_with_fallback() -> Result<Settings> {
    load_settings_or_default(DEFAULT_SETTINGS_FILE)
}

fn parse_settings(raw: &str, path: &Path) -> Result<Settings> {
    serde_json::from_str(raw)
        .with_context(|| format!("Parsing settings JSON in {}", path.display()))
}
