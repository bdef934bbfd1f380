//! Runtime settings read from the environment.
//!
//! - `EOSCALC_LOG_MODE`: `auto` (default), `file` or `stdout`
//! - `EOSCALC_LOG_FILE`: log path used in file mode (default `eoscalc.log`)
//!
//! The log filter itself comes from `RUST_LOG` via `EnvFilter`.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

pub const LOG_MODE_VAR: &str = "EOSCALC_LOG_MODE";
pub const LOG_FILE_VAR: &str = "EOSCALC_LOG_FILE";
pub const DEFAULT_LOG_FILE: &str = "eoscalc.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// File when attached to a terminal (the TUI owns it), stdout otherwise
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_mode = lookup(LOG_MODE_VAR)
            .map(|v| LogMode::parse(&v))
            .unwrap_or_default();
        let log_file = lookup(LOG_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Self { log_mode, log_file }
    }

    /// Resolve `Auto` against whether stdout is a terminal.
    #[must_use]
    pub fn log_to_file(&self, interactive: bool) -> bool {
        match self.log_mode {
            LogMode::File => true,
            LogMode::Stdout => false,
            LogMode::Auto => interactive,
        }
    }

    /// Open the log file for appending, creating its directory if needed.
    ///
    /// # Errors
    /// Returns `EosError::Io` if the file cannot be opened.
    pub fn open_log_file(&self) -> crate::Result<File> {
        if let Some(parent) = self.log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            // Best-effort: the open below reports the real failure.
            let _ = std::fs::create_dir_all(parent);
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        Ok(file)
    }

    #[must_use]
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert!(settings.log_to_file(true));
        assert!(!settings.log_to_file(false));
    }

    #[test]
    fn test_explicit_modes() {
        let file = Settings::from_lookup(lookup_from(&[(LOG_MODE_VAR, "FILE")]));
        assert_eq!(file.log_mode, LogMode::File);
        assert!(file.log_to_file(false));

        let stdout = Settings::from_lookup(lookup_from(&[(LOG_MODE_VAR, "stdout")]));
        assert!(!stdout.log_to_file(true));

        let bogus = Settings::from_lookup(lookup_from(&[(LOG_MODE_VAR, "syslog")]));
        assert_eq!(bogus.log_mode, LogMode::Auto);
    }

    #[test]
    fn test_log_file_override() {
        let settings = Settings::from_lookup(lookup_from(&[(LOG_FILE_VAR, "/var/log/eos.log")]));
        assert_eq!(settings.log_file(), Path::new("/var/log/eos.log"));

        let blank = Settings::from_lookup(lookup_from(&[(LOG_FILE_VAR, "  ")]));
        assert_eq!(blank.log_file(), Path::new(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let settings = Settings {
            log_mode: LogMode::File,
            log_file: tmp.path().join("nested").join("eoscalc.log"),
        };
        settings.open_log_file().expect("log file opens");
        assert!(settings.log_file().exists());
    }
}
