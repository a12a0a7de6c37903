//! User settings
//! Loaded once at startup from a TOML file
//!
//! ## settings/ Invariants
//!
//! - Every field has a default; a partial file only overrides what it names.
//! - A missing file yields the defaults silently.
//! - An unreadable or invalid file is logged and yields the defaults; it is never fatal.

use crate::constants::{errors, settings as names, themes};
use crate::error::{EditorError, ErrorType, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Tab width in spaces
    pub tab_width: usize,
    /// Whether Tab inserts spaces
    pub expand_tabs: bool,
    /// Seconds between autosaves; 0 disables autosave
    pub autosave_interval_secs: u64,
    /// Main loop poll timeout in milliseconds
    pub poll_timeout_ms: u64,
    /// Upper bound for one external clipboard tool invocation
    pub clipboard_timeout_ms: u64,
    /// Repeat window for inferring Shift on terminals that drop it.
    /// Unset disables the heuristic.
    pub shift_repeat_window_ms: Option<u64>,
    /// `tracing` filter directive, overridden by the environment
    pub log_filter: String,
    /// Color theme name
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tab_width: 4,
            expand_tabs: true,
            autosave_interval_secs: 5,
            poll_timeout_ms: 16,
            clipboard_timeout_ms: 500,
            shift_repeat_window_ms: None,
            log_filter: "info".to_string(),
            theme: themes::DARK.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)
            .map_err(|e| EditorError::new(ErrorType::Settings, errors::SETTINGS_PARSE, e.to_string()))?;
        Ok(settings.normalized())
    }

    /// Read settings from `path`. A missing file is `Ok(None)`.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Load from `explicit`, else from the default location, falling back
    /// to defaults on any error
    #[must_use]
    pub fn load(explicit: Option<&Path>) -> Self {
        let Some(path) = explicit.map(Path::to_path_buf).or_else(Self::default_path) else {
            debug!(target: "settings", "no config directory; using defaults");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(Some(settings)) => {
                debug!(target: "settings", path = %path.display(), "loaded");
                settings
            }
            Ok(None) => {
                if explicit.is_some() {
                    warn!(target: "settings", path = %path.display(), "config file not found; using defaults");
                }
                Self::default()
            }
            Err(err) => {
                warn!(target: "settings", path = %path.display(), %err, "invalid config; using defaults");
                Self::default()
            }
        }
    }

    /// `<config dir>/seditor/config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(names::CONFIG_DIR).join(names::CONFIG_FILE))
    }

    /// `None` when autosave is disabled
    #[must_use]
    pub fn autosave_interval(&self) -> Option<Duration> {
        (self.autosave_interval_secs > 0).then(|| Duration::from_secs(self.autosave_interval_secs))
    }

    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    #[must_use]
    pub fn clipboard_timeout(&self) -> Duration {
        Duration::from_millis(self.clipboard_timeout_ms)
    }

    #[must_use]
    pub fn shift_repeat_window(&self) -> Option<Duration> {
        self.shift_repeat_window_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    fn normalized(mut self) -> Self {
        if self.tab_width == 0 {
            warn!(target: "settings", "tab_width must be positive; using 1");
            self.tab_width = 1;
        }
        self
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
