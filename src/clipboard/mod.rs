//! Clipboard access
//! System clipboard with several backends tried in order
//!
//! ## clipboard/ Invariants
//!
//! - Every backend call is bounded by a timeout.
//! - `copy` reports success only after reading the text back unchanged.
//! - Clipboard failures are logged and reported, never raised.

pub mod backends;

pub use backends::{ArboardBackend, CommandBackend};

use crate::error::Result;
use std::time::Duration;
use tracing::{debug, warn};

/// Clipboard as seen by the editor
pub trait Clipboard {
    /// Put `text` on the clipboard; true only if it verifiably arrived
    fn copy(&mut self, text: &str) -> bool;

    /// Current clipboard text, if any backend can provide it
    fn paste(&mut self) -> Option<String>;
}

/// One way of reaching the system clipboard
pub trait ClipboardBackend {
    fn name(&self) -> &str;
    fn set(&mut self, text: &str) -> Result<()>;
    fn get(&mut self) -> Result<String>;
}

/// Tries each backend in order until one works
pub struct SystemClipboard {
    backends: Vec<Box<dyn ClipboardBackend>>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new(backends: Vec<Box<dyn ClipboardBackend>>) -> Self {
        SystemClipboard { backends }
    }

    /// Backends for the current platform; command-line tools use `timeout`
    #[must_use]
    pub fn platform_default(timeout: Duration) -> Self {
        let mut backends: Vec<Box<dyn ClipboardBackend>> = vec![Box::new(ArboardBackend::new())];
        if cfg!(target_os = "macos") {
            backends.push(Box::new(CommandBackend::pbcopy(timeout)));
        } else if cfg!(unix) {
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                backends.push(Box::new(CommandBackend::wl_clipboard(timeout)));
            }
            backends.push(Box::new(CommandBackend::xclip(timeout)));
        }
        Self::new(backends)
    }

    /// Names of the configured backends, in order
    #[must_use]
    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        for backend in &mut self.backends {
            if let Err(err) = backend.set(text) {
                debug!(target: "clipboard", backend = backend.name(), %err, "set failed");
                continue;
            }
            match backend.get() {
                Ok(read_back) if read_back == text => {
                    debug!(target: "clipboard", backend = backend.name(), bytes = text.len(), "copied");
                    return true;
                }
                Ok(_) => {
                    debug!(target: "clipboard", backend = backend.name(), "read-back mismatch");
                }
                Err(err) => {
                    debug!(target: "clipboard", backend = backend.name(), %err, "read-back failed");
                }
            }
        }
        warn!(target: "clipboard", "no clipboard backend accepted the copy");
        false
    }

    fn paste(&mut self) -> Option<String> {
        for backend in &mut self.backends {
            match backend.get() {
                Ok(text) => return Some(text),
                Err(err) => debug!(target: "clipboard", backend = backend.name(), %err, "get failed"),
            }
        }
        warn!(target: "clipboard", "no clipboard backend could paste");
        None
    }
}

/// In-process clipboard
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(text: &str) -> Self {
        MemoryClipboard {
            contents: Some(text.to_string()),
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> bool {
        self.contents = Some(text.to_string());
        true
    }

    fn paste(&mut self) -> Option<String> {
        self.contents.clone()
    }
}
