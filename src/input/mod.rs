//! Degraded-mode Shift detection
//!
//! Some terminals drop the Shift modifier on auto-repeated arrow keys. When
//! the backend reports [`ModifierSupport::Degraded`](crate::term::ModifierSupport)
//! and a window is configured, a plain navigation key that repeats the
//! previous extending key within the window keeps extending.
//!
//! ## input/ Invariants
//!
//! - Without a configured window, keys pass through unchanged.
//! - Only navigation keys are ever rewritten, and only by adding Shift.
//! - Any other key ends the extending run.

use crate::key::{Key, KeyMods, NavKey};
use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct ShiftInference {
    window: Option<Duration>,
    /// Last extending navigation key and when it arrived
    last_extend: Option<(NavKey, Instant)>,
}

impl ShiftInference {
    #[must_use]
    pub fn new(window: Option<Duration>) -> Self {
        ShiftInference {
            window,
            last_extend: None,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.window.is_some()
    }

    /// Rewrite `key` (arriving at `now`) if it continues an extending run
    pub fn infer(&mut self, key: Key, now: Instant) -> Key {
        let Some(window) = self.window else {
            return key;
        };

        match key {
            Key::Nav(nav, mods) if mods.shift => {
                self.last_extend = Some((nav, now));
                key
            }
            Key::Nav(nav, mods) => {
                if let Some((last, at)) = self.last_extend {
                    if last == nav && now.saturating_duration_since(at) <= window {
                        self.last_extend = Some((nav, now));
                        trace!(target: "input", ?nav, "inferred shift from repeat timing");
                        return Key::Nav(nav, KeyMods { shift: true, ..mods });
                    }
                }
                self.last_extend = None;
                key
            }
            Key::Resize(..) => key,
            _ => {
                self.last_extend = None;
                key
            }
        }
    }
}
