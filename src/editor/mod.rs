//! Editor core
//! Event loop tying the terminal, the key dispatcher and the pane together
//!
//! ## editor/ Invariants
//!
//! - Key handling, autosave and rendering all run on the loop's thread, in that order.
//! - One key yields at most one command, one scroll adjustment and one render.
//! - No failure inside the loop other than a terminal error ends the program.
//! - Quitting saves a dirty document first; a failed save never blocks exit.

pub mod pane;

pub use pane::EditorPane;

use crate::clipboard::Clipboard;
use crate::command::{Command, Dispatcher};
use crate::constants::{errors, status};
use crate::error::{Result, ToEditorError};
use crate::input::ShiftInference;
use crate::key::Key;
use crate::render::PaneRect;
use crate::settings::Settings;
use crate::term::{ModifierSupport, TerminalBackend};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Main editor struct
pub struct Editor<T: TerminalBackend> {
    /// Terminal backend
    pub term: T,
    pane: EditorPane,
    dispatcher: Dispatcher,
    clipboard: Box<dyn Clipboard>,
    shift_inference: ShiftInference,
    settings: Settings,
    last_autosave: Instant,
    should_quit: bool,
}

impl<T: TerminalBackend> Editor<T> {
    /// Initialize the terminal and create an editor with no file open
    pub fn new(mut term: T, settings: Settings, clipboard: Box<dyn Clipboard>) -> Result<Self> {
        term.init().map_err(|e| e.to_editor_error(errors::INIT_FAILED))?;
        let size = term
            .get_size()
            .map_err(|e| e.to_editor_error(errors::INIT_FAILED))?;

        let dispatcher = Dispatcher::for_support(term.modifier_support());
        let shift_inference = match term.modifier_support() {
            ModifierSupport::Full => ShiftInference::disabled(),
            ModifierSupport::Degraded => ShiftInference::new(settings.shift_repeat_window()),
        };
        info!(
            target: "editor",
            rows = size.rows,
            cols = size.cols,
            modifiers = ?term.modifier_support(),
            shift_inference = shift_inference.is_enabled(),
            "terminal ready"
        );

        Ok(Editor {
            pane: EditorPane::new(size.rows as usize, size.cols as usize, &settings),
            term,
            dispatcher,
            clipboard,
            shift_inference,
            settings,
            last_autosave: Instant::now(),
            should_quit: false,
        })
    }

    /// Open a file in the pane. Failure leaves the pane empty.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.pane.open(path)
    }

    #[must_use]
    pub fn pane(&self) -> &EditorPane {
        &self.pane
    }

    pub fn pane_mut(&mut self) -> &mut EditorPane {
        &mut self.pane
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run until quit
    pub fn run(&mut self) -> Result<()> {
        self.render()?;

        while !self.should_quit {
            let ready = self
                .term
                .poll(self.settings.poll_timeout())
                .map_err(|e| e.to_editor_error(errors::POLL_FAILED))?;

            let mut needs_render = false;
            if ready {
                if let Some(key) = self
                    .term
                    .read_key()
                    .map_err(|e| e.to_editor_error(errors::POLL_FAILED))?
                {
                    self.handle_key(key, Instant::now());
                    needs_render = true;
                }
            }
            if self.tick_autosave(Instant::now()) {
                needs_render = true;
            }
            if needs_render && !self.should_quit {
                self.render()?;
            }
        }
        Ok(())
    }

    /// Process one key arriving at `now`
    pub fn handle_key(&mut self, key: Key, now: Instant) {
        let key = self.shift_inference.infer(key, now);
        let cmd = self.dispatcher.translate_key(key);
        debug!(target: "editor", ?key, ?cmd, "key");

        match cmd {
            Command::Quit => self.quit(),
            Command::Save => {
                if let Err(err) = self.pane.save() {
                    warn!(target: "editor", %err, "save failed");
                }
            }
            Command::Resize { cols, rows } => self.pane.resize(rows as usize, cols as usize),
            Command::Noop => {}
            cmd => match self.pane.execute(cmd, self.clipboard.as_mut()) {
                Ok(changed) => {
                    if cmd == Command::Copy && changed {
                        self.pane.set_status(status::COPIED);
                    }
                }
                Err(err) => {
                    warn!(target: "editor", ?cmd, %err, "command failed");
                    self.pane.set_status(status::CLIPBOARD_FAILED);
                }
            },
        }
    }

    /// Save a dirty document once per autosave interval; returns `true` if it saved
    pub fn tick_autosave(&mut self, now: Instant) -> bool {
        let Some(interval) = self.settings.autosave_interval() else {
            return false;
        };
        if now.saturating_duration_since(self.last_autosave) < interval {
            return false;
        }
        self.last_autosave = now;
        match self.pane.save_if_dirty(status::AUTOSAVED) {
            Ok(saved) => saved,
            Err(err) => {
                warn!(target: "editor", %err, "autosave failed");
                true
            }
        }
    }

    fn quit(&mut self) {
        if let Err(err) = self.pane.save_if_dirty(status::SAVED_ON_EXIT) {
            warn!(target: "editor", %err, "save on exit failed");
        }
        self.should_quit = true;
    }

    /// Draw the pane over the whole terminal and flush
    pub fn render(&mut self) -> Result<()> {
        let viewport = self.pane.viewport();
        let rect = PaneRect::new(
            0,
            0,
            u16::try_from(viewport.cols()).unwrap_or(u16::MAX),
            u16::try_from(viewport.rows()).unwrap_or(u16::MAX),
        );
        self.pane
            .render(&mut self.term, rect, true)
            .map_err(|e| e.to_editor_error(errors::RENDER_FAILED))?;
        self.term
            .flush()
            .map_err(|e| e.to_editor_error(errors::RENDER_FAILED))
    }
}

impl<T: TerminalBackend> Drop for Editor<T> {
    fn drop(&mut self) {
        self.term.deinit();
    }
}
