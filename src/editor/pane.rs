//! A single editor pane: one optional document plus its view state

use crate::clipboard::Clipboard;
use crate::color::Theme;
use crate::command::Command;
use crate::compose::{compose_visible, HighlightCache};
use crate::constants::status;
use crate::document::Document;
use crate::error::Result;
use crate::executor::{execute_command, ExecContext};
use crate::render::{render_pane, PaneRect, RenderInput};
use crate::settings::Settings;
use crate::syntax::{tokenizer_for_path, PlainTokenizer, Tokenizer};
use crate::term::CellWriter;
use crate::viewport::{gutter_width, Viewport};
use std::path::Path;
use tracing::{debug, info, warn};

pub struct EditorPane {
    document: Option<Document>,
    viewport: Viewport,
    tokenizer: Box<dyn Tokenizer>,
    highlights: HighlightCache,
    theme: Theme,
    status: Option<String>,
    tab_width: usize,
    expand_tabs: bool,
}

impl EditorPane {
    /// Empty pane of `rows` x `cols` cells, header row included
    #[must_use]
    pub fn new(rows: usize, cols: usize, settings: &Settings) -> Self {
        let theme = Theme::by_name(&settings.theme).unwrap_or_else(|| {
            warn!(target: "editor", theme = %settings.theme, "unknown theme; using default");
            Theme::default()
        });
        EditorPane {
            document: None,
            viewport: Viewport::new(rows, cols),
            tokenizer: Box::new(PlainTokenizer),
            highlights: HighlightCache::new(),
            theme,
            status: None,
            tab_width: settings.tab_width,
            expand_tabs: settings.expand_tabs,
        }
    }

    /// Open `path`, replacing the current document. On failure the pane is
    /// left with no document.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.close();
        match Document::open(path) {
            Ok(document) => {
                self.set_document(document);
                info!(
                    target: "editor",
                    path = %path.display(),
                    language = self.tokenizer.name(),
                    "opened"
                );
                self.status = Some(status::OPENED.to_string());
                Ok(())
            }
            Err(err) => {
                warn!(target: "editor", path = %path.display(), %err, "open failed");
                self.status = Some(status::OPEN_FAILED.to_string());
                Err(err)
            }
        }
    }

    /// Install an already-loaded document, replacing the current one
    pub fn set_document(&mut self, document: Document) {
        self.close();
        self.tokenizer = tokenizer_for_path(document.path());
        self.document = Some(document);
        self.adjust_scroll();
    }

    /// Drop the document without saving
    pub fn close(&mut self) {
        self.document = None;
        self.tokenizer = Box::new(PlainTokenizer);
        self.highlights.clear();
        self.viewport.reset();
        self.status = None;
    }

    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.document.as_ref().is_some_and(Document::is_dirty)
    }

    /// Run a document-level command and keep the cursor in view
    pub fn execute(&mut self, cmd: Command, clipboard: &mut dyn Clipboard) -> Result<bool> {
        let Some(document) = self.document.as_mut() else {
            return Ok(false);
        };
        let ctx = ExecContext {
            page_height: self.viewport.display_height(),
            tab_width: self.tab_width,
            expand_tabs: self.expand_tabs,
        };
        let changed = execute_command(cmd, &mut document.buffer, clipboard, &ctx)?;
        if changed {
            self.status = None;
        }
        self.adjust_scroll();
        Ok(changed)
    }

    /// Bring the cursor into view; returns `true` if the viewport scrolled
    pub fn adjust_scroll(&mut self) -> bool {
        let Some(document) = self.document.as_ref() else {
            return false;
        };
        let buffer = &document.buffer;
        let cursor = buffer.cursor();
        self.viewport
            .adjust(cursor, buffer.line_count(), buffer.line_len(cursor.row))
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.viewport.set_size(rows, cols);
        self.adjust_scroll();
    }

    /// Explicit save with a status message for every outcome
    pub fn save(&mut self) -> Result<()> {
        let Some(document) = self.document.as_mut() else {
            self.status = Some(status::NO_FILE_TO_SAVE.to_string());
            return Ok(());
        };
        if !document.is_dirty() {
            self.status = Some(status::NO_CHANGES.to_string());
            return Ok(());
        }
        self.save_with_status(status::SAVED).map(|_| ())
    }

    /// Save only if there are unsaved changes; returns `true` if it saved
    pub fn save_if_dirty(&mut self, message: &str) -> Result<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }
        self.save_with_status(message)
    }

    fn save_with_status(&mut self, message: &str) -> Result<bool> {
        let Some(document) = self.document.as_mut() else {
            return Ok(false);
        };
        match document.save() {
            Ok(()) => {
                debug!(target: "editor", path = %document.path().display(), status = message, "saved");
                self.status = Some(message.to_string());
                Ok(true)
            }
            Err(err) => {
                warn!(target: "editor", path = %document.path().display(), %err, "save failed");
                self.status = Some(status::SAVE_FAILED.to_string());
                Err(err)
            }
        }
    }

    /// Draw the pane into `rect`
    pub fn render<W: CellWriter + ?Sized>(
        &mut self,
        w: &mut W,
        rect: PaneRect,
        focused: bool,
    ) -> std::result::Result<(), String> {
        let rows = self.document.as_ref().map(|document| {
            compose_visible(
                &document.buffer,
                &self.viewport,
                &mut self.highlights,
                self.tokenizer.as_mut(),
                &self.theme,
            )
        });
        let line_count = self
            .document
            .as_ref()
            .map_or(1, |document| document.buffer.line_count());

        let input = RenderInput {
            title: self.document.as_ref().map_or("", Document::display_name),
            dirty: self.is_dirty(),
            status: self.status.as_deref(),
            focused,
            gutter_width: gutter_width(line_count),
            rows: rows.as_deref(),
            theme: &self.theme,
        };
        render_pane(w, rect, &input)
    }
}
