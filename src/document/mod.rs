//! Document management
//! Encapsulates the text buffer plus file metadata and persistence
//!
//! ## document/ Invariants
//!
//! - A document always has a path; it only exists for opened files.
//! - Loading never raises past the caller: every failure is an `EditorError`.
//! - Saving always writes UTF-8 with `\n` separators.
//! - Closing a document never saves implicitly.

pub mod encoding;

use crate::buffer::TextDocument;
use crate::constants::{errors, ui};
use crate::error::{EditorError, Result};
pub use encoding::{decode_with_fallback, SourceEncoding, FALLBACK_ENCODINGS};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Read a file and decode it with the fallback encoding chain
pub fn load_text(path: &Path) -> Result<(String, SourceEncoding)> {
    let bytes = fs::read(path)?;
    decode_with_fallback(&bytes)
}

/// Atomically write `text` to `path` as UTF-8.
///
/// A symlinked `path` is resolved so the link target receives the text,
/// and an existing file keeps its permissions.
pub fn save_text(path: &Path, text: &str) -> Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
        Err(err) => return Err(err.into()),
    };
    let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| EditorError::file_access(errors::NO_PATH, errors::MSG_NO_FILE_NAME))?;
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    let written = write_and_rename(&temp_path, &target, text, permissions);
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_and_rename(
    temp_path: &Path,
    target: &Path,
    text: &str,
    permissions: Option<fs::Permissions>,
) -> Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(text.as_bytes())?;
    if let Some(permissions) = permissions {
        file.set_permissions(permissions)?;
    }
    file.sync_all()?;
    fs::rename(temp_path, target)?;
    Ok(())
}

/// An open file: buffer plus path, source encoding and save state
pub struct Document {
    /// Text buffer
    pub buffer: TextDocument,
    path: PathBuf,
    encoding: SourceEncoding,
    /// Buffer revision at the last load or save
    saved_revision: u64,
}

impl Document {
    /// Load document from file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (text, encoding) = load_text(path)?;
        if encoding != SourceEncoding::Utf8 {
            info!(target: "document", path = %path.display(), %encoding, "decoded with fallback encoding");
        }
        let buffer = TextDocument::from_text(&text);
        debug!(target: "document", path = %path.display(), lines = buffer.line_count(), "opened");
        Ok(Document {
            saved_revision: buffer.revision(),
            buffer,
            path: path.to_path_buf(),
            encoding,
        })
    }

    /// Wrap an existing buffer (e.g. for a file not yet on disk)
    #[must_use]
    pub fn with_buffer(path: impl AsRef<Path>, buffer: TextDocument) -> Self {
        Document {
            saved_revision: buffer.revision(),
            buffer,
            path: path.as_ref().to_path_buf(),
            encoding: SourceEncoding::Utf8,
        }
    }

    /// Write the buffer back to its path
    pub fn save(&mut self) -> Result<()> {
        if self.encoding != SourceEncoding::Utf8 {
            warn!(
                target: "document",
                path = %self.path.display(),
                from = %self.encoding,
                "saving as utf-8"
            );
        }
        save_text(&self.path, &self.buffer.to_text())?;
        self.saved_revision = self.buffer.revision();
        self.encoding = SourceEncoding::Utf8;
        debug!(target: "document", path = %self.path.display(), "saved");
        Ok(())
    }

    /// Check if document has unsaved changes
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.buffer.revision() != self.saved_revision
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    /// Base name for the header
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(ui::NO_NAME)
    }
}
