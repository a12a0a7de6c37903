//! Centralized error handling for seditor
//! Defines common error types, severity levels, and error codes
//!
//! ## error/ Invariants
//!
//! - Nothing in the editor core is fatal to the process.
//! - File and clipboard failures leave the document untouched.
//! - Rendering code has no error variants of its own beyond terminal I/O.

use crate::constants::errors;
use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Warning - something might be wrong but operation can continue
    Warning,
    /// Standard error - operation failed but editor can continue
    Error,
    /// Critical error - may lead to data loss or require restart
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// File not found or permission denied
    FileAccess,
    /// No supported encoding could decode the file
    FileDecode,
    /// Clipboard backend failures and timeouts
    Clipboard,
    /// Configuration file errors
    Settings,
    /// Terminal backend errors
    Renderer,
    /// Other file system or I/O errors
    Io,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileAccess => write!(f, "FileAccess"),
            Self::FileDecode => write!(f, "FileDecode"),
            Self::Clipboard => write!(f, "Clipboard"),
            Self::Settings => write!(f, "Settings"),
            Self::Renderer => write!(f, "Renderer"),
            Self::Io => write!(f, "IO"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error in seditor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "FILE_NOT_FOUND")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl EditorError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn file_access(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorType::FileAccess, code, message)
    }

    pub fn file_decode(message: impl Into<String>) -> Self {
        Self::new(ErrorType::FileDecode, errors::DECODE_FAILED, message)
    }

    /// Clipboard failures are warnings: the document is never affected
    pub fn clipboard(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::warning(ErrorType::Clipboard, code, message)
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for EditorError {}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                Self::file_access(errors::FILE_NOT_FOUND, err.to_string())
            }
            std::io::ErrorKind::PermissionDenied => {
                Self::file_access(errors::PERMISSION_DENIED, err.to_string())
            }
            _ => Self::new(ErrorType::Io, errors::IO_ERROR, err.to_string()),
        }
    }
}

/// Result alias for seditor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Helper trait to lift terminal backend errors (plain strings) into `EditorError`
pub trait ToEditorError {
    fn to_editor_error(self, code: &str) -> EditorError;
}

impl ToEditorError for String {
    fn to_editor_error(self, code: &str) -> EditorError {
        EditorError::new(ErrorType::Renderer, code, self)
    }
}
