//! Global constants for the seditor pane

pub mod ui {
    /// Placeholder shown in the pane when no file is open
    pub const NO_FILE_PLACEHOLDER: &str = "No file open";

    /// Header label when the open document has no readable name
    pub const NO_NAME: &str = "[No Name]";

    /// Header marker for unsaved changes
    pub const DIRTY_MARKER: &str = "*";

    /// Truncation marker for clipped lines
    pub const ELLIPSIS: &str = "...";

    /// Glyph between the gutter and the content area
    pub const GUTTER_SEPARATOR: char = '│';

    /// Drawn in place of characters wider or narrower than one column
    pub const REPLACEMENT_CHAR: char = '?';

    /// Separator between header fields
    pub const HEADER_SEPARATOR: &str = " | ";

    /// Smallest gutter, regardless of line count
    pub const MIN_GUTTER_WIDTH: usize = 5;

    /// Rows reserved above the content area
    pub const HEADER_ROWS: usize = 1;
}

pub mod errors {
    // Error Codes
    pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const DECODE_FAILED: &str = "DECODE_FAILED";
    pub const NO_PATH: &str = "NO_PATH";
    pub const CLIPBOARD_UNAVAILABLE: &str = "CLIPBOARD_UNAVAILABLE";
    pub const CLIPBOARD_TIMEOUT: &str = "CLIPBOARD_TIMEOUT";
    pub const CLIPBOARD_COPY_FAILED: &str = "CLIPBOARD_COPY_FAILED";
    pub const CLIPBOARD_EMPTY: &str = "CLIPBOARD_EMPTY";
    pub const SETTINGS_PARSE: &str = "SETTINGS_PARSE";
    pub const RENDER_FAILED: &str = "RENDER_FAILED";
    pub const POLL_FAILED: &str = "POLL_FAILED";
    pub const INIT_FAILED: &str = "INIT_FAILED";
    pub const LANGUAGE_NOT_FOUND: &str = "LANGUAGE_NOT_FOUND";
    pub const LANGUAGE_ERROR: &str = "LANGUAGE_ERROR";
    pub const QUERY_ERROR: &str = "QUERY_ERROR";

    // Error Messages
    pub const MSG_NO_FILE_NAME: &str = "No file name";
    pub const MSG_ALL_ENCODINGS_FAILED: &str = "File could not be decoded with any supported encoding";
}

pub mod status {
    pub const OPENED: &str = "Opened";
    pub const OPEN_FAILED: &str = "Failed to open file";
    pub const SAVED: &str = "Saved";
    pub const AUTOSAVED: &str = "Autosaved";
    pub const SAVED_ON_EXIT: &str = "Saved before exit";
    pub const SAVE_FAILED: &str = "Save failed";
    pub const NO_CHANGES: &str = "No changes";
    pub const NO_FILE_TO_SAVE: &str = "No file to save";
    pub const COPIED: &str = "Copied";
    pub const CLIPBOARD_FAILED: &str = "Clipboard unavailable";
}

pub mod settings {
    /// Directory under the platform config dir
    pub const CONFIG_DIR: &str = "seditor";
    /// Config file name inside [`CONFIG_DIR`]
    pub const CONFIG_FILE: &str = "config.toml";
    /// Log file name
    pub const LOG_FILE: &str = "seditor.log";
    /// Environment variable overriding the log filter
    pub const LOG_ENV: &str = "SEDITOR_LOG";
}

pub mod themes {
    pub const DARK: &str = "dark";
    pub const LIGHT: &str = "light";
}

/// Tree-sitter capture name prefixes, matched on the first dotted segment
pub mod captures {
    pub const BOOLEAN: &str = "boolean";
    pub const CHARACTER: &str = "character";
    pub const COMMENT: &str = "comment";
    pub const CONSTANT: &str = "constant";
    pub const CONSTRUCTOR: &str = "constructor";
    pub const DELIMITER: &str = "delimiter";
    pub const ESCAPE: &str = "escape";
    pub const FLOAT: &str = "float";
    pub const FUNCTION: &str = "function";
    pub const IMPORT: &str = "import";
    pub const KEYWORD: &str = "keyword";
    pub const METHOD: &str = "method";
    pub const NUMBER: &str = "number";
    pub const OPERATOR: &str = "operator";
    pub const PUNCTUATION: &str = "punctuation";
    pub const STRING: &str = "string";
    pub const TYPE: &str = "type";
}
