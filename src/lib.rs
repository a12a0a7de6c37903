//! seditor - a terminal text editor pane with syntax highlighting and selection

pub mod buffer;
pub mod clipboard;
pub mod color;
pub mod command;
pub mod compose;
pub mod constants;
pub mod document;
pub mod editor;
pub mod error;
pub mod executor;
pub mod input;
pub mod key;
pub mod movement;
pub mod render;
pub mod settings;
pub mod syntax;
pub mod term;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;
