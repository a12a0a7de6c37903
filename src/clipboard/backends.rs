//! Clipboard backends: arboard and external command-line tools

use super::ClipboardBackend;
use crate::constants::errors;
use crate::error::{EditorError, Result};
use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Native clipboard through arboard.
///
/// The handle is created on first use and kept alive: on X11 and Wayland
/// the copied text is only served while the owning handle exists.
#[derive(Default)]
pub struct ArboardBackend {
    clipboard: Option<arboard::Clipboard>,
}

impl ArboardBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| EditorError::clipboard(errors::CLIPBOARD_UNAVAILABLE, e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| EditorError::clipboard(errors::CLIPBOARD_UNAVAILABLE, "no clipboard handle"))
    }
}

impl ClipboardBackend for ArboardBackend {
    fn name(&self) -> &str {
        "arboard"
    }

    fn set(&mut self, text: &str) -> Result<()> {
        let result = self.handle()?.set_text(text.to_string());
        result.map_err(|e| {
            self.clipboard = None;
            EditorError::clipboard(errors::CLIPBOARD_COPY_FAILED, e.to_string())
        })
    }

    fn get(&mut self) -> Result<String> {
        let result = self.handle()?.get_text();
        result.map_err(|e| {
            self.clipboard = None;
            EditorError::clipboard(errors::CLIPBOARD_EMPTY, e.to_string())
        })
    }
}

/// A program invocation: name plus fixed arguments
#[derive(Debug, Clone, Copy)]
pub struct Invocation {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

/// Clipboard through a pair of external tools (e.g. `pbcopy`/`pbpaste`)
#[derive(Debug, Clone)]
pub struct CommandBackend {
    name: &'static str,
    copy: Invocation,
    paste: Invocation,
    timeout: Duration,
}

impl CommandBackend {
    #[must_use]
    pub fn new(name: &'static str, copy: Invocation, paste: Invocation, timeout: Duration) -> Self {
        CommandBackend {
            name,
            copy,
            paste,
            timeout,
        }
    }

    #[must_use]
    pub fn pbcopy(timeout: Duration) -> Self {
        Self::new(
            "pbcopy",
            Invocation { program: "pbcopy", args: &[] },
            Invocation { program: "pbpaste", args: &[] },
            timeout,
        )
    }

    #[must_use]
    pub fn wl_clipboard(timeout: Duration) -> Self {
        Self::new(
            "wl-clipboard",
            Invocation { program: "wl-copy", args: &[] },
            Invocation { program: "wl-paste", args: &["--no-newline"] },
            timeout,
        )
    }

    #[must_use]
    pub fn xclip(timeout: Duration) -> Self {
        Self::new(
            "xclip",
            Invocation { program: "xclip", args: &["-selection", "clipboard"] },
            Invocation { program: "xclip", args: &["-selection", "clipboard", "-o"] },
            timeout,
        )
    }
}

impl ClipboardBackend for CommandBackend {
    fn name(&self) -> &str {
        self.name
    }

    fn set(&mut self, text: &str) -> Result<()> {
        run_with_timeout(self.copy, Some(text), self.timeout).map(|_| ())
    }

    fn get(&mut self) -> Result<String> {
        run_with_timeout(self.paste, None, self.timeout)
    }
}

/// Run `invocation`, feeding `input` on stdin, and wait at most `timeout`.
///
/// With input, stdout is discarded (copy tools may fork and keep it open);
/// without input, stdout is captured and returned.
pub fn run_with_timeout(invocation: Invocation, input: Option<&str>, timeout: Duration) -> Result<String> {
    let spawn_failed = |e: std::io::Error| {
        EditorError::clipboard(
            errors::CLIPBOARD_UNAVAILABLE,
            format!("{}: {e}", invocation.program),
        )
    };

    let mut child = Command::new(invocation.program)
        .args(invocation.args)
        .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(if input.is_some() { Stdio::null() } else { Stdio::piped() })
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_failed)?;

    // Dropping stdin closes the pipe and lets the tool finish
    let writer = match (input, child.stdin.take()) {
        (Some(text), Some(mut stdin)) => {
            let bytes = text.as_bytes().to_vec();
            Some(thread::spawn(move || stdin.write_all(&bytes)))
        }
        _ => None,
    };

    let reader = child.stdout.take().map(|mut stdout| {
        thread::spawn(move || {
            let mut out = String::new();
            stdout.read_to_string(&mut out).map(|_| out)
        })
    });

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait().map_err(spawn_failed)? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(EditorError::clipboard(
                    errors::CLIPBOARD_TIMEOUT,
                    format!("{} timed out after {}ms", invocation.program, timeout.as_millis()),
                ));
            }
            None => thread::sleep(Duration::from_millis(5)),
        }
    };

    // The child has exited, so a blocked writer sees a closed pipe and returns
    if let Some(handle) = writer {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(spawn_failed(e)),
            Err(_) => {
                return Err(EditorError::clipboard(
                    errors::CLIPBOARD_COPY_FAILED,
                    "writer thread panicked",
                ))
            }
        }
    }

    if !status.success() {
        return Err(EditorError::clipboard(
            errors::CLIPBOARD_COPY_FAILED,
            format!("{} exited with {status}", invocation.program),
        ));
    }

    match reader {
        Some(handle) => handle
            .join()
            .map_err(|_| EditorError::clipboard(errors::CLIPBOARD_EMPTY, "reader thread panicked"))?
            .map_err(spawn_failed),
        None => Ok(String::new()),
    }
}
