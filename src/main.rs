//! seditor - a terminal text editor pane
//! Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use seditor::clipboard::SystemClipboard;
use seditor::constants::settings as names;
use seditor::editor::Editor;
use seditor::settings::Settings;
use seditor::term::crossterm::{restore_terminal, CrosstermBackend};
use std::path::PathBuf;
use std::sync::Once;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "seditor", version, about = "Terminal text editor pane")]
struct Args {
    /// File to open at startup
    path: Option<PathBuf>,
    /// Configuration file (overrides `<config dir>/seditor/config.toml`)
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

/// Log to a file: the terminal is in raw mode and owned by the editor
fn configure_logging(settings: &Settings) -> Option<WorkerGuard> {
    let log_dir = dirs::data_local_dir()
        .map(|dir| dir.join(names::CONFIG_DIR))
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let filter = EnvFilter::try_from_env(names::LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, names::LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|()| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            tracing::error!(target: "runtime.panic", %info, "panic");
            default_panic(info);
        }));
    });
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref());
    let _log_guard = configure_logging(&settings);
    install_panic_hook();
    tracing::info!(target: "runtime", version = env!("CARGO_PKG_VERSION"), "starting");

    let backend = CrosstermBackend::new()
        .map_err(anyhow::Error::msg)
        .context("failed to create terminal backend")?;
    let clipboard = SystemClipboard::platform_default(settings.clipboard_timeout());
    let mut editor = Editor::new(backend, settings, Box::new(clipboard))
        .context("failed to initialize editor")?;

    if let Some(path) = args.path.as_ref() {
        // A failed open leaves the empty pane; the status line says why
        if let Err(err) = editor.open(path) {
            tracing::warn!(target: "runtime", path = %path.display(), %err, "could not open file");
        }
    }

    editor.run().context("editor error")?;
    tracing::info!(target: "runtime", "exiting");
    Ok(())
}
