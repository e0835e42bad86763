use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

/// Install a JSON file subscriber when a log path is configured. The terminal
/// is owned by the picker, so nothing is ever logged to stdout or stderr.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    // A subscriber set earlier (tests) wins; that is fine.
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}
