//! File logging for the desktop shell.
//!
//! Logs go to `desktop.log` in the app data directory. On each startup the
//! previous logs are rotated (`desktop.log` → `.1` → `.2` → `.3`).

use std::io::Write;
use std::path::Path;

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Env var holding an `EnvFilter` directive, e.g. `kogniterm_desktop_lib=debug`.
pub const LOG_FILTER_ENV: &str = "KOGNITERM_LOG";

const DEFAULT_FILTER: &str = "kogniterm_desktop_lib=info,warn";

const KEEP_ROTATED: u32 = 3;

/// Install the global tracing subscriber.
///
/// Falls back to stderr when the log file cannot be opened.
pub fn init_tracing(log_dir: &Path) {
    let _ = std::fs::create_dir_all(log_dir);
    let log_path = log_dir.join("desktop.log");

    rotate_log_file(&log_path, KEEP_ROTATED);

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);

    match file {
        Ok(file) => {
            fmt::fmt()
                .with_env_filter(filter)
                .with_writer(FlushingWriter::new(file))
                .with_ansi(false)
                .with_target(true)
                .init();
        }
        Err(e) => {
            fmt::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!(path = %log_path.display(), error = %e, "cannot open log file, logging to stderr");
        }
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %log_dir.display(),
        log_file = %log_path.display(),
        pid = std::process::id(),
        "=== KogniTerm Desktop starting ==="
    );
}

/// Shift `base` → `base.1` → … → `base.{keep}`; the oldest is deleted.
pub(crate) fn rotate_log_file(base_path: &Path, keep: u32) {
    let _ = std::fs::remove_file(format!("{}.{keep}", base_path.display()));

    for i in (1..keep).rev() {
        let from = format!("{}.{i}", base_path.display());
        let to = format!("{}.{}", base_path.display(), i + 1);
        let _ = std::fs::rename(&from, &to);
    }

    if base_path.exists() {
        let _ = std::fs::rename(base_path, format!("{}.1", base_path.display()));
    }
}

/// A writer that wraps `std::fs::File` and flushes after every write.
///
/// `tracing-subscriber` buffers log output internally. Without explicit
/// flushing, log entries may sit in OS buffers and be lost on crash.
/// This wrapper ensures each log line is on disk immediately.
///
/// Performance impact is minimal for a desktop app with a handful of log
/// lines per form submission.
#[derive(Clone)]
struct FlushingWriter {
    file: std::sync::Arc<std::sync::Mutex<std::fs::File>>,
}

impl FlushingWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: std::sync::Arc::new(std::sync::Mutex::new(file)),
        }
    }
}

impl Write for FlushingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut f = self
            .file
            .lock()
            .map_err(|e| std::io::Error::other(format!("lock poisoned: {e}")))?;
        let n = f.write(buf)?;
        f.flush()?;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut f = self
            .file
            .lock()
            .map_err(|e| std::io::Error::other(format!("lock poisoned: {e}")))?;
        f.flush()
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for FlushingWriter {
    type Writer = FlushingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
