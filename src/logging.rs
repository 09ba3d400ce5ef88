//! Logging setup.
//!
//! A TUI can't log to stdout, so records go to a log file. With console
//! patching on, records are held in a `ConsoleCapture` buffer instead and
//! printed to stderr once the terminal has been restored.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Shared in-memory sink for log records
#[derive(Clone, Default)]
pub struct ConsoleCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl ConsoleCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything captured so far, leaving the buffer empty
    pub fn drain(&self) -> String {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        let bytes = std::mem::take(&mut *buffer);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_empty()
    }
}

pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Write out whatever `capture` holds, draining it. No-op when empty.
pub fn replay(capture: &ConsoleCapture, out: &mut impl Write) -> io::Result<()> {
    if capture.is_empty() {
        return Ok(());
    }
    out.write_all(capture.drain().as_bytes())?;
    out.flush()
}

impl<'a> MakeWriter<'a> for ConsoleCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

fn env_filter() -> EnvFilter {
    // RUST_LOG controls the level, e.g. RUST_LOG=debug
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// `capture` set: records go to the capture buffer. Otherwise they are
/// appended to `log_path`.
pub fn init(log_path: &Path, capture: Option<&ConsoleCapture>) -> Result<()> {
    match capture {
        Some(capture) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(capture.clone())
                .with_ansi(false)
                .init();
        }
        None => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .with_context(|| format!("Failed to open log file {:?}", log_path))?;

            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(log_file))
                .with_ansi(false) // No color codes in log file
                .init();
        }
    }
    Ok(())
}
