//! Append-only history log backed by a flat text file.

use super::codec::{decode_record, encode_record};
use crate::error::AppError;
use crate::request::RequestDescriptor;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A decodable history line together with the request it describes.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub line: String,
    pub request: RequestDescriptor,
}

/// History file handle.
///
/// The file is created on first append and never rewritten. Appends are
/// serialized through a process-local lock; there is no cross-process
/// locking.
pub struct HistoryLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one encoded record.
    pub fn append(&self, descriptor: &RequestDescriptor) -> Result<(), AppError> {
        let line = encode_record(descriptor);
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| AppError::Internal(format!("Lock error: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        tracing::debug!(path = %self.path.display(), "Appended history record");
        Ok(())
    }

    /// All lines in storage order, oldest first. A missing file is empty.
    /// Lines that are not valid UTF-8 are skipped.
    pub fn load_lines(&self) -> Result<Vec<String>, AppError> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::HistoryIo(e)),
        };

        let content = content.strip_suffix(b"\n").unwrap_or(&content[..]);
        if content.is_empty() {
            return Ok(Vec::new());
        }

        let mut skipped = 0usize;
        let lines: Vec<String> = content
            .split(|b| *b == b'\n')
            .filter_map(|raw| {
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                match std::str::from_utf8(raw) {
                    Ok(line) => Some(line.to_string()),
                    Err(_) => {
                        skipped += 1;
                        None
                    }
                }
            })
            .collect();

        if skipped > 0 {
            tracing::debug!(skipped, "Skipped history lines that are not valid UTF-8");
        }
        Ok(lines)
    }

    /// Decoded entries in storage order; undecodable lines are skipped.
    pub fn load_entries(&self) -> Result<Vec<HistoryEntry>, AppError> {
        let lines = self.load_lines()?;
        let total = lines.len();
        let entries: Vec<HistoryEntry> = lines
            .into_iter()
            .filter_map(|line| {
                decode_record(&line).map(|request| HistoryEntry { line, request })
            })
            .collect();

        if entries.len() < total {
            tracing::debug!(
                skipped = total - entries.len(),
                "Skipped undecodable history lines"
            );
        }
        Ok(entries)
    }
}
