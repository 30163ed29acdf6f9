//! Session persistence: snapshots of every open tab, restored on startup

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Default session file, relative to the working directory
pub const SESSION_FILE: &str = ".session.json";

/// One tab as stored in the session file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEntry {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub file_path: Option<PathBuf>,
    pub content: String,
}

/// JSON strings must be UTF-8; a path that is not gets written lossily so
/// one odd file name never blocks the rest of the snapshot.
fn serialize_path_lossy<S: Serializer>(
    path: &Option<PathBuf>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match path {
        Some(path) => match path.to_str() {
            Some(text) => serializer.serialize_some(text),
            None => {
                let lossy = path.to_string_lossy();
                tracing::warn!("Session path is not UTF-8, storing as {}", lossy);
                serializer.serialize_some(&lossy)
            }
        },
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session file {} is not a valid session: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode session: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Reads and writes the session file.
///
/// Every snapshot is a full rewrite of the file with the content of all open
/// tabs; there is no diffing and no versioning.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the session file with `entries`
    pub fn snapshot(&self, entries: &[SessionEntry]) -> Result<(), SessionError> {
        let json = serde_json::to_string(entries).map_err(SessionError::Encode)?;
        std::fs::write(&self.path, json).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(
            "Saved session with {} tab(s) to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the session file. `Ok(None)` means there is no session yet.
    pub fn restore(&self) -> Result<Option<Vec<SessionEntry>>, SessionError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let entries = serde_json::from_str(&content).map_err(|source| SessionError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(entries))
    }

    /// Read the session, treating any failure as "no session"
    pub fn restore_or_empty(&self) -> Vec<SessionEntry> {
        match self.restore() {
            Ok(Some(entries)) => {
                tracing::info!("Restoring {} tab(s) from {}", entries.len(), self.path.display());
                entries
            }
            Ok(None) => {
                tracing::debug!("No session at {}", self.path.display());
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Session restore failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Fires at a fixed interval when polled from the frame loop
#[derive(Debug, Clone)]
pub struct AutoSaveTimer {
    interval: Option<Duration>,
    next_due: Instant,
}

impl AutoSaveTimer {
    /// A zero interval disables the timer
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = (!interval.is_zero()).then_some(interval);
        Self {
            interval,
            next_due: now + interval.unwrap_or_default(),
        }
    }

    /// Returns `true` once per elapsed interval and schedules the next tick
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.interval {
            Some(interval) if now >= self.next_due => {
                self.next_due = now + interval;
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, `None` when disabled
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.interval
            .map(|_| self.next_due.saturating_duration_since(now))
    }
}
