//! File-backed session persistence.
//!
//! # Responsibility
//! - Keep the working snapshot across application restarts without an
//!   explicit export.
//!
//! # Invariants
//! - One session file per store directory.
//! - A session older than 24 hours is treated as absent, not as an error.
//! - Corrupt session data surfaces as a typed error; it is never silently
//!   replaced.

use crate::model::snapshot::BillingSnapshot;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// File name of the persisted session inside the store directory.
pub const SESSION_FILE_NAME: &str = "rentshare_session.json";

const SESSION_EXPIRY_MS: i64 = 24 * 60 * 60 * 1000;

/// Failure while persisting or restoring a session.
#[derive(Debug)]
pub enum SessionError {
    Io(std::io::Error),
    Corrupt(serde_json::Error),
    Clock(String),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "session file I/O failed: {err}"),
            Self::Corrupt(err) => write!(f, "session data is corrupt: {err}"),
            Self::Clock(message) => write!(f, "system clock error: {message}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(err) => Some(err),
            Self::Clock(_) => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(value: serde_json::Error) -> Self {
        Self::Corrupt(value)
    }
}

#[derive(Serialize, Deserialize)]
struct SessionRecord {
    saved_at_epoch_ms: i64,
    snapshot: BillingSnapshot,
}

/// Session store rooted at one directory.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store writing to `<dir>/rentshare_session.json`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE_NAME),
        }
    }

    /// Persists the snapshot with the current timestamp. The store
    /// directory is created when missing.
    pub fn save(&self, snapshot: &BillingSnapshot) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let record = SessionRecord {
            saved_at_epoch_ms: now_epoch_ms()?,
            snapshot: snapshot.clone(),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&record)?)?;
        info!(
            "event=session_saved module=session status=ok path={}",
            self.path.display()
        );
        Ok(())
    }

    /// Restores the persisted snapshot.
    ///
    /// Returns `None` when no session exists or the stored one has expired.
    pub fn load(&self) -> Result<Option<BillingSnapshot>, SessionError> {
        let Some(record) = self.read_record()? else {
            return Ok(None);
        };
        let age_ms = now_epoch_ms()? - record.saved_at_epoch_ms;
        if age_ms > SESSION_EXPIRY_MS {
            info!("event=session_expired module=session status=skipped age_ms={age_ms}");
            return Ok(None);
        }
        Ok(Some(record.snapshot))
    }

    /// Removes the persisted session, if any.
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Timestamp (epoch milliseconds) of the persisted session, if any.
    /// Expiry is not applied here; this is status display data.
    pub fn status(&self) -> Result<Option<i64>, SessionError> {
        Ok(self.read_record()?.map(|record| record.saved_at_epoch_ms))
    }

    fn read_record(&self) -> Result<Option<SessionRecord>, SessionError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }
}

fn now_epoch_ms() -> Result<i64, SessionError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| SessionError::Clock(err.to_string()))?;
    i64::try_from(elapsed.as_millis())
        .map_err(|_| SessionError::Clock("timestamp out of range".to_string()))
}
