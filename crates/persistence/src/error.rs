// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales::StoreError;

/// Failures of the `SQLite` override store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The database file could not be opened.
    Connection(String),
    /// Embedded migrations did not apply.
    Migration(String),
    /// A statement failed.
    Query(String),
    /// The database path is not valid UTF-8.
    InvalidPath,
    /// The JSON stored under a settings key does not decode.
    MalformedSetting { key: String, reason: String },
    /// A value could not be encoded for storage.
    Encoding(String),
    /// A change-log row could not be turned back into an audit event.
    CorruptRecord { event_id: i64, reason: String },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(msg) => write!(f, "Could not open schedule database: {msg}"),
            Self::Migration(msg) => write!(f, "Schedule database migration failed: {msg}"),
            Self::Query(msg) => write!(f, "Schedule database query failed: {msg}"),
            Self::InvalidPath => write!(f, "Database path is not valid UTF-8"),
            Self::MalformedSetting { key, reason } => {
                write!(f, "Stored setting '{key}' is malformed: {reason}")
            }
            Self::Encoding(msg) => write!(f, "Could not encode value for storage: {msg}"),
            Self::CorruptRecord { event_id, reason } => {
                write!(f, "Change log entry {event_id} is corrupt: {reason}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Query(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<time::error::Format> for PersistenceError {
    fn from(err: time::error::Format) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        Self(err.to_string())
    }
}
