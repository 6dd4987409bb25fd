//! Keyset pagination utilities.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of rows per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Upper bound on rows per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Error type for cursor operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("Invalid cursor format")]
    InvalidFormat,
    #[error("Invalid cursor encoding")]
    InvalidEncoding,
    #[error("Invalid timestamp in cursor")]
    InvalidTimestamp,
    #[error("Invalid ID in cursor")]
    InvalidId,
}

/// Position of the last row of a page, ordered by `(timestamp DESC, id DESC)`.
///
/// The id breaks ties between rows created in the same transaction, which
/// share a server-assigned timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub timestamp: DateTime<Utc>,
    pub id: i32,
}

impl Cursor {
    pub fn new(timestamp: DateTime<Utc>, id: i32) -> Self {
        Self { timestamp, id }
    }

    /// Encodes the cursor as `base64(RFC3339_timestamp:id)`.
    pub fn encode(&self) -> String {
        let raw = format!(
            "{}:{}",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            self.id
        );
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    /// Decodes a cursor previously produced by [`Cursor::encode`].
    pub fn decode(cursor: &str) -> Result<Self, CursorError> {
        let decoded = URL_SAFE_NO_PAD
            .decode(cursor)
            .map_err(|_| CursorError::InvalidEncoding)?;
        let s = String::from_utf8(decoded).map_err(|_| CursorError::InvalidFormat)?;

        // The timestamp itself contains colons
        let colon_pos = s.rfind(':').ok_or(CursorError::InvalidFormat)?;
        let id: i32 = s[colon_pos + 1..]
            .parse()
            .map_err(|_| CursorError::InvalidId)?;
        let timestamp = DateTime::parse_from_rfc3339(&s[..colon_pos])
            .map_err(|_| CursorError::InvalidTimestamp)?
            .with_timezone(&Utc);

        Ok(Self { timestamp, id })
    }
}

/// Clamps a requested page size into `1..=MAX_PAGE_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
}
