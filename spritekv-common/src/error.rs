//! Error types for the codecs, metadata readers and stores.

use std::io;

/// Error returned when a record cannot be written.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Byte sink rejected write: {0}")]
    Io(#[from] io::Error),

    #[error("Animation has {frames} frames but {durations} durations")]
    LengthMismatch { frames: usize, durations: usize },

    #[error("{field} length {len} does not fit a signed 32-bit count")]
    CountOverflow { field: &'static str, len: usize },
}

/// Error returned when bytes cannot be turned back into a record.
///
/// Decoders never hand back a partially populated value.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Input truncated while reading {field}")]
    Truncated { field: &'static str },

    #[error("Malformed {field}: {reason}")]
    Malformed { field: &'static str, reason: String },
}

impl DecodeError {
    pub(crate) fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            field,
            reason: reason.into(),
        }
    }

    /// True for [`DecodeError::Truncated`]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Structured-text metadata did not match the expected schema.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    #[error("Failed to parse animations document: {0}")]
    Animations(#[source] serde_yaml::Error),

    #[error("Failed to parse spritesheets document: {0}")]
    Spritesheets(#[source] serde_yaml::Error),
}

/// Error from a [`KvStore`](crate::store::KvStore) backend or the typed facade.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode value for key {key:?}: {source}")]
    Encode {
        key: String,
        #[source]
        source: EncodeError,
    },

    #[error("Failed to decode value for key {key:?}: {source}")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },
}
