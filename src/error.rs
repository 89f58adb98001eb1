//! Error types for `MacFbx`

use thiserror::Error;

/// The error type for `MacFbx` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== String Conversion Errors ====================
    /// The byte buffer handed over by the SDK is longer than an `i32` can
    /// count, which the engine's text APIs cannot address.
    #[error("string buffer too large: {len} bytes (limit is i32::MAX)")]
    StringTooLarge {
        /// The length of the rejected buffer in bytes.
        len: usize,
    },

    /// The byte buffer is not valid UTF-8.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// A specialized Result type for `MacFbx` operations.
pub type Result<T> = std::result::Result<T, Error>;
