//! Crate error type.

/// Failure modes exposed by this crate's public API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `apply_sha3_padding` (or a caller built on it) was given an output
    /// buffer too small to hold the padded message.
    #[error("padded message needs {needed} bytes but only {available} were supplied")]
    PaddingBufferTooSmall { needed: usize, available: usize },
}
