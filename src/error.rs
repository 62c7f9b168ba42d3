//! The [`TwoBitError`] `enum` definition and error messages.
//!
use std::path::PathBuf;
use thiserror::Error;

/// The [`TwoBitError`] defines the standard set of errors that should
/// be passed to the user.
#[derive(Debug, Error)]
pub enum TwoBitError {
    // IO related errors
    #[error("File reading error: {0}")]
    IOError(#[source] std::io::Error),
    #[error("Cannot access '{}': {source}", path.display())]
    AccessError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unexpected end of data: the 2-bit file is truncated")]
    EndOfData,

    // Header validation errors
    #[error("Invalid 2-bit file. Signature in header should be 0x1A412743, found {0:#010x}")]
    BadSignature(u32),
    #[error("Invalid 2-bit file. File version in header should be 0, found {0}")]
    UnsupportedVersion(u32),
    #[error("Invalid 2-bit file. Reserved field in header should be 0, found {0}")]
    NonZeroReserved(u32),

    // Lookup and codec errors
    #[error("Sequence name '{0}' is not in the 2-bit file")]
    MissingSequence(String),
    #[error("Invalid 2-bit code {0}: codes must be in 0..=3")]
    InvalidBaseCode(u8),
}

impl TwoBitError {
    /// Whether this error means the input is not a valid 2-bit file
    /// (bad signature, or non-zero version/reserved header fields).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            TwoBitError::BadSignature(_)
                | TwoBitError::UnsupportedVersion(_)
                | TwoBitError::NonZeroReserved(_)
        )
    }
}

impl From<std::io::Error> for TwoBitError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => TwoBitError::EndOfData,
            _ => TwoBitError::IOError(err),
        }
    }
}
