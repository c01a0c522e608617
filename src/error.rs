//! Error types for the encoder and its C boundary.

use thiserror::Error;

/// Errors that can occur when configuring the encoder or crossing the C boundary.
///
/// Encoding itself never fails: empty or unencodable input yields empty keys.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetaphoneError {
    /// The word contains a NUL byte and cannot be passed as a C string.
    #[error("word contains a NUL byte at position {position}")]
    InteriorNul {
        /// Byte offset of the first NUL
        position: usize,
    },

    /// The requested key length is zero or exceeds the allocation limit.
    #[error("key length {0} is out of range (1..={max})", max = crate::phonetic::MAX_KEY_ALLOCATION)]
    InvalidKeyLength(usize),

    /// The boundary returned a null key pointer.
    #[error("encoder returned a null {0} key")]
    NullKey(&'static str),
}

impl From<std::ffi::NulError> for MetaphoneError {
    fn from(err: std::ffi::NulError) -> Self {
        MetaphoneError::InteriorNul {
            position: err.nul_position(),
        }
    }
}

/// A specialized `Result` type for encoder operations.
pub type Result<T> = std::result::Result<T, MetaphoneError>;
