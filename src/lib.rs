//! # libmetaphone3
//!
//! Metaphone 3 phonetic encoding with a C-compatible boundary.
//!
//! Metaphone 3 maps an English word or name to a primary and an optional
//! secondary phonetic key. Words that sound alike share a key, so the keys
//! work as an index for fuzzy name matching.
//!
//! ## Example
//!
//! ```rust
//! use libmetaphone3::prelude::*;
//!
//! let mut encoder = Metaphone3::new();
//! let (primary, secondary) = encoder.encode("Schmidt");
//! assert_eq!(primary, "XMT");
//! assert_eq!(secondary, "");
//! ```
//!
//! C callers link the `cdylib` or `staticlib` and use
//! [`ffi::EncodeMetaphone`] together with [`ffi::FreeMetaphoneResult`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ffi;
pub mod phonetic;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{MetaphoneError, Result};
    pub use crate::ffi::metaphone3;
    pub use crate::phonetic::{encode_word, EncoderOptions, Metaphone3, PhoneticKeys};
}
