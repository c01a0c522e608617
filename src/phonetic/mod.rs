//! Metaphone 3 phonetic encoding.
//!
//! The encoder turns a word into one or two short keys that sound-alike
//! spellings share. "Smith" and "Schmidt" collide, as do "Catherine" and
//! "Kathryn", which makes the keys usable for fuzzy name search and
//! deduplication.
//!
//! # Layout
//!
//! - [`types`] - options and the encoded key pair
//! - [`matching`] - positional lookups over the upper-cased input
//! - [`application`] - accumulation of primary and secondary keys
//! - [`metaphone3`] - the encoder and its per-letter rules
//!
//! # Usage
//!
//! ```rust
//! use libmetaphone3::phonetic::{EncoderOptions, Metaphone3, encode_word};
//!
//! let mut encoder = Metaphone3::new();
//! assert_eq!(encoder.encode("ache"), ("AK".to_string(), "AX".to_string()));
//!
//! let keys = encode_word("supernode", EncoderOptions::new(true, false));
//! assert_eq!(keys.primary, "SAPARNAT");
//! ```

pub mod application;
pub mod matching;
pub mod metaphone3;
pub mod types;

pub use application::KeyBuilder;
pub use matching::Word;
pub use metaphone3::{encode_word, Metaphone3};
pub use types::{EncoderOptions, PhoneticKeys, DEFAULT_MAX_KEY_LENGTH, MAX_KEY_ALLOCATION};
