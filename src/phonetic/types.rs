//! Value types for phonetic encoding.
//!
//! - [`EncoderOptions`] - the two ruleset switches plus the key length cap
//! - [`PhoneticKeys`] - the owned (primary, secondary) result of an encoding

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MetaphoneError, Result};

/// Default maximum length of each phonetic key.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 8;

/// Upper bound accepted for [`EncoderOptions::max_key_length`].
pub const MAX_KEY_ALLOCATION: usize = 32;

/// Configuration for a Metaphone 3 encoder.
///
/// # Fields
///
/// - `encode_vowels` - encode non-initial vowels (all as `A`) instead of dropping them
/// - `encode_exact` - keep voiced/unvoiced consonant pairs apart (`B`/`P`, `D`/`T`, `G`/`K`, ...)
/// - `max_key_length` - truncate each key to this many characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    /// Encode non-initial vowels
    pub encode_vowels: bool,
    /// Preserve finer consonant distinctions
    pub encode_exact: bool,
    /// Maximum length of each key
    pub max_key_length: usize,
}

impl EncoderOptions {
    /// Options with both switches set as given and the default key length.
    pub fn new(encode_vowels: bool, encode_exact: bool) -> Self {
        Self {
            encode_vowels,
            encode_exact,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }

    /// Check that the key length lies within `1..=MAX_KEY_ALLOCATION`.
    pub fn validate(&self) -> Result<()> {
        if self.max_key_length == 0 || self.max_key_length > MAX_KEY_ALLOCATION {
            return Err(MetaphoneError::InvalidKeyLength(self.max_key_length));
        }
        Ok(())
    }
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// The pair of keys produced for one word.
///
/// `secondary` is empty when the word has no alternate pronunciation, and is
/// never equal to a non-empty `primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhoneticKeys {
    /// Most likely pronunciation key
    pub primary: String,
    /// Alternate pronunciation key (may be empty)
    pub secondary: String,
}

impl PhoneticKeys {
    /// Build a key pair, clearing `secondary` when it duplicates `primary`.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        let primary = primary.into();
        let mut secondary = secondary.into();
        if secondary == primary {
            secondary.clear();
        }
        Self { primary, secondary }
    }

    /// True when both keys are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// The non-empty keys, primary first.
    pub fn alternates(&self) -> impl Iterator<Item = &str> {
        [self.primary.as_str(), self.secondary.as_str()]
            .into_iter()
            .filter(|k| !k.is_empty())
    }

    /// True when any key of `self` equals any key of `other`.
    ///
    /// This is the usual "sounds alike" test for Metaphone keys.
    pub fn matches(&self, other: &PhoneticKeys) -> bool {
        self.alternates()
            .any(|a| other.alternates().any(|b| a == b))
    }

    /// Consume into a `(primary, secondary)` tuple.
    pub fn into_pair(self) -> (String, String) {
        (self.primary, self.secondary)
    }
}

impl From<(String, String)> for PhoneticKeys {
    fn from((primary, secondary): (String, String)) -> Self {
        Self::new(primary, secondary)
    }
}

impl fmt::Display for PhoneticKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.secondary.is_empty() {
            write!(f, "{}", self.primary)
        } else {
            write!(f, "{} / {}", self.primary, self.secondary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clears_duplicate_secondary() {
        let keys = PhoneticKeys::new("AK", "AK");
        assert_eq!(keys.primary, "AK");
        assert_eq!(keys.secondary, "");
    }

    #[test]
    fn test_alternates_skips_empty() {
        let keys = PhoneticKeys::new("AK", "");
        assert_eq!(keys.alternates().collect::<Vec<_>>(), vec!["AK"]);

        let keys = PhoneticKeys::new("AK", "AX");
        assert_eq!(keys.alternates().collect::<Vec<_>>(), vec!["AK", "AX"]);
    }

    #[test]
    fn test_matches_on_secondary() {
        let a = PhoneticKeys::new("AK", "AX");
        let b = PhoneticKeys::new("AX", "");
        assert!(a.matches(&b));
        assert!(b.matches(&a));
        assert!(!a.matches(&PhoneticKeys::default()));
    }

    #[test]
    fn test_display() {
        assert_eq!(PhoneticKeys::new("AK", "").to_string(), "AK");
        assert_eq!(PhoneticKeys::new("AK", "AX").to_string(), "AK / AX");
    }

    #[test]
    fn test_options_validation() {
        assert!(EncoderOptions::default().validate().is_ok());
        let bad = EncoderOptions {
            max_key_length: 0,
            ..EncoderOptions::default()
        };
        assert_eq!(bad.validate(), Err(MetaphoneError::InvalidKeyLength(0)));
        let bad = EncoderOptions {
            max_key_length: MAX_KEY_ALLOCATION + 1,
            ..EncoderOptions::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_options_serde_defaults() {
        let opts: EncoderOptions = serde_json::from_str(r#"{"encode_vowels": true}"#).unwrap();
        assert!(opts.encode_vowels);
        assert!(!opts.encode_exact);
        assert_eq!(opts.max_key_length, DEFAULT_MAX_KEY_LENGTH);
    }
}
