//! Metaphone 3 phonetic encoder.
//!
//! Metaphone 3 (Lawrence Philips, ruleset 2.1.3) maps an English word, or a
//! name as commonly spelled in English-language text, to a short consonant
//! skeleton. Words with two plausible pronunciations get a second key.
//!
//! The encoder walks the upper-cased word left to right. At each position the
//! rule for the current letter inspects the surrounding letters, appends a
//! fragment to one or both keys, and moves the cursor onto the last letter it
//! consumed. Encoding stops once both keys have reached the length cap; both
//! keys are then truncated to the cap.
//!
//! # Codes
//!
//! | code | sound                      | code | sound              |
//! |------|----------------------------|------|--------------------|
//! | `A`  | any vowel                  | `0`  | "th"               |
//! | `X`  | "sh", "ch"                 | `J`  | "j", soft "g"      |
//! | `K`  | "k", hard "c"/"g"          | `S`  | "s", soft "c"      |
//!
//! With `encode_exact` set, `B`, `D`, `G` and `V` keep their own codes
//! instead of merging with `P`, `T`, `K` and `F`. A plain `Z` is always `S`.
//!
//! # Example
//!
//! ```rust
//! use libmetaphone3::phonetic::Metaphone3;
//!
//! let mut encoder = Metaphone3::new();
//! assert_eq!(encoder.encode("Aaberg"), ("APRK".to_string(), String::new()));
//! ```

mod b_to_d;
mod f_to_h;
mod j_to_r;
mod s_to_z;
mod vowels;

use tracing::trace;

use super::application::KeyBuilder;
use super::matching::{is_vowel_char, Word};
use super::types::{EncoderOptions, PhoneticKeys};
use crate::error::Result;

/// Stateful Metaphone 3 encoder.
///
/// The encoder keeps scratch buffers between calls, so one instance should be
/// reused for many words. Every call is independent of the previous one.
#[derive(Debug, Clone)]
pub struct Metaphone3 {
    options: EncoderOptions,
    word: Word,
    current: isize,
    last: isize,
    keys: KeyBuilder,
    // Set by an "-LE" inversion such as "ABLE" so the next 'E' is not encoded.
    al_inversion: bool,
}

impl Default for Metaphone3 {
    fn default() -> Self {
        Self::from_options(EncoderOptions::default())
    }
}

impl Metaphone3 {
    /// Encoder with vowel and exact encoding disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder with the given options.
    ///
    /// The key length is clamped into its valid range; use
    /// [`Metaphone3::try_from_options`] to reject bad lengths instead.
    pub fn from_options(options: EncoderOptions) -> Self {
        let mut options = options;
        options.max_key_length = options
            .max_key_length
            .clamp(1, super::types::MAX_KEY_ALLOCATION);
        Self {
            options,
            word: Word::default(),
            current: 0,
            last: -1,
            keys: KeyBuilder::new(options.encode_exact),
            al_inversion: false,
        }
    }

    /// Encoder with validated options.
    pub fn try_from_options(options: EncoderOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_options(options))
    }

    /// Enable or disable vowel encoding.
    pub fn with_encode_vowels(mut self, encode_vowels: bool) -> Self {
        self.set_encode_vowels(encode_vowels);
        self
    }

    /// Enable or disable exact consonant encoding.
    pub fn with_encode_exact(mut self, encode_exact: bool) -> Self {
        self.set_encode_exact(encode_exact);
        self
    }

    /// Set the maximum key length, clamped to `1..=32`.
    pub fn with_key_length(mut self, length: usize) -> Self {
        self.options.max_key_length = length.clamp(1, super::types::MAX_KEY_ALLOCATION);
        self
    }

    /// Set vowel encoding.
    pub fn set_encode_vowels(&mut self, encode_vowels: bool) {
        self.options.encode_vowels = encode_vowels;
    }

    /// Set exact consonant encoding.
    pub fn set_encode_exact(&mut self, encode_exact: bool) {
        self.options.encode_exact = encode_exact;
        self.keys = KeyBuilder::new(encode_exact);
    }

    /// Whether non-initial vowels are encoded.
    pub fn encode_vowels(&self) -> bool {
        self.options.encode_vowels
    }

    /// Whether voiced consonants keep their own codes.
    pub fn encode_exact(&self) -> bool {
        self.options.encode_exact
    }

    /// Current options.
    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Encode `word` into `(primary, secondary)`.
    pub fn encode(&mut self, word: &str) -> (String, String) {
        self.encode_keys(word).into_pair()
    }

    /// Encode `word` into a [`PhoneticKeys`] value.
    pub fn encode_keys(&mut self, word: &str) -> PhoneticKeys {
        self.word = Word::new(word);
        self.current = 0;
        self.last = self.word.last();
        self.al_inversion = false;
        self.keys.clear();

        let limit = self.options.max_key_length;
        while self.current < self.word.len() {
            if !self.keys.within(limit) {
                break;
            }
            self.encode_current();
            // rules leave the cursor on the last letter they consumed
            self.current += 1;
        }

        let keys = self.keys.finish(limit);
        trace!(word, primary = %keys.primary, secondary = %keys.secondary, "metaphone3 encode");
        keys
    }

    fn encode_current(&mut self) {
        match self.char_at(self.current) {
            'B' => self.encode_b(),
            'ß' | 'Ç' => self.keys.add("S"),
            'C' => self.encode_c(),
            'D' => self.encode_d(),
            'F' => self.encode_f(),
            'G' => self.encode_g(),
            'H' => self.encode_h(),
            'J' => self.encode_j(),
            'K' => self.encode_k(),
            'L' => self.encode_l(),
            'M' => self.encode_m(),
            'N' => self.encode_n(),
            'Ñ' => self.keys.add("N"),
            'P' => self.encode_p(),
            'Q' => self.encode_q(),
            'R' => self.encode_r(),
            'S' => self.encode_s(),
            'T' => self.encode_t(),
            // eth, thorn
            'Ð' | 'Þ' => self.keys.add("0"),
            'V' => self.encode_v(),
            'W' => self.encode_w(),
            'X' => self.encode_x(),
            'Z' => self.encode_z(),
            c if is_vowel_char(c) => self.encode_vowel(),
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Cursor helpers shared by the letter rules
    // ------------------------------------------------------------------

    #[inline]
    fn char_at(&self, at: isize) -> char {
        self.word.char_at(at)
    }

    #[inline]
    fn string_at(&self, start: isize, candidates: &[&str]) -> bool {
        self.word.string_at(start, candidates)
    }

    #[inline]
    fn string_at_end(&self, start: isize, candidates: &[&str]) -> bool {
        self.word.string_at_end(start, candidates)
    }

    /// Candidates matched against the start of the word.
    #[inline]
    fn string_start(&self, candidates: &[&str]) -> bool {
        self.word.string_at(0, candidates)
    }

    /// Candidates matched against the end of the word.
    #[inline]
    fn string_end(&self, candidates: &[&str]) -> bool {
        self.word.ends_with(candidates)
    }

    /// Candidates matched against the whole word.
    #[inline]
    fn string_exact(&self, candidates: &[&str]) -> bool {
        self.word.is_exactly(candidates)
    }

    #[inline]
    fn is_vowel(&self, at: isize) -> bool {
        self.word.is_vowel(at)
    }

    #[inline]
    fn length(&self) -> isize {
        self.word.len()
    }

    /// Advance by different amounts depending on vowel encoding.
    ///
    /// Rules that consume a following vowel must leave it in place when vowels
    /// are being encoded.
    #[inline]
    fn advance(&mut self, if_not_vowels: isize, if_vowels: isize) {
        if self.options.encode_vowels {
            self.current += if_vowels;
        } else {
            self.current += if_not_vowels;
        }
    }

    /// Position of the last vowel in the run starting at `at`.
    ///
    /// `W` counts as a vowel, and so does the `H` of a `WH` digraph, except
    /// where they begin a Slavic ending such as "-WICZ" or "-OWSKI".
    fn skip_vowels(&self, at: isize) -> isize {
        let len = self.length();
        if at >= len {
            return len - 1;
        }
        let mut pos = at;
        loop {
            let it = self.char_at(pos);
            if !(is_vowel_char(it) || it == 'W') {
                break;
            }
            if self.string_at(pos, &["WICZ", "WITZ", "WIAK"])
                || self.string_at(pos - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
                || self.string_at_end(pos, &["WICKI", "WACKI"])
            {
                break;
            }
            pos += 1;
            if pos >= 2
                && self.char_at(pos - 1) == 'W'
                && self.char_at(pos) == 'H'
                && !self.string_at(
                    pos,
                    &[
                        "HOP", "HIDE", "HARD", "HEAD", "HAWK", "HERD", "HOOK", "HAND", "HOLE",
                        "HEART", "HOUSE", "HOUND", "HAMMER",
                    ],
                )
            {
                pos += 1;
            }
            if pos >= len {
                break;
            }
        }
        (pos - 1).max(0)
    }
}

/// Encode one word with the given options.
pub fn encode_word(word: &str, options: EncoderOptions) -> PhoneticKeys {
    Metaphone3::from_options(options).encode_keys(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(word: &str) -> (String, String) {
        Metaphone3::new().encode(word)
    }

    #[test]
    fn test_basic_words() {
        let cases = [
            ("A", "A", ""),
            ("ack", "AK", ""),
            ("eek", "AK", ""),
            ("ache", "AK", "AX"),
        ];
        for (input, primary, secondary) in cases {
            assert_eq!(
                encode(input),
                (primary.to_string(), secondary.to_string()),
                "encoding {input}"
            );
        }
    }

    #[test]
    fn test_aaberg() {
        assert_eq!(encode("Aaberg"), ("APRK".to_string(), String::new()));
    }

    #[test]
    fn test_encode_vowels() {
        let mut encoder = Metaphone3::new().with_encode_vowels(true);
        let (primary, _) = encoder.encode("supernode");
        assert_eq!(primary, "SAPARNAT");
    }

    #[test]
    fn test_empty_and_unencodable() {
        assert_eq!(encode(""), (String::new(), String::new()));
        assert_eq!(encode("1234 -"), (String::new(), String::new()));
    }

    #[test]
    fn test_case_insensitive() {
        let mut encoder = Metaphone3::new();
        assert_eq!(encoder.encode("AABERG"), encoder.encode("aaberg"));
    }

    #[test]
    fn test_exact_keeps_voiced_b() {
        let mut encoder = Metaphone3::new().with_encode_exact(true);
        assert_eq!(encoder.encode("Aaberg").0, "ABRG");
    }

    #[test]
    fn test_key_length_cap() {
        let mut encoder = Metaphone3::new().with_key_length(2);
        let (primary, secondary) = encoder.encode("Aaberg");
        assert_eq!(primary, "AP");
        assert!(secondary.is_empty());
    }

    #[test]
    fn test_encoder_is_reusable() {
        let mut encoder = Metaphone3::new();
        let first = encoder.encode("ache");
        encoder.encode("Aaberg");
        assert_eq!(encoder.encode("ache"), first);
    }

    #[test]
    fn test_try_from_options_rejects_zero_length() {
        let options = EncoderOptions {
            max_key_length: 0,
            ..EncoderOptions::default()
        };
        assert!(Metaphone3::try_from_options(options).is_err());
    }

    #[test]
    fn test_encode_word_matches_encoder() {
        let opts = EncoderOptions::new(true, false);
        assert_eq!(
            encode_word("supernode", opts).primary,
            Metaphone3::from_options(opts).encode("supernode").0
        );
    }
}
