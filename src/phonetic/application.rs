//! Accumulation of the primary and secondary keys.
//!
//! Every letter rule ends by appending a fragment to one or both keys through
//! [`KeyBuilder`]. Two conventions hold for all appends:
//!
//! - a vowel code `A` is never appended directly after another `A`
//! - exact-mode variants are chosen here, so rules state both spellings and
//!   never test the flag themselves

use smallvec::SmallVec;

use super::types::PhoneticKeys;

type KeyBuf = SmallVec<[u8; 16]>;

/// Growing pair of phonetic keys.
#[derive(Debug, Clone, Default)]
pub struct KeyBuilder {
    primary: KeyBuf,
    secondary: KeyBuf,
    exact: bool,
}

#[inline]
fn push(buf: &mut KeyBuf, fragment: &str) {
    if fragment == "A" && buf.last() == Some(&b'A') {
        return;
    }
    buf.extend_from_slice(fragment.as_bytes());
}

impl KeyBuilder {
    /// Empty builder; `exact` selects exact variants in [`KeyBuilder::add_exact`].
    pub fn new(exact: bool) -> Self {
        Self {
            primary: KeyBuf::new(),
            secondary: KeyBuf::new(),
            exact,
        }
    }

    /// Reset both keys, keeping the mode.
    pub fn clear(&mut self) {
        self.primary.clear();
        self.secondary.clear();
    }

    /// Append the same fragment to both keys.
    #[inline]
    pub fn add(&mut self, main: &str) {
        push(&mut self.primary, main);
        push(&mut self.secondary, main);
    }

    /// Append `main` to the primary key and `alt` to the secondary key.
    #[inline]
    pub fn add_alt(&mut self, main: &str, alt: &str) {
        push(&mut self.primary, main);
        push(&mut self.secondary, alt);
    }

    /// Append `exact` in exact mode, `approx` otherwise.
    #[inline]
    pub fn add_exact(&mut self, exact: &str, approx: &str) {
        if self.exact {
            self.add(exact);
        } else {
            self.add(approx);
        }
    }

    /// Two-key form of [`KeyBuilder::add_exact`].
    #[inline]
    pub fn add_exact_alt(&mut self, main_exact: &str, alt_exact: &str, main: &str, alt: &str) {
        if self.exact {
            self.add_alt(main_exact, alt_exact);
        } else {
            self.add_alt(main, alt);
        }
    }

    /// Length of the primary key so far.
    #[inline]
    pub fn primary_len(&self) -> usize {
        self.primary.len()
    }

    /// True if the primary key currently ends with `code`.
    #[inline]
    pub fn primary_ends_with(&self, code: &str) -> bool {
        self.primary.ends_with(code.as_bytes())
    }

    /// Length of the secondary key so far.
    #[inline]
    pub fn secondary_len(&self) -> usize {
        self.secondary.len()
    }

    /// True while at least one key is still shorter than `limit`.
    #[inline]
    pub fn within(&self, limit: usize) -> bool {
        self.primary.len() < limit || self.secondary.len() < limit
    }

    /// Truncate both keys to `limit` and produce the final pair.
    ///
    /// The secondary key is dropped when it equals the primary.
    pub fn finish(&mut self, limit: usize) -> PhoneticKeys {
        self.primary.truncate(limit);
        self.secondary.truncate(limit);
        // Keys only ever hold ASCII fragments.
        let primary = String::from_utf8_lossy(&self.primary).into_owned();
        let secondary = String::from_utf8_lossy(&self.secondary).into_owned();
        PhoneticKeys::new(primary, secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_collapses_repeated_vowel_code() {
        let mut keys = KeyBuilder::new(false);
        keys.add("A");
        keys.add("A");
        keys.add("K");
        keys.add("A");
        assert_eq!(keys.finish(8), PhoneticKeys::new("AKA", ""));
    }

    #[test]
    fn test_add_alt_tracks_keys_separately() {
        let mut keys = KeyBuilder::new(false);
        keys.add("A");
        keys.add_alt("K", "X");
        assert_eq!(keys.finish(8), PhoneticKeys::new("AK", "AX"));
    }

    #[test]
    fn test_add_exact_selects_variant() {
        let mut approx = KeyBuilder::new(false);
        approx.add_exact("B", "P");
        assert_eq!(approx.finish(8).primary, "P");

        let mut exact = KeyBuilder::new(true);
        exact.add_exact("B", "P");
        assert_eq!(exact.finish(8).primary, "B");
    }

    #[test]
    fn test_finish_truncates() {
        let mut keys = KeyBuilder::new(false);
        keys.add_alt("ABCDEFGHIJ", "ABC");
        assert!(keys.within(8));
        keys.add_alt("", "XYZWV");
        assert!(!keys.within(8));
        let out = keys.finish(8);
        assert_eq!(out.primary, "ABCDEFGH");
        assert_eq!(out.secondary, "ABCXYZWV");
    }
}
