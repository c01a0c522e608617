//! Positional matching over an upper-cased input word.
//!
//! Metaphone 3 rules look around the current letter at fixed offsets, often
//! before the start or past the end of the word. [`Word`] answers those
//! lookups with signed positions: anything out of range simply fails to
//! match, so rules never have to bounds-check.
//!
//! Candidate lists are scanned in order, and a scan stops at the first
//! candidate that would run past the end of the word. Rules therefore list
//! shorter candidates before longer ones.

use smallvec::SmallVec;

/// Check if a character is one of the vowels `AEIOUY`.
#[inline]
pub fn is_vowel_char(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
}

/// True if `chars` begins with every character of `s`.
#[inline]
fn starts_with(chars: &[char], s: &str) -> bool {
    let mut n = 0;
    for c in s.chars() {
        match chars.get(n) {
            Some(&b) if b == c => n += 1,
            _ => return false,
        }
    }
    true
}

/// True if `chars` holds exactly the characters of `s`.
#[inline]
fn equals(chars: &[char], s: &str) -> bool {
    let mut expected = s.chars();
    for &b in chars {
        match expected.next() {
            Some(c) if c == b => {}
            _ => return false,
        }
    }
    expected.next().is_none()
}

/// An upper-cased word addressed by signed character positions.
#[derive(Debug, Clone, Default)]
pub struct Word {
    chars: SmallVec<[char; 24]>,
}

impl Word {
    /// Upper-case `input` character by character and index it.
    pub fn new(input: &str) -> Self {
        let chars = input.chars().flat_map(char::to_uppercase).collect();
        Self { chars }
    }

    /// Number of characters.
    #[inline]
    pub fn len(&self) -> isize {
        self.chars.len() as isize
    }

    /// True for the empty word.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Position of the last character (`-1` for the empty word).
    #[inline]
    pub fn last(&self) -> isize {
        self.len() - 1
    }

    /// Character at `at`, or `'\0'` when out of range.
    #[inline]
    pub fn char_at(&self, at: isize) -> char {
        if at < 0 || at >= self.len() {
            return '\0';
        }
        self.chars[at as usize]
    }

    /// Checks the start position and the first candidate against the bounds
    /// of the word, returning the position as an index.
    fn anchor(&self, start: isize, candidates: &[&str]) -> Option<usize> {
        if start < 0 || start >= self.len() {
            return None;
        }
        let first = candidates.first()?;
        let start = start as usize;
        if start + first.len() > self.chars.len() {
            return None;
        }
        Some(start)
    }

    /// True if a candidate occurs starting at `start`.
    pub fn string_at(&self, start: isize, candidates: &[&str]) -> bool {
        let Some(start) = self.anchor(start, candidates) else {
            return false;
        };
        for cand in candidates {
            if start + cand.len() > self.chars.len() {
                return false;
            }
            if starts_with(&self.chars[start..], cand) {
                return true;
            }
        }
        false
    }

    /// True if a candidate occupies everything from `start` to the end.
    pub fn string_at_end(&self, start: isize, candidates: &[&str]) -> bool {
        let Some(start) = self.anchor(start, candidates) else {
            return false;
        };
        candidates
            .iter()
            .any(|cand| equals(&self.chars[start..], cand))
    }

    /// True if the word ends with a candidate.
    pub fn ends_with(&self, candidates: &[&str]) -> bool {
        for cand in candidates {
            if cand.len() > self.chars.len() {
                return false;
            }
            if equals(&self.chars[self.chars.len() - cand.len()..], cand) {
                return true;
            }
        }
        false
    }

    /// True if the whole word is one of the candidates.
    pub fn is_exactly(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|cand| equals(&self.chars, cand))
    }

    /// True if `needle` occurs anywhere in the word.
    pub fn contains(&self, needle: &str) -> bool {
        let n = needle.chars().count();
        if n > self.chars.len() {
            return false;
        }
        (0..=self.chars.len() - n).any(|i| starts_with(&self.chars[i..], needle))
    }

    /// True if the character at `at` is a vowel.
    #[inline]
    pub fn is_vowel(&self, at: isize) -> bool {
        is_vowel_char(self.char_at(at))
    }

    /// Words whose spelling suggests Slavic or Germanic origin.
    pub fn slavo_germanic(&self) -> bool {
        matches!(self.char_at(0), 'J' | 'W') || self.string_at(0, &["SCH", "SW"])
    }

    /// True if the text from `from` to the end is `root` or a simple inflection
    /// of it.
    pub fn root_or_inflections_from(&self, from: isize, root: &str) -> bool {
        if from < 0 || from >= self.len() {
            return false;
        }
        root_or_inflections(&self.chars[from as usize..], root)
    }

    /// [`Word::root_or_inflections_from`] over the whole word.
    #[inline]
    pub fn root_or_inflections(&self, root: &str) -> bool {
        root_or_inflections(&self.chars, root)
    }
}

/// True if `word` is `root` or a simple English inflection of it: `-S`,
/// `-ES`, `-ED`, `-ING`, `-INGLY` and `-Y`, with a final 'E' of the root
/// dropped before the vowel suffixes.
pub fn root_or_inflections(word: &[char], root: &str) -> bool {
    let root: SmallVec<[char; 16]> = root.chars().collect();
    let Some(&root_last) = root.last() else {
        return false;
    };
    let mut diff = word.len() as isize - root.len() as isize;
    if diff < 0 {
        return false;
    }

    let last = root.len() - 1;
    if word[..last] != root[..last] {
        return false;
    }

    let mut rest = &word[last..];
    if rest[0] == root_last {
        if diff == 0 {
            return true;
        }
        if diff == 1 && rest.get(1) == Some(&'S') {
            return true;
        }
    }

    if root_last == 'E' {
        if diff == 1 && rest.starts_with(&['E', 'D']) {
            return true;
        }
        // the 'E' itself now counts as a difference
        diff += 1;
    } else {
        if rest[0] != root_last {
            return false;
        }
        if diff == 2 && (rest[1..].starts_with(&['E', 'S']) || rest[1..].starts_with(&['E', 'D'])) {
            return true;
        }
        rest = &rest[1..];
    }

    match diff {
        3 => rest.starts_with(&['I', 'N', 'G']),
        5 => rest.starts_with(&['I', 'N', 'G', 'L', 'Y']),
        1 => rest.first() == Some(&'Y'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_char_at_out_of_range() {
        let w = Word::new("ack");
        assert_eq!(w.char_at(-1), '\0');
        assert_eq!(w.char_at(0), 'A');
        assert_eq!(w.char_at(2), 'K');
        assert_eq!(w.char_at(3), '\0');
        assert_eq!(w.last(), 2);
    }

    #[test]
    fn test_string_at_bounds() {
        let w = Word::new("knight");
        assert!(w.string_at(0, &["KN"]));
        assert!(w.string_at(2, &["XX", "IGHT"]));
        assert!(!w.string_at(3, &["GHTS"]));
        assert!(!w.string_at(-1, &["K"]));
        assert!(!w.string_at(6, &["T"]));
    }

    #[test]
    fn test_string_at_stops_at_first_overrun() {
        let w = Word::new("ab");
        assert!(w.string_at(0, &["A", "ABC"]));
        assert!(!w.string_at(0, &["X", "ABC", "AB"]));
    }

    #[test]
    fn test_string_at_end_needs_the_rest_of_the_word() {
        let w = Word::new("supernode");
        assert!(w.string_at_end(5, &["NODE"]));
        assert!(!w.string_at_end(5, &["NOD"]));
        assert!(!w.string_at_end(4, &["NODE"]));
    }

    #[test]
    fn test_whole_word_checks() {
        let w = Word::new("Schmidt");
        assert!(w.ends_with(&["DT", "MIDT"]));
        assert!(!w.ends_with(&["SSCHMIDT", "DT"]));
        assert!(w.is_exactly(&["SMITH", "SCHMIDT"]));
        assert!(!w.is_exactly(&["SCHMID"]));
        assert!(w.contains("HMI"));
        assert!(!w.contains("SCHMIDTS"));
    }

    #[test]
    fn test_uppercase_expands() {
        let w = Word::new("straße");
        assert_eq!(w.char_at(4), 'ß');
        let w = Word::new("ﬁx");
        assert_eq!(w.len(), 3);
        assert_eq!(w.char_at(0), 'F');
    }

    #[test]
    fn test_vowels_are_plain_ascii() {
        assert!(is_vowel_char('A'));
        assert!(is_vowel_char('Y'));
        assert!(!is_vowel_char('É'));
        assert!(!is_vowel_char('W'));
        assert!(!is_vowel_char('\0'));
    }

    #[test]
    fn test_slavo_germanic() {
        assert!(Word::new("Schmidt").slavo_germanic());
        assert!(Word::new("Wagner").slavo_germanic());
        assert!(Word::new("Jablonski").slavo_germanic());
        assert!(!Word::new("Smith").slavo_germanic());
    }

    #[test]
    fn test_root_or_inflections() {
        assert!(root_or_inflections(&chars("ACHE"), "ACHE"));
        assert!(root_or_inflections(&chars("ACHES"), "ACHE"));
        assert!(root_or_inflections(&chars("ACHED"), "ACHE"));
        assert!(root_or_inflections(&chars("ACHING"), "ACHE"));
        assert!(root_or_inflections(&chars("ACHINGLY"), "ACHE"));
        assert!(root_or_inflections(&chars("ACHY"), "ACHE"));
        assert!(root_or_inflections(&chars("FINGERED"), "FINGER"));
        assert!(root_or_inflections(&chars("FINGERES"), "FINGER"));
        assert!(root_or_inflections(&chars("FINGERING"), "FINGER"));
        assert!(!root_or_inflections(&chars("ACHER"), "ACHE"));
        assert!(!root_or_inflections(&chars("ACH"), "ACHE"));
        assert!(!root_or_inflections(&chars("HEADACHE"), "ACHE"));
    }

    #[test]
    fn test_root_or_inflections_from() {
        let w = Word::new("headaches");
        assert!(w.root_or_inflections_from(4, "ACHE"));
        assert!(!w.root_or_inflections_from(0, "ACHE"));
        assert!(!w.root_or_inflections_from(42, "ACHE"));
    }
}
