//! Property-based tests for the Metaphone 3 encoder using proptest

use libmetaphone3::ffi::metaphone3;
use libmetaphone3::phonetic::{encode_word, EncoderOptions, Metaphone3, PhoneticKeys};
use libmetaphone3::phonetic::MAX_KEY_ALLOCATION;
use proptest::prelude::*;

// Strategy for generating ASCII words in mixed case
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,16}"
}

// Strategy for arbitrary text, including punctuation and non-ASCII letters
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ÇÑßŠŽÐÞçñšžàéü'\\-]{0,24}"
}

// Strategy for words built from consonant-vowel syllables
fn syllable_strategy() -> impl Strategy<Value = String> {
    "[AEIOU]?([BCDFGJKLMNPRSTVXZ][AEIOU]){1,5}[BCDFGJKLMNPRSTVXZ]?"
}

fn options_strategy() -> impl Strategy<Value = EncoderOptions> {
    (any::<bool>(), any::<bool>(), 1..=MAX_KEY_ALLOCATION).prop_map(
        |(encode_vowels, encode_exact, max_key_length)| EncoderOptions {
            encode_vowels,
            encode_exact,
            max_key_length,
        },
    )
}

// Fold each voiced code onto the unvoiced code the default mode uses
fn devoice(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            'B' => 'P',
            'D' => 'T',
            'G' => 'K',
            'V' => 'F',
            'Z' => 'S',
            other => other,
        })
        .collect()
}

// Drop every vowel code after the first position
fn without_vowel_codes(key: &str) -> String {
    let mut chars = key.chars();
    let first = chars.next().map(String::from).unwrap_or_default();
    first + &chars.filter(|&c| c != 'A').collect::<String>()
}

fn secondary_or_primary(keys: &PhoneticKeys) -> &str {
    if keys.secondary.is_empty() {
        &keys.primary
    } else {
        &keys.secondary
    }
}

fn uncapped(encode_vowels: bool, encode_exact: bool) -> EncoderOptions {
    EncoderOptions {
        encode_vowels,
        encode_exact,
        max_key_length: MAX_KEY_ALLOCATION,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_encoding_is_deterministic(word in text_strategy(), options in options_strategy()) {
        let mut reused = Metaphone3::from_options(options);
        reused.encode("Schmidt");
        prop_assert_eq!(reused.encode_keys(&word), encode_word(&word, options));
    }

    #[test]
    fn prop_keys_respect_length_cap(word in text_strategy(), options in options_strategy()) {
        let keys = encode_word(&word, options);
        prop_assert!(keys.primary.len() <= options.max_key_length);
        prop_assert!(keys.secondary.len() <= options.max_key_length);
    }

    #[test]
    fn prop_secondary_differs_from_primary(word in text_strategy(), options in options_strategy()) {
        let keys = encode_word(&word, options);
        prop_assert!(keys.secondary.is_empty() || keys.secondary != keys.primary);
    }

    #[test]
    fn prop_keys_use_code_alphabet(word in text_strategy(), options in options_strategy()) {
        let keys = encode_word(&word, options);
        for key in [&keys.primary, &keys.secondary] {
            prop_assert!(key.chars().all(|c| c.is_ascii_uppercase() || c == '0'), "key {:?}", key);
        }
    }

    #[test]
    fn prop_case_insensitive(word in word_strategy(), options in options_strategy()) {
        prop_assert_eq!(
            encode_word(&word.to_lowercase(), options),
            encode_word(&word.to_uppercase(), options)
        );
    }

    #[test]
    fn prop_ffi_wrapper_matches_encoder(word in text_strategy(), vowels in any::<bool>(), exact in any::<bool>()) {
        let through_c = metaphone3(&word, vowels, exact).unwrap();
        prop_assert_eq!(through_c, encode_word(&word, EncoderOptions::new(vowels, exact)).into_pair());
    }

    #[test]
    fn prop_exact_only_splits_voiced_codes(word in word_strategy()) {
        let plain = encode_word(&word, uncapped(false, false));
        let exact = encode_word(&word, uncapped(false, true));
        prop_assert_eq!(devoice(&exact.primary), plain.primary);
    }

    #[test]
    fn prop_vowels_only_add_vowel_codes(word in syllable_strategy()) {
        let plain = encode_word(&word, uncapped(false, false));
        let vowels = encode_word(&word, uncapped(true, false));
        prop_assert_eq!(without_vowel_codes(&vowels.primary), without_vowel_codes(&plain.primary));
        prop_assert_eq!(
            without_vowel_codes(secondary_or_primary(&vowels)),
            without_vowel_codes(secondary_or_primary(&plain))
        );
    }
}
