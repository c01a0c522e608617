//! C ABI for the Metaphone 3 encoder.
//!
//! Exposes two functions to C callers:
//!
//! - [`EncodeMetaphone`] - encode a word, returning two freshly allocated strings
//! - [`FreeMetaphoneResult`] - release the strings of one result
//!
//! Every result returned by `EncodeMetaphone` must be passed to
//! `FreeMetaphoneResult` exactly once. Releasing a result twice, or releasing
//! memory that did not come from `EncodeMetaphone`, is undefined behavior.
//!
//! # Example (C)
//!
//! ```c
//! #include "libmetaphone3.h"
//!
//! MetaphoneResult r = EncodeMetaphone("Thompson", false, false);
//! printf("%s %s\n", r.primary, r.secondary);
//! FreeMetaphoneResult(r);
//! ```
//!
//! Rust callers should prefer [`metaphone3`], which goes through the same
//! surface and releases the result on every path.

use std::borrow::Cow;
use std::ffi::{c_char, CStr, CString};
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::error::{MetaphoneError, Result};
use crate::phonetic::{encode_word, EncoderOptions};

// Strings handed out by EncodeMetaphone and not yet released.
static LIVE_ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

/// Result record shared with C callers.
///
/// Both members are NUL-terminated strings owned by this library until passed
/// to [`FreeMetaphoneResult`]. `secondary` is the empty string when the word
/// has no alternate key.
#[repr(C)]
#[derive(Debug)]
pub struct MetaphoneResult {
    /// Primary key
    pub primary: *mut c_char,
    /// Secondary key, possibly empty
    pub secondary: *mut c_char,
}

/// Number of key strings currently handed out and not yet released.
///
/// Paired encode/release calls leave this unchanged.
pub fn live_allocations() -> usize {
    LIVE_ALLOCATIONS.load(Ordering::SeqCst)
}

fn into_raw_key(key: String) -> *mut c_char {
    // Keys are ASCII codes and never contain NUL.
    let owned = CString::new(key).unwrap_or_default();
    LIVE_ALLOCATIONS.fetch_add(1, Ordering::SeqCst);
    owned.into_raw()
}

unsafe fn release_key(key: *mut c_char) {
    if key.is_null() {
        return;
    }
    drop(CString::from_raw(key));
    LIVE_ALLOCATIONS.fetch_sub(1, Ordering::SeqCst);
}

/// Encode a word into its primary and secondary Metaphone 3 keys.
///
/// A null `word` encodes as the empty word. Bytes that are not valid UTF-8 are
/// replaced before encoding. The returned strings are always non-null.
///
/// # Safety
///
/// `word` must be null or point to a valid NUL-terminated string that stays
/// alive for the duration of the call. The result must be released with
/// [`FreeMetaphoneResult`] exactly once.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn EncodeMetaphone(
    word: *const c_char,
    encode_vowels: bool,
    encode_exact: bool,
) -> MetaphoneResult {
    let word: Cow<'_, str> = if word.is_null() {
        Cow::Borrowed("")
    } else {
        CStr::from_ptr(word).to_string_lossy()
    };

    let (primary, secondary) =
        encode_word(&word, EncoderOptions::new(encode_vowels, encode_exact)).into_pair();

    let result = MetaphoneResult {
        primary: into_raw_key(primary),
        secondary: into_raw_key(secondary),
    };
    debug!(
        word = %word,
        encode_vowels,
        encode_exact,
        live = live_allocations(),
        "allocated metaphone result"
    );
    result
}

/// Release the strings of a result returned by [`EncodeMetaphone`].
///
/// Null members are ignored.
///
/// # Safety
///
/// Each non-null member must come from `EncodeMetaphone` and must not have
/// been released already. The member pointers are dangling after this call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn FreeMetaphoneResult(result: MetaphoneResult) {
    release_key(result.primary);
    release_key(result.secondary);
    debug!(live = live_allocations(), "released metaphone result");
}

/// Owns a [`MetaphoneResult`] and releases it when dropped.
struct OwnedResult(MetaphoneResult);

impl OwnedResult {
    fn key(&self, ptr: *const c_char, which: &'static str) -> Result<String> {
        if ptr.is_null() {
            return Err(MetaphoneError::NullKey(which));
        }
        // SAFETY: non-null members are NUL-terminated strings owned by self.
        let key = unsafe { CStr::from_ptr(ptr) };
        Ok(key.to_string_lossy().into_owned())
    }
}

impl Drop for OwnedResult {
    fn drop(&mut self) {
        let result = MetaphoneResult {
            primary: std::mem::replace(&mut self.0.primary, ptr::null_mut()),
            secondary: std::mem::replace(&mut self.0.secondary, ptr::null_mut()),
        };
        // SAFETY: the members came from EncodeMetaphone and are released once.
        unsafe { FreeMetaphoneResult(result) };
    }
}

/// Encode `word` through the C surface and copy the keys out.
///
/// Returns [`MetaphoneError::InteriorNul`] when `word` contains a NUL byte,
/// since it could not be passed to C intact.
///
/// # Examples
///
/// ```rust
/// use libmetaphone3::ffi::metaphone3;
///
/// let (primary, secondary) = metaphone3("ache", false, false).unwrap();
/// assert_eq!((primary.as_str(), secondary.as_str()), ("AK", "AX"));
/// ```
pub fn metaphone3(word: &str, encode_vowels: bool, encode_exact: bool) -> Result<(String, String)> {
    let c_word = CString::new(word)?;
    // SAFETY: c_word is NUL-terminated and outlives the call.
    let owned = OwnedResult(unsafe { EncodeMetaphone(c_word.as_ptr(), encode_vowels, encode_exact) });
    let primary = owned.key(owned.0.primary, "primary")?;
    let secondary = owned.key(owned.0.secondary, "secondary")?;
    Ok((primary, secondary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_matches_encoder() {
        assert_eq!(
            metaphone3("Aaberg", false, false).unwrap(),
            ("APRK".to_string(), String::new())
        );
    }

    #[test]
    fn test_interior_nul_rejected() {
        assert_eq!(
            metaphone3("ab\0c", false, false),
            Err(MetaphoneError::InteriorNul { position: 2 })
        );
    }

    #[test]
    fn test_null_word_is_empty() {
        unsafe {
            let result = EncodeMetaphone(ptr::null(), true, true);
            assert!(!result.primary.is_null());
            assert!(!result.secondary.is_null());
            assert_eq!(CStr::from_ptr(result.primary).to_bytes(), b"");
            assert_eq!(CStr::from_ptr(result.secondary).to_bytes(), b"");
            FreeMetaphoneResult(result);
        }
    }

    #[test]
    fn test_free_ignores_null_members() {
        unsafe {
            FreeMetaphoneResult(MetaphoneResult {
                primary: ptr::null_mut(),
                secondary: ptr::null_mut(),
            });
        }
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes = b"ack\xff\0";
        unsafe {
            let result = EncodeMetaphone(bytes.as_ptr() as *const c_char, false, false);
            assert_eq!(CStr::from_ptr(result.primary).to_str().unwrap(), "AK");
            FreeMetaphoneResult(result);
        }
    }
}
