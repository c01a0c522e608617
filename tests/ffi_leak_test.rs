//! Allocation accounting across the C boundary
//!
//! Kept as a single test in its own binary so no other test touches the
//! live allocation counter while it runs.

use std::ffi::{CStr, CString};

use libmetaphone3::ffi::{live_allocations, EncodeMetaphone, FreeMetaphoneResult};

#[test]
fn test_paired_calls_release_everything() {
    let before = live_allocations();
    let words = ["Aaberg", "Schmidt", "ache", "", "Mrs", "supernode"];

    for _ in 0..100 {
        for word in words {
            for (vowels, exact) in [(false, false), (true, false), (false, true), (true, true)] {
                let c_word = CString::new(word).unwrap();
                unsafe {
                    let result = EncodeMetaphone(c_word.as_ptr(), vowels, exact);
                    assert_eq!(live_allocations(), before + 2);
                    assert!(CStr::from_ptr(result.primary).to_str().is_ok());
                    FreeMetaphoneResult(result);
                }
                assert_eq!(live_allocations(), before);
            }
        }
    }

    // the safe wrapper releases on every path, including errors
    libmetaphone3::ffi::metaphone3("Thompson", false, false).unwrap();
    assert!(libmetaphone3::ffi::metaphone3("a\0b", false, false).is_err());
    assert_eq!(live_allocations(), before);
}
