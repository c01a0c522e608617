//! Conformance against reference key files
//!
//! Reads every `testdata/*.test` file. Each row is a word followed by the
//! primary/secondary keys for the four flag combinations.

#![cfg(feature = "cli")]

use std::fs::File;
use std::path::Path;

use libmetaphone3::cli::commands::{verify_reader, VERIFY_MODES};

#[test]
fn test_name_files() {
    let testdata_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata");
    let mut checked = 0;
    for entry in std::fs::read_dir(&testdata_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map_or(true, |ext| ext != "test") {
            continue;
        }

        let report = verify_reader(File::open(&path).unwrap()).unwrap();
        for (index, (mode, _)) in VERIFY_MODES.iter().enumerate() {
            println!("{} {}: error percent {:.2}%", path.display(), mode, report.error_percent(index));
        }
        for failure in report.failures.iter().take(20) {
            eprintln!(
                "{} [{}]: expected {:?} got {:?}",
                failure.word, failure.mode, failure.expected, failure.actual
            );
        }
        assert!(report.rows > 0, "no rows read from {}", path.display());
        assert!(report.passed(), "{} mismatches in {}", report.failures.len(), path.display());
        checked += 1;
    }
    assert!(checked > 0, "no .test files in {}", testdata_dir.display());
}
