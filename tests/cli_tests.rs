//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use tempfile::TempDir;

    use libmetaphone3::cli::commands::{encode_batch, verify_reader};
    use libmetaphone3::cli::paths::PersistentConfig;
    use libmetaphone3::phonetic::EncoderOptions;

    #[test]
    fn test_persistent_config_default() {
        let config = PersistentConfig::default();
        assert_eq!(config.encode_vowels, None);
        assert_eq!(config.encode_exact, None);
        assert_eq!(config.max_key_length, None);
        assert_eq!(config.encoder_options().unwrap(), EncoderOptions::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            encode_vowels: Some(true),
            encode_exact: None,
            max_key_length: Some(12),
        };
        config.save_to(Some(&path)).unwrap();

        let loaded = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_config_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        let loaded = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, PersistentConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(PersistentConfig::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_config_rejects_non_json_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        assert!(PersistentConfig::default().save_to(Some(&path)).is_err());
    }

    #[test]
    fn test_config_merge() {
        let stored = PersistentConfig {
            encode_vowels: Some(true),
            encode_exact: None,
            max_key_length: None,
        };
        let options = stored
            .merge_with_cli(false, true, Some(4))
            .encoder_options()
            .unwrap();
        assert!(options.encode_vowels);
        assert!(options.encode_exact);
        assert_eq!(options.max_key_length, 4);
    }

    #[test]
    fn test_batch_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("keys.csv");
        let file = fs::File::create(&output).unwrap();

        let count = encode_batch("Smith\nSchmidt\n".as_bytes(), file, EncoderOptions::default())
            .unwrap();
        assert_eq!(count, 2);

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        assert_eq!(rows[0], vec!["Smith", "SM0", "XMT"]);
        assert_eq!(rows[1], vec!["Schmidt", "XMT", ""]);
    }

    #[test]
    fn test_verify_clean_file() {
        let rows = "A,A,,A,,A,,A,\nack,AK,,AK,,AK,,AK,\n";
        let report = verify_reader(rows.as_bytes()).unwrap();
        assert_eq!(report.rows, 2);
        assert!(report.passed());
        assert_eq!(report.error_percent(0), 0.0);
    }
}
