//! Configuration directory and persistent settings

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::phonetic::EncoderOptions;

/// Get the configuration directory for metaphone3
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("metaphone3"))
}

/// Get the default config file path
pub fn config_file_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            Ok(path.to_path_buf())
        }
        None => config_file_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Default vowel encoding
    pub encode_vowels: Option<bool>,
    /// Default exact encoding
    pub encode_exact: Option<bool>,
    /// Default maximum key length
    pub max_key_length: Option<usize>,
}

impl PersistentConfig {
    /// Load configuration from the default or a custom path
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default or a custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    ///
    /// Boolean switches only ever turn a setting on: an absent flag falls back
    /// to the stored value.
    pub fn merge_with_cli(
        &self,
        encode_vowels: bool,
        encode_exact: bool,
        max_key_length: Option<usize>,
    ) -> Self {
        Self {
            encode_vowels: Some(encode_vowels || self.encode_vowels.unwrap_or(false)),
            encode_exact: Some(encode_exact || self.encode_exact.unwrap_or(false)),
            max_key_length: max_key_length.or(self.max_key_length),
        }
    }

    /// Encoder options described by this configuration
    pub fn encoder_options(&self) -> Result<EncoderOptions> {
        let defaults = EncoderOptions::default();
        let options = EncoderOptions {
            encode_vowels: self.encode_vowels.unwrap_or(defaults.encode_vowels),
            encode_exact: self.encode_exact.unwrap_or(defaults.encode_exact),
            max_key_length: self.max_key_length.unwrap_or(defaults.max_key_length),
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_path() {
        assert!(validate_config_path(Path::new("settings.json")).is_ok());
        assert!(validate_config_path(Path::new("settings.toml")).is_err());
        assert!(validate_config_path(Path::new("settings")).is_err());
    }

    #[test]
    fn test_merge_with_cli_prefers_flags() {
        let stored = PersistentConfig {
            encode_vowels: Some(false),
            encode_exact: Some(true),
            max_key_length: Some(6),
        };
        let merged = stored.merge_with_cli(true, false, Some(10));
        assert_eq!(merged.encode_vowels, Some(true));
        assert_eq!(merged.encode_exact, Some(true));
        assert_eq!(merged.max_key_length, Some(10));
    }

    #[test]
    fn test_encoder_options_rejects_bad_length() {
        let config = PersistentConfig {
            max_key_length: Some(0),
            ..PersistentConfig::default()
        };
        assert!(config.encoder_options().is_err());
    }
}
