//! Generator configuration
//!
//! Settings for a bindings-generation run, loadable from TOML or RON
//! files keyed on the file extension.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Output flavors the generator can emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    /// Rust constant module
    #[default]
    Rust,
    /// Canonical generated header
    Header,
    /// RON dump of the table model
    Ron,
    /// TOML dump of the table model
    Toml,
}

/// Settings for a bindings-generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Generated header to read
    pub header_path: String,
    /// File the emitted bindings are written to
    pub output_path: String,
    /// Output flavor
    pub emit: EmitFormat,
}

impl GeneratorConfig {
    /// Create a configuration with explicit paths
    pub fn new(header_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            header_path: header_path.into(),
            output_path: output_path.into(),
            emit: EmitFormat::default(),
        }
    }

    /// Search the conventional soundbank locations for a generated header
    ///
    /// Useful when the generator runs from different working
    /// directories (project root, crate directory, CI checkout).
    #[must_use]
    pub fn locate_header(file_name: &str) -> Option<PathBuf> {
        let bank_dirs = [
            "GeneratedSoundBanks/",
            "Audio/GeneratedSoundBanks/",
            "Assets/StreamingAssets/Audio/GeneratedSoundBanks/",
            "./",
        ];

        for dir in &bank_dirs {
            let candidate = Path::new(dir).join(file_name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        None
    }

    /// Validate that the input header exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Path::new(&self.header_path).exists() {
            return Err(ConfigError::MissingInput(self.header_path.clone()));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let header_path = Self::locate_header("Wwise_IDs.h").map_or_else(
            || "GeneratedSoundBanks/Wwise_IDs.h".to_string(),
            |path| path.display().to_string(),
        );

        Self {
            header_path,
            output_path: "src/ids.rs".to_string(),
            emit: EmitFormat::default(),
        }
    }
}

impl Config for GeneratorConfig {}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Input file missing
    #[error("Input not found: {0}")]
    MissingInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let config = GeneratorConfig::new("banks/Wwise_IDs.h", "src/ids.rs");
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: GeneratorConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.header_path, config.header_path);
        assert_eq!(parsed.emit, EmitFormat::Rust);
    }

    #[test]
    fn test_emit_format_names() {
        let config: GeneratorConfig = toml::from_str(
            "header_path = \"Wwise_IDs.h\"\noutput_path = \"out.h\"\nemit = \"header\"\n",
        )
        .unwrap();
        assert_eq!(config.emit, EmitFormat::Header);
    }

    #[test]
    fn test_unsupported_extension() {
        let config = GeneratorConfig::default();
        assert!(matches!(
            config.save_to_file("config.yaml"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_validate_missing_header() {
        let config = GeneratorConfig::new("does/not/exist/Wwise_IDs.h", "src/ids.rs");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingInput(_))
        ));
    }
}
