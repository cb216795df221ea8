use std::path::Path;

use crate::error::ConfigError;

/// Engine configuration, loadable from TOML. Every field has a default so a
/// partial (or absent) file works.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub stats: StatsConfig,
}

/// Configuration for the stats tracker.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Record tie games as history entries. Off by default: ties are
    /// terminal but do not appear in the stats.
    pub record_ties: bool,
    /// Keep only the most recent N history entries; 0 means unbounded.
    pub history_capacity: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            record_ties: false,
            history_capacity: 0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(!config.stats.record_ties);
        assert_eq!(config.stats.history_capacity, 0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[stats]
record_ties = true
"#;
        let config: EngineConfig = toml::from_str(toml_str).unwrap();
        assert!(config.stats.record_ties);
        assert_eq!(config.stats.history_capacity, 0);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert!(!config.stats.record_ties);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EngineConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert!(!config.stats.record_ties);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[stats]
record_ties = true
history_capacity = 50
"#
        )
        .unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert!(config.stats.record_ties);
        assert_eq!(config.stats.history_capacity, 50);
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = EngineConfig::default_toml();
        let config: EngineConfig = toml::from_str(&toml_str).unwrap();
        assert!(!config.stats.record_ties);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "stats = 3").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }
}
