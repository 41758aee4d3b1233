use crate::constants::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved configuration with all values filled in (no Options).
///
/// Defaults match the bare CLI invocation; the TOML loader deserializes
/// over these defaults, so a config file only needs the keys it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Input device-profile XML file
    pub input: PathBuf,
    /// Output CSV file
    pub output: PathBuf,
    /// Whether to strip the `_RegAddr` suffix from grouped register names
    pub strip_regaddr_suffix: bool,
    /// Whether to skip the inline-address pass entirely
    pub only_regaddr: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            strip_regaddr_suffix: true,
            only_regaddr: false,
        }
    }
}

impl ResolvedConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Unknown keys are rejected so typos are not silently ignored; absent
    /// keys fall back to the defaults above.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::InvalidInput(format!("Failed to read config file: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let config = ResolvedConfig::default();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from("regaddr.csv"));
        assert!(config.strip_regaddr_suffix);
        assert!(!config.only_regaddr);
    }

    #[test]
    fn full_toml_is_parsed() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            input = "profile.xml"
            output = "map.csv"
            strip_regaddr_suffix = false
            only_regaddr = true
            "#,
        )
        .unwrap();

        let config = ResolvedConfig::from_toml_file(tmp.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("profile.xml"));
        assert_eq!(config.output, PathBuf::from("map.csv"));
        assert!(!config.strip_regaddr_suffix);
        assert!(config.only_regaddr);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, r#"input = "profile.xml""#).unwrap();

        let config = ResolvedConfig::from_toml_file(tmp.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("profile.xml"));
        assert_eq!(config.output, PathBuf::from("regaddr.csv"));
        assert!(config.strip_regaddr_suffix);
    }

    #[test]
    fn unknown_key_errors() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "extra_flag = true").unwrap();

        assert!(ResolvedConfig::from_toml_file(tmp.path()).is_err());
    }

    #[test]
    fn missing_config_file_errors() {
        let result = ResolvedConfig::from_toml_file(Path::new("no-such-config.toml"));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
