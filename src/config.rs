//! Tour configuration, read from an optional TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::Section;
use crate::error::{Result, TourError};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub platform: Option<String>,
    pub weekday: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { color: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    /// Sections to run, in order.
    pub sections: Vec<Section>,
    /// Demo names left out of the run.
    pub skip: Vec<String>,
    pub host: HostConfig,
    pub output: OutputConfig,
}

impl Default for TourConfig {
    fn default() -> Self {
        TourConfig {
            sections: vec![Section::FlowControl, Section::MoreTypes],
            skip: Vec::new(),
            host: HostConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl TourConfig {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| TourError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TourError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(path, &text)?;
        tracing::info!(path = %path.display(), sections = config.sections.len(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<TourConfig> {
        TourConfig::from_toml(Path::new("tour.toml"), text)
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse("").unwrap(), TourConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = parse(
            r#"
            sections = ["more_types"]
            skip = ["word_count", "fibonacci"]

            [host]
            platform = "freebsd"
            weekday = "Wed"

            [output]
            color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.sections, vec![Section::MoreTypes]);
        assert_eq!(config.skip, vec!["word_count", "fibonacci"]);
        assert_eq!(config.host.platform.as_deref(), Some("freebsd"));
        assert_eq!(config.host.weekday.as_deref(), Some("Wed"));
        assert!(!config.output.color);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse("colour = true").unwrap_err();
        assert!(matches!(err, TourError::ParseConfig { .. }));
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(parse(r#"sections = ["networking"]"#).is_err());
    }
}
