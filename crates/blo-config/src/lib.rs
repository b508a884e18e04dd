//! Blo configuration
//!
//! Settings for decoding, render passes, and text projection, loaded from
//! `blo.toml` with environment variable overrides.

use blo_core::{BloError, BloFormat, RenderContext, RenderFlags};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "blo.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid codec format: {0}")]
    Format(#[from] BloError),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BloConfig {
    /// Record codec settings
    pub codec: CodecConfig,
    /// Render pass settings
    pub render: RenderConfig,
    /// Tree-text projection settings
    pub text: TextConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CodecConfig {
    /// Record layout used when the caller does not pick one (`blo1` or `compact`)
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Draw panes whose visible flag is cleared
    pub show_invisible: bool,
    /// Outline every pane rectangle
    pub pane_wireframe: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Spaces per nesting level in XML output; 0 disables line breaks
    pub indent: usize,
    /// Element wrapping the root pane; empty for none
    pub root_element: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            format: "blo1".to_string(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            root_element: "blo".to_string(),
        }
    }
}

fn env_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl BloConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        config.codec_format()?;
        Ok(config)
    }

    /// Load `blo.toml` from the current directory, or defaults if it is missing or invalid
    pub fn load_or_default() -> Self {
        match Self::load_from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Read(error)) if error.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(error) => {
                warn!(%error, "ignoring {CONFIG_FILE}");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(format) = std::env::var("BLO_FORMAT") {
            self.codec.format = format;
        }
        if let Ok(val) = std::env::var("BLO_SHOW_INVISIBLE") {
            self.render.show_invisible = env_flag(&val);
        }
        if let Ok(val) = std::env::var("BLO_PANE_WIREFRAME") {
            self.render.pane_wireframe = env_flag(&val);
        }
        if let Ok(val) = std::env::var("BLO_TEXT_INDENT") {
            match val.parse::<usize>() {
                Ok(indent) => self.text.indent = indent,
                Err(error) => warn!(%error, value = %val, "ignoring BLO_TEXT_INDENT"),
            }
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// The configured record layout.
    pub fn codec_format(&self) -> Result<BloFormat, ConfigError> {
        self.codec.format.parse::<BloFormat>().map_err(ConfigError::from)
    }

    /// Render context built from the `[render]` table.
    pub fn render_context(&self) -> RenderContext {
        let mut flags = RenderFlags::empty();
        flags.set(RenderFlags::SHOW_INVISIBLE, self.render.show_invisible);
        flags.set(RenderFlags::PANE_WIREFRAME, self.render.pane_wireframe);
        RenderContext::new(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BloConfig::default();
        assert_eq!(config.codec_format().unwrap(), BloFormat::Blo1);
        assert!(!config.render.show_invisible);
        assert_eq!(config.text.indent, 2);
        assert_eq!(config.render_context(), RenderContext::default());
    }

    #[test]
    fn test_toml_serialization() {
        let config = BloConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: BloConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[codec]\nformat = \"compact\"\n\n[render]\npane_wireframe = true").unwrap();

        let config = BloConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.codec_format().unwrap(), BloFormat::Compact);
        assert!(config.render_context().pane_wireframe());
        assert!(!config.render_context().show_invisible());
        assert_eq!(config.text.root_element, "blo");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[codec]\nformat = \"blo2\"").unwrap();

        let err = BloConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Format(BloError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("BLO_SHOW_INVISIBLE", "true");
            std::env::set_var("BLO_TEXT_INDENT", "4");
        }

        let mut config = BloConfig::default();
        config.merge_with_env();

        assert!(config.render_context().show_invisible());
        assert_eq!(config.text.indent, 4);

        unsafe {
            std::env::remove_var("BLO_SHOW_INVISIBLE");
            std::env::remove_var("BLO_TEXT_INDENT");
        }
    }
}
