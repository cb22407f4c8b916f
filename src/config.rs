// config.rs

//! Configuration file loading.
//!
//! The file lives at `~/.config/assistant-tui/config.yml` unless another path
//! is given on the command line. Every field is optional.

use color_eyre::eyre::{eyre, Result, WrapErr};
use enum_iterator::Sequence;
use log::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "assistant-tui";
const DEFAULT_FONT_FAMILY: &str = "Montserrat";

/// Voices offered for reading responses aloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Sequence)]
pub enum VoiceModel {
    #[default]
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl Display for VoiceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Values shown in the settings view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    pub model_instruction: String,
    pub api_url: String,
    pub api_token_enabled: bool,
    pub api_token: String,
    pub voice_model: VoiceModel,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model_instruction: String::new(),
            api_url: String::new(),
            api_token_enabled: true,
            api_token: String::new(),
            voice_model: VoiceModel::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brightness preference, `light` or `dark`. Detected from the terminal if unset.
    pub color_mode: Option<String>,
    /// Default level for the log pane.
    pub log_level: Option<String>,
    /// Show the canned conversation at startup.
    pub sample_conversation: bool,
    pub font_family: String,
    pub settings: AssistantSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: None,
            log_level: None,
            sample_conversation: true,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            settings: AssistantSettings::default(),
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(eyre!("No $HOME directory found for config"))?;
        Ok(home.join(CONFIG_DIR).join(APP_CONFIG_DIR).join(FILE_NAME))
    }

    /// Loads the config from `path`, or from the default location.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let config_string = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read config from {}", path.display()))?;
        let config = Self::parse(&config_string)
            .wrap_err_with(|| format!("Failed to parse config from {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(content: &str) -> Result<Config> {
        // An empty file deserializes to null.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.yml"))).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.sample_conversation);
        assert!(config.settings.api_token_enabled);
        assert_eq!(config.font_family, "Montserrat");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "color_mode: dark\nsettings:\n  api_url: http://localhost:8080\n  voice_model: Onyx\n"
        )
        .unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.color_mode.as_deref(), Some("dark"));
        assert_eq!(config.settings.api_url, "http://localhost:8080");
        assert_eq!(config.settings.voice_model, VoiceModel::Onyx);
        assert!(config.settings.api_token_enabled);
        assert!(config.sample_conversation);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "sample_conversation: [1, 2").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_unknown_voice_is_an_error() {
        assert!(Config::parse("settings:\n  voice_model: Robot\n").is_err());
    }
}
