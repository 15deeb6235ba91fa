use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub links: LinksConfig,
    pub video: VideoConfig,
    pub html: HtmlConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LinksConfig {
    /// Browsing context for links; empty omits the attribute.
    pub target: String,
    pub rel: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            target: "_blank".to_string(),
            rel: "noopener noreferrer".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VideoConfig {
    pub width: u32,
    pub height: u32,
    pub allow_fullscreen: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            width: 560,
            height: 315,
            allow_fullscreen: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HtmlConfig {
    /// Prefix for the CSS classes on generated elements.
    pub class_prefix: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            class_prefix: "instruction".to_string(),
        }
    }
}

impl Config {
    /// The configuration bundled with the crate.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::compiled_default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
