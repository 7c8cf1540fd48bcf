// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! pagekit project configuration.
//!
//! Configuration is loaded from `pagekit.toml` at the project root.
//!
//! # Example Configuration
//!
//! ```toml
//! [project]
//! name = "examples"
//!
//! [content]
//! root = "web"
//! static_dir = "static"
//!
//! [server]
//! port = 3000
//! host = "127.0.0.1"
//!
//! [runtime]
//! mode = "development"
//! jquery_path = "/click-jquery/jquery/jquery-1.4.2.js"
//! jquery_click_path = "/click-jquery/jquery.click.js"
//!
//! [page]
//! template = "/templates/source-viewer.js"
//! ```

use pagekit::behavior::{DEFAULT_JQUERY_CLICK_PATH, DEFAULT_JQUERY_PATH};
use pagekit::{BehaviorConfig, Mode};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "pagekit.toml";

/// Main configuration structure loaded from `pagekit.toml`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Deployed content location.
    #[serde(default)]
    pub content: ContentConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Runtime mode and script imports.
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Source viewer page settings.
    #[serde(default)]
    pub page: PageConfig,
}

/// Project metadata configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectConfig {
    /// Project name.
    #[serde(default = "default_name")]
    pub name: String,
}

/// Content configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Directory the resource resolver reads from (default: "web").
    #[serde(default = "default_root")]
    pub root: String,
    /// Directory below `root` served at `/static`, if any.
    #[serde(default)]
    pub static_dir: Option<String>,
}

/// Server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port (default: 3000).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Server host (default: "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
}

/// Runtime configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct RuntimeConfig {
    /// Application mode (default: development).
    #[serde(default)]
    pub mode: Mode,
    /// jQuery library import.
    #[serde(default = "default_jquery_path")]
    pub jquery_path: String,
    /// jQuery integration import.
    #[serde(default = "default_jquery_click_path")]
    pub jquery_click_path: String,
}

/// Source viewer page configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PageConfig {
    /// Client template attached to the source listing.
    #[serde(default)]
    pub template: Option<String>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

fn default_root() -> String {
    "web".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_jquery_path() -> String {
    DEFAULT_JQUERY_PATH.to_string()
}

fn default_jquery_click_path() -> String {
    DEFAULT_JQUERY_CLICK_PATH.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            static_dir: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            jquery_path: default_jquery_path(),
            jquery_click_path: default_jquery_click_path(),
        }
    }
}

impl RuntimeConfig {
    /// Behavior settings for this runtime.
    pub fn behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig {
            mode: self.mode,
            jquery_path: self.jquery_path.clone(),
            jquery_click_path: self.jquery_click_path.clone(),
        }
    }
}

impl Config {
    /// Loads configuration from `pagekit.toml` in the current directory.
    ///
    /// If no configuration file exists, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let config_path = path.as_ref();

        if !config_path.exists() {
            tracing::debug!("No {} found, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
