// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Behaviors that augment controls with client-side scripts.
//!
//! A behavior is attached to a [`Control`](crate::Control) during the host
//! framework's head-element collection phase. Every jQuery behavior needs
//! the same script imports; [`BehaviorConfig`] names them and carries the
//! runtime [`Mode`] that decides whether the debug script is added.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::head::{HeadElements, JsImport, JsScript};

/// Ajax template behavior.
pub mod template;

pub use template::{add_model, TemplateBehavior};

/// Default path of the jQuery library.
pub const DEFAULT_JQUERY_PATH: &str = "/click-jquery/jquery/jquery-1.4.2.js";
/// Default path of the jQuery integration script.
pub const DEFAULT_JQUERY_CLICK_PATH: &str = "/click-jquery/jquery.click.js";
/// Element id of the debug script.
pub const DEBUG_SCRIPT_ID: &str = "jquery-click-debug";

/// Application runtime mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Production deployment.
    Production,
    /// Production with profiling.
    Profile,
    /// Local development.
    #[default]
    Development,
    /// Development with debug logging.
    Debug,
    /// Development with trace logging.
    Trace,
}

impl Mode {
    /// Returns true for `production` and `profile`.
    pub fn is_production_like(self) -> bool {
        matches!(self, Self::Production | Self::Profile)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Production => "production",
            Self::Profile => "profile",
            Self::Development => "development",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "profile" => Ok(Self::Profile),
            "development" => Ok(Self::Development),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

/// Settings shared by all jQuery behaviors.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Runtime mode.
    pub mode: Mode,
    /// jQuery library import.
    pub jquery_path: String,
    /// jQuery integration import.
    pub jquery_click_path: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            jquery_path: DEFAULT_JQUERY_PATH.to_string(),
            jquery_click_path: DEFAULT_JQUERY_CLICK_PATH.to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Creates a config with default script paths for `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Adds the library (index 0) and integration (index 1) imports, and in
    /// non-production modes the debug script.
    pub fn add_head_elements(&self, head_elements: &mut HeadElements) {
        head_elements.insert_if_absent(0, JsImport::new(&self.jquery_path));
        head_elements.insert_if_absent(1, JsImport::new(&self.jquery_click_path));

        if !self.mode.is_production_like() {
            head_elements.push_if_absent(debug_script());
        }
    }
}

/// Script enabling client-side debug output.
pub fn debug_script() -> JsScript {
    JsScript::with_content("jQuery.click = jQuery.click || {};\njQuery.click.debug = true;")
        .id(DEBUG_SCRIPT_ID)
}
