//! Configuration loading and management

use serde::{Deserialize, Serialize};

/// Enhancer configuration
///
/// Field names follow the JavaScript options object
/// (`{ enableCtrlClick, debugMode }`) so config can be handed over as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Open a new tab when Cmd/Ctrl is held during a push
    pub enable_ctrl_click: bool,

    /// Emit debug log lines
    pub debug_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_ctrl_click: true,
            debug_mode: false,
        }
    }
}

impl Config {
    /// Parse configuration from a JSON options object; missing keys keep
    /// their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merge the fields set in `update`
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(enable_ctrl_click) = update.enable_ctrl_click {
            self.enable_ctrl_click = enable_ctrl_click;
        }
        if let Some(debug_mode) = update.debug_mode {
            self.debug_mode = debug_mode;
        }
    }
}

/// Partial configuration change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_ctrl_click: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_mode: Option<bool>,
}

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
