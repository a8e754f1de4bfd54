//! User settings and where they live.
//!
//! Settings are read once by the front end and handed to whatever needs
//! them. The rewriter itself never sees them.

use serde::{Deserialize, Serialize};

use crate::generate::{DEFAULT_BLOCK, DEFAULT_TAG};

/// Default path for the settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.cmdblock/settings.yml";

/// Key that brings the tool to the front.
pub const DEFAULT_KEY_BIND: &str = "F12";

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use cmdblock_core::config::get_settings_path;
///
/// let custom_path = get_settings_path(&Some("/path/to/settings.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/settings.yml");
/// ```
pub fn get_settings_path(settings_path_arg: &Option<String>) -> String {
    let settings_path = match settings_path_arg {
        Some(settings_path) => settings_path,
        None => DEFAULT_SETTINGS_PATH,
    };

    shellexpand::tilde(settings_path).to_string()
}

/// Field values used when a generator is not given one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    pub block: String,
    pub tag: String,
    pub translation: [f64; 3],
    pub beam_length: f64,
    pub laser_length: f64,
    pub rotation: [f64; 2],
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            block: DEFAULT_BLOCK.to_string(),
            tag: DEFAULT_TAG.to_string(),
            translation: [0.5, 0.0, 0.0],
            beam_length: -150.0,
            laser_length: -100.0,
            rotation: [0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub key_bind: String,
    pub always_on_top: bool,
    pub defaults: FieldDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_bind: DEFAULT_KEY_BIND.to_string(),
            always_on_top: false,
            defaults: FieldDefaults::default(),
        }
    }
}
