//! Reading and writing the settings file.

use std::fs::{self, File};
use std::path::Path;

use log::{debug, info};

use crate::config::Settings;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn get_settings_reader(settings_path: &str) -> Result<Option<File>> {
    if !Path::exists(Path::new(settings_path)) {
        return Ok(None);
    }

    get_reader("settings", settings_path).map(Some)
}

/// Loads user settings from disk.
///
/// A missing file is not an error: the defaults are returned instead.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
pub fn load_settings(settings_path: &str) -> Result<Settings> {
    let Some(settings_reader) = get_settings_reader(settings_path)? else {
        debug!("No settings at {}, using defaults", settings_path);
        return Ok(Settings::default());
    };

    // An empty file deserializes to unit, not to a struct with defaults
    let metadata = settings_reader
        .metadata()
        .map_err(|e| Error::io_error("settings".to_string(), settings_path.to_string(), e))?;
    if metadata.len() == 0 {
        return Ok(Settings::default());
    }

    let settings: serde_yaml::Result<Settings> = serde_yaml::from_reader(settings_reader);

    settings.map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })
}

/// Writes user settings to disk, creating the parent directory if needed.
///
/// # Errors
///
/// Returns an error if:
/// - The file or its directory cannot be created or written to
/// - Serialization to YAML fails
pub fn save_settings(settings_path: &str, settings: &Settings) -> Result<()> {
    if let Some(parent) = Path::new(settings_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io_error(
                    "settings directory".to_string(),
                    parent.display().to_string(),
                    e,
                )
            })?;
        }
    }

    let f = File::create(settings_path)
        .map_err(|e| Error::io_error("settings".to_string(), settings_path.to_string(), e))?;

    serde_yaml::to_writer(f, settings).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })?;

    info!("Saved settings to {}", settings_path);
    Ok(())
}
