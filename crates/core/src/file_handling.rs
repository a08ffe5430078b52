//! Reading candidate lists and settings from disk.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

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

/// Reads candidates from any reader, one per line.
///
/// Lines are trimmed and blank lines are skipped. Order is preserved.
///
/// # Errors
///
/// Returns the underlying IO error if a line cannot be read, for instance
/// because it is not valid UTF-8.
pub fn read_candidates<R: Read>(reader: R) -> std::io::Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            candidates.push(trimmed.to_string());
        }
    }

    Ok(candidates)
}

/// Reads a candidate list file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn get_candidates(path: &str) -> Result<Vec<String>> {
    let reader = get_reader("candidate", path)?;
    let candidates = read_candidates(reader)
        .map_err(|e| Error::io_error("candidate".to_string(), path.to_string(), e))?;

    debug!("Read {} candidates from `{}`", candidates.len(), path);
    Ok(candidates)
}

/// Reads the settings file, falling back to defaults when it does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - A value is out of range
pub fn get_settings(settings_path: &str) -> Result<Settings> {
    if !Path::exists(Path::new(settings_path)) {
        debug!("No settings at `{}`, using defaults", settings_path);
        return Ok(Settings::default());
    }

    let reader = get_reader("settings", settings_path)?;
    let contents = std::io::read_to_string(reader)
        .map_err(|e| Error::io_error("settings".to_string(), settings_path.to_string(), e))?;

    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })?;

    settings.validate()?;
    Ok(settings)
}
