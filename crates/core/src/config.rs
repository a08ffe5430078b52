//! Selector settings and path resolution.
//!
//! Settings live in a small YAML file. Every field is optional, a missing
//! file simply means the defaults apply.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::width::DEFAULT_MAX_ROWS;

/// Default path for the settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.shell-pick/settings.yml";

/// Prompt shown when neither the caller nor the settings provide one
pub const DEFAULT_PROMPT: &str = "Select: ";

/// User tunable selector settings.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct Settings {
    /// Number of candidate rows drawn at once.
    pub max_rows: usize,
    /// Whether to draw the key binding line under the list.
    pub show_footer: bool,
    /// Prompt to use when none is given on the command line.
    pub prompt: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            show_footer: true,
            prompt: None,
        }
    }
}

impl Settings {
    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<()> {
        if self.max_rows == 0 {
            return Err(Error::InvalidSetting(
                "`max_rows` must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// The prompt to show, preferring an explicit one.
    #[must_use]
    pub fn resolve_prompt(&self, explicit: Option<&str>) -> String {
        explicit
            .or(self.prompt.as_deref())
            .unwrap_or(DEFAULT_PROMPT)
            .to_string()
    }
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use shell_pick_core::config::get_settings_path;
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
