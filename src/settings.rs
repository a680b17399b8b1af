//! Settings Module
//! Theme and language preferences persisted as a small JSON file.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::Formatter;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Ru,
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Ru
    }
}

/// User preferences. Each key falls back to its default on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, deserialize_with = "or_default")]
    pub theme: Theme,
    #[serde(default, deserialize_with = "or_default")]
    pub lang: Lang,
}

/// Accept any JSON value and replace one we don't understand with the default.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Compact JSON with a space after each `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

impl Settings {
    /// Load from `settings.json` in the working directory.
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    /// Save to `settings.json` in the working directory.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(SETTINGS_FILE)
    }

    /// Load settings; a missing, unreadable or corrupt file yields defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("no settings at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("failed to parse {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Overwrite the settings file with the current values.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Single-line JSON in the `{"theme": "dark", "lang": "ru"}` layout.
    fn to_json(&self) -> Result<Vec<u8>, SettingsError> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn toggle_language(&mut self) {
        self.lang = match self.lang {
            Lang::Ru => Lang::En,
            Lang::En => Lang::Ru,
        };
    }
}
