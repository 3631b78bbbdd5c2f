//! Configuration loading for the visibility add-on.
//!
//! Discovers a `visibility.{ron,toml,json}` file in a data directory,
//! deserializes it per format, and resolves the `parentTechsToShow` key
//! into a [`PolicySetting`]. Read once at startup; there is no hot reload.
//!
//! Two entry points with different failure contracts:
//!
//! - [`load_settings`] surfaces I/O and parse failures as [`ConfigError`],
//!   for hosts that want to report broken config files. A *missing* file is
//!   not a failure; it yields the defaults.
//! - [`load_settings_or_default`] swallows every failure and returns the
//!   defaults, for hosts that treat visibility as strictly cosmetic.
//!
//! Unrecognized setting values are never an error in either entry point;
//! they fall back to [`PolicySetting::Default`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use techfog_core::policy::PolicySetting;

/// Base name of the settings file, without extension.
pub const SETTINGS_BASE_NAME: &str = "visibility";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while loading the settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two settings files with different formats exist side by side.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Resolved startup settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Which parents must be researched before a locked node is shown.
    pub parent_techs_to_show: PolicySetting,
}

/// Raw file schema. Legacy config files spell the key `parentTechsToShow`;
/// the snake_case spelling is accepted as well.
#[derive(Debug, Default, Deserialize)]
struct SettingsData {
    #[serde(default, alias = "parentTechsToShow")]
    parent_techs_to_show: Option<String>,
}

impl From<SettingsData> for Settings {
    fn from(data: SettingsData) -> Self {
        let parent_techs_to_show = data
            .parent_techs_to_show
            .as_deref()
            .map(PolicySetting::parse_or_default)
            .unwrap_or_default();
        Settings {
            parent_techs_to_show,
        }
    }
}

// ---------------------------------------------------------------------------
// Format detection and file discovery
// ---------------------------------------------------------------------------

/// Supported settings file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(ConfigError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

/// Scan a directory for the settings file.
///
/// Looks for `visibility.ron`, `visibility.toml`, and `visibility.json`.
/// Returns `Ok(None)` if none exists, or `Err(ConflictingFormats)` if more
/// than one does.
pub fn find_settings_file(dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let extensions = ["ron", "toml", "json"];
    let mut found: Option<PathBuf> = None;

    for ext in &extensions {
        let candidate = dir.join(format!("{SETTINGS_BASE_NAME}.{ext}"));
        if candidate.exists() {
            if let Some(ref existing) = found {
                return Err(ConfigError::ConflictingFormats {
                    a: existing.clone(),
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load settings from a specific file, deserializing per its format.
pub fn load_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    let data: SettingsData = match format {
        Format::Ron => ron::from_str(&content).map_err(|e| ConfigError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?,
        Format::Toml => toml::from_str(&content).map_err(|e| ConfigError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?,
        Format::Json => serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?,
    };

    let settings = Settings::from(data);
    log::debug!("loaded settings from {}: {settings:?}", path.display());
    Ok(settings)
}

/// Load settings from a data directory. A missing file yields the defaults;
/// a present-but-broken file is an error.
pub fn load_settings(dir: &Path) -> Result<Settings, ConfigError> {
    match find_settings_file(dir)? {
        Some(path) => load_settings_file(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from a data directory, degrading every failure to the
/// defaults. Visibility is cosmetic, so hosts that don't care to report
/// broken config files can use this and move on.
pub fn load_settings_or_default(dir: &Path) -> Settings {
    load_settings(dir).unwrap_or_else(|err| {
        log::debug!("settings load failed, using defaults: {err}");
        Settings::default()
    })
}

// ===========================================================================
// Tests
// ===========================================================================
