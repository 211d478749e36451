//! Settings for the view helpers.
//!
//! A [`Configuration`] is an ordinary value handed to each [`crate::PageView`].
//! The application's composition root may keep one process-wide copy in
//! [`CONFIGURATION`], set with [`configure`] at startup and read back with
//! [`current_configuration`]. Changes made while requests are rendering are
//! last-writer-wins.

use anyhow::{Context, Result};
use log::{info, warn};
use pagekit_data::{SelectorFormat, SettingsDef};
use std::fs;
use std::path::Path;
use std::sync::RwLock;

/// Client-side application object used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "App";
pub const DEFAULT_LOCALE: &str = "en";

/// Resolved view helper settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub selector_format: SelectorFormat,
    /// Name of the client-side application object receiving `init()` calls.
    pub namespace: String,
    /// Locale used for title lookups.
    pub locale: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            selector_format: SelectorFormat::default(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Configuration {
    /// Defaults overridden by whatever the settings file provides.
    pub fn from_settings(settings: SettingsDef) -> Self {
        let mut config = Self::default();
        config.apply(settings);
        config
    }

    /// Overlay the fields present in `settings`.
    pub fn apply(&mut self, settings: SettingsDef) {
        if let Some(format) = settings.selector_format {
            self.selector_format = format;
        }
        if let Some(namespace) = settings.namespace.filter(|ns| !ns.trim().is_empty()) {
            self.namespace = namespace.trim().to_string();
        }
        if let Some(locale) = settings.locale.filter(|l| !l.trim().is_empty()) {
            self.locale = locale.trim().to_string();
        }
    }

    pub fn with_selector_format(mut self, format: SelectorFormat) -> Self {
        self.selector_format = format;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// Load settings from a TOML file.
///
/// A missing file is not an error; the defaults are returned instead.
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_settings(path: &Path) -> Result<Configuration> {
    if !path.exists() {
        info!("no settings file at '{}', using defaults", path.display());
        return Ok(Configuration::default());
    }

    let contents =
        fs::read_to_string(path).with_context(|| format!("reading settings from '{}'", path.display()))?;
    let settings: SettingsDef =
        toml::from_str(&contents).with_context(|| format!("parsing settings from '{}'", path.display()))?;

    info!("settings loaded from '{}'", path.display());
    Ok(Configuration::from_settings(settings))
}

// Process-wide settings for the composition root.
lazy_static::lazy_static! {
    pub static ref CONFIGURATION: RwLock<Configuration> = RwLock::new(Configuration::default());
}

/// Mutate the process-wide configuration in place.
pub fn configure<F: FnOnce(&mut Configuration)>(update: F) {
    match CONFIGURATION.write() {
        Ok(mut config) => update(&mut config),
        Err(_) => warn!("configuration lock poisoned; update ignored"),
    }
}

/// Snapshot the process-wide configuration, defaulting if unavailable.
pub fn current_configuration() -> Configuration {
    CONFIGURATION.read().map(|config| config.clone()).unwrap_or_else(|_| {
        warn!("configuration lock poisoned; using defaults");
        Configuration::default()
    })
}

/// Load a settings file into the process-wide configuration.
/// # Errors
/// - on file IO error or TOML parsing error
pub fn init_from_file(path: &Path) -> Result<()> {
    let loaded = load_settings(path)?;
    configure(|config| *config = loaded);
    Ok(())
}
