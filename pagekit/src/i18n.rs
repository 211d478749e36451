//! Translation lookups.
//!
//! Titles and other page strings are read through [`TranslationSource`] so the
//! host framework can plug in its own store. [`Catalog`] is the in-memory
//! implementation backed by TOML locale files.
//!
//! Stored strings may reference variables as `%{name}`; they are filled from
//! the interpolation map passed to each lookup.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use lazy_static::lazy_static;
use log::{info, warn};
use pagekit_data::{CatalogDef, validate_catalog};
use regex::{Captures, Regex};
use thiserror::Error;

/// Variable values substituted into `%{name}` placeholders.
pub type Interpolations = BTreeMap<String, String>;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"%\{(\w+)\}").expect("placeholder pattern is valid");
}

/// Result of a translation lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    Missing,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("missing interpolation argument '{name}' in '{key}'")]
    MissingInterpolation { key: String, name: String },
}

/// A store of translated strings.
pub trait TranslationSource {
    /// Look up `key` under the nested `scope`, filling placeholders from `interpolations`.
    ///
    /// # Errors
    /// Returns an error when the stored string names a variable that was not supplied.
    fn lookup(&self, scope: &[&str], key: &str, interpolations: &Interpolations) -> Result<Lookup, TranslationError>;
}

impl<T: TranslationSource + ?Sized> TranslationSource for &T {
    fn lookup(&self, scope: &[&str], key: &str, interpolations: &Interpolations) -> Result<Lookup, TranslationError> {
        (**self).lookup(scope, key, interpolations)
    }
}

/// In-memory translations for one or more locales, keyed by dotted path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    locale: String,
    entries: BTreeMap<String, String>,
    available: BTreeSet<String>,
}

impl Catalog {
    /// An empty catalog answering lookups in `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: BTreeMap::new(),
            available: BTreeSet::new(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch the locale used by [`TranslationSource::lookup`].
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Store one string under a full dotted key including the locale (`en.anime.show.title`).
    pub fn store(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if let Some((locale, _)) = key.split_once('.') {
            self.available.insert(locale.to_string());
        }
        self.entries.insert(key, value.into());
    }

    /// Merge every entry of a parsed locale file, replacing existing keys.
    pub fn store_translations(&mut self, def: &CatalogDef) {
        self.available.extend(def.locales().map(str::to_string));
        self.entries.extend(def.flatten());
    }

    /// Whether any stored entry belongs to `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.available.contains(locale)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw stored string for a full dotted key, without interpolation.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl TranslationSource for Catalog {
    fn lookup(&self, scope: &[&str], key: &str, interpolations: &Interpolations) -> Result<Lookup, TranslationError> {
        let mut path = Vec::with_capacity(scope.len() + 2);
        path.push(self.locale.as_str());
        path.extend_from_slice(scope);
        path.push(key);
        let full_key = path.join(".");

        match self.entries.get(&full_key) {
            Some(template) => interpolate(&full_key, template, interpolations).map(Lookup::Found),
            None => Ok(Lookup::Missing),
        }
    }
}

/// Replace every `%{name}` in `template` with its value from `interpolations`.
///
/// # Errors
/// Returns [`TranslationError::MissingInterpolation`] naming the first absent variable.
pub fn interpolate(key: &str, template: &str, interpolations: &Interpolations) -> Result<String, TranslationError> {
    if let Some(name) = PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .find(|name| !interpolations.contains_key(name))
    {
        return Err(TranslationError::MissingInterpolation {
            key: key.to_string(),
            name,
        });
    }

    let filled = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        interpolations.get(&caps[1]).cloned().unwrap_or_default()
    });
    Ok(filled.into_owned())
}

/// Read and validate one TOML locale file.
/// # Errors
/// - on file IO error, TOML parsing error, or validation findings
pub fn load_catalog_file(path: &Path) -> Result<CatalogDef> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading translations from '{}'", path.display()))?;
    let def: CatalogDef =
        toml::from_str(&contents).with_context(|| format!("parsing translations from '{}'", path.display()))?;

    let errors = validate_catalog(&def);
    if !errors.is_empty() {
        let details = errors
            .into_iter()
            .map(|err| format!("- {err}"))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("translation validation failed for '{}':\n{details}", path.display());
    }

    Ok(def)
}

/// Build a catalog from every `*.toml` file in `dir`, in file name order.
///
/// A missing directory yields an empty catalog.
/// # Errors
/// - on directory IO error or any file failing to load
pub fn load_locale_dir(dir: &Path, locale: &str) -> Result<Catalog> {
    let mut catalog = Catalog::new(locale);
    if !dir.is_dir() {
        info!("no locale directory at '{}'; titles will use defaults", dir.display());
        return Ok(catalog);
    }

    let mut files = fs::read_dir(dir)
        .with_context(|| format!("listing locale directory '{}'", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect::<Vec<_>>();
    files.sort();

    for file in &files {
        let def = load_catalog_file(file)?;
        catalog.store_translations(&def);
    }

    if !files.is_empty() && !catalog.has_locale(locale) {
        warn!("no file in '{}' provides locale '{locale}'; titles will use defaults", dir.display());
    }
    info!(
        "{} translations loaded from {} file(s) in '{}'",
        catalog.len(),
        files.len(),
        dir.display()
    );
    Ok(catalog)
}
