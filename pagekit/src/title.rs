//! Page titles.
//!
//! A content template usually sets the title and the layout reads it back
//! afterwards, so the first title computed during a render is latched in a
//! [`TitleCache`] and every later call returns it unchanged.

use std::cell::OnceCell;

use log::{debug, warn};

use crate::i18n::{Interpolations, Lookup, TranslationSource};

/// Translation key read under `[controller, action]`.
pub const TITLE_KEY: &str = "title";

/// Single-slot, write-once title storage for one render.
#[derive(Debug, Default)]
pub struct TitleCache {
    slot: OnceCell<String>,
}

impl TitleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&str> {
        self.slot.get().map(String::as_str)
    }

    /// Return the latched title, computing and latching it on first use.
    pub fn get_or_compute<F: FnOnce() -> String>(&self, compute: F) -> &str {
        self.slot.get_or_init(compute)
    }
}

/// Caller-supplied fallback and interpolation values for a title lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleOptions {
    pub default: Option<String>,
    pub interpolations: Interpolations,
}

impl TitleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn interpolate(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.interpolations.insert(name.into(), value.into());
        self
    }
}

/// Resolve the page title, latching the first result in `cache`.
///
/// Once the cache holds a title, `options` and the identifiers are ignored.
pub fn resolve_title<T: TranslationSource + ?Sized>(
    cache: &TitleCache,
    controller_id: &str,
    action_id: &str,
    translations: &T,
    options: &TitleOptions,
) -> String {
    if let Some(title) = cache.get() {
        debug!("page title already latched as '{title}'");
        return title.to_string();
    }
    cache
        .get_or_compute(|| compute_title(controller_id, action_id, translations, options))
        .to_string()
}

fn compute_title<T: TranslationSource + ?Sized>(
    controller_id: &str,
    action_id: &str,
    translations: &T,
    options: &TitleOptions,
) -> String {
    let fallback = || {
        options
            .default
            .clone()
            .unwrap_or_else(|| default_title(controller_id, action_id))
    };

    match translations.lookup(&[controller_id, action_id], TITLE_KEY, &options.interpolations) {
        Ok(Lookup::Found(title)) => title,
        Ok(Lookup::Missing) => {
            debug!("no title translation for {controller_id}.{action_id}; using fallback");
            fallback()
        },
        Err(err) => {
            warn!("title translation unusable: {err}");
            fallback()
        },
    }
}

/// `Anime Show` for controller `anime` and action `show`.
pub fn default_title(controller_id: &str, action_id: &str) -> String {
    format!("{} {}", capitalize(controller_id), capitalize(action_id))
}

/// Uppercase the first character and leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    #[test]
    fn missing_translation_combines_identifiers() {
        let cache = TitleCache::new();
        let title = resolve_title(&cache, "anime", "random", &Catalog::new("en"), &TitleOptions::new());
        assert_eq!(title, "Anime Random");
    }

    #[test]
    fn missing_translation_prefers_caller_default() {
        let cache = TitleCache::new();
        let options = TitleOptions::new().with_default("my custom default");
        let title = resolve_title(&cache, "anime", "random", &Catalog::new("en"), &options);
        assert_eq!(title, "my custom default");
    }

    #[test]
    fn first_result_wins() {
        let cache = TitleCache::new();
        let catalog = Catalog::new("en");
        let first = resolve_title(
            &cache,
            "anime",
            "random",
            &catalog,
            &TitleOptions::new().with_default("my custom default"),
        );
        let second = resolve_title(&cache, "anime", "random", &catalog, &TitleOptions::new());
        let third = resolve_title(&cache, "manga", "show", &catalog, &TitleOptions::new().with_default("other"));
        assert_eq!(first, "my custom default");
        assert_eq!(second, "my custom default");
        assert_eq!(third, "my custom default");
        assert_eq!(cache.get(), Some("my custom default"));
    }

    #[test]
    fn translation_is_interpolated() {
        let mut catalog = Catalog::new("en");
        catalog.store("en.anime.show.title", "An awesome title, %{name}");
        let cache = TitleCache::new();
        let options = TitleOptions::new().interpolate("name", "bro");
        assert_eq!(
            resolve_title(&cache, "anime", "show", &catalog, &options),
            "An awesome title, bro"
        );
    }

    #[test]
    fn unusable_translation_falls_back() {
        let mut catalog = Catalog::new("en");
        catalog.store("en.anime.show.title", "An awesome title, %{name}");
        let cache = TitleCache::new();
        assert_eq!(
            resolve_title(&cache, "anime", "show", &catalog, &TitleOptions::new()),
            "Anime Show"
        );
    }

    #[test]
    fn capitalize_touches_only_the_first_character() {
        assert_eq!(capitalize("super_awesome_anime"), "Super_awesome_anime");
        assert_eq!(capitalize("super-awesome-anime"), "Super-awesome-anime");
        assert_eq!(capitalize("eDIT"), "EDIT");
        assert_eq!(capitalize(""), "");
        assert_eq!(default_title("ärger", "show"), "Ärger Show");
    }

    #[test]
    fn cache_starts_empty() {
        let cache = TitleCache::new();
        assert_eq!(cache.get(), None);
        assert_eq!(cache.get_or_compute(|| "Latched".to_string()), "Latched");
        assert_eq!(cache.get(), Some("Latched"));
        assert_eq!(cache.get_or_compute(|| "Ignored".to_string()), "Latched");
    }
}
