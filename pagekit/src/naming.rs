//! Handler name flattening.
//!
//! Turns a namespaced handler type name such as `Super::Awesome::AnimeController`
//! into the identifier used for CSS selectors and translation scopes.

use heck::ToSnakeCase;
use pagekit_data::SelectorFormat;

/// Marker stripped from the end of handler type names.
pub const HANDLER_SUFFIX: &str = "Controller";
/// Separator between namespaces in a handler type name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Flatten a handler type name into a lowercase identifier in the given format.
///
/// ```
/// use pagekit::naming::format_handler_name;
/// use pagekit_data::SelectorFormat;
///
/// assert_eq!(format_handler_name("AnimeController", SelectorFormat::Underscored), "anime");
/// assert_eq!(
///     format_handler_name("Super::Awesome::AnimeController", SelectorFormat::Hyphenated),
///     "super-awesome-anime"
/// );
/// ```
pub fn format_handler_name(name: &str, format: SelectorFormat) -> String {
    let separator = format.separator();
    underscore_handler_name(name)
        .chars()
        .map(|c| if c == '_' { separator } else { c })
        .collect()
}

/// The canonical underscored form, before any selector format is applied.
pub fn underscore_handler_name(name: &str) -> String {
    let trimmed = name.trim();
    let base = trimmed.strip_suffix(HANDLER_SUFFIX).unwrap_or(trimmed);

    base.split(NAMESPACE_SEPARATOR)
        .flat_map(|segment| segment.split('/'))
        .filter(|segment| !segment.is_empty())
        .map(underscore_segment)
        .collect::<Vec<_>>()
        .join("_")
}

/// `AwesomeAnime` -> `awesome_anime`, `HTMLPages` -> `html_pages`.
pub fn underscore_segment(segment: &str) -> String {
    segment.to_snake_case()
}
