use std::collections::BTreeMap;
use std::fmt;

use crate::{CatalogDef, TranslationNode};

/// Validation error for malformed entries in a translation catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A scope segment that can never match a generated page identifier.
    InvalidScope { key: String, segment: String },
    /// A leaf string sitting where a locale table is expected.
    NotAScope { key: String },
    EmptyValue { key: String },
    MalformedPlaceholder { key: String, context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidScope { key, segment } => {
                write!(f, "invalid scope segment '{segment}' in '{key}'")
            },
            ValidationError::NotAScope { key } => {
                write!(f, "expected a table of translations at '{key}'")
            },
            ValidationError::EmptyValue { key } => {
                write!(f, "empty translation at '{key}'")
            },
            ValidationError::MalformedPlaceholder { key, context } => {
                write!(f, "malformed placeholder at '{key}' ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a catalog for entries that can never be looked up or interpolated.
///
/// ```
/// use pagekit_data::{CatalogDef, TranslationNode, validate_catalog};
/// use std::collections::BTreeMap;
///
/// let mut show = BTreeMap::new();
/// show.insert("title".to_string(), TranslationNode::Text("Hello, %{name}".into()));
/// let mut anime = BTreeMap::new();
/// anime.insert("show".to_string(), TranslationNode::Scope(show));
/// let mut en = BTreeMap::new();
/// en.insert("anime".to_string(), TranslationNode::Scope(anime));
/// let mut root = BTreeMap::new();
/// root.insert("en".to_string(), TranslationNode::Scope(en));
///
/// assert!(validate_catalog(&CatalogDef { root }).is_empty());
/// ```
pub fn validate_catalog(catalog: &CatalogDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (locale, node) in &catalog.root {
        match node {
            TranslationNode::Text(_) => errors.push(ValidationError::NotAScope { key: locale.clone() }),
            TranslationNode::Scope(children) => validate_scope(locale, children, &mut errors),
        }
    }

    errors
}

fn validate_scope(prefix: &str, children: &BTreeMap<String, TranslationNode>, errors: &mut Vec<ValidationError>) {
    for (segment, node) in children {
        let key = format!("{prefix}.{segment}");
        if !is_canonical_segment(segment) {
            errors.push(ValidationError::InvalidScope {
                key: key.clone(),
                segment: segment.clone(),
            });
        }
        match node {
            TranslationNode::Text(text) => validate_text(&key, text, errors),
            TranslationNode::Scope(grandchildren) => validate_scope(&key, grandchildren, errors),
        }
    }
}

/// Identifiers are generated lowercase, so anything else is unreachable.
fn is_canonical_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-')
}

fn validate_text(key: &str, text: &str, errors: &mut Vec<ValidationError>) {
    if text.trim().is_empty() {
        errors.push(ValidationError::EmptyValue { key: key.to_string() });
        return;
    }

    let mut rest = text;
    while let Some(open) = rest.find("%{") {
        let after = &rest[open + 2..];
        let Some(close) = after.find('}') else {
            errors.push(ValidationError::MalformedPlaceholder {
                key: key.to_string(),
                context: "unterminated '%{'".to_string(),
            });
            return;
        };
        let name = &after[..close];
        if name.is_empty() || !name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            errors.push(ValidationError::MalformedPlaceholder {
                key: key.to_string(),
                context: format!("bad variable name '{name}'"),
            });
        }
        rest = &after[close + 1..];
    }
}
