use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word separator used when handler names are flattened into CSS selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorFormat {
    /// `super_awesome_anime`
    #[default]
    Underscored,
    /// `super-awesome-anime`
    Hyphenated,
}

impl SelectorFormat {
    /// The character placed between words in this format.
    pub fn separator(self) -> char {
        match self {
            SelectorFormat::Underscored => '_',
            SelectorFormat::Hyphenated => '-',
        }
    }
}

/// Settings file (`pagekit.toml`) as written by the application author.
///
/// Every field is optional; absent fields keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDef {
    #[serde(default)]
    pub selector_format: Option<SelectorFormat>,
    /// Name of the client-side application object receiving `init()` calls.
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// One node of a translation tree: either a nested scope or a leaf string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Text(String),
    Scope(BTreeMap<String, TranslationNode>),
}

/// A locale file, keyed by locale at the top level.
///
/// ```toml
/// [en.anime.show]
/// title = "An awesome title, %{name}"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogDef {
    pub root: BTreeMap<String, TranslationNode>,
}

impl CatalogDef {
    /// Flatten the tree into dotted keys (`en.anime.show.title`).
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        for (name, node) in &self.root {
            flatten_into(name, node, &mut out);
        }
        out
    }

    /// Locales present at the top level of the file.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }
}

fn flatten_into(prefix: &str, node: &TranslationNode, out: &mut BTreeMap<String, String>) {
    match node {
        TranslationNode::Text(text) => {
            out.insert(prefix.to_string(), text.clone());
        },
        TranslationNode::Scope(children) => {
            for (name, child) in children {
                flatten_into(&format!("{prefix}.{name}"), child, out);
            }
        },
    }
}
