//! Pending flash messages for the current request.

use indexmap::IndexMap;

/// Insertion-ordered `category -> text` messages.
///
/// Keys are normalized so `:notice` and `notice` name the same entry.
/// Re-inserting a key replaces its text and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashMessages {
    entries: IndexMap<String, String>,
}

/// Canonical form of a category key.
pub fn normalize_key(key: &str) -> String {
    let trimmed = key.trim();
    trimmed.strip_prefix(':').unwrap_or(trimmed).to_string()
}

impl FlashMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &str, text: impl Into<String>) {
        self.entries.insert(normalize_key(category), text.into());
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries.get(&normalize_key(category)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for FlashMessages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut messages = FlashMessages::new();
        for (category, text) in iter {
            messages.insert(category.as_ref(), text);
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_and_string_keys_are_the_same_entry() {
        let mut flash = FlashMessages::new();
        flash.insert(":notice", "first");
        flash.insert(" notice ", "second");
        assert_eq!(flash.len(), 1);
        assert_eq!(flash.get(":notice"), Some("second"));
    }

    #[test]
    fn insertion_order_is_kept_on_replace() {
        let mut flash: FlashMessages = [("alert", "a"), ("notice", "n"), ("success", "s")].into_iter().collect();
        flash.insert(":alert", "a2");
        let keys: Vec<_> = flash.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alert", "notice", "success"]);
        assert_eq!(flash.get("alert"), Some("a2"));
    }

    #[test]
    fn missing_category_is_none() {
        let flash: FlashMessages = [("notice", "n")].into_iter().collect();
        assert_eq!(flash.get("alert"), None);
        assert!(!flash.is_empty());
    }
}
