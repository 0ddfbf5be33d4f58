//! Primary translation catalog for the marketing site
//!
//! Strings are authored as one table per language (see `en.rs`, `ar.rs`, ...)
//! and assembled here into one [`TranslationEntry`] per key.
//!
//! ## Adding a new key
//!
//! 1. Add the entry to every per-language table
//! 2. Run the tests; `test_builtin_catalog_is_complete` reports any gaps

use super::languages::{supported_languages, LanguageDescriptor};
use super::source::LookupSource;
use super::{ar, en, hi, tl, ur};
use std::collections::HashMap;

/// Localized values for one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    key: String,
    values: HashMap<String, String>,
}

impl TranslationEntry {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, lang: &str, value: &str) -> Self {
        self.values.insert(lang.to_string(), value.to_string());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value for `lang`, if the entry has one
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.values.get(lang).map(String::as_str)
    }
}

/// Static key -> per-language string table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, TranslationEntry>,
}

impl Catalog {
    /// Catalog with the built-in marketing strings for every supported language
    pub fn new() -> Self {
        Self::from_tables(vec![
            ("en", en::get_translations()),
            ("ar", ar::get_translations()),
            ("ur", ur::get_translations()),
            ("hi", hi::get_translations()),
            ("tl", tl::get_translations()),
        ])
    }

    /// Assemble a catalog from per-language `key -> value` tables
    pub fn from_tables(tables: Vec<(&str, HashMap<String, String>)>) -> Self {
        let mut entries: HashMap<String, TranslationEntry> = HashMap::new();

        for (lang, table) in tables {
            for (key, value) in table {
                entries
                    .entry(key.clone())
                    .or_insert_with(|| TranslationEntry::new(&key))
                    .values
                    .insert(lang.to_string(), value);
            }
        }

        Self { entries }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = TranslationEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.key.clone(), entry))
                .collect(),
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    pub fn supported_languages(&self) -> &'static [LanguageDescriptor] {
        supported_languages()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every `(key, language code)` pair with no value, sorted by key
    pub fn missing_values(&self) -> Vec<(String, &'static str)> {
        let mut missing = Vec::new();
        for key in self.keys() {
            let entry = &self.entries[key];
            for lang in supported_languages() {
                if entry.get(lang.code).is_none() {
                    missing.push((key.to_string(), lang.code));
                }
            }
        }
        missing
    }

    /// Every string this catalog holds for `lang`
    pub fn values_for(&self, lang: &str) -> HashMap<String, String> {
        self.entries
            .values()
            .filter_map(|entry| entry.get(lang).map(|v| (entry.key.clone(), v.to_string())))
            .collect()
    }
}

impl LookupSource for Catalog {
    fn name(&self) -> &str {
        "site"
    }

    fn lookup(&self, key: &str, lang: &str) -> Option<&str> {
        self.entries.get(key).and_then(|entry| entry.get(lang))
    }

    fn keys(&self) -> Vec<&str> {
        Catalog::keys(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = Catalog::new();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.missing_values(), Vec::<(String, &str)>::new());
    }

    #[test]
    fn test_lookup_nav_home() {
        let catalog = Catalog::new();
        let entry = catalog.lookup("nav.home").unwrap();

        assert_eq!(entry.key(), "nav.home");
        assert_eq!(entry.get("en"), Some("Home"));
        assert_eq!(entry.get("ar"), Some("الرئيسية"));
        assert_eq!(entry.get("xx"), None);
    }

    #[test]
    fn test_lookup_missing_key() {
        assert!(Catalog::new().lookup("unknownKey123").is_none());
    }

    #[test]
    fn test_missing_values_reports_gaps() {
        let catalog = Catalog::from_entries(vec![
            TranslationEntry::new("b.partial").with_value("en", "Partial"),
            TranslationEntry::new("a.full")
                .with_value("en", "Full")
                .with_value("ar", "Full")
                .with_value("ur", "Full")
                .with_value("hi", "Full")
                .with_value("tl", "Full"),
        ]);

        let missing = catalog.missing_values();
        assert_eq!(
            missing,
            vec![
                ("b.partial".to_string(), "ar"),
                ("b.partial".to_string(), "ur"),
                ("b.partial".to_string(), "hi"),
                ("b.partial".to_string(), "tl"),
            ]
        );
    }

    #[test]
    fn test_keys_sorted() {
        let catalog = Catalog::new();
        let keys = catalog.keys();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert!(keys.contains(&"footer.copyright"));
    }

    #[test]
    fn test_values_for_language() {
        let catalog = Catalog::new();
        let tagalog = catalog.values_for("tl");

        assert_eq!(tagalog.len(), catalog.len());
        assert_eq!(tagalog.get("nav.solution").map(String::as_str), Some("Solusyon"));
        assert!(catalog.values_for("xx").is_empty());
    }
}
