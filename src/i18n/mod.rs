//! Internationalization module
//!
//! Provides the marketing-site and dashboard strings in English (en),
//! Arabic (ar), Urdu (ur), Hindi (hi) and Tagalog (tl).
//!
//! [`I18n`] resolves a key against an ordered list of [`LookupSource`]s
//! (site catalog first, dashboard catalog second) and returns the key itself
//! when nothing matches. Changing the language persists the choice through a
//! [`PreferenceStore`] and updates writing direction through a
//! [`DocumentEnvironment`].

mod ar;
mod catalog;
mod dashboard;
mod en;
mod environment;
mod hi;
mod languages;
mod preference;
mod source;
mod tl;
mod ur;

pub use catalog::{Catalog, TranslationEntry};
pub use dashboard::DashboardCatalog;
pub use environment::{Direction, DocumentEnvironment, DocumentState, LogEnvironment};
pub use languages::{
    default_language, is_supported, language, supported_languages, LanguageDescriptor,
    DEFAULT_LANGUAGE,
};
pub use preference::{ConfigPreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use source::LookupSource;

use std::collections::HashMap;

/// Default lookup chain: site catalog, then dashboard strings
pub fn default_sources() -> Vec<Box<dyn LookupSource>> {
    vec![Box::new(Catalog::new()), Box::new(DashboardCatalog::new())]
}

/// Internationalization manager
///
/// Owned by the application root and handed to whatever renders text.
/// Construct one per session; each instance is independent.
pub struct I18n<P: PreferenceStore, E: DocumentEnvironment> {
    current: &'static LanguageDescriptor,
    sources: Vec<Box<dyn LookupSource>>,
    preferences: P,
    environment: E,
}

impl<P: PreferenceStore, E: DocumentEnvironment> I18n<P, E> {
    /// Create a resolver with the built-in catalogs.
    ///
    /// Adopts the stored preference when it names a supported language,
    /// otherwise [`DEFAULT_LANGUAGE`].
    pub fn new(preferences: P, environment: E) -> Self {
        Self::with_sources(default_sources(), preferences, environment)
    }

    pub fn with_sources(sources: Vec<Box<dyn LookupSource>>, preferences: P, environment: E) -> Self {
        let current = match preferences.load() {
            Some(code) => language(&code).unwrap_or_else(|| {
                log::warn!("Stored language '{}' is not supported, using {}", code, DEFAULT_LANGUAGE);
                default_language()
            }),
            None => default_language(),
        };

        let mut i18n = Self {
            current,
            sources,
            preferences,
            environment,
        };
        i18n.apply(current);
        i18n
    }

    /// Append a source consulted after the existing ones
    pub fn push_source(&mut self, source: Box<dyn LookupSource>) {
        log::debug!("Added lookup source '{}' at position {}", source.name(), self.sources.len());
        self.sources.push(source);
    }

    /// Get a translated string by key.
    ///
    /// Sources are tried in order; a key no source can resolve comes back
    /// unchanged.
    pub fn get(&self, key: &str) -> String {
        for source in &self.sources {
            if let Some(value) = source.lookup(key, self.current.code) {
                return value.to_string();
            }
        }
        log::debug!("No translation for '{}' in {}", key, self.current.code);
        key.to_string()
    }

    /// Get every resolvable string for the current language.
    ///
    /// Earlier sources win when several define the same key.
    pub fn get_all(&self) -> HashMap<String, String> {
        let mut all = HashMap::new();
        for source in &self.sources {
            for key in source.keys() {
                if all.contains_key(key) {
                    continue;
                }
                if let Some(value) = source.lookup(key, self.current.code) {
                    all.insert(key.to_string(), value.to_string());
                }
            }
        }
        all
    }

    /// Set the current language.
    ///
    /// Unsupported codes are ignored and leave every piece of state as it
    /// was. Returns whether the language was applied.
    pub fn set_language(&mut self, code: &str) -> bool {
        let Some(lang) = language(code) else {
            log::warn!("Ignoring unsupported language '{}', keeping {}", code, self.current.code);
            return false;
        };

        self.apply(lang);
        log::info!("Language set to: {}", lang.code);
        true
    }

    /// Get the current language code
    pub fn current_language(&self) -> &'static str {
        self.current.code
    }

    pub fn current_descriptor(&self) -> &'static LanguageDescriptor {
        self.current
    }

    pub fn is_rtl(&self) -> bool {
        self.current.is_right_to_left
    }

    pub fn direction(&self) -> Direction {
        Direction::from_rtl(self.current.is_right_to_left)
    }

    /// Get available languages
    pub fn available_languages(&self) -> &'static [LanguageDescriptor] {
        supported_languages()
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Tear down the resolver, handing back its store and environment
    pub fn into_parts(self) -> (P, E) {
        (self.preferences, self.environment)
    }

    fn apply(&mut self, lang: &'static LanguageDescriptor) {
        self.current = lang;
        self.environment.set_direction(Direction::from_rtl(lang.is_right_to_left));
        self.environment.set_language_tag(lang.code);
        if let Err(e) = self.preferences.save(lang.code) {
            log::warn!("Failed to persist language '{}': {}", lang.code, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Error, Result};

    fn fresh() -> I18n<MemoryPreferenceStore, DocumentState> {
        I18n::new(MemoryPreferenceStore::new(), DocumentState::new())
    }

    /// Store whose writes always fail
    struct ReadOnlyStore(Option<String>);

    impl PreferenceStore for ReadOnlyStore {
        fn load(&self) -> Option<String> {
            self.0.clone()
        }

        fn save(&mut self, _code: &str) -> Result<()> {
            Err(Error::Config("read-only".to_string()))
        }
    }

    struct FixedSource(&'static str, &'static str);

    impl LookupSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        fn lookup(&self, key: &str, _lang: &str) -> Option<&str> {
            (key == self.0).then_some(self.1)
        }

        fn keys(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    #[test]
    fn test_defaults_to_english() {
        let i18n = fresh();
        assert_eq!(i18n.current_language(), "en");
        assert!(!i18n.is_rtl());
        assert_eq!(i18n.environment().direction, Direction::Ltr);
        assert_eq!(i18n.environment().language_tag.as_deref(), Some("en"));
        assert_eq!(i18n.preferences().load().as_deref(), Some("en"));
    }

    #[test]
    fn test_nav_home_english_then_arabic() {
        let mut i18n = fresh();
        assert_eq!(i18n.get("nav.home"), "Home");

        assert!(i18n.set_language("ar"));
        assert_eq!(i18n.get("nav.home"), "الرئيسية");
        assert!(i18n.is_rtl());
        assert_eq!(i18n.environment().direction, Direction::Rtl);
        assert_eq!(i18n.environment().language_tag.as_deref(), Some("ar"));
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let mut i18n = fresh();
        for lang in supported_languages() {
            i18n.set_language(lang.code);
            assert_eq!(i18n.get("unknownKey123"), "unknownKey123");
        }
    }

    #[test]
    fn test_dashboard_fallback() {
        let mut i18n = fresh();
        assert_eq!(i18n.get("accountBalance"), "Account Balance");

        i18n.set_language("ar");
        assert_eq!(i18n.get("accountBalance"), "رصيد الحساب");
        assert_eq!(i18n.get("securityNotice"), "Never share your card details or CVV with anyone");
        assert_eq!(i18n.get("ourMission"), "مهمتنا");
        assert_eq!(i18n.get("contactUsSubtitle"), "We're here to help. Reach out to us anytime and we'll get back to you as soon as possible.");
        assert_eq!(i18n.get("solutionHeroTitle"), "Complete Fintech Solution");
    }

    #[test]
    fn test_primary_wins_over_auxiliary() {
        let sources: Vec<Box<dyn LookupSource>> = vec![
            Box::new(Catalog::new()),
            Box::new(FixedSource("nav.home", "Shadowed")),
        ];
        let i18n = I18n::with_sources(sources, MemoryPreferenceStore::new(), DocumentState::new());
        assert_eq!(i18n.get("nav.home"), "Home");
    }

    #[test]
    fn test_pushed_source_is_consulted_last() {
        let mut i18n = fresh();
        i18n.push_source(Box::new(FixedSource("promo.banner", "Ramadan offers")));
        i18n.push_source(Box::new(FixedSource("nav.home", "Shadowed")));

        assert_eq!(i18n.get("promo.banner"), "Ramadan offers");
        assert_eq!(i18n.get("nav.home"), "Home");
    }

    #[test]
    fn test_entry_missing_language_falls_through() {
        let catalog = Catalog::from_entries(vec![
            TranslationEntry::new("only.english").with_value("en", "Only English"),
        ]);
        let sources: Vec<Box<dyn LookupSource>> = vec![Box::new(catalog)];
        let mut i18n = I18n::with_sources(sources, MemoryPreferenceStore::new(), DocumentState::new());

        assert_eq!(i18n.get("only.english"), "Only English");
        i18n.set_language("hi");
        assert_eq!(i18n.get("only.english"), "only.english");
    }

    #[test]
    fn test_unsupported_language_is_ignored() {
        let mut i18n = fresh();
        i18n.set_language("ur");

        assert!(!i18n.set_language("xx"));
        assert_eq!(i18n.current_language(), "ur");
        assert_eq!(i18n.environment().direction, Direction::Rtl);
        assert_eq!(i18n.preferences().load().as_deref(), Some("ur"));
    }

    #[test]
    fn test_set_language_is_idempotent() {
        let mut once = fresh();
        once.set_language("hi");

        let mut twice = fresh();
        twice.set_language("hi");
        twice.set_language("hi");

        assert_eq!(once.current_language(), twice.current_language());
        assert_eq!(once.environment(), twice.environment());
        assert_eq!(once.preferences().load(), twice.preferences().load());
    }

    #[test]
    fn test_restores_stored_preference() {
        let i18n = I18n::new(MemoryPreferenceStore::with_value("ur"), DocumentState::new());
        assert_eq!(i18n.current_language(), "ur");
        assert!(i18n.is_rtl());
        assert_eq!(i18n.environment().direction, Direction::Rtl);
    }

    #[test]
    fn test_invalid_stored_preference_uses_default() {
        let i18n = I18n::new(MemoryPreferenceStore::with_value("xx"), DocumentState::new());
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.preferences().load().as_deref(), Some("en"));
    }

    #[test]
    fn test_persist_failure_does_not_block_change() {
        let mut i18n = I18n::new(ReadOnlyStore(Some("tl".to_string())), DocumentState::new());
        assert_eq!(i18n.current_language(), "tl");

        assert!(i18n.set_language("ar"));
        assert_eq!(i18n.current_language(), "ar");
        assert_eq!(i18n.get("nav.home"), "الرئيسية");
    }

    #[test]
    fn test_direction_matches_descriptor() {
        let mut i18n = fresh();
        for lang in supported_languages() {
            i18n.set_language(lang.code);
            assert_eq!(i18n.is_rtl(), lang.is_right_to_left);
            assert_eq!(i18n.environment().direction.is_rtl(), lang.is_right_to_left);
            assert_eq!(i18n.current_descriptor(), lang);
        }
    }

    #[test]
    fn test_get_all_prefers_earlier_sources() {
        let mut i18n = fresh();
        i18n.push_source(Box::new(FixedSource("nav.home", "Shadowed")));
        i18n.set_language("tl");

        let all = i18n.get_all();
        assert_eq!(all.get("nav.home").map(String::as_str), Some("Home"));
        assert_eq!(all.get("nav.solution").map(String::as_str), Some("Solusyon"));
        assert_eq!(all.get("language").map(String::as_str), Some("Wika"));
        assert_eq!(all.get("accountBalance").map(String::as_str), Some("Account Balance"));
    }
}
