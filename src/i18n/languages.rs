//! Supported display languages

use serde::Serialize;

/// Code of the language used when no valid preference exists
pub const DEFAULT_LANGUAGE: &str = "en";

/// Metadata for one supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDescriptor {
    /// ISO 639-1 code
    pub code: &'static str,
    /// Name in English
    pub display_name: &'static str,
    /// Name written in the language itself
    pub native_name: &'static str,
    pub is_right_to_left: bool,
}

static LANGUAGES: [LanguageDescriptor; 5] = [
    LanguageDescriptor { code: "en", display_name: "English", native_name: "English", is_right_to_left: false },
    LanguageDescriptor { code: "ar", display_name: "Arabic", native_name: "\u{0627}\u{0644}\u{0639}\u{0631}\u{0628}\u{064A}\u{0629}", is_right_to_left: true },
    LanguageDescriptor { code: "ur", display_name: "Urdu", native_name: "\u{0627}\u{0631}\u{062F}\u{0648}", is_right_to_left: true },
    LanguageDescriptor { code: "hi", display_name: "Hindi", native_name: "\u{0939}\u{093F}\u{0928}\u{094D}\u{0926}\u{0940}", is_right_to_left: false },
    LanguageDescriptor { code: "tl", display_name: "Tagalog", native_name: "Tagalog", is_right_to_left: false },
];

/// All supported languages, in display order
pub fn supported_languages() -> &'static [LanguageDescriptor] {
    &LANGUAGES
}

/// Descriptor for `code`, if supported. Case-sensitive.
pub fn language(code: &str) -> Option<&'static LanguageDescriptor> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

pub fn is_supported(code: &str) -> bool {
    language(code).is_some()
}

/// Descriptor for [`DEFAULT_LANGUAGE`]
pub fn default_language() -> &'static LanguageDescriptor {
    language(DEFAULT_LANGUAGE).unwrap_or(&LANGUAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = supported_languages().iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), supported_languages().len());
    }

    #[test]
    fn test_each_code_has_exactly_one_descriptor() {
        for lang in supported_languages() {
            let matches = supported_languages().iter().filter(|l| l.code == lang.code).count();
            assert_eq!(matches, 1, "duplicate descriptor for {}", lang.code);
        }
    }

    #[test]
    fn test_declaration_order() {
        let codes: Vec<_> = supported_languages().iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["en", "ar", "ur", "hi", "tl"]);
    }

    #[test]
    fn test_default_is_english_ltr() {
        let lang = default_language();
        assert_eq!(lang.code, DEFAULT_LANGUAGE);
        assert!(!lang.is_right_to_left);
    }

    #[test]
    fn test_default_constant_names_a_supported_language() {
        let lang = language(DEFAULT_LANGUAGE).unwrap();
        assert!(std::ptr::eq(lang, default_language()));
    }

    #[test]
    fn test_rtl_flags() {
        assert!(language("ar").unwrap().is_right_to_left);
        assert!(language("ur").unwrap().is_right_to_left);
        assert!(!language("hi").unwrap().is_right_to_left);
        assert_eq!(language("ar").unwrap().native_name, "العربية");
        assert_eq!(language("hi").unwrap().native_name, "हिन्दी");
    }

    #[test]
    fn test_unknown_and_case_sensitive() {
        assert!(language("xx").is_none());
        assert!(!is_supported("AR"));
        assert!(!is_supported(""));
    }
}
