//! Validated language type.
//!
//! A `Language` can only be constructed for codes the registry knows and has
//! enabled, so every place that holds a `Language` may assume it is valid.

use crate::registry::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};

/// A language validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "zh")
    code: &'static str,
}

impl Language {
    /// English, the default language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Simplified Chinese.
    pub const CHINESE: Language = Language { code: "zh" };

    /// Spanish.
    pub const SPANISH: Language = Language { code: "es" };

    /// French.
    pub const FRENCH: Language = Language { code: "fr" };

    /// Create a `Language` from a code string.
    ///
    /// Fails if the code is unknown to the registry or the language is
    /// disabled. This is the only public constructor besides the constants,
    /// which is what keeps `Language` values valid by construction.
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // use the registry's static str
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language selected when no valid preference is persisted.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// The ISO 639-1 language code (e.g., "en", "zh").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full registry configuration for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a properly constructed `Language`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Chinese").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name of the language in the language itself (e.g., "中文").
    ///
    /// This is the label the language switcher displays.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

// Serializes as the bare code string so event payloads come out as
// {"language":"zh"} rather than a nested struct.
impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_registry() {
        assert_eq!(Language::ENGLISH.code(), "en");
        assert_eq!(Language::CHINESE.code(), "zh");
        assert_eq!(Language::SPANISH.code(), "es");
        assert_eq!(Language::FRENCH.code(), "fr");
    }

    #[test]
    fn test_from_code_valid() {
        for code in ["en", "zh", "es", "fr"] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_unknown() {
        let result = Language::from_code("de");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
    }

    #[test]
    fn test_default_language_is_english() {
        let default = Language::default_language();
        assert_eq!(default, Language::ENGLISH);
        assert!(default.is_default());
    }

    #[test]
    fn test_names() {
        assert_eq!(Language::CHINESE.name(), "Chinese");
        assert_eq!(Language::CHINESE.native_name(), "中文");
        assert_eq!(Language::FRENCH.native_name(), "Français");
        assert_eq!(Language::ENGLISH.native_name(), "English");
    }

    #[test]
    fn test_equality_with_from_code() {
        let via_code = Language::from_code("es").unwrap();
        assert_eq!(via_code, Language::SPANISH);
        assert_ne!(via_code, Language::FRENCH);
    }

    #[test]
    fn test_serialize_as_code() {
        let json = serde_json::to_string(&Language::CHINESE).unwrap();
        assert_eq!(json, "\"zh\"");
    }
}
