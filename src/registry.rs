//! Language registry: single source of truth for supported languages.
//!
//! Every other module resolves language codes against this registry. It is
//! initialized once behind an `OnceLock` and immutable afterwards. The
//! `native_name` field doubles as the human-readable label shown by the
//! language switcher in the dashboard UI.

use std::sync::OnceLock;

/// Configuration for one supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "zh")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Chinese")
    pub name: &'static str,

    /// Name of the language in the language itself (e.g., "中文", "Español")
    pub native_name: &'static str,

    /// Whether this is the default language used when no valid preference
    /// is persisted (exactly one language should set this)
    pub is_default: bool,

    /// Whether this language is currently offered in the UI
    pub enabled: bool,
}

/// Registry of all languages the dashboard knows about.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry instance, initializing it on first access.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Look up a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages currently offered in the UI.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// All known languages, including disabled ones.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The default language, used when no valid preference is persisted.
    ///
    /// # Panics
    /// Panics if the registry defines zero or more than one default language;
    /// either is a configuration error.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language defined in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages defined in registry"),
        }
    }

    /// Whether a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The language set shipped with the dashboard.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            enabled: true,
        },
    ]
}
