//! Translation catalog: the static table of localized strings.
//!
//! One JSON asset per language lives under `locales/`, each a flat object
//! mapping dotted keys (e.g. `"nav.dashboard"`) to display strings. The
//! assets are embedded at compile time and parsed once into an immutable
//! catalog. Keys are deliberately flat rather than nested objects; lookup is
//! a single map access on the full dotted key.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded locale assets, one per supported language.
const LOCALE_ASSETS: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("zh", include_str!("../locales/zh.json")),
    ("es", include_str!("../locales/es.json")),
    ("fr", include_str!("../locales/fr.json")),
];

/// The complete set of translated strings for one language.
#[derive(Debug, Clone)]
pub struct Bundle {
    entries: HashMap<String, String>,
}

impl Bundle {
    /// Look up a dotted key, returning the translated string if present.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the bundle contains a key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All dotted keys in this bundle, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All (key, translation) pairs, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys in this bundle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_entries<I>(entries: I) -> Bundle
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Bundle {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Mapping from language code to its [`Bundle`].
///
/// Constructed once at process start from the embedded assets and never
/// mutated afterwards.
pub struct Catalog {
    bundles: HashMap<&'static str, Bundle>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Get the global catalog, parsing the embedded assets on first access.
    ///
    /// # Panics
    /// Panics if an embedded asset is not valid JSON. The assets ship inside
    /// the binary, so a parse failure is a build defect, not a runtime
    /// condition.
    pub fn get() -> &'static Catalog {
        CATALOG.get_or_init(|| {
            Catalog::load().expect("embedded locale assets should be valid JSON")
        })
    }

    fn load() -> Result<Catalog> {
        let mut bundles = HashMap::new();

        for (code, raw) in LOCALE_ASSETS {
            let entries: HashMap<String, String> = serde_json::from_str(raw)
                .with_context(|| format!("Failed to parse locale asset for '{}'", code))?;
            bundles.insert(*code, Bundle { entries });
        }

        Ok(Catalog { bundles })
    }

    /// The bundle for a language code, if the catalog has one.
    pub fn bundle(&self, code: &str) -> Option<&Bundle> {
        self.bundles.get(code)
    }

    /// Language codes the catalog carries bundles for.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bundles.keys().copied()
    }

    #[cfg(test)]
    pub(crate) fn from_bundles<I>(bundles: I) -> Catalog
    where
        I: IntoIterator<Item = (&'static str, Bundle)>,
    {
        Catalog {
            bundles: bundles.into_iter().collect(),
        }
    }
}
