//! Catalog validation.
//!
//! Every language bundle must carry the same set of dotted keys as the
//! default-language bundle; a key missing from one language silently renders
//! as the key literal in that language, which is exactly the kind of
//! omission that should fail in CI instead. `CatalogValidator` checks that
//! parity plus a few hygiene rules, and a test asserts the shipped catalog
//! validates clean.

use crate::catalog::Catalog;
use crate::registry::LanguageRegistry;
use regex::Regex;
use std::sync::OnceLock;

/// Outcome of validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that make the catalog unfit to ship
    pub errors: Vec<String>,

    /// Suspicious but tolerable findings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation catalogs.
pub struct CatalogValidator;

// Dotted key shape: lowercase group, dot, lowercase item (cached)
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate a catalog against the language registry.
    ///
    /// Errors:
    /// - an enabled language with no bundle
    /// - a bundle missing keys the default-language bundle has
    /// - an empty translated string
    ///
    /// Warnings:
    /// - a bundle carrying keys the default-language bundle lacks
    /// - a bundle for a language the registry does not know
    /// - keys not shaped like `group.item`
    pub fn validate(catalog: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        let registry = LanguageRegistry::get();

        for config in registry.list_enabled() {
            if catalog.bundle(config.code).is_none() {
                report
                    .errors
                    .push(format!("No bundle for enabled language '{}'", config.code));
            }
        }

        let default_code = registry.default_language().code;
        let Some(default_bundle) = catalog.bundle(default_code) else {
            report.errors.push(format!(
                "No bundle for default language '{}', cannot check key parity",
                default_code
            ));
            return report;
        };

        let mut codes: Vec<_> = catalog.languages().collect();
        codes.sort_unstable();

        for code in codes {
            let bundle = catalog.bundle(code).expect("code came from the catalog");

            if registry.get_by_code(code).is_none() {
                report.warnings.push(format!(
                    "Bundle '{}' has no matching language in the registry",
                    code
                ));
            }

            let mut missing: Vec<_> = default_bundle
                .keys()
                .filter(|key| !bundle.contains(key))
                .collect();
            missing.sort_unstable();
            if !missing.is_empty() {
                report.errors.push(format!(
                    "Bundle '{}' is missing {} key(s): {}",
                    code,
                    missing.len(),
                    missing.join(", ")
                ));
            }

            let mut extra: Vec<_> = bundle
                .keys()
                .filter(|key| !default_bundle.contains(key))
                .collect();
            extra.sort_unstable();
            if !extra.is_empty() {
                report.warnings.push(format!(
                    "Bundle '{}' has {} key(s) absent from '{}': {}",
                    code,
                    extra.len(),
                    default_code,
                    extra.join(", ")
                ));
            }

            let mut entries: Vec<_> = bundle.entries().collect();
            entries.sort_unstable();
            for (key, value) in entries {
                if value.is_empty() {
                    report
                        .errors
                        .push(format!("Bundle '{}' has an empty value for '{}'", code, key));
                }
                if !Self::key_regex().is_match(key) {
                    report.warnings.push(format!(
                        "Bundle '{}' key '{}' is not shaped like 'group.item'",
                        code, key
                    ));
                }
            }
        }

        report
    }

    fn key_regex() -> &'static Regex {
        KEY_REGEX.get_or_init(|| {
            Regex::new(r"^[a-z][a-z0-9_]*\.[a-z][a-z0-9_]*$").expect("key pattern is valid")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Bundle;

    fn full_bundle() -> Bundle {
        // Mirrors the key shape of the shipped catalog, in miniature
        Bundle::from_entries([
            ("nav.dashboard", "Dashboard"),
            ("common.save", "Save"),
        ])
    }

    fn bundle_for_every_enabled_language(bundle: Bundle) -> Catalog {
        Catalog::from_bundles(
            ["en", "zh", "es", "fr"]
                .into_iter()
                .map(move |code| (code, bundle.clone())),
        )
    }

    // ==================== Shipped Catalog ====================

    #[test]
    fn test_shipped_catalog_is_clean() {
        let report = CatalogValidator::validate(Catalog::get());
        assert!(
            report.is_clean(),
            "errors: {:?}, warnings: {:?}",
            report.errors,
            report.warnings
        );
    }

    // ==================== Parity Checks ====================

    #[test]
    fn test_identical_bundles_are_clean() {
        let catalog = bundle_for_every_enabled_language(full_bundle());
        assert!(CatalogValidator::validate(&catalog).is_clean());
    }

    #[test]
    fn test_missing_bundle_is_an_error() {
        let catalog = Catalog::from_bundles([
            ("en", full_bundle()),
            ("zh", full_bundle()),
            ("es", full_bundle()),
            // fr absent
        ]);

        let report = CatalogValidator::validate(&catalog);
        assert!(report.has_errors());
        assert!(report.errors.iter().any(|e| e.contains("'fr'")));
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let incomplete = Bundle::from_entries([("nav.dashboard", "仪表板")]);
        let catalog = Catalog::from_bundles([
            ("en", full_bundle()),
            ("zh", incomplete),
            ("es", full_bundle()),
            ("fr", full_bundle()),
        ]);

        let report = CatalogValidator::validate(&catalog);
        assert!(report.has_errors());
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("'zh'") && e.contains("common.save")));
    }

    #[test]
    fn test_extra_key_is_a_warning() {
        let oversized = Bundle::from_entries([
            ("nav.dashboard", "Panel"),
            ("common.save", "Guardar"),
            ("common.extra", "Sobrante"),
        ]);
        let catalog = Catalog::from_bundles([
            ("en", full_bundle()),
            ("zh", full_bundle()),
            ("es", oversized),
            ("fr", full_bundle()),
        ]);

        let report = CatalogValidator::validate(&catalog);
        assert!(!report.has_errors());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("'es'") && w.contains("common.extra")));
    }

    #[test]
    fn test_missing_default_bundle_short_circuits() {
        let catalog = Catalog::from_bundles([("zh", full_bundle())]);

        let report = CatalogValidator::validate(&catalog);
        assert!(report.has_errors());
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("default language 'en'")));
    }

    // ==================== Hygiene Checks ====================

    #[test]
    fn test_empty_value_is_an_error() {
        let hollow = Bundle::from_entries([("nav.dashboard", ""), ("common.save", "Save")]);
        let catalog = bundle_for_every_enabled_language(hollow);

        let report = CatalogValidator::validate(&catalog);
        assert!(report.has_errors());
        assert!(report.errors.iter().any(|e| e.contains("empty value")));
    }

    #[test]
    fn test_undotted_key_is_a_warning() {
        let sloppy = Bundle::from_entries([
            ("nav.dashboard", "Dashboard"),
            ("common.save", "Save"),
            ("loading", "Loading..."),
        ]);
        let catalog = bundle_for_every_enabled_language(sloppy);

        let report = CatalogValidator::validate(&catalog);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("'loading'") && w.contains("group.item")));
    }

    #[test]
    fn test_unregistered_bundle_is_a_warning() {
        let mut bundles = vec![
            ("en", full_bundle()),
            ("zh", full_bundle()),
            ("es", full_bundle()),
            ("fr", full_bundle()),
        ];
        bundles.push(("de", full_bundle()));
        let catalog = Catalog::from_bundles(bundles);

        let report = CatalogValidator::validate(&catalog);
        assert!(!report.has_errors());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("'de'") && w.contains("registry")));
    }

    // ==================== Report API ====================

    #[test]
    fn test_report_new_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_with_warning_not_clean() {
        let mut report = ValidationReport::new();
        report.warnings.push("something".to_string());
        assert!(!report.is_clean());
        assert!(!report.has_errors());
    }
}
