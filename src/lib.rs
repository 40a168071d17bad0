//! Internationalization (i18n) library for the trading dashboard.
//!
//! This crate owns everything language-related: the set of supported
//! languages, the catalog of translated strings, the persisted language
//! preference, and the translator that ties them together.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for supported languages and their metadata
//! - `language`: validated `Language` type constructed against the registry
//! - `catalog`: translation bundles loaded from embedded locale assets
//! - `store`: persisted language preference (file-backed or in-memory)
//! - `translator`: key lookup, language switching, and change notifications
//! - `validator`: key-set parity checks across bundles
//! - `metrics`: lookup and switch observability
//!
//! # Example
//!
//! ```rust
//! use dashboard_i18n::{MemoryPreferences, Translator};
//!
//! let mut translator = Translator::new(Box::new(MemoryPreferences::new()));
//! assert_eq!(translator.translate("nav.dashboard"), "Dashboard");
//!
//! translator.set_language("zh");
//! assert_eq!(translator.translate("nav.dashboard"), "仪表板");
//! ```

pub mod catalog;
pub mod language;
pub mod metrics;
pub mod registry;
pub mod store;
pub mod translator;
pub mod validator;

pub use catalog::{Bundle, Catalog};
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use store::{FilePreferences, MemoryPreferences, PreferenceStore, StoreError};
pub use translator::{LanguageChanged, Subscription, Translator};
pub use validator::{CatalogValidator, ValidationReport};
