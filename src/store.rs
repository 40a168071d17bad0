//! Language preference persistence.
//!
//! The selected language survives restarts through a small key-value slot.
//! Reads happen once, when the [`Translator`](crate::Translator) is built;
//! writes happen on every successful language switch. Last write wins, no
//! transactional guarantees.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors raised when persisting the language preference.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read preferences at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write preferences at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preferences at {path} are not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A key-value slot holding the last selected language code.
///
/// Implementations only store a string; validating the code against the
/// registry is the caller's job, so a stale or hand-edited value degrades to
/// the default language rather than failing.
pub trait PreferenceStore {
    /// Read the persisted language code, if any.
    ///
    /// An absent, unreadable, or corrupt store yields `None`; those are all
    /// recoverable and map to the default language.
    fn load_language(&self) -> Option<String>;

    /// Persist a language code.
    fn save_language(&mut self, code: &str) -> Result<(), StoreError>;
}

/// On-disk serialized shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct Preferences {
    language: String,
}

/// File-backed preference store: a JSON file `{"language": "<code>"}`.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferences {
    fn load_language(&self) -> Option<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read language preference");
                return None;
            }
        };

        match serde_json::from_str::<Preferences>(&raw) {
            Ok(prefs) => Some(prefs.language),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "language preference file is corrupt");
                None
            }
        }
    }

    fn save_language(&mut self, code: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let prefs = Preferences {
            language: code.to_string(),
        };
        let raw = serde_json::to_string_pretty(&prefs).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, raw).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-process preference store, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    language: Option<String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a language code.
    pub fn with_language(code: &str) -> Self {
        Self {
            language: Some(code.to_string()),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_language(&self) -> Option<String> {
        self.language.clone()
    }

    fn save_language(&mut self, code: &str) -> Result<(), StoreError> {
        self.language = Some(code.to_string());
        Ok(())
    }
}
