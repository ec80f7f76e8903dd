//! Persistent key-value preferences.
//!
//! Preferences are string pairs persisted across sessions as a single JSON
//! object file. Every `set` writes through immediately, so the file always
//! reflects the last value written. An in-memory backend exists for tests and
//! for hosts without a writable config directory.

use std::{
    cell::RefCell,
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

use indexmap::IndexMap;
use thiserror::Error;

/// Key under which the active theme identifier is stored.
pub const THEME_KEY: &str = "vitrine-theme";

/// Key under which the active language code is stored.
pub const LANGUAGE_KEY: &str = "vitrine-language";

/// Key under which onboarding completion is recorded.
pub const ONBOARDING_KEY: &str = "vitrine-onboarding-complete";

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("could not serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not create preferences directory at \"{path}\": {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write preferences to \"{path}\": {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Shared handle to a [`PreferenceStore`].
///
/// The UI is single threaded, so a plain `Rc<RefCell<_>>` is enough; the
/// controllers holding clones of this handle are the only writers.
pub type PrefsHandle = Rc<RefCell<PreferenceStore>>;

pub struct PreferenceStore {
    path: Option<PathBuf>,
    values: IndexMap<String, String>,
}

impl PreferenceStore {
    /// Opens the store backed by the given file.
    ///
    /// A missing or unreadable file yields an empty store; corruption is
    /// recovered locally, never surfaced to the caller.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();

        Self {
            path: Some(path),
            values,
        }
    }

    /// Creates a store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: IndexMap::new(),
        }
    }

    /// Default preferences file location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vitrine").join("preferences.json"))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Sets `key` to `value` and writes the store through to disk.
    ///
    /// The in-memory value is updated even when the disk write fails.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), PrefsError> {
        self.values.insert(key.into(), value.into());
        self.flush()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Wraps the store in a shared handle.
    pub fn into_handle(self) -> PrefsHandle {
        Rc::new(RefCell::new(self))
    }

    fn flush(&self) -> Result<(), PrefsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| PrefsError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(path, contents).map_err(|source| PrefsError::Write {
            path: path.clone(),
            source,
        })
    }
}
