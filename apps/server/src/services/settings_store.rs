//! File-backed settings persistence.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use date_quiz_core::{Catalog, Settings, SettingsUpdate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Settings held in memory and mirrored to a JSON file on every change.
pub struct SettingsStore {
    path: PathBuf,
    current: Mutex<Settings>,
}

impl SettingsStore {
    /// Restore settings from `path`.
    ///
    /// A missing file yields defaults. A malformed one is logged and ignored.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let raw = std::fs::read_to_string(&path).ok();
        let (settings, error) = Settings::restore(raw.as_deref());
        if let Some(e) = error {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings");
        }
        Self {
            path,
            current: Mutex::new(settings),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Settings {
        self.lock().clone()
    }

    /// Merge a partial update and persist the result.
    pub fn update(&self, update: SettingsUpdate, catalog: &Catalog) -> Result<Settings, StoreError> {
        let mut current = self.lock();
        current.apply(update, catalog);
        self.persist(&current)?;
        Ok(current.clone())
    }

    /// Restore defaults and persist them.
    pub fn reset(&self) -> Result<Settings, StoreError> {
        let mut current = self.lock();
        *current = Settings::default();
        self.persist(&current)?;
        Ok(current.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Settings> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, settings: &Settings) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&self.path, settings.to_json()).map_err(io_err)?;
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
