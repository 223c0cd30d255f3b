//! Startup loading of the vocabulary dataset and the audio manifest.

use std::path::{Path, PathBuf};

use date_quiz_core::{AudioManifest, Catalog, QuizError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: QuizError },
}

/// Load the vocabulary dataset. The quiz cannot run without it.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(items = catalog.items.len(), "vocabulary loaded");
    Ok(catalog)
}

/// Load the audio manifest.
///
/// Failure is not fatal: the returned manifest is empty and flagged, and no
/// audio is offered.
pub fn load_manifest(path: &Path) -> AudioManifest {
    let manifest = match std::fs::read_to_string(path) {
        Ok(content) => AudioManifest::from_json(&content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "audio manifest unavailable");
            return AudioManifest::failed();
        }
    };

    if manifest.has_error() {
        tracing::warn!(path = %path.display(), "audio manifest could not be parsed");
    } else {
        tracing::info!(tokens = manifest.len(), "audio manifest loaded");
    }
    manifest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}", uuid::Uuid::new_v4(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_dataset_is_an_error() {
        let path = std::env::temp_dir().join("does-not-exist-date-quiz.json");
        assert!(matches!(load_catalog(&path), Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_malformed_dataset_is_an_error() {
        let path = temp_file("data.json", "{\"items\": 3}");
        assert!(matches!(load_catalog(&path), Err(LoadError::Parse { .. })));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_manifest_degrades() {
        let path = std::env::temp_dir().join("does-not-exist-manifest.json");
        let manifest = load_manifest(&path);
        assert!(manifest.has_error());
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_manifest_loaded() {
        let path = temp_file("manifest.json", r#"{"tokens":{"day_1":"001_speaker_ついたち.wav"}}"#);
        let manifest = load_manifest(&path);
        assert!(!manifest.has_error());
        assert_eq!(manifest.get("day_1"), Some("001_speaker_ついたち.wav"));
        std::fs::remove_file(path).ok();
    }
}
