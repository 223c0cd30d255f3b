//! Common test utilities and fixtures for integration tests.
//!
//! Every context gets its own scratch directory holding the persisted
//! settings and a couple of audio clips, so tests can run in parallel.

pub mod fixtures;

use std::path::PathBuf;

use axum::Router;
use uuid::Uuid;

use date_quiz_core::{AudioManifest, Catalog};
use date_quiz_server::config::Config;
use date_quiz_server::{router, AppState};

/// Test context holding the app state and its scratch directory.
pub struct TestContext {
    pub state: AppState,
    pub dir: PathBuf,
    app: Router,
}

impl TestContext {
    /// Context with the sample vocabulary and a full manifest.
    pub fn new() -> Self {
        Self::with_manifest(fixtures::sample_manifest())
    }

    /// Context with the sample vocabulary and the given manifest.
    pub fn with_manifest(manifest: AudioManifest) -> Self {
        Self::build(manifest, None)
    }

    /// Context whose settings file already holds `raw`.
    pub fn with_saved_settings(raw: &str) -> Self {
        Self::build(fixtures::sample_manifest(), Some(raw))
    }

    fn build(manifest: AudioManifest, saved_settings: Option<&str>) -> Self {
        let dir = std::env::temp_dir().join(format!("date-quiz-test-{}", Uuid::new_v4()));
        let audio_dir = dir.join("audio");
        std::fs::create_dir_all(audio_dir.join("base")).expect("Failed to create audio dir");
        std::fs::write(audio_dir.join("base/month_1.wav"), fixtures::CLIP_BYTES)
            .expect("Failed to write clip");

        if let Some(raw) = saved_settings {
            std::fs::write(dir.join("settings.json"), raw).expect("Failed to write settings");
        }

        let config = Config {
            audio_dir,
            settings_path: dir.join("settings.json"),
            speaker_label: "tester".to_string(),
            ..Config::default()
        };

        let catalog = Catalog::from_json(&fixtures::sample_dataset().to_string())
            .expect("Failed to parse sample dataset");

        let state = AppState::new(catalog, manifest, config);
        let app = router(state.clone());

        Self { state, dir, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
