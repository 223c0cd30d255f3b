pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use date_quiz_core::{AudioManifest, Catalog};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::loader::{load_catalog, load_manifest};
use crate::services::sessions::SessionStore;
use crate::services::settings_store::SettingsStore;

/// URL prefix the audio clips are served under.
pub const AUDIO_ROUTE: &str = "/audio";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub manifest: Arc<AudioManifest>,
    pub settings: Arc<SettingsStore>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: Catalog, manifest: AudioManifest, config: Config) -> Self {
        let settings = SettingsStore::open(config.settings_path.clone());
        Self {
            catalog: Arc::new(catalog),
            manifest: Arc::new(manifest),
            settings: Arc::new(settings),
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading vocabulary from {}...", config.data_path.display());
    let catalog = load_catalog(&config.data_path)?;

    tracing::info!("Loading audio manifest from {}...", config.manifest_path.display());
    let manifest = load_manifest(&config.manifest_path);

    let addr = config.addr();
    let app = router(AppState::new(catalog, manifest, config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the full router for the given state.
pub fn router(state: AppState) -> Router {
    let audio_files = ServeDir::new(&state.config.audio_dir);

    Router::new()
        .route("/health", get(health_check))
        // Settings routes
        .route(
            "/api/settings",
            get(routes::settings::get_settings).put(routes::settings::update_settings),
        )
        .route("/api/settings/reset", post(routes::settings::reset_settings))
        // Vocabulary routes
        .route("/api/items", get(routes::items::selected))
        // Quiz routes
        .route("/api/quiz", post(routes::quiz::start))
        .route(
            "/api/quiz/{id}",
            get(routes::quiz::current).delete(routes::quiz::discard),
        )
        .route("/api/quiz/{id}/choice", post(routes::quiz::choice))
        .route("/api/quiz/{id}/check", post(routes::quiz::check))
        .route("/api/quiz/{id}/skip", post(routes::quiz::skip))
        .route("/api/quiz/{id}/results", get(routes::quiz::results))
        // Audio routes
        .route("/api/audio/status", get(routes::audio::status))
        .route("/api/audio/items/{item_id}", get(routes::audio::playlist))
        .route("/api/audio/missing", get(routes::audio::export_missing))
        .nest_service(AUDIO_ROUTE, audio_files)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
