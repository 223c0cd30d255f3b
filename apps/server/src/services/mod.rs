//! Startup loading, settings persistence and live quiz sessions.

pub mod loader;
pub mod sessions;
pub mod settings_store;
