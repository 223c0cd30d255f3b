//! HTTP route handlers

pub mod audio;
pub mod items;
pub mod quiz;
pub mod settings;
