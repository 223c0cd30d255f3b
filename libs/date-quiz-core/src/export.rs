//! Listing of tokens that have no recording yet.
//!
//! Each line names a clip to synthesize as
//! `{index:03}_{speaker}_{reading}`, matching how recordings are looked up
//! by the text after their last underscore.

use serde::{Deserialize, Serialize};

use crate::audio::manifest::AudioManifest;
use crate::audio::readings::TOKEN_READINGS;

/// Speaker label used when none is configured.
pub const DEFAULT_SPEAKER: &str = "speaker";

/// A token with no entry in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingAudio {
    /// 1-based position in the canonical reading table.
    pub index: usize,
    pub token: String,
    pub text: String,
}

impl MissingAudio {
    pub fn line(&self, speaker: &str) -> String {
        format!("{:03}_{}_{}", self.index, speaker, self.text)
    }
}

/// Canonical tokens absent from the manifest, in table order.
pub fn missing_audio(manifest: &AudioManifest) -> Vec<MissingAudio> {
    TOKEN_READINGS
        .iter()
        .enumerate()
        .filter(|(_, (token, _))| !manifest.contains(token))
        .filter_map(|(i, (token, readings))| {
            readings.first().map(|text| MissingAudio {
                index: i + 1,
                token: token.to_string(),
                text: text.to_string(),
            })
        })
        .collect()
}

/// Newline-delimited export document.
pub fn export_missing_audio(manifest: &AudioManifest, speaker: &str) -> String {
    missing_audio(manifest)
        .iter()
        .map(|m| m.line(speaker))
        .collect::<Vec<_>>()
        .join("\n")
}
