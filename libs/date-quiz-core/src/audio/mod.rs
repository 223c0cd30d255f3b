//! Audio tokens, the token manifest and sequenced playback.

pub mod manifest;
pub mod readings;
pub mod sequencer;
pub mod tokens;

pub use manifest::AudioManifest;
pub use sequencer::{AudioSequencer, ClipPlayer, PlaybackOutcome, SequenceToken};
pub use tokens::{audio_available, audio_tokens, normalize_weekday, PAUSE_TOKEN};
