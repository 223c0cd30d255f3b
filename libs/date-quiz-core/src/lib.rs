//! Core library for the Japanese date vocabulary quiz.
//!
//! Provides:
//! - Vocabulary catalog and eligibility filters
//! - Persisted user settings
//! - Quiz sessions (sampling, question generation, scoring)
//! - Answer matching for typed and multiple-choice answers
//! - Audio token derivation, manifest parsing and sequenced playback
//! - Export of tokens that still lack a recording

pub mod audio;
pub mod catalog;
pub mod error;
pub mod export;
pub mod matching;
pub mod sampling;
pub mod session;
pub mod settings;
pub mod types;

pub use audio::{audio_available, audio_tokens, AudioManifest, AudioSequencer, ClipPlayer, PlaybackOutcome};
pub use catalog::{Catalog, WordEntry};
pub use error::{AudioError, QuizError, Result, EMPTY_POOL_MESSAGE};
pub use export::{export_missing_audio, missing_audio, MissingAudio};
pub use matching::{build_choices, evaluate_typed, is_accepted, normalize_english, normalize_japanese, MatchResult};
pub use session::{ChoiceOutcome, Question, QuizConfig, QuizResults, QuizSession, TypingOutcome};
pub use settings::{Settings, SettingsUpdate};
pub use types::{
    AnswerKind, AnswerMode, Category, Direction, DisplayMode, FocusMode, Item, QuestionMode,
};
