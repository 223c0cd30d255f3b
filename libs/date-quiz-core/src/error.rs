//! Error types for date-quiz-core.

use crate::types::AnswerKind;
use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Message shown to the user when a quiz cannot start.
pub const EMPTY_POOL_MESSAGE: &str =
    "No items found for this selection. Try Focus mode: All items.";

/// Errors that can occur while loading data or running a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("no eligible items for the current selection")]
    EmptyPool,

    #[error("invalid dataset: {0}")]
    InvalidDataset(#[from] serde_json::Error),

    #[error("quiz is already finished")]
    Finished,

    #[error("quiz is not finished yet")]
    NotFinished,

    #[error("question {index} was already answered")]
    AlreadyAnswered { index: usize },

    #[error("question {index} has not been answered")]
    Unanswered { index: usize },

    #[error("question {index} expects a {expected:?} answer")]
    WrongAnswerKind { index: usize, expected: AnswerKind },
}

impl QuizError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyPool => EMPTY_POOL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Errors raised while loading or decoding an audio clip.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to load {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
}
