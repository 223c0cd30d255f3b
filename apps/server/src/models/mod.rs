//! API request and response types

use date_quiz_core::{
    audio_available, AnswerKind, AudioManifest, Category, Direction, DisplayMode, FocusMode,
    Question, QuizSession,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from date-quiz-core
pub use date_quiz_core::{QuizResults, Settings, SettingsUpdate, WordEntry};

// === Quiz ===

/// A question as shown to the player. The expected answer is withheld.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    /// 1-based position in the quiz.
    pub number: usize,
    pub item_id: String,
    pub category_label: String,
    pub direction: Direction,
    pub direction_label: String,
    pub kind: AnswerKind,
    pub prompt: String,
    pub choices: Vec<String>,
    pub resolved: bool,
    /// Whether the prompt is spoken Japanese with at least one recorded clip.
    pub has_audio: bool,
}

impl QuestionView {
    pub fn from_question(question: &Question, manifest: &AudioManifest) -> Self {
        Self {
            number: question.index + 1,
            item_id: question.item.id.clone(),
            category_label: question.item.category.label().to_string(),
            direction: question.direction,
            direction_label: question.direction.label().to_string(),
            kind: question.kind,
            prompt: question.prompt.clone(),
            choices: question.choices.clone(),
            resolved: question.resolved,
            has_audio: question.direction == Direction::JpToEn
                && audio_available(&question.item, manifest),
        }
    }
}

/// Progress of a quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub id: Uuid,
    pub total: usize,
    pub correct: usize,
    pub finished: bool,
    pub question: Option<QuestionView>,
}

impl QuizView {
    pub fn new(id: Uuid, session: &QuizSession, manifest: &AudioManifest) -> Self {
        Self {
            id,
            total: session.total(),
            correct: session.correct(),
            finished: session.is_finished(),
            question: session
                .current()
                .map(|question| QuestionView::from_question(question, manifest)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceRequest {
    pub choice: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub answer: String,
}

/// Result of answering, with the quiz state afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub correct: bool,
    /// Whether the answer added to the score.
    pub counted: bool,
    pub answer: String,
    /// Whether the quiz moved on to the next question (or finished).
    pub advanced: bool,
    pub quiz: QuizView,
}

// === Items ===

/// Selection override for the word listing. Absent fields use the saved settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsQuery {
    pub category: Option<Category>,
    pub focus_mode: Option<FocusMode>,
    pub display_mode: Option<DisplayMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedWordsResponse {
    pub category: Category,
    pub category_label: String,
    pub focus_mode: FocusMode,
    /// Whether irregular focus makes sense for this category.
    pub focus_available: bool,
    pub count: usize,
    pub words: Vec<WordEntry>,
}

// === Audio ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioStatusResponse {
    pub enabled: bool,
    pub volume: f32,
    pub manifest_loaded: bool,
    pub token_count: usize,
    pub missing_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipRef {
    pub token: String,
    pub url: String,
}

/// Clips to play, in order, for one item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResponse {
    pub item_id: String,
    pub tokens: Vec<String>,
    /// Empty when audio is disabled. Tokens without a file are left out.
    pub clips: Vec<ClipRef>,
    /// Whether the item has any recorded audio at all.
    pub available: bool,
    pub enabled: bool,
    pub volume: f32,
}
