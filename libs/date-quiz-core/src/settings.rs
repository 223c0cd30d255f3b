//! User settings and their persisted JSON form.

use crate::catalog::Catalog;
use crate::types::{AnswerMode, Category, DisplayMode, FocusMode, QuestionMode};
use serde::{Deserialize, Serialize};

pub const MIN_QUESTIONS: u32 = 1;
pub const MAX_QUESTIONS: u32 = 200;
pub const DEFAULT_QUESTIONS: u32 = 20;

/// Quiz and audio settings.
///
/// Missing keys in a persisted blob take their default values; a blob that
/// fails to parse is replaced by the defaults as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub category: Category,
    pub question_mode: QuestionMode,
    pub answer_mode: AnswerMode,
    pub display_mode: DisplayMode,
    pub questions_per_quiz: u32,
    pub focus_mode: FocusMode,
    pub audio_enabled: bool,
    pub audio_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            category: Category::default(),
            question_mode: QuestionMode::default(),
            answer_mode: AnswerMode::default(),
            display_mode: DisplayMode::default(),
            questions_per_quiz: DEFAULT_QUESTIONS,
            focus_mode: FocusMode::default(),
            audio_enabled: true,
            audio_volume: 1.0,
        }
    }
}

/// Partial settings change (absent fields are left as they are).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_mode: Option<QuestionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_mode: Option<AnswerMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_per_quiz: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_mode: Option<FocusMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_volume: Option<f32>,
}

/// Clamp a requested question count to the supported range.
pub fn clamp_question_count(count: u32) -> u32 {
    count.clamp(MIN_QUESTIONS, MAX_QUESTIONS)
}

/// Clamp a volume multiplier to [0, 1]. NaN becomes silence.
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

impl Settings {
    /// Restore settings from a persisted blob.
    ///
    /// Returns the defaults when there is no blob, and also when it is
    /// malformed (in which case the parse error is returned alongside).
    pub fn restore(raw: Option<&str>) -> (Self, Option<serde_json::Error>) {
        match raw {
            None => (Self::default(), None),
            Some(raw) => match serde_json::from_str::<Settings>(raw) {
                Ok(settings) => (settings.clamped(), None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }

    /// Serialize for persistence.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Copy with numeric fields forced into range.
    pub fn clamped(mut self) -> Self {
        self.questions_per_quiz = clamp_question_count(self.questions_per_quiz);
        self.audio_volume = clamp_volume(self.audio_volume);
        self
    }

    /// Apply a partial update.
    ///
    /// Irregular focus is reset to `All` whenever the (possibly new) category
    /// has no irregular items in the catalog.
    pub fn apply(&mut self, update: SettingsUpdate, catalog: &Catalog) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(mode) = update.question_mode {
            self.question_mode = mode;
        }
        if let Some(mode) = update.answer_mode {
            self.answer_mode = mode;
        }
        if let Some(mode) = update.display_mode {
            self.display_mode = mode;
        }
        if let Some(count) = update.questions_per_quiz {
            self.questions_per_quiz = clamp_question_count(count);
        }
        if let Some(focus) = update.focus_mode {
            self.focus_mode = focus;
        }
        if let Some(enabled) = update.audio_enabled {
            self.audio_enabled = enabled;
        }
        if let Some(volume) = update.audio_volume {
            self.audio_volume = clamp_volume(volume);
        }

        if self.focus_mode == FocusMode::Irregular && !catalog.focus_mode_available(self.category) {
            self.focus_mode = FocusMode::All;
        }
    }
}
