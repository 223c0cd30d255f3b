//! Core types for the date quiz.

use serde::{Deserialize, Serialize};

/// Vocabulary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DayOfMonth,
    Months,
    Weekdays,
    Dates,
    FullDate,
}

impl Default for Category {
    fn default() -> Self {
        Self::Dates
    }
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Self::DayOfMonth,
        Self::Months,
        Self::Weekdays,
        Self::Dates,
        Self::FullDate,
    ];

    /// Get the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DayOfMonth => "day_of_month",
            Self::Months => "months",
            Self::Weekdays => "weekdays",
            Self::Dates => "dates",
            Self::FullDate => "full_date",
        }
    }

    /// Human readable label shown in the setup screen.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DayOfMonth => "Day of the month (example: 7th)",
            Self::Months => "Months (example: April)",
            Self::Weekdays => "Weekdays (example: Monday)",
            Self::Dates => "Dates (example: November 7th)",
            Self::FullDate => "Full date (example: Monday May 11th)",
        }
    }
}

/// Which side of the pair is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    EnToJp,
    JpToEn,
}

impl Direction {
    /// Short label for the question header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EnToJp => "EN → JP",
            Self::JpToEn => "JP → EN",
        }
    }
}

/// Question direction setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionMode {
    EnToJp,
    JpToEn,
    Mixed,
}

impl Default for QuestionMode {
    fn default() -> Self {
        Self::Mixed
    }
}

/// How a single question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Multiple,
    Typing,
}

/// Answer type setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    Multiple,
    Typing,
    Mixed,
}

impl Default for AnswerMode {
    fn default() -> Self {
        Self::Multiple
    }
}

/// Which Japanese representation is shown and accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Kana,
    Kanji,
    Both,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Kana
    }
}

/// Item filter applied on top of the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    All,
    Irregular,
}

impl Default for FocusMode {
    fn default() -> Self {
        Self::All
    }
}

/// A vocabulary item from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub category: Category,
    pub en: String,
    pub jp_kana: String,
    #[serde(default)]
    pub jp_kanji: String,
    #[serde(default)]
    pub irregular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u32>,
}

impl Item {
    /// Japanese text for the given display mode.
    ///
    /// `Both` renders as `kana (kanji)` when both readings exist and falls
    /// back to whichever one is present otherwise.
    pub fn japanese(&self, display: DisplayMode) -> String {
        match display {
            DisplayMode::Kana => self.jp_kana.clone(),
            DisplayMode::Kanji => self.jp_kanji.clone(),
            DisplayMode::Both => match (self.jp_kana.is_empty(), self.jp_kanji.is_empty()) {
                (false, false) => format!("{} ({})", self.jp_kana, self.jp_kanji),
                (false, true) => self.jp_kana.clone(),
                (true, _) => self.jp_kanji.clone(),
            },
        }
    }

    /// Text on the given side of the pair.
    pub fn text_for(&self, direction: Direction, display: DisplayMode) -> String {
        match direction {
            Direction::EnToJp => self.japanese(display),
            Direction::JpToEn => self.en.clone(),
        }
    }
}
