//! Quiz session: question generation, answering and scoring.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::matching::{build_choices, evaluate_typed};
use crate::sampling::{coin_flip, sample_with_replacement};
use crate::settings::{clamp_question_count, Settings};
use crate::types::{AnswerKind, AnswerMode, Direction, DisplayMode, Item, QuestionMode};

/// Settings snapshot taken when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub question_mode: QuestionMode,
    pub answer_mode: AnswerMode,
    pub display_mode: DisplayMode,
}

impl From<&Settings> for QuizConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            question_mode: settings.question_mode,
            answer_mode: settings.answer_mode,
            display_mode: settings.display_mode,
        }
    }
}

/// Pick the direction for one question.
pub fn resolve_direction<R: Rng + ?Sized>(mode: QuestionMode, rng: &mut R) -> Direction {
    match mode {
        QuestionMode::EnToJp => Direction::EnToJp,
        QuestionMode::JpToEn => Direction::JpToEn,
        QuestionMode::Mixed => {
            if coin_flip(rng) {
                Direction::EnToJp
            } else {
                Direction::JpToEn
            }
        }
    }
}

/// Pick the answer kind for one question.
pub fn resolve_answer_kind<R: Rng + ?Sized>(mode: AnswerMode, rng: &mut R) -> AnswerKind {
    match mode {
        AnswerMode::Multiple => AnswerKind::Multiple,
        AnswerMode::Typing => AnswerKind::Typing,
        AnswerMode::Mixed => {
            if coin_flip(rng) {
                AnswerKind::Multiple
            } else {
                AnswerKind::Typing
            }
        }
    }
}

/// The question currently on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub index: usize,
    pub item: Item,
    pub direction: Direction,
    pub kind: AnswerKind,
    pub prompt: String,
    pub answer: String,
    /// Shuffled options; empty for typing questions.
    pub choices: Vec<String>,
    /// Set once the question may be advanced past.
    pub resolved: bool,
}

/// Outcome of clicking a multiple-choice option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOutcome {
    pub correct: bool,
    pub answer: String,
}

/// Outcome of checking a typed answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingOutcome {
    pub accepted: bool,
    /// False when accepted after an earlier miss on the same question.
    pub counted: bool,
    pub answer: String,
}

/// Final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Rounded percentage, 0 for an empty total.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as u32
}

/// A running quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    config: QuizConfig,
    pool: Vec<Item>,
    items: Vec<Item>,
    idx: usize,
    correct: usize,
    typing_misses: BTreeSet<usize>,
    current: Option<Question>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session of `count` questions drawn with replacement from `pool`.
    ///
    /// `count` is clamped to the supported range. Fails when the pool is empty.
    pub fn start<R: Rng + ?Sized>(pool: Vec<Item>, count: u32, config: QuizConfig, rng: &mut R) -> Result<Self> {
        if pool.is_empty() {
            return Err(QuizError::EmptyPool);
        }

        let count = clamp_question_count(count) as usize;
        let items = sample_with_replacement(&pool, count, rng);

        let mut session = Self {
            config,
            pool,
            items,
            idx: 0,
            correct: 0,
            typing_misses: BTreeSet::new(),
            current: None,
            started_at: Utc::now(),
            finished_at: None,
        };
        session.current = Some(session.build_question(0, rng));
        Ok(session)
    }

    /// Start a session from the current settings and catalog.
    pub fn from_settings<R: Rng + ?Sized>(catalog: &Catalog, settings: &Settings, rng: &mut R) -> Result<Self> {
        let pool = catalog.eligible_pool(settings.category, settings.focus_mode);
        Self::start(pool, settings.questions_per_quiz, QuizConfig::from(settings), rng)
    }

    fn build_question<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Question {
        let item = self.items[index].clone();
        let direction = resolve_direction(self.config.question_mode, rng);
        let kind = resolve_answer_kind(self.config.answer_mode, rng);
        let display = self.config.display_mode;

        let (prompt, answer) = match direction {
            Direction::EnToJp => (item.en.clone(), item.japanese(display)),
            Direction::JpToEn => (item.japanese(display), item.en.clone()),
        };

        let choices = match kind {
            AnswerKind::Multiple => build_choices(&answer, direction, display, &self.pool, rng),
            AnswerKind::Typing => Vec::new(),
        };

        Question {
            index,
            item,
            direction,
            kind,
            prompt,
            answer,
            choices,
            resolved: false,
        }
    }

    pub fn config(&self) -> QuizConfig {
        self.config
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Zero-based index of the current question.
    pub fn index(&self) -> usize {
        self.idx
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn typing_misses(&self) -> &BTreeSet<usize> {
        &self.typing_misses
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    fn open_question(&mut self, kind: AnswerKind) -> Result<&mut Question> {
        let index = self.idx;
        let question = self.current.as_mut().ok_or(QuizError::Finished)?;
        if question.kind != kind {
            return Err(QuizError::WrongAnswerKind {
                index,
                expected: question.kind,
            });
        }
        if question.resolved {
            return Err(QuizError::AlreadyAnswered { index });
        }
        Ok(question)
    }

    /// Record a multiple-choice click. Only the first click counts.
    pub fn submit_choice(&mut self, choice: &str) -> Result<ChoiceOutcome> {
        let question = self.open_question(AnswerKind::Multiple)?;
        question.resolved = true;
        let correct = choice == question.answer;
        let answer = question.answer.clone();

        if correct {
            self.correct += 1;
        }
        Ok(ChoiceOutcome { correct, answer })
    }

    /// Check a typed answer.
    ///
    /// A wrong answer marks the question as missed and leaves it open for
    /// another try; a later correct answer resolves it without scoring.
    pub fn check_typing(&mut self, typed: &str) -> Result<TypingOutcome> {
        let index = self.idx;
        let display = self.config.display_mode;
        let question = self.open_question(AnswerKind::Typing)?;
        let result = evaluate_typed(&question.item, question.direction, display, typed);
        let answer = question.answer.clone();

        if !result.is_correct {
            self.typing_misses.insert(index);
            return Ok(TypingOutcome {
                accepted: false,
                counted: false,
                answer,
            });
        }

        question.resolved = true;
        let counted = !self.typing_misses.contains(&index);
        if counted {
            self.correct += 1;
        }
        Ok(TypingOutcome {
            accepted: true,
            counted,
            answer,
        })
    }

    /// Give up on a typing question. Marks it missed.
    pub fn skip(&mut self) -> Result<String> {
        let index = self.idx;
        let question = self.open_question(AnswerKind::Typing)?;
        question.resolved = true;
        let answer = question.answer.clone();
        self.typing_misses.insert(index);
        Ok(answer)
    }

    /// Move to the next question. Returns `None` once the session has ended.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<&Question>> {
        let question = self.current.as_ref().ok_or(QuizError::Finished)?;
        if !question.resolved {
            return Err(QuizError::Unanswered { index: self.idx });
        }

        self.idx += 1;
        if self.idx >= self.items.len() {
            self.current = None;
            self.finished_at = Some(Utc::now());
            return Ok(None);
        }

        self.current = Some(self.build_question(self.idx, rng));
        Ok(self.current.as_ref())
    }

    /// Final score, available once every question has been answered.
    pub fn results(&self) -> Result<QuizResults> {
        let finished_at = self.finished_at.ok_or(QuizError::NotFinished)?;
        Ok(QuizResults {
            correct: self.correct,
            total: self.items.len(),
            percentage: percentage(self.correct, self.items.len()),
            started_at: self.started_at,
            finished_at,
        })
    }
}
