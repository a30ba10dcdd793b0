// src/models/pool.rs

use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::error::SetupError;
use crate::models::question::{AnswerLetter, Question};

/// Insert payload for one row of the 'question_pool' table.
#[derive(Debug, Clone)]
pub struct NewPoolQuestion {
    pub category: String,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer_letter: AnswerLetter,
}

impl From<&Question> for NewPoolQuestion {
    fn from(q: &Question) -> Self {
        let text = |letter| q.option_text(letter).unwrap_or_default().to_string();
        NewPoolQuestion {
            category: q.category.clone(),
            question: q.prompt.clone(),
            option_a: text(AnswerLetter::A),
            option_b: text(AnswerLetter::B),
            option_c: text(AnswerLetter::C),
            option_d: text(AnswerLetter::D),
            correct_answer_letter: q.correct_answer_letter,
        }
    }
}

/// Represents one row of the 'question_pool' table.
/// Never mutated by this subsystem; retirement flips `is_active`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PoolRecord {
    pub id: i64,
    pub category: String,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer_letter: String,
    pub is_active: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl PoolRecord {
    /// Parses the stored letter, rejecting anything outside A-D.
    pub fn letter(&self) -> Result<AnswerLetter, SetupError> {
        self.correct_answer_letter.parse().map_err(|_| {
            SetupError::Store(format!(
                "question_pool row {} holds invalid correct_answer_letter '{}'",
                self.id, self.correct_answer_letter
            ))
        })
    }
}

/// Insert payload for one row of the 'active_test_config' table.
#[derive(Debug, Clone)]
pub struct NewLockedPosition {
    pub question_position: i32,
    pub question_id: i64,
    pub correct_answer_letter: AnswerLetter,
}

/// Represents one row of the 'active_test_config' table: the binding of an
/// exam slot to a pool question and its answer, captured by value at
/// creation time so later pool edits never rewrite the scoring key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LockedPosition {
    pub id: i64,
    pub question_position: i32,
    pub question_id: i64,
    pub correct_answer_letter: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl LockedPosition {
    pub fn letter(&self) -> Result<AnswerLetter, SetupError> {
        self.correct_answer_letter.parse().map_err(|_| {
            SetupError::Store(format!(
                "active_test_config position {} holds invalid correct_answer_letter '{}'",
                self.question_position, self.correct_answer_letter
            ))
        })
    }
}

/// Hand-off artifact from the importer to the locked-pattern builder:
/// which original question number landed under which store identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedQuestion {
    pub number: u32,
    pub question_id: i64,
    pub correct_answer_letter: AnswerLetter,
}

/// One isolated per-record persistence failure.
#[derive(Debug, Clone)]
pub struct RecordFailure {
    pub position: u32,
    pub reason: String,
}

/// Outcome of a pool import run. Failures are data, not control flow:
/// the caller decides what a partial import means.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub submitted: usize,
    pub imported: Vec<ImportedQuestion>,
    pub failures: Vec<RecordFailure>,
}

impl ImportReport {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }
}

/// Outcome of a locked-pattern build run.
#[derive(Debug, Default)]
pub struct PatternReport {
    pub submitted: usize,
    /// Exam positions successfully locked, in the order they were bound.
    pub locked_positions: Vec<u32>,
    pub failures: Vec<RecordFailure>,
}

impl PatternReport {
    pub fn locked_count(&self) -> usize {
        self.locked_positions.len()
    }
}
