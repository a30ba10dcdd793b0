// src/models/question.rs

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One of the four answer letters a multiple-choice question can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; 4] = [
        AnswerLetter::A,
        AnswerLetter::B,
        AnswerLetter::C,
        AnswerLetter::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerLetter::A => "A",
            AnswerLetter::B => "B",
            AnswerLetter::C => "C",
            AnswerLetter::D => "D",
        }
    }

    /// Index 0..=3, used for distribution counting.
    pub fn index(&self) -> usize {
        match self {
            AnswerLetter::A => 0,
            AnswerLetter::B => 1,
            AnswerLetter::C => 2,
            AnswerLetter::D => 3,
        }
    }

    pub fn from_char(c: char) -> Option<AnswerLetter> {
        match c {
            'A' => Some(AnswerLetter::A),
            'B' => Some(AnswerLetter::B),
            'C' => Some(AnswerLetter::C),
            'D' => Some(AnswerLetter::D),
            _ => None,
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next().and_then(AnswerLetter::from_char), chars.next()) {
            (Some(letter), None) => Ok(letter),
            _ => Err(format!("'{}' is not one of A, B, C, D", s)),
        }
    }
}

/// One raw entry of the question bank file, exactly as it appears on disk.
///
/// Options still carry their letter prefix (`"A- Four stroke"` or
/// `"A-Four stroke"`); `number` and `category` may be absent.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RawQuestionEntry {
    pub number: Option<u32>,

    pub category: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "Question prompt must be 1-2000 characters."))]
    pub question: Option<String>,

    #[validate(length(min = 4, max = 4, message = "A question must carry exactly four options."))]
    pub options: Vec<String>,

    pub correct_answer_letter: Option<String>,
}

/// A normalized, validated question. Transient: exists only between the
/// bank file and the importer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based number within the bank; doubles as the exam position.
    pub number: u32,

    pub category: String,

    pub prompt: String,

    /// Ordered letter -> option text mapping. Always exactly four entries.
    pub options: BTreeMap<AnswerLetter, String>,

    pub correct_answer_letter: AnswerLetter,
}

impl Question {
    pub fn option_text(&self, letter: AnswerLetter) -> Option<&str> {
        self.options.get(&letter).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_letter_parses_single_letters() {
        assert_eq!("A".parse::<AnswerLetter>().unwrap(), AnswerLetter::A);
        assert_eq!(" D ".parse::<AnswerLetter>().unwrap(), AnswerLetter::D);
        assert!("E".parse::<AnswerLetter>().is_err());
        assert!("AB".parse::<AnswerLetter>().is_err());
        assert!("".parse::<AnswerLetter>().is_err());
    }

    #[test]
    fn answer_letter_serde_round_trips_as_bare_letter() {
        let json = serde_json::to_string(&AnswerLetter::B).unwrap();
        assert_eq!(json, "\"B\"");
        let back: AnswerLetter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AnswerLetter::B);
    }
}
