// src/bank.rs
//
// Question bank loader: reads the raw JSON bank and normalizes it into
// validated `Question` values. Runs entirely before any store call, so a
// malformed bank can never leave partial rows behind.

use std::collections::BTreeMap;
use std::path::Path;

use validator::Validate;

use crate::error::SetupError;
use crate::models::question::{AnswerLetter, Question, RawQuestionEntry};

/// Sentinel category for entries that carry none.
pub const DEFAULT_CATEGORY: &str = "GENERAL";

/// Reads and normalizes a question bank file.
pub fn load_bank(path: &Path) -> Result<Vec<Question>, SetupError> {
    let raw = std::fs::read_to_string(path)?;
    let entries: Vec<RawQuestionEntry> = serde_json::from_str(&raw)?;
    normalize_entries(entries)
}

/// Normalizes raw entries into `Question`s, assigning defaults for missing
/// `number` (1-based input position) and `category`.
pub fn normalize_entries(entries: Vec<RawQuestionEntry>) -> Result<Vec<Question>, SetupError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| normalize_entry(entry, idx as u32 + 1))
        .collect()
}

fn normalize_entry(entry: RawQuestionEntry, fallback_number: u32) -> Result<Question, SetupError> {
    if let Err(validation_errors) = entry.validate() {
        return Err(SetupError::MalformedQuestion(format!(
            "entry {}: {}",
            fallback_number, validation_errors
        )));
    }

    let number = entry.number.unwrap_or(fallback_number);

    let prompt = entry.question.ok_or_else(|| {
        SetupError::MalformedQuestion(format!("entry {}: missing question prompt", number))
    })?;

    let correct_answer_letter = entry
        .correct_answer_letter
        .ok_or_else(|| {
            SetupError::MalformedQuestion(format!(
                "entry {}: missing correct_answer_letter",
                number
            ))
        })?
        .parse::<AnswerLetter>()
        .map_err(|e| SetupError::MalformedQuestion(format!("entry {}: {}", number, e)))?;

    let mut options = BTreeMap::new();
    for raw_option in &entry.options {
        let (letter, text) = parse_option(raw_option, number)?;
        if options.insert(letter, text).is_some() {
            return Err(SetupError::MalformedQuestion(format!(
                "entry {}: duplicate option letter {}",
                number, letter
            )));
        }
    }
    if options.len() != 4 {
        return Err(SetupError::MalformedQuestion(format!(
            "entry {}: expected exactly four distinct option letters, got {}",
            number,
            options.len()
        )));
    }
    if !options.contains_key(&correct_answer_letter) {
        return Err(SetupError::MalformedQuestion(format!(
            "entry {}: correct_answer_letter {} labels no option",
            number, correct_answer_letter
        )));
    }

    Ok(Question {
        number,
        category: entry
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        prompt,
        options,
        correct_answer_letter,
    })
}

/// Splits a prefixed option string into its letter and text.
///
/// The bank writes options as `"A- Four stroke"` or `"A-Two stroke"`; the
/// first character is the letter and the separator is either `"- "` or a
/// bare `"-"`. Stripping the two-character prefix and trimming handles both
/// widths.
fn parse_option(raw: &str, number: u32) -> Result<(AnswerLetter, String), SetupError> {
    let trimmed = raw.trim();
    let letter = trimmed
        .chars()
        .next()
        .and_then(AnswerLetter::from_char)
        .ok_or_else(|| {
            SetupError::MalformedQuestion(format!(
                "entry {}: option '{}' does not start with a letter A-D",
                number, raw
            ))
        })?;

    let text = trimmed.get(2..).unwrap_or("").trim();
    if text.is_empty() {
        return Err(SetupError::MalformedQuestion(format!(
            "entry {}: option '{}' has no text after its prefix",
            number, raw
        )));
    }

    Ok((letter, text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(options: &[&str]) -> RawQuestionEntry {
        RawQuestionEntry {
            number: None,
            category: None,
            question: Some("What cycle does a diesel generator engine use?".to_string()),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer_letter: Some("A".to_string()),
        }
    }

    const OPTIONS: [&str; 4] = ["A- Four stroke", "B-Two stroke", "C- Six stroke", "D- Rotary"];

    #[test]
    fn parses_both_separator_widths() {
        let questions = normalize_entries(vec![entry(&OPTIONS)]).unwrap();
        let q = &questions[0];
        assert_eq!(q.option_text(AnswerLetter::A), Some("Four stroke"));
        assert_eq!(q.option_text(AnswerLetter::B), Some("Two stroke"));
    }

    #[test]
    fn defaults_number_to_input_position_and_category_to_general() {
        let questions = normalize_entries(vec![entry(&OPTIONS), entry(&OPTIONS)]).unwrap();
        assert_eq!(questions[0].number, 1);
        assert_eq!(questions[1].number, 2);
        assert_eq!(questions[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn explicit_number_and_category_survive() {
        let mut e = entry(&OPTIONS);
        e.number = Some(42);
        e.category = Some("ENGINES".to_string());
        let q = &normalize_entries(vec![e]).unwrap()[0];
        assert_eq!(q.number, 42);
        assert_eq!(q.category, "ENGINES");
    }

    #[test]
    fn missing_correct_answer_letter_is_malformed() {
        let mut e = entry(&OPTIONS);
        e.correct_answer_letter = None;
        let err = normalize_entries(vec![e]).unwrap_err();
        assert!(matches!(err, SetupError::MalformedQuestion(_)));
    }

    #[test]
    fn missing_prompt_is_malformed() {
        let mut e = entry(&OPTIONS);
        e.question = None;
        let err = normalize_entries(vec![e]).unwrap_err();
        assert!(matches!(err, SetupError::MalformedQuestion(_)));
    }

    #[test]
    fn duplicate_option_letter_is_malformed() {
        let e = entry(&["A- one", "A- again", "C- three", "D- four"]);
        let err = normalize_entries(vec![e]).unwrap_err();
        assert!(matches!(err, SetupError::MalformedQuestion(_)));
    }

    #[test]
    fn wrong_option_count_is_malformed() {
        let e = entry(&["A- one", "B- two", "C- three"]);
        let err = normalize_entries(vec![e]).unwrap_err();
        assert!(matches!(err, SetupError::MalformedQuestion(_)));
    }

    #[test]
    fn correct_letter_must_label_an_option() {
        let mut e = entry(&OPTIONS);
        e.correct_answer_letter = Some("E".to_string());
        let err = normalize_entries(vec![e]).unwrap_err();
        assert!(matches!(err, SetupError::MalformedQuestion(_)));
    }
}
