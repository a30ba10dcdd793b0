// src/distribution.rs
//
// Answer-distribution analyzer. One pure single-pass routine shared by the
// pre-import sanity check and the post-import audit, so the two numbers are
// always computed the same way and stay comparable.

use std::fmt;

use serde::Serialize;

use crate::models::question::AnswerLetter;

/// Per-letter correct-answer counts over an ordered set of questions or
/// locked positions. Derived data; recomputed, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSummary {
    counts: [u32; 4],
    total: u32,
}

impl DistributionSummary {
    pub fn count(&self, letter: AnswerLetter) -> u32 {
        self.counts[letter.index()]
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnswerLetter, u32)> + '_ {
        AnswerLetter::ALL
            .into_iter()
            .map(move |letter| (letter, self.count(letter)))
    }
}

impl fmt::Display for DistributionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{} B:{} C:{} D:{} (total {})",
            self.count(AnswerLetter::A),
            self.count(AnswerLetter::B),
            self.count(AnswerLetter::C),
            self.count(AnswerLetter::D),
            self.total
        )
    }
}

/// Counts correct answers per letter in a single pass.
pub fn summarize<I>(letters: I) -> DistributionSummary
where
    I: IntoIterator<Item = AnswerLetter>,
{
    let mut counts = [0u32; 4];
    let mut total = 0u32;
    for letter in letters {
        counts[letter.index()] += 1;
        total += 1;
    }
    DistributionSummary { counts, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnswerLetter::*;

    #[test]
    fn counts_sum_to_input_length() {
        let letters = vec![A, B, B, C, D, D, D];
        let summary = summarize(letters.iter().copied());
        let sum: u32 = AnswerLetter::ALL.iter().map(|l| summary.count(*l)).sum();
        assert_eq!(sum, letters.len() as u32);
        assert_eq!(summary.total(), letters.len() as u32);
    }

    #[test]
    fn per_letter_counts_are_exact() {
        let summary = summarize(vec![B, A, B, C, B]);
        assert_eq!(summary.count(A), 1);
        assert_eq!(summary.count(B), 3);
        assert_eq!(summary.count(C), 1);
        assert_eq!(summary.count(D), 0);
    }

    #[test]
    fn empty_input_yields_zero_everything() {
        let summary = summarize(std::iter::empty());
        assert_eq!(summary.total(), 0);
        for (_, count) in summary.iter() {
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn equal_distributions_compare_equal() {
        assert_eq!(summarize(vec![A, B]), summarize(vec![B, A]));
        assert_ne!(summarize(vec![A, B]), summarize(vec![A, A]));
    }
}
