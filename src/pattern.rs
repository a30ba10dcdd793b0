// src/pattern.rs
//
// Locked-pattern builder: binds each exam position to its imported pool
// question and answer letter. Positions of questions that failed to import
// are skipped, never re-numbered, so the locked pattern keeps the original
// bank enumeration with gaps where the pool has none.

use std::collections::HashMap;

use crate::models::pool::{ImportReport, NewLockedPosition, PatternReport, RecordFailure};
use crate::models::question::Question;
use crate::store::ExamStore;

/// Persists the locked answer pattern for every successfully imported
/// position. The answer letter is copied by value from the hand-off so the
/// scoring key stays valid even if pool content is retired later.
pub async fn build_locked_pattern(
    store: &dyn ExamStore,
    questions: &[Question],
    import: &ImportReport,
) -> PatternReport {
    tracing::info!(
        "building locked answer pattern for {} imported questions",
        import.imported_count()
    );

    let by_number: HashMap<u32, _> = import
        .imported
        .iter()
        .map(|imported| (imported.number, imported))
        .collect();

    let mut report = PatternReport {
        submitted: import.imported_count(),
        ..PatternReport::default()
    };

    for question in questions {
        let Some(imported) = by_number.get(&question.number) else {
            // Import failed for this position; leave the gap.
            continue;
        };

        let locked = NewLockedPosition {
            question_position: question.number as i32,
            question_id: imported.question_id,
            correct_answer_letter: imported.correct_answer_letter,
        };

        match store.insert_locked_position(&locked).await {
            Ok(_) => {
                tracing::info!(
                    "locked position {:3}: answer {}",
                    question.number,
                    imported.correct_answer_letter
                );
                report.locked_positions.push(question.number);
            }
            Err(err) => {
                tracing::warn!("failed to lock position {:3}: {}", question.number, err);
                report.failures.push(RecordFailure {
                    position: question.number,
                    reason: err.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "locked {} of {} positions ({} failed)",
        report.locked_count(),
        report.submitted,
        report.failures.len()
    );

    report
}
