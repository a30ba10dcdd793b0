// src/import.rs
//
// Pool importer: one insert per question, one round trip per insert.
// A rejected record is logged with its position and skipped; the rest of
// the bank still goes in.

use crate::models::pool::{ImportReport, ImportedQuestion, NewPoolQuestion, RecordFailure};
use crate::models::question::Question;
use crate::store::ExamStore;

/// Persists the normalized bank into the question pool.
///
/// Returns the hand-off report consumed by the locked-pattern builder:
/// every successfully imported question with its store identity, plus
/// every isolated failure. Never returns an error; a store that is down
/// simply fails every record.
pub async fn import_questions(store: &dyn ExamStore, questions: &[Question]) -> ImportReport {
    tracing::info!("importing {} questions into question_pool", questions.len());

    let mut report = ImportReport {
        submitted: questions.len(),
        ..ImportReport::default()
    };

    for question in questions {
        let payload = NewPoolQuestion::from(question);
        match store.insert_question(&payload).await {
            Ok(question_id) => {
                tracing::info!(
                    "imported Q{:3} (answer {})",
                    question.number,
                    question.correct_answer_letter
                );
                report.imported.push(ImportedQuestion {
                    number: question.number,
                    question_id,
                    correct_answer_letter: question.correct_answer_letter,
                });
            }
            Err(err) => {
                tracing::warn!("failed to import Q{:3}: {}", question.number, err);
                report.failures.push(RecordFailure {
                    position: question.number,
                    reason: err.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "imported {} of {} questions ({} failed)",
        report.imported_count(),
        report.submitted,
        report.failures.len()
    );

    report
}
