// src/pipeline.rs
//
// Sequential import pipeline: loader -> analyzer -> importer -> builder ->
// verifier. Each stage's output is a full precondition for the next, so
// there is no overlap and no fan-out.

use std::path::Path;

use crate::bank;
use crate::distribution::{self, DistributionSummary};
use crate::error::SetupError;
use crate::import;
use crate::models::pool::{ImportReport, PatternReport};
use crate::pattern;
use crate::store::ExamStore;
use crate::verify::{self, AuditReport};

/// Everything one import run produced, stage by stage.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub bank_size: usize,
    pub bank_distribution: DistributionSummary,
    pub import: ImportReport,
    pub pattern: PatternReport,
    pub audit: AuditReport,
}

/// Runs the full import pipeline against the given store.
///
/// Fatal errors (unreadable or malformed bank, store read failures during
/// the audit) propagate; per-record insert failures are tallied inside the
/// stage reports and never abort the run.
pub async fn run_import(store: &dyn ExamStore, bank_path: &Path) -> Result<PipelineOutcome, SetupError> {
    let questions = bank::load_bank(bank_path)?;
    tracing::info!("loaded {} questions from {}", questions.len(), bank_path.display());

    // Pre-import sanity check on the raw bank.
    let bank_distribution =
        distribution::summarize(questions.iter().map(|q| q.correct_answer_letter));
    tracing::info!("bank answer distribution: {}", bank_distribution);

    let import = import::import_questions(store, &questions).await;
    let pattern = pattern::build_locked_pattern(store, &questions, &import).await;
    let audit = verify::audit(store).await?;

    Ok(PipelineOutcome {
        bank_size: questions.len(),
        bank_distribution,
        import,
        pattern,
        audit,
    })
}
