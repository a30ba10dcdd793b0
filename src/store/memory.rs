// src/store/memory.rs

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::SetupError;
use crate::models::pool::{LockedPosition, NewLockedPosition, NewPoolQuestion, PoolRecord};
use crate::store::ExamStore;

#[derive(Default)]
struct Inner {
    pool: Vec<PoolRecord>,
    locked: Vec<LockedPosition>,
    next_pool_id: i64,
    next_locked_id: i64,
    question_insert_calls: usize,
    locked_insert_calls: usize,
}

/// In-memory store used by `--dry-run` imports and by the test suite.
/// Identities are assigned sequentially from 1, mirroring BIGSERIAL.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    /// 1-based question-insert call numbers that fail with a simulated
    /// store rejection.
    failing_question_inserts: HashSet<usize>,
    failing_locked_inserts: HashSet<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects the given question inserts (1-based call order).
    pub fn with_failing_question_inserts<I>(calls: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            failing_question_inserts: calls.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A store that rejects the given locked-position inserts (1-based call order).
    pub fn with_failing_locked_inserts<I>(calls: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            failing_locked_inserts: calls.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ExamStore for MemoryStore {
    async fn insert_question(&self, question: &NewPoolQuestion) -> Result<i64, SetupError> {
        let mut inner = self.inner.lock().unwrap();
        inner.question_insert_calls += 1;
        if self.failing_question_inserts.contains(&inner.question_insert_calls) {
            return Err(SetupError::Store("simulated insert rejection".to_string()));
        }

        inner.next_pool_id += 1;
        let id = inner.next_pool_id;
        inner.pool.push(PoolRecord {
            id,
            category: question.category.clone(),
            question: question.question.clone(),
            option_a: question.option_a.clone(),
            option_b: question.option_b.clone(),
            option_c: question.option_c.clone(),
            option_d: question.option_d.clone(),
            correct_answer_letter: question.correct_answer_letter.as_str().to_string(),
            is_active: true,
            created_at: Some(chrono::Utc::now()),
        });
        Ok(id)
    }

    async fn insert_locked_position(
        &self,
        position: &NewLockedPosition,
    ) -> Result<i64, SetupError> {
        let mut inner = self.inner.lock().unwrap();
        inner.locked_insert_calls += 1;
        if self.failing_locked_inserts.contains(&inner.locked_insert_calls) {
            return Err(SetupError::Store("simulated insert rejection".to_string()));
        }

        // UNIQUE(question_position), as in the Postgres schema.
        if inner
            .locked
            .iter()
            .any(|l| l.question_position == position.question_position)
        {
            return Err(SetupError::Store(format!(
                "duplicate question_position {}",
                position.question_position
            )));
        }

        inner.next_locked_id += 1;
        let id = inner.next_locked_id;
        inner.locked.push(LockedPosition {
            id,
            question_position: position.question_position,
            question_id: position.question_id,
            correct_answer_letter: position.correct_answer_letter.as_str().to_string(),
            created_at: Some(chrono::Utc::now()),
        });
        Ok(id)
    }

    async fn pool_records(&self) -> Result<Vec<PoolRecord>, SetupError> {
        let inner = self.inner.lock().unwrap();
        let mut records: Vec<PoolRecord> = inner
            .pool
            .iter()
            .filter(|r| r.is_active)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn locked_positions(&self) -> Result<Vec<LockedPosition>, SetupError> {
        let inner = self.inner.lock().unwrap();
        let mut positions = inner.locked.clone();
        positions.sort_by_key(|l| l.question_position);
        Ok(positions)
    }

    async fn pool_count(&self) -> Result<i64, SetupError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.pool.iter().filter(|r| r.is_active).count() as i64)
    }

    async fn locked_count(&self) -> Result<i64, SetupError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.locked.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::AnswerLetter;

    fn sample_question(letter: AnswerLetter) -> NewPoolQuestion {
        NewPoolQuestion {
            category: "GENERAL".to_string(),
            question: "sample".to_string(),
            option_a: "one".to_string(),
            option_b: "two".to_string(),
            option_c: "three".to_string(),
            option_d: "four".to_string(),
            correct_answer_letter: letter,
        }
    }

    #[tokio::test]
    async fn assigns_sequential_identities() {
        let store = MemoryStore::new();
        let first = store.insert_question(&sample_question(AnswerLetter::A)).await.unwrap();
        let second = store.insert_question(&sample_question(AnswerLetter::B)).await.unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.pool_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn injected_failure_rejects_only_that_call() {
        let store = MemoryStore::with_failing_question_inserts([2]);
        assert!(store.insert_question(&sample_question(AnswerLetter::A)).await.is_ok());
        assert!(store.insert_question(&sample_question(AnswerLetter::B)).await.is_err());
        assert!(store.insert_question(&sample_question(AnswerLetter::C)).await.is_ok());
        assert_eq!(store.pool_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_locked_position_is_rejected() {
        let store = MemoryStore::new();
        let position = NewLockedPosition {
            question_position: 1,
            question_id: 10,
            correct_answer_letter: AnswerLetter::C,
        };
        assert!(store.insert_locked_position(&position).await.is_ok());
        assert!(store.insert_locked_position(&position).await.is_err());
        assert_eq!(store.locked_count().await.unwrap(), 1);
    }
}
