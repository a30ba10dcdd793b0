// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::SetupError;
use crate::models::pool::{LockedPosition, NewLockedPosition, NewPoolQuestion, PoolRecord};
use crate::store::ExamStore;

/// Postgres-backed store. One blocking round trip per record, no batching,
/// so a single rejected row cannot take its siblings down with it.
#[derive(Clone)]
pub struct PgExamStore {
    pool: PgPool,
}

impl PgExamStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExamStore for PgExamStore {
    async fn insert_question(&self, question: &NewPoolQuestion) -> Result<i64, SetupError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO question_pool
                (category, question, option_a, option_b, option_c, option_d,
                 correct_answer_letter, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
            RETURNING id
            "#,
        )
        .bind(&question.category)
        .bind(&question.question)
        .bind(&question.option_a)
        .bind(&question.option_b)
        .bind(&question.option_c)
        .bind(&question.option_d)
        .bind(question.correct_answer_letter.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn insert_locked_position(
        &self,
        position: &NewLockedPosition,
    ) -> Result<i64, SetupError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO active_test_config
                (question_position, question_id, correct_answer_letter)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(position.question_position)
        .bind(position.question_id)
        .bind(position.correct_answer_letter.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn pool_records(&self) -> Result<Vec<PoolRecord>, SetupError> {
        let records = sqlx::query_as::<_, PoolRecord>(
            r#"
            SELECT id, category, question, option_a, option_b, option_c, option_d,
                   correct_answer_letter, is_active, created_at
            FROM question_pool
            WHERE is_active
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn locked_positions(&self) -> Result<Vec<LockedPosition>, SetupError> {
        let positions = sqlx::query_as::<_, LockedPosition>(
            r#"
            SELECT id, question_position, question_id, correct_answer_letter, created_at
            FROM active_test_config
            ORDER BY question_position
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(positions)
    }

    async fn pool_count(&self) -> Result<i64, SetupError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM question_pool WHERE is_active")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn locked_count(&self) -> Result<i64, SetupError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM active_test_config")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
