// src/store/mod.rs

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::SetupError;
use crate::models::pool::{LockedPosition, NewLockedPosition, NewPoolQuestion, PoolRecord};

/// The four store verbs the provisioning engine needs: insert with a
/// returned identity, ordered select, and count, over the two engine
/// tables. Constructed explicitly and passed into each stage, so tests can
/// substitute the in-memory implementation.
#[async_trait]
pub trait ExamStore: Send + Sync {
    /// Inserts one pool question, returning its store-assigned identity.
    async fn insert_question(&self, question: &NewPoolQuestion) -> Result<i64, SetupError>;

    /// Inserts one locked position, returning its store-assigned identity.
    async fn insert_locked_position(
        &self,
        position: &NewLockedPosition,
    ) -> Result<i64, SetupError>;

    /// All active pool records, ordered by identity.
    async fn pool_records(&self) -> Result<Vec<PoolRecord>, SetupError>;

    /// All locked positions, ordered by exam position.
    async fn locked_positions(&self) -> Result<Vec<LockedPosition>, SetupError>;

    async fn pool_count(&self) -> Result<i64, SetupError>;

    async fn locked_count(&self) -> Result<i64, SetupError>;
}
