// src/models/branch.rs

use serde::Serialize;
use sqlx::prelude::FromRow;

/// Represents one row of the 'branches' table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub location: String,
}

/// Represents one row of the 'branch_skill_levels' table.
/// Score bands map a percentage onto a technician skill level.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillLevel {
    pub id: i64,
    pub branch_id: i64,
    pub level_number: i32,
    pub level_name: String,
    pub min_score: i32,
    pub max_score: i32,
    pub passing_threshold: i32,
}
