// src/seed.rs
//
// Reference-data seeding for the branch tables. All statements are
// idempotent (ON CONFLICT DO NOTHING), so `setup` can be re-run safely.

use sqlx::PgPool;

use crate::config::Config;
use crate::error::SetupError;
use crate::models::branch::{Branch, SkillLevel};
use crate::utils::hash::hash_password;

/// The four branch locations and their default score bands.
const BRANCHES: [(&str, &str); 4] = [
    ("Brighton", "Brighton, CO"),
    ("Denver", "Denver, CO"),
    ("Fort Collins", "Fort Collins, CO"),
    ("Colorado Springs", "Colorado Springs, CO"),
];

const DEFAULT_MANAGER_EMAIL: &str = "manager@generatorsource.com";
const DEFAULT_HR_EMAIL: &str = "hr@generatorsource.com";

/// Seeds branches, per-branch skill levels, and per-branch email routing.
pub async fn seed_reference_data(pool: &PgPool) -> Result<(), SetupError> {
    tracing::info!("seeding branch reference data");

    for (name, location) in BRANCHES {
        sqlx::query("INSERT INTO branches (name, location) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .bind(location)
            .execute(pool)
            .await?;
    }

    // Default skill levels for every branch: three bands above the passing
    // threshold of 70.
    sqlx::query(
        r#"
        INSERT INTO branch_skill_levels
            (branch_id, level_number, level_name, min_score, max_score, passing_threshold)
        SELECT b.id, level_data.level_number, level_data.level_name,
               level_data.min_score, level_data.max_score, 70
        FROM branches b
        CROSS JOIN (
            VALUES
                (1, 'Level 1 - Junior Technician', 70, 79),
                (2, 'Level 2 - Technician', 80, 89),
                (3, 'Level 3 - Senior Technician', 90, 100)
        ) AS level_data(level_number, level_name, min_score, max_score)
        ON CONFLICT (branch_id, level_number) DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO branch_email_config (branch_id, manager_email, hr_email)
        SELECT id, $1, $2 FROM branches
        ON CONFLICT (branch_id) DO NOTHING
        "#,
    )
    .bind(DEFAULT_MANAGER_EMAIL)
    .bind(DEFAULT_HR_EMAIL)
    .execute(pool)
    .await?;

    let branches = sqlx::query_as::<_, Branch>("SELECT id, name, location FROM branches ORDER BY name")
        .fetch_all(pool)
        .await?;
    tracing::info!("found {} branches:", branches.len());
    for branch in &branches {
        tracing::info!("  - {} ({})", branch.name, branch.location);
    }

    let skill_levels = sqlx::query_as::<_, SkillLevel>(
        r#"
        SELECT id, branch_id, level_number, level_name, min_score, max_score, passing_threshold
        FROM branch_skill_levels
        ORDER BY branch_id, level_number
        "#,
    )
    .fetch_all(pool)
    .await?;
    tracing::info!("found {} skill level configurations", skill_levels.len());
    for level in &skill_levels {
        tracing::debug!(
            "  branch {} level {}: {} ({}-{}, pass at {})",
            level.branch_id,
            level.level_number,
            level.level_name,
            level.min_score,
            level.max_score,
            level.passing_threshold
        );
    }

    Ok(())
}

/// Seeds one branch admin from environment credentials, if configured.
/// Skipped silently when no credentials are present.
pub async fn seed_branch_admin(pool: &PgPool, config: &Config) -> Result<(), SetupError> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        return Ok(());
    };

    let admin_exists: Option<i64> =
        sqlx::query_scalar("SELECT id FROM branch_admins WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?;
    if admin_exists.is_some() {
        return Ok(());
    }

    let branch_id: i64 = sqlx::query_scalar("SELECT id FROM branches WHERE name = $1")
        .bind(&config.admin_branch)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| {
            SetupError::Internal(format!("unknown admin branch '{}'", config.admin_branch))
        })?;

    tracing::info!("seeding branch admin '{}' for {}", username, config.admin_branch);
    let hashed_password = hash_password(password)?;

    sqlx::query(
        "INSERT INTO branch_admins (branch_id, username, password_hash) VALUES ($1, $2, $3)",
    )
    .bind(branch_id)
    .bind(username)
    .bind(&hashed_password)
    .execute(pool)
    .await?;
    tracing::info!("branch admin created successfully");

    Ok(())
}
