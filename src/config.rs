// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,

    /// Optional credentials for seeding a branch admin during `setup`.
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,

    /// Branch the seeded admin belongs to.
    pub admin_branch: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let admin_username = env::var("ADMIN_USERNAME").ok();
        let admin_password = env::var("ADMIN_PASSWORD").ok();
        let admin_branch = env::var("ADMIN_BRANCH").unwrap_or_else(|_| "Brighton".to_string());

        Self {
            database_url,
            rust_log,
            admin_username,
            admin_password,
            admin_branch,
        }
    }
}
