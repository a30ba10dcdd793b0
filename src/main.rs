// src/main.rs

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use assessment_setup::config::Config;
use assessment_setup::error::SetupError;
use assessment_setup::pipeline;
use assessment_setup::seed;
use assessment_setup::store::memory::MemoryStore;
use assessment_setup::store::postgres::PgExamStore;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "assessment-setup", version, about = "Provisions the technician assessment store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run migrations and seed branch reference data
    Setup,

    /// Import a question bank and lock the answer pattern
    Import {
        /// Path to the question bank JSON file
        #[arg(long, default_value = "questions.json")]
        bank: PathBuf,

        /// Run the whole pipeline against an in-memory store; no database required
        #[arg(long)]
        dry_run: bool,
    },

    /// Audit the persisted pool and locked pattern
    Verify,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let file_appender = tracing_appender::rolling::daily("logs", "setup.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        tracing::error!("fatal: {}", e);
        process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), SetupError> {
    match command {
        Commands::Setup => {
            let config = Config::from_env();
            let pool = connect(&config.database_url).await;

            tracing::info!("running migrations...");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| SetupError::Store(e.to_string()))?;
            tracing::info!("migrations applied successfully");

            seed::seed_reference_data(&pool).await?;
            seed::seed_branch_admin(&pool, &config).await?;
            tracing::info!("database setup complete");
        }
        Commands::Import { bank, dry_run } => {
            if dry_run {
                tracing::info!("dry run: importing into in-memory store");
                let store = MemoryStore::new();
                pipeline::run_import(&store, &bank).await?;
            } else {
                let config = Config::from_env();
                let pool = connect(&config.database_url).await;
                let store = PgExamStore::new(pool);
                pipeline::run_import(&store, &bank).await?;
            }
            tracing::info!("import complete");
        }
        Commands::Verify => {
            let config = Config::from_env();
            let pool = connect(&config.database_url).await;
            let store = PgExamStore::new(pool);
            assessment_setup::verify::audit(&store).await?;
        }
    }
    Ok(())
}

/// Connects to Postgres with a short retry loop, as the database may still
/// be starting when this tool runs inside a compose stack.
async fn connect(database_url: &str) -> PgPool {
    let mut retry_count = 0;
    loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("database connected...");
                break pool;
            }
            Err(e) => {
                retry_count += 1;
                if retry_count > 5 {
                    panic!("Failed to connect to database after 5 retries: {}", e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}
