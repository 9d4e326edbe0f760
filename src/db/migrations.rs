//! Database initialization, schema and seed data.

use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

use crate::config::SeedMode;

/// Initialize the SQLite database with schema and pragmas.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await?;

    run_migrations(&pool).await?;

    info!("Database initialized successfully at {}", db_path);
    Ok(pool)
}

/// Load seed data according to `mode`. Safe to run on every start.
pub async fn seed(pool: &SqlitePool, mode: SeedMode) -> Result<(), sqlx::Error> {
    match mode {
        SeedMode::None => Ok(()),
        SeedMode::Categories => seed_categories(pool).await,
        SeedMode::Sample => {
            seed_categories(pool).await?;
            seed_sample_questions(pool).await
        }
    }
}

/// Insert the six default categories.
pub async fn seed_categories(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    execute_script(pool, include_str!("seed_categories.sql")).await?;
    info!("Default categories seeded");
    Ok(())
}

/// Insert the sample trivia question set.
pub async fn seed_sample_questions(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    execute_script(pool, include_str!("seed_questions.sql")).await?;
    info!("Sample questions seeded");
    Ok(())
}

/// Run all database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    execute_script(pool, include_str!("schema.sql")).await?;
    info!("Migrations completed successfully");
    Ok(())
}

async fn execute_script(pool: &SqlitePool, script: &str) -> Result<(), sqlx::Error> {
    for statement in script.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }
    Ok(())
}

/// Configure SQLite pragmas.
async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.get(0);
    info!("SQLite journal_mode set to: {}", journal_mode);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}
