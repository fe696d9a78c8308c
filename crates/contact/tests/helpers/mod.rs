#![allow(dead_code)]

use portfolio_contact::SubmitFormInput;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory database with the workspace migrations applied. One
/// connection only: every new `:memory:` connection is a fresh database.
pub async fn setup_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;
    Ok(pool)
}

/// File-backed database for tests that reconnect.
pub async fn setup_file_pool(path: &std::path::Path) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&format!("sqlite://{}?mode=rwc", path.display()))
        .await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;
    Ok(pool)
}

pub fn submission(name: &str, email: &str, message: &str) -> SubmitFormInput {
    SubmitFormInput {
        name: Some(name.to_owned()),
        email: Some(email.to_owned()),
        subject: None,
        message: Some(message.to_owned()),
        source_address: "127.0.0.1".to_owned(),
    }
}
