use sqlx::SqlitePool;
use sqlx::prelude::FromRow;
use time::OffsetDateTime;

/// One row of the submission log.
#[derive(Debug, Default, Clone, FromRow, serde::Serialize)]
pub struct SubmissionRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub source_address: String,
    pub created_at: u64,
}

impl SubmissionRow {
    pub fn timestamp(&self) -> String {
        format_timestamp(self.created_at)
    }
}

/// Read side of the submission log. The log is append-only, so the only
/// orderings that exist are insertion order and point lookup.
#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    /// Full history, oldest first.
    pub async fn list(&self) -> anyhow::Result<Vec<SubmissionRow>> {
        Ok(sqlx::query_as::<_, SubmissionRow>(
            "SELECT id, name, email, subject, message, source_address, created_at \
             FROM contact_submissions ORDER BY seq",
        )
        .fetch_all(&self.0)
        .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<SubmissionRow>> {
        Ok(sqlx::query_as::<_, SubmissionRow>(
            "SELECT id, name, email, subject, message, source_address, created_at \
             FROM contact_submissions WHERE id = ?1 LIMIT 1",
        )
        .bind(id.into())
        .fetch_optional(&self.0)
        .await?)
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.0)
            .await?;
        Ok(count as u64)
    }
}

/// `YYYY-MM-DD HH:MM:SS` in UTC, the format the submission log has always
/// used.
pub fn format_timestamp(unix: u64) -> String {
    let date = OffsetDateTime::from_unix_timestamp(unix as i64)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        date.year(),
        date.month() as u8,
        date.day(),
        date.hour(),
        date.minute(),
        date.second()
    )
}
