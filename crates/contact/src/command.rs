use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::error::{ContactError, Result};

/// Raw submission as it arrived at the endpoint. The three required fields
/// stay `Option` so presence is checked here, server-side, no matter what
/// the submitting client already validated. `subject` is never required by
/// the endpoint; the HTML form enforces it on its own (see DESIGN.md).
#[derive(Debug, Default)]
pub struct SubmitFormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub source_address: String,
}

/// One stored submission, echoed back in the acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub created_at: u64,
    pub source_address: String,
}

impl SubmissionRecord {
    pub fn timestamp(&self) -> String {
        crate::query::format_timestamp(self.created_at)
    }
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    /// Re-validates, sanitizes and appends one submission.
    ///
    /// Duplicates are accepted as separate records; there is no update or
    /// delete path anywhere in this crate.
    pub async fn submit_form(&self, input: SubmitFormInput) -> Result<SubmissionRecord> {
        let (Some(name), Some(email), Some(message)) = (input.name, input.email, input.message)
        else {
            return Err(ContactError::MissingFields);
        };

        let name = sanitize(&name);
        let email = sanitize(&email);
        let message = sanitize(&message);
        let subject = input.subject.as_deref().map(sanitize);

        if !email.validate_email() {
            return Err(ContactError::InvalidEmail);
        }

        let record = SubmissionRecord {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            subject,
            message,
            created_at: OffsetDateTime::now_utc().unix_timestamp() as u64,
            source_address: input.source_address,
        };

        sqlx::query(
            "INSERT INTO contact_submissions (id, name, email, subject, message, source_address, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.subject)
        .bind(&record.message)
        .bind(&record.source_address)
        .bind(record.created_at as i64)
        .execute(&self.0)
        .await?;

        tracing::info!(id = %record.id, email = %record.email, "contact submission stored");

        Ok(record)
    }
}

/// Trim plus HTML entity escaping, applied before storage so markup in a
/// submission can never come back out as markup.
fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.trim().chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_trims_and_escapes() {
        assert_eq!(sanitize("  plain text  "), "plain text");
        assert_eq!(
            sanitize("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"
        );
        assert_eq!(sanitize(r#"a & b "quoted""#), "a &amp; b &quot;quoted&quot;");
    }

    #[test]
    fn sanitize_leaves_ordinary_submissions_alone() {
        assert_eq!(sanitize("jo@example.com"), "jo@example.com");
        assert_eq!(sanitize("Hello there, nice site!"), "Hello there, nice site!");
    }
}
