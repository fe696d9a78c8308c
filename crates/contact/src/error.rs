use thiserror::Error;

/// Failures of the submission endpoint and its store.
///
/// Field-level validation never produces an error; it is reported as data
/// through [`crate::FormValidationOutcome`]. The two validation variants
/// here belong to the endpoint's own re-check, which runs regardless of
/// what any client claims to have validated.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl ContactError {
    /// True for the 400-class rejections the endpoint reports to callers.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::MissingFields | Self::InvalidEmail)
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
