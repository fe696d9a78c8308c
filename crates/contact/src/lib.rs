mod command;
mod error;
mod form;
mod query;
mod workflow;

pub use command::{Command, SubmitFormInput, SubmissionRecord};
pub use error::{ContactError, Result};
pub use form::{
    ContactFormData, Field, FormValidationOutcome, ValidationResult, validate_field, validate_form,
};
pub use query::{Query, SubmissionRow};
pub use workflow::{Phase, SUBMIT_FAILURE_MESSAGE, SubmitDecision, Workflow};
