use std::collections::HashMap;

use crate::form::{ContactFormData, Field, validate_form};

/// Banner shown when the endpoint rejects or the transport fails. The two
/// cases are deliberately indistinguishable to the person filling the form;
/// resubmitting is the only recovery either way.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// What [`Workflow::submit`] decided.
///
/// `Accepted` carries the payload to hand to the endpoint; the caller must
/// report back through [`Workflow::complete`]. `Rejected` means the form
/// stayed in `Editing` with field errors attached (or the workflow was not
/// in a submittable phase at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    Accepted(ContactFormData),
    Rejected,
}

/// The submission workflow: one form draft, its errors, and where the
/// attempt currently stands.
///
/// Validation inside `submit` is synchronous; `Submitting` covers only the
/// suspension while the endpoint call is in flight. There is exactly one
/// writer (the value is owned by whoever drives the form), so every
/// transition is a plain `&mut` method.
#[derive(Debug, Default)]
pub struct Workflow {
    data: ContactFormData,
    field_errors: HashMap<Field, Vec<String>>,
    submit_error: Option<String>,
    phase: Phase,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a workflow over data that arrived in one piece, e.g. a posted
    /// form body.
    pub fn with_data(data: ContactFormData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn errors_for(&self, field: Field) -> &[String] {
        match self.field_errors.get(&field) {
            Some(errors) => errors,
            None => &[],
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    /// Replaces one field's value and clears that field's stored errors.
    ///
    /// No other field is re-validated. Edits are accepted while `Submitting`
    /// too, since only the submit control is disabled during the network
    /// call, and ignored once `Submitted`.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.phase == Phase::Submitted {
            return;
        }
        self.data.set_field(field, value.into());
        self.field_errors.remove(&field);
    }

    /// Runs whole-form validation and either stays in `Editing` with the
    /// failures attached or moves to `Submitting` and yields the payload.
    pub fn submit(&mut self) -> SubmitDecision {
        if self.phase != Phase::Editing {
            return SubmitDecision::Rejected;
        }

        let outcome = validate_form(&self.data);
        if !outcome.is_valid {
            self.field_errors = outcome.field_errors;
            return SubmitDecision::Rejected;
        }

        self.field_errors.clear();
        self.submit_error = None;
        self.phase = Phase::Submitting;
        SubmitDecision::Accepted(self.data.clone())
    }

    /// Reports the endpoint's answer for an in-flight submission.
    ///
    /// Success reaches the terminal `Submitted` phase and clears the form;
    /// any failure, transport or server-side rejection alike, returns to
    /// `Editing` with the generic banner. Nothing is retried automatically.
    pub fn complete<E>(&mut self, result: Result<(), E>) {
        if self.phase != Phase::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.data = ContactFormData::default();
                self.phase = Phase::Submitted;
            }
            Err(_) => {
                self.submit_error = Some(SUBMIT_FAILURE_MESSAGE.to_owned());
                self.phase = Phase::Editing;
            }
        }
    }

    /// Back to the initial empty `Editing` state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
