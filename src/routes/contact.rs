use std::time::Duration;

use axum::{
    extract::{Form, State},
    http::HeaderMap,
    response::IntoResponse,
};
use portfolio_contact::{ContactFormData, Field, Phase, SubmitDecision, SubmitFormInput, Workflow};
use portfolio_content::PersonalInfo;
use serde::Deserialize;

use crate::routes::AppState;
use crate::template::Template;
use crate::theme::Theme;

/// Upper bound on one store attempt; past this the workflow reports the
/// generic failure and the visitor resubmits by hand.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub theme: Theme,
    pub personal: &'a PersonalInfo,
    pub name: FieldView,
    pub email: FieldView,
    pub subject: FieldView,
    pub message: FieldView,
    pub submit_error: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "contact_success.html")]
pub struct ContactSuccessTemplate<'a> {
    pub theme: Theme,
    pub personal: &'a PersonalInfo,
}

fn form_view<'a>(theme: Theme, personal: &'a PersonalInfo, workflow: &Workflow) -> ContactTemplate<'a> {
    let field = |field: Field| FieldView {
        value: workflow.data().field(field).to_owned(),
        // The form shows one message per field, the first failure in rule
        // order.
        error: workflow.errors_for(field).first().cloned(),
    };

    ContactTemplate {
        theme,
        personal,
        name: field(Field::Name),
        email: field(Field::Email),
        subject: field(Field::Subject),
        message: field(Field::Message),
        submit_error: workflow.submit_error().map(str::to_owned),
    }
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let workflow = Workflow::new();
    template.render(form_view(template.theme(), &app.content.personal, &workflow))
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let mut workflow = Workflow::with_data(ContactFormData {
        name: input.name,
        email: input.email,
        subject: input.subject,
        message: input.message,
    });

    match workflow.submit() {
        SubmitDecision::Rejected => {}
        SubmitDecision::Accepted(data) => {
            let result = store(&app, data, super::api::source_address(&headers)).await;
            if let Err(err) = &result {
                tracing::error!("contact submission failed: {err}");
            }
            workflow.complete(result);
        }
    }

    match workflow.phase() {
        Phase::Submitted => template.render(ContactSuccessTemplate {
            theme: template.theme(),
            personal: &app.content.personal,
        }),
        _ => template.render(form_view(template.theme(), &app.content.personal, &workflow)),
    }
}

/// Hands the payload to the endpoint command, bounded by [`SUBMIT_TIMEOUT`].
///
/// A server-side rejection comes back as an error too: the form never
/// treats its own validation as authoritative.
async fn store(app: &AppState, data: ContactFormData, source_address: String) -> anyhow::Result<()> {
    let input = SubmitFormInput {
        name: Some(data.name),
        email: Some(data.email),
        subject: Some(data.subject),
        message: Some(data.message),
        source_address,
    };

    match tokio::time::timeout(SUBMIT_TIMEOUT, app.contact_command.submit_form(input)).await {
        Ok(Ok(_record)) => Ok(()),
        Ok(Err(err)) => Err(err.into()),
        Err(_) => Err(anyhow::anyhow!(
            "submission timed out after {SUBMIT_TIMEOUT:?}"
        )),
    }
}
