use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
};
use portfolio_contact::SubmitFormInput;
use portfolio_content::Project;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::routes::AppState;

/// Body of POST /api/contact. Every field is optional at the parse layer
/// so the endpoint itself gets to answer "Missing required fields" instead
/// of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// POST /api/contact - store one submission and acknowledge it
pub async fn submit(
    State(app): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    let record = app
        .contact_command
        .submit_form(SubmitFormInput {
            name: payload.name,
            email: payload.email,
            subject: payload.subject,
            message: payload.message,
            source_address: source_address(&headers),
        })
        .await?;

    let timestamp = record.timestamp();

    Ok(Json(json!({
        "success": true,
        "message": "Your message has been sent successfully!",
        "data": {
            "name": record.name,
            "email": record.email,
            "subject": record.subject,
            "message": record.message,
            "timestamp": timestamp,
            "source_address": record.source_address,
        },
    })))
}

/// GET /api/portfolio - personal info
pub async fn portfolio(State(app): State<AppState>) -> impl IntoResponse {
    Json(app.content.personal.clone())
}

#[derive(Deserialize)]
pub struct ProjectsParams {
    pub category: Option<String>,
}

/// GET /api/projects - project list, optionally filtered by category
pub async fn projects(
    State(app): State<AppState>,
    Query(params): Query<ProjectsParams>,
) -> impl IntoResponse {
    let category = params.category.unwrap_or_else(|| "All".to_owned());
    let projects: Vec<Project> = app
        .content
        .projects_in(&category)
        .into_iter()
        .cloned()
        .collect();

    Json(projects)
}

/// GET /api/skills - skill names grouped under their category heading
pub async fn skills(State(app): State<AppState>) -> impl IntoResponse {
    let mut groups = serde_json::Map::new();
    for (category, skills) in app.content.skills_by_category() {
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        groups.insert(category.heading().to_owned(), json!(names));
    }

    Json(serde_json::Value::Object(groups))
}

/// Best available peer address: the first hop of `X-Forwarded-For` when a
/// proxy filled it in, otherwise a placeholder.
pub(super) fn source_address(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}
