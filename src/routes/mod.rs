use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use sqlx::SqlitePool;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::template::{NotFoundTemplate, Template};

mod api;
mod contact;
mod health;
mod index;
mod theme;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: portfolio_contact::Command,
    pub content: Arc<portfolio_content::Catalog>,
    pub theme: crate::theme::Manager,
    pub pool: SqlitePool,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let theme = template.theme();
    template.render_status(StatusCode::NOT_FOUND, NotFoundTemplate { theme })
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no app state required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                .route("/", get(index::page))
                .route("/contact", get(contact::page).post(contact::action))
                .route("/theme", post(theme::action))
                .route("/api/portfolio", get(api::portfolio))
                .route("/api/projects", get(api::projects))
                .route("/api/skills", get(api::skills))
                .route("/api/contact", post(api::submit))
                .fallback(fallback)
                .nest_service("/static", crate::assets::AssetsService::new())
                .with_state(app_state),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
