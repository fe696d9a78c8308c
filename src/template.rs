use std::convert::Infallible;
use std::str::FromStr;

use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

// Brings the `render` method into scope for concrete templates like
// `ServerTemplate`; imported anonymously to avoid clashing with the
// local `Template` struct.
use askama::Template as _;

use crate::theme::{THEME_COOKIE, Theme};

/// Per-request render context: the visitor's resolved theme plus the
/// render-or-500 plumbing every page handler shares.
pub struct Template {
    theme: Theme,
}

impl Template {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_status(StatusCode::OK, template)
    }

    pub fn render_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("failed to render template: {err}");
                let fallback = ServerTemplate { theme: self.theme }
                    .render()
                    .unwrap_or_else(|_| "Something went wrong, please retry later".to_owned());
                (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback)).into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = parts
            .extract::<CookieJar>()
            .await
            .expect("cookie jar extraction is infallible");

        // Cookie override first, then the owned site default.
        let theme = jar
            .get(THEME_COOKIE)
            .and_then(|cookie| Theme::from_str(cookie.value()).ok())
            .unwrap_or_else(|| state.theme.current());

        Ok(Template { theme })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub theme: Theme,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub theme: Theme,
}
