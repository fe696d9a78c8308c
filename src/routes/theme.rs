use std::str::FromStr;

use axum::{
    extract::Form,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::theme::{THEME_COOKIE, Theme};

#[derive(Deserialize)]
pub struct ActionInput {
    pub theme: String,
}

/// POST /theme - remember the visitor's theme choice in a cookie.
///
/// Unknown names are ignored rather than erroring; the visitor just keeps
/// the theme they had.
pub async fn action(jar: CookieJar, Form(input): Form<ActionInput>) -> Response {
    let Ok(theme) = Theme::from_str(&input.theme) else {
        return Redirect::to("/").into_response();
    };

    let mut cookie = Cookie::new(THEME_COOKIE, theme.to_string());
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::days(365));

    (jar.add(cookie), Redirect::to("/")).into_response()
}
