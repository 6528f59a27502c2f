//! Login and logout handlers
//!
//! Identification is by display name only; submitting a name that is not in
//! the directory creates its record.

use crate::{
    notices::{self, Notice},
    session,
    templates::LoginTemplate,
    AppError, AppState,
};
use askama::Template;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use tracing::info;

/// Login form submission
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub name: String,
}

/// Show the login form, or bounce visitors who are already logged in
pub async fn login_form(jar: SignedCookieJar) -> Result<Response, AppError> {
    if session::current_user(&jar).is_some() {
        let jar = notices::push(jar, Notice::message("Already logged in."));
        return Ok((jar, Redirect::to("/user")).into_response());
    }

    let (jar, pending) = notices::take(jar);
    let page = LoginTemplate::new(pending);
    Ok((jar, Html(page.render()?)).into_response())
}

/// Log in with the submitted name, creating the directory record if needed
pub async fn login_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let user = state.directory.find_or_create(&form.name).await?;
    info!("User logged in: {}", user.name);

    let jar = session::log_in(jar, &user.name);
    let jar = notices::push(jar, Notice::message("Login successful."));
    Ok((jar, Redirect::to("/user")).into_response())
}

/// Clear the session; the directory record is untouched
pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    let jar = match session::current_user(&jar) {
        Some(name) => {
            info!("User logged out: {}", name);
            notices::push(
                jar,
                Notice::info(format!("You have been logged out, {}.", name)),
            )
        }
        None => jar,
    };

    (session::log_out(jar), Redirect::to("/login"))
}
