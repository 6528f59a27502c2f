//! Profile handlers
//!
//! The directory is the source of truth for the stored email: every view
//! re-reads the row by the session's name instead of caching the value in the
//! session cookie.

use crate::{
    notices::{self, Notice},
    session,
    templates::ProfileTemplate,
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

/// Profile form submission
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub email: String,
}

// The only guard on this route: anonymous visitors are sent to the login form
// without touching the directory.
fn require_login(jar: SignedCookieJar) -> Result<(SignedCookieJar, String), Response> {
    match session::current_user(&jar) {
        Some(name) => Ok((jar, name)),
        None => {
            let jar = notices::push(jar, Notice::message("You are not logged in."));
            Err((jar, Redirect::to("/login")).into_response())
        }
    }
}

/// Show the logged-in user's profile with the stored email
pub async fn show_profile(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, AppError> {
    let (jar, name) = match require_login(jar) {
        Ok(logged_in) => logged_in,
        Err(redirect) => return Ok(redirect),
    };

    let user = state
        .directory
        .find_by_name(&name)
        .await?
        .ok_or(AppError::UnknownUser(name))?;

    let (jar, pending) = notices::take(jar);
    let page = ProfileTemplate::new(user, pending);
    Ok((jar, Html(page.render()?)).into_response())
}

/// Overwrite the stored email with the submitted value
pub async fn update_profile(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let (jar, name) = match require_login(jar) {
        Ok(logged_in) => logged_in,
        Err(redirect) => return Ok(redirect),
    };

    let user = state.directory.update_email(&name, &form.email).await?;
    info!("Email updated for user: {}", user.name);

    let (jar, mut pending) = notices::take(jar);
    pending.push(Notice::message("Email was saved."));
    let page = ProfileTemplate::new(user, pending);
    Ok((jar, Html(page.render()?)).into_response())
}
