//! Handlers for the home page and the directory listing

use crate::{
    notices,
    templates::{DirectoryTemplate, IndexTemplate},
    AppError, AppState,
};
use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::SignedCookieJar;

/// Home page
pub async fn home(jar: SignedCookieJar) -> Result<Response, AppError> {
    let (jar, pending) = notices::take(jar);
    let page = IndexTemplate::new(pending);
    Ok((jar, Html(page.render()?)).into_response())
}

/// List every record in the user directory
pub async fn view_directory(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, AppError> {
    let users = state.directory.list_all().await?;

    let (jar, pending) = notices::take(jar);
    let page = DirectoryTemplate::new(users, pending);
    Ok((jar, Html(page.render()?)).into_response())
}
