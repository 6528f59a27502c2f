//! Login and logout flows

mod helpers;

use helpers::{assert_is_redirect_to, spawn_app, unique_name};

#[tokio::test]
async fn login_with_new_name_redirects_to_profile() {
    let app = spawn_app().await;

    let response = app.post_login(&unique_name("alice")).await;

    assert_is_redirect_to(&response, "/user");
}

#[tokio::test]
async fn login_creates_a_directory_record() {
    let app = spawn_app().await;
    let name = unique_name("alice");

    app.post_login(&name).await;

    let body = app.get_view().await.text().await.unwrap();
    assert!(body.contains(&name));
}

#[tokio::test]
async fn repeated_login_does_not_duplicate_the_record() {
    let app = spawn_app().await;
    let name = unique_name("alice");

    app.post_login(&name).await;
    app.get_logout().await;
    app.post_login(&name).await;

    let body = app.get_view().await.text().await.unwrap();
    assert_eq!(body.matches(&name).count(), 1);
}

#[tokio::test]
async fn login_form_is_shown_to_anonymous_visitors() {
    let app = spawn_app().await;

    let response = app.get_login().await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<form method="post" action="/login">"#));
}

#[tokio::test]
async fn login_page_redirects_when_already_logged_in() {
    let app = spawn_app().await;
    app.post_login(&unique_name("alice")).await;

    let response = app.get_login().await;

    assert_is_redirect_to(&response, "/user");
}

#[tokio::test]
async fn login_success_notice_is_shown_exactly_once() {
    let app = spawn_app().await;
    app.post_login(&unique_name("alice")).await;

    let first = app.get_profile().await.text().await.unwrap();
    assert!(first.contains("Login successful."));

    let second = app.get_profile().await.text().await.unwrap();
    assert!(!second.contains("Login successful."));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = spawn_app().await;
    app.post_login(&unique_name("alice")).await;

    let response = app.get_logout().await;
    assert_is_redirect_to(&response, "/login");

    let response = app.get_profile().await;
    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn logout_notice_is_personalized() {
    let app = spawn_app().await;
    let name = unique_name("alice");
    app.post_login(&name).await;

    app.get_logout().await;

    let body = app.get_login().await.text().await.unwrap();
    assert!(body.contains(&format!("You have been logged out, {}.", name)));
}

#[tokio::test]
async fn logout_without_session_still_redirects() {
    let app = spawn_app().await;

    let response = app.get_logout().await;

    assert_is_redirect_to(&response, "/login");
    let body = app.get_login().await.text().await.unwrap();
    assert!(!body.contains("You have been logged out"));
}
