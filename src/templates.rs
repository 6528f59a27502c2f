//! Template system for server-side rendering
//!
//! This module provides the page templates, rendered with Askama. Every page
//! extends `base.html`, which displays the drained notice queue.

use crate::{db::UserRecord, notices::Notice};
use askama::Template;

/// Home page template
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub notices: Vec<Notice>,
}

/// Login form template
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub title: String,
    pub notices: Vec<Notice>,
}

/// Profile page template
#[derive(Template)]
#[template(path = "user.html")]
pub struct ProfileTemplate {
    pub title: String,
    pub notices: Vec<Notice>,
    pub name: String,
    pub email: String,
}

/// Directory listing template
#[derive(Template)]
#[template(path = "view.html")]
pub struct DirectoryTemplate {
    pub title: String,
    pub notices: Vec<Notice>,
    pub users: Vec<UserRecord>,
}

/// Error page template
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub notices: Vec<Notice>,
    pub error_code: u16,
    pub error_message: String,
}

impl IndexTemplate {
    pub fn new(notices: Vec<Notice>) -> Self {
        Self {
            title: "Nameboard".to_string(),
            notices,
        }
    }
}

impl LoginTemplate {
    pub fn new(notices: Vec<Notice>) -> Self {
        Self {
            title: "Nameboard - Login".to_string(),
            notices,
        }
    }
}

impl ProfileTemplate {
    pub fn new(user: UserRecord, notices: Vec<Notice>) -> Self {
        Self {
            title: format!("Nameboard - {}", user.name),
            notices,
            name: user.name,
            email: user.email,
        }
    }
}

impl DirectoryTemplate {
    pub fn new(users: Vec<UserRecord>, notices: Vec<Notice>) -> Self {
        Self {
            title: "Nameboard - Directory".to_string(),
            notices,
            users,
        }
    }
}

impl ErrorTemplate {
    pub fn new(error_code: u16, error_message: String) -> Self {
        Self {
            title: format!("Error {} - Nameboard", error_code),
            notices: Vec::new(),
            error_code,
            error_message,
        }
    }
}
