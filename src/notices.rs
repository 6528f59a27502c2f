//! One-shot user notices
//!
//! Notices are short messages shown on the next rendered page: pushed into a
//! signed cookie before a redirect, drained when a page renders, and gone
//! afterwards. The payload is a base64-wrapped JSON list so multiple notices
//! survive until a page actually renders them.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

/// Cookie holding pending notices
pub const NOTICES_COOKIE: &str = "nameboard_notices";

/// A one-shot message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub category: NoticeCategory,
}

/// Rendering category for a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    Message,
    Info,
}

impl std::fmt::Display for NoticeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeCategory::Message => write!(f, "message"),
            NoticeCategory::Info => write!(f, "info"),
        }
    }
}

impl Notice {
    /// A plain notice
    pub fn message<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            category: NoticeCategory::Message,
        }
    }

    /// An informational notice
    pub fn info<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            category: NoticeCategory::Info,
        }
    }
}

/// Append a notice to the pending queue
pub fn push(jar: SignedCookieJar, notice: Notice) -> SignedCookieJar {
    let mut pending = pending_notices(&jar);
    pending.push(notice);

    let cookie = Cookie::build((NOTICES_COOKIE, encode(&pending)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    jar.add(cookie)
}

/// Drain the pending queue; notices are rendered at most once
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<Notice>) {
    let pending = pending_notices(&jar);
    let jar = jar.remove(Cookie::build(NOTICES_COOKIE).path("/"));
    (jar, pending)
}

fn pending_notices(jar: &SignedCookieJar) -> Vec<Notice> {
    jar.get(NOTICES_COOKIE)
        .map(|cookie| decode(cookie.value()))
        .unwrap_or_default()
}

fn encode(notices: &[Notice]) -> String {
    let json = serde_json::to_vec(notices).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

// An undecodable payload reads as an empty queue.
fn decode(value: &str) -> Vec<Notice> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|json| serde_json::from_slice(&json).ok())
        .unwrap_or_default()
}
