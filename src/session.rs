//! Signed cookie sessions
//!
//! The session carries only an identity token (the logged-in user's name);
//! everything else lives in the user directory. The cookie is signed with a
//! key derived from the configured secret and expires five minutes after
//! login.

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};
use time::Duration;

/// Cookie holding the logged-in user's name
pub const SESSION_COOKIE: &str = "nameboard_session";

/// Sessions expire this long after login; the countdown is not refreshed by
/// later requests.
pub const SESSION_TTL: Duration = Duration::minutes(5);

/// Derive 64 bytes of signing key material from the configured secret
pub fn derive_signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Name of the currently logged-in user, if any
pub fn current_user(jar: &SignedCookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Start a session for `name`
pub fn log_in(jar: SignedCookieJar, name: &str) -> SignedCookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, name.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(SESSION_TTL);

    jar.add(cookie)
}

/// Clear the session
pub fn log_out(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
