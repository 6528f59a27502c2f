//! Admin mount handlers
//!
//! Static debug pages with no state interaction. The home routes under this
//! mount reuse the regular home page handler.

use axum::response::Html;

/// Static test page
pub async fn test_page() -> Html<&'static str> {
    Html("<h1>test</h1>")
}
