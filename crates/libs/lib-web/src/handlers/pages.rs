//! # Page Handlers
//!
//! Server-rendered HTML for pages that must carry their `<title>` and social
//! preview tags in the initial response.
//!
//! ```bash
//! curl http://localhost:8080/technologies
//! ```

use axum::response::Html;
use tracing::debug;

use crate::render::render_technologies_page;

/// **Route**: `GET /technologies`
pub async fn technologies() -> Html<String> {
    let page = render_technologies_page();
    debug!(size_bytes = page.len(), "[PAGE] rendered technologies");
    Html(page)
}
