use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Serves the single-page upload form.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
