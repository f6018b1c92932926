use axum::response::Html;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// The single form page. It drives the JSON endpoints with fetch calls and
/// holds no state of its own.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
