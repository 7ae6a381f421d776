//! Members page handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

/// `GET /` — the document rendered at startup.
pub async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page.clone())
}
