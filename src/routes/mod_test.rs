use super::*;
use axum::body::Body;
use axum::http::{Request, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn assets_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("client").join("style")
}

fn test_app(page: &'static str) -> Router {
    app(AppState::new(page), &assets_dir())
}

async fn fetch(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let res = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = res.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn index_serves_cached_page_as_html() {
    let (status, content_type, body) = fetch(test_app("<p>members</p>"), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(body, "<p>members</p>");
}

#[tokio::test]
async fn index_serves_rendered_catalog() {
    let router = app(AppState::from_catalog().unwrap(), &assets_dir());
    let (status, _, body) = fetch(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("5 Módulos"));
    assert!(body.contains("Meu Pequeno Pregador"));
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _, body) = fetch(test_app(""), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn stylesheet_is_served_from_assets() {
    let (status, content_type, body) = fetch(test_app(""), "/assets/members.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/css"));
    assert!(body.contains(".module-card"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _, _) = fetch(test_app(""), "/admin").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let (status, _, _) = fetch(test_app(""), "/assets/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
