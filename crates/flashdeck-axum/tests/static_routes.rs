//! Tests for static asset serving with SPA fallback.

mod common;

use std::io::Write;

use axum::Router;
use axum::http::StatusCode;
use tempfile::TempDir;

use common::{get, post_json};
use flashdeck_axum::bootstrap::{CorsConfig, bootstrap};
use flashdeck_axum::routes::create_spa_router;

/// Temp directory with an index.html (SPA fallback target) and one asset.
fn static_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let mut index = std::fs::File::create(temp_dir.path().join("index.html")).unwrap();
    write!(index, "<!DOCTYPE html><html><body>SPA</body></html>").unwrap();
    std::fs::write(temp_dir.path().join("app.js"), "console.log('flashdeck');").unwrap();
    temp_dir
}

fn spa_app(dir: &TempDir) -> Router {
    create_spa_router(bootstrap(), dir.path(), &CorsConfig::AllowAll)
}

#[tokio::test]
async fn spa_fallback_returns_index_html() {
    let dir = static_dir();
    let app = spa_app(&dir);

    let (status, body) = get(&app, "/decks/3/study").await;

    assert_eq!(status, StatusCode::OK);
    assert!(std::str::from_utf8(&body).unwrap().contains("SPA"));
}

#[tokio::test]
async fn existing_asset_is_served() {
    let dir = static_dir();
    let app = spa_app(&dir);

    let (status, body) = get(&app, "/app.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"console.log('flashdeck');");
}

/// API routes must not be intercepted by the SPA fallback.
#[tokio::test]
async fn api_routes_take_priority_over_fallback() {
    let dir = static_dir();
    let app = spa_app(&dir);

    post_json(&app, "/api/decks", r#"{"name":"Capitals"}"#).await;
    let (status, body) = get(&app, "/api/decks").await;

    assert_eq!(status, StatusCode::OK);
    assert!(std::str::from_utf8(&body).unwrap().contains("Capitals"));

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"OK");
}
