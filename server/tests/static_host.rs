use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use nes_site_server::config::ServerConfig;
use nes_site_server::router::build_router;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><html><body>NES</body></html>";

fn site(environment: &str) -> (TempDir, ServerConfig) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets").join("catalogue.pdf"), b"%PDF-1.4").unwrap();

    let dist = dir.path().to_string_lossy().into_owned();
    let environment = environment.to_string();
    let config = ServerConfig::from_lookup(move |key| match key {
        "DIST_DIR" => Some(dist.clone()),
        "ENVIRONMENT" => Some(environment.clone()),
        _ => None,
    })
    .unwrap();
    (dir, config)
}

async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = build_router(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, cache, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn health_check_answers_ok() {
    let (_dir, config) = site("production");
    let (status, _, body) = get(&config, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn serves_index_at_root() {
    let (_dir, config) = site("production");
    let (status, cache, body) = get(&config, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
    assert_eq!(cache.as_deref(), Some("public, max-age=3600"));
}

#[tokio::test]
async fn serves_nested_assets() {
    let (_dir, config) = site("production");
    let (status, _, body) = get(&config, "/assets/catalogue.pdf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "%PDF-1.4");
}

#[tokio::test]
async fn unknown_paths_fall_back_to_index() {
    let (_dir, config) = site("production");
    let (status, _, body) = get(&config, "/realisations/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn development_disables_caching() {
    let (_dir, config) = site("development");
    let (_, cache, _) = get(&config, "/").await;
    assert_eq!(cache.as_deref(), Some("no-cache"));
}

#[test]
fn validate_accepts_built_site() {
    let (_dir, config) = site("production");
    assert!(config.validate().is_ok());
}

#[test]
fn validate_requires_index() {
    let dir = tempfile::tempdir().unwrap();
    let dist = dir.path().to_string_lossy().into_owned();
    let config = ServerConfig::from_lookup(move |key| (key == "DIST_DIR").then(|| dist.clone())).unwrap();
    assert!(config.validate().is_err());
}
