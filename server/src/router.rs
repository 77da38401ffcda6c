use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

const PRODUCTION_CACHE: &str = "public, max-age=3600";
const DEVELOPMENT_CACHE: &str = "no-cache";

async fn health_check() -> &'static str {
    "OK"
}

/// Router serving the compiled site.
///
/// Paths that do not match a file get `index.html`, so in-page anchors and
/// client routes always land on the page.
pub fn build_router(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));
    let cache_control = if config.is_development() {
        HeaderValue::from_static(DEVELOPMENT_CACHE)
    } else {
        HeaderValue::from_static(PRODUCTION_CACHE)
    };

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
