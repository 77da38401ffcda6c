use anyhow::Context;
use dotenvy::dotenv;
use nes_site_server::config::ServerConfig;
use nes_site_server::router::build_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nes_site_server=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    config.validate().context("Site bundle missing, run `trunk build` in frontend/ first")?;
    tracing::debug!(?config, "Loaded configuration");

    let app = build_router(&config);
    let addr = config.socket_addr();
    tracing::info!("Serving {} on {}", config.dist_dir.display(), addr);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
