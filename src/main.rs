use anyhow::{Context, Result};
use clap::Parser;
use meeting_console::{
    create_router, AppState, Config, ConsoleState, HttpMeetingBackend, MeetingController,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Web console for starting and stopping meeting bots
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file (extension optional)
    #[arg(short, long, default_value = "config/meeting-console")]
    config: String,

    /// Address to bind, overrides service.http.bind
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on, overrides service.http.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Meeting bot API root, overrides backend.base_url
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = Config::load(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }
    if let Some(url) = args.backend_url {
        cfg.backend.base_url = url;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Meeting bot API: {}", cfg.backend.base_url);

    let backend = HttpMeetingBackend::new(&cfg.backend.base_url, cfg.backend.request_timeout())
        .context("Failed to create backend client")?;
    let controller = MeetingController::new(
        ConsoleState::new(cfg.ui.success_ttl()),
        Arc::new(backend),
        cfg.backend.stop_after_duration,
    );
    let app = create_router(AppState::new(controller, &cfg.ui.title), &cfg.service.http);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Shutting down"),
                Err(e) => error!("Failed to listen for shutdown signal: {}", e),
            }
        })
        .await?;

    Ok(())
}
