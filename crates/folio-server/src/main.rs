//! Folio CLI
//!
//! Serve the profile page, render it to a file, or manage configuration.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::FolioConfig;
use folio_server::cli::{Args, Command};
use folio_server::{AppState, config_handlers, logging, router};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose)?;

    let config_path = args.config.as_deref();
    match args.command() {
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action)?;
        }
        Command::Render { output } => {
            let config = FolioConfig::load(config_path)?;
            render(config, output.as_deref()).await?;
        }
        Command::Serve { host, port } => {
            let mut config = FolioConfig::load(config_path)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await?;
        }
    }
    Ok(())
}

async fn serve(config: FolioConfig) -> Result<()> {
    let addr = (config.server.host.clone(), config.server.port);
    let state = AppState::from_config(config)?;
    let _tasks = state.activate();

    let listener = tokio::net::TcpListener::bind((addr.0.as_str(), addr.1))
        .await
        .with_context(|| format!("failed to bind {}:{}", addr.0, addr.1))?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn render(config: FolioConfig, output: Option<&Path>) -> Result<()> {
    let state = AppState::from_config(config)?;
    state.load_once().await;
    let html = state.render_html()?;

    match output {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => println!("{html}"),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
