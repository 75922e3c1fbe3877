mod config;
mod error;
mod http;
mod mcp_api;
mod respond;
mod server;
mod widget;

use std::sync::Arc;

use guideline_store::{DocumentStore, QueryService};
use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Config, Transport};
use server::AhaGuidelinesServer;
use widget::WidgetAssets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC when serving on stdio
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting aha-guidelines MCP server");

    let config = Config::from_env()?;
    info!(
        transport = ?config.transport,
        guidelines_path = %config.guidelines_path,
        public_dir = %config.public_dir,
        public_base_url = %config.public_base_url,
        "configuration loaded"
    );

    let store = DocumentStore::load_or_seed(&config.guidelines_path(), config.scoring_weights);
    info!(documents = store.len(), "document store initialized");

    let widget = WidgetAssets::new(config.public_dir(), config.public_base_url.clone());
    let server = AhaGuidelinesServer::new(
        Arc::new(RwLock::new(store)),
        QueryService::default(),
        widget,
    );

    match config.transport {
        Transport::Http => {
            let app = http::router(server, config.public_dir());
            let listener = TcpListener::bind(config.listen_addr()).await?;
            info!(
                listen_addr = %config.listen_addr(),
                mcp_path = http::MCP_PATH,
                "MCP server ready, serving on HTTP"
            );
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = tokio::signal::ctrl_c().await;
                })
                .await?;
        }
        Transport::Stdio => {
            info!("MCP server ready, serving on stdio");
            let service = server.serve(stdio()).await.inspect_err(|e| {
                tracing::error!(error = %e, "MCP server error");
            })?;
            service.waiting().await?;
        }
    }

    info!("MCP server shut down");
    Ok(())
}
