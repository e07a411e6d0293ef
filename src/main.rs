use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use eyre::Result;
use log::info;

mod cli;

use cli::Cli;

fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Load config file (non-fatal if missing/invalid)
    let mut config = ytta::config::Config::load().unwrap_or_default();

    // CLI flags take priority over the config file
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(lang) = cli.lang {
        config.api_lang = lang;
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = ytta::server::AppState::new(client, config);
    let app = ytta::server::router(state);

    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal");
    }
}
