use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use todo_server::{config::Config, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    telemetry::init(config.log_format);

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, seeded = !config.no_seed, "listening");

    todo_server::run(listener, config.initial_store())
        .await
        .context("server stopped with an error")
}
