use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use phonebook::{
    config::ServerConfig,
    core::store::PhonebookStore,
    http,
    runtime::handle::spawn_phonebook,
};

#[derive(Parser, Debug)]
#[command(name = "phonebook-server")]
#[command(version)]
#[command(about = "In-memory phonebook REST server", long_about = None)]
struct Options {
    /// Address to listen on
    #[arg(short, long, env = "PHONEBOOK_BIND", value_name = "ADDR")]
    bind: Option<SocketAddr>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "PHONEBOOK_LOG", value_name = "FILTER")]
    log_filter: Option<String>,

    /// Capacity of the store command queue
    #[arg(long, env = "PHONEBOOK_QUEUE_BOUND")]
    queue_bound: Option<usize>,
}

impl Options {
    fn into_config(self) -> ServerConfig {
        let mut cfg = ServerConfig::default();
        if let Some(bind) = self.bind {
            cfg.bind = bind;
        }
        if let Some(filter) = self.log_filter {
            cfg.log_filter = filter;
        }
        if let Some(bound) = self.queue_bound {
            cfg.runtime.command_queue_bound = bound.max(1);
        }
        cfg
    }
}

#[tokio::main]
async fn main() {
    let cfg = Options::parse().into_config();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter)),
        )
        .init();

    if let Err(e) = run(cfg).await {
        error!("server failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: ServerConfig) -> std::io::Result<()> {
    let handle = spawn_phonebook(PhonebookStore::new(), cfg.runtime.clone());

    let listener = TcpListener::bind(cfg.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, http::router(handle.clone()))
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("shutdown requested"),
                Err(e) => error!("failed to listen for ctrl-c, shutting down: {e}"),
            }
        })
        .await?;

    let _ = handle.shutdown().await;
    Ok(())
}
