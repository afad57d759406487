use anyhow::Result;
use axum::Router;
use clap::Parser;
use initiative_fetcher::InitiativeStore;
use initiative_server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Path to the scraped initiatives snapshot (JSON)
    #[arg(long, default_value = "./data/initiatives.json")]
    data: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let store = InitiativeStore::load(&args.data)?;
    let app: Router = build_app(store.into_records())?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "chatbot server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
