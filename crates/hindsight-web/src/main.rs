//! Hindsight — what you learned wrong.
//!
//! Serves a single interactive page: enter a high-school graduation year,
//! see which "facts" from that schooling window have since been corrected,
//! with timelines of when each correction landed.

mod routes;

use clap::Parser;
use tracing::info;

/// Hindsight web server.
#[derive(Parser)]
#[command(name = "hindsight-web")]
struct Args {
    /// HTTP listen address.
    #[arg(long, default_value = "0.0.0.0:3850")]
    listen: String,

    /// Optional directory of static assets, served under /static.
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hindsight_web=info".into()),
        )
        .init();

    let args = Args::parse();

    let router = routes::create_router(args.static_dir.as_deref());
    let listener = tokio::net::TcpListener::bind(&args.listen).await?;

    info!(
        listen = %args.listen,
        catalog_size = hindsight_core::CATALOG.len(),
        "hindsight-web started"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
