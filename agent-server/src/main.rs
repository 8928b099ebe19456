//! Entry point for running the A2A agent server under the AgentBeats
//! controller or standalone.
//!
//! The controller sets `HOST` and `AGENT_PORT` and expects the agent to
//! listen there; `--card-url` overrides the public base URL written into
//! the Agent Card when the agent sits behind a proxy.

use std::sync::Arc;

use agent_server::{
    Extractor, PlaceholderExtractor, ServerConfig, UnconfiguredExtractor, create_app,
};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agent-server")]
#[command(about = "A2A server for the dairy math extraction agent", long_about = None)]
struct Cli {
    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Bind port
    #[arg(long, env = "AGENT_PORT", default_value_t = 8000)]
    port: u16,

    /// Public base URL for the agent card (e.g., https://<proxy>/agent)
    #[arg(long, env = "CARD_URL")]
    card_url: Option<String>,

    /// Use the built-in stub agent (always returns schema-valid output)
    #[arg(long)]
    use_placeholder_agent: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let base_url =
        cli.card_url.clone().unwrap_or_else(|| format!("http://{}:{}", cli.host, cli.port));

    let extractor: Arc<dyn Extractor> = if cli.use_placeholder_agent {
        tracing::warn!("serving the placeholder extractor; output carries stub values only");
        Arc::new(PlaceholderExtractor)
    } else {
        // No real extractor is wired in yet; requests will answer with a
        // schema-mismatch error until one is plugged into ServerConfig.
        Arc::new(UnconfiguredExtractor)
    };

    let config = ServerConfig::new(base_url.clone(), extractor);
    let app = create_app(config);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, %base_url, "A2A agent server listening");
    println!("A2A server starting on http://{}", addr);
    println!("Agent card: {}/.well-known/agent-card.json", base_url.trim_end_matches('/'));
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
