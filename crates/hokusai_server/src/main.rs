use anyhow::Result;
use clap::Parser;
use hokusai_comic::{ComicGenerator, GeneratorOptions};
use hokusai_interface::HokusaiDriver;
use hokusai_models::GeminiClient;
use hokusai_error::{ServerError, ServerErrorKind};
use hokusai_server::{AppState, ServerConfig, router};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hokusai story-to-comic web server", long_about = None)]
struct Args {
    /// Interface to bind (overrides HOKUSAI_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides HOKUSAI_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Ceiling in seconds for one generation round trip
    #[arg(long, default_value = "60")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file, if present
    dotenvy::dotenv().ok();

    hokusai_core::init_tracing()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let args = Args::parse();

    let generator = match GeminiClient::from_env() {
        Ok(client) => {
            info!(model = client.model_name(), "Gemini backend configured");
            let options = GeneratorOptions::default()
                .with_timeout(Duration::from_secs(args.timeout_secs));
            Some(Arc::new(ComicGenerator::with_options(
                Arc::new(client),
                options,
            )))
        }
        Err(e) => {
            warn!(error = %e, "Comic generation will be unavailable");
            println!("\n{}", "=".repeat(70));
            println!("WARNING: GEMINI_API_KEY environment variable is not set!");
            println!("{}", "=".repeat(70));
            println!("\nThe server will start, but comic generation will fail.");
            println!("\nSet your API key either way:");
            println!("1. Create a .env file with: GEMINI_API_KEY=your_api_key_here");
            println!("2. Or export it: export GEMINI_API_KEY=your_api_key_here");
            println!("{}\n", "=".repeat(70));
            None
        }
    };

    let mut config = ServerConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    let addr = config.socket_addr()?;

    let app = router(AppState::new(generator));

    info!(%addr, "Starting Hokusai web server");
    println!("Hokusai story-to-comic server");
    println!("Access the application at: http://localhost:{}", config.port);
    println!("Press CTRL+C to stop.\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(e.to_string())))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    Ok(())
}
