//! Project Compass server binary.
//!
//! Start the server with:
//! ```bash
//! GOOGLE_API_KEY=xxx cargo run -p compass-web
//! ```

use clap::Parser;
use compass_core::{load_env_files, ProviderSettings};
use compass_web::{serve, AppState, WebConfig};
use tracing_subscriber::EnvFilter;

/// Project Compass - turn project notes into a summary and timeline
#[derive(Parser, Debug)]
#[command(name = "project-compass")]
#[command(about = "Summarize free-form project notes into milestones, risks and decisions")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "COMPASS_HOST", default_value = compass_web::config::DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "COMPASS_PORT", default_value_t = compass_web::config::DEFAULT_PORT)]
    port: u16,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env files must be loaded before clap reads env fallbacks
    load_env_files();
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "project_compass=info,compass_web=info,compass_core=info,tower_http=warn",
        1 => "project_compass=debug,compass_web=debug,compass_core=debug,tower_http=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = ProviderSettings::from_env();

    let config = WebConfig::new(args.host, args.port);
    let state = AppState::new(config.clone(), &settings)?;

    println!("\nProject Compass");
    println!("   Open: http://{}", config.bind_address());
    println!("   Model: {}", settings.model);
    if !state.is_enabled() {
        println!("   Extraction: disabled (GOOGLE_API_KEY not set)");
    }
    println!("   Press Ctrl+C to stop\n");

    serve(config, state).await?;
    Ok(())
}
