//! Rental Service: CLI server
//!
//! ```sh
//! # Run with default config (~/.config/rental-service/config.toml)
//! rental-service
//!
//! # Custom config path and port
//! rental-service --config /etc/rental-service/config.toml --port 8080
//!
//! # Validate config without starting
//! rental-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use rental_service::config::AppConfig;
use rental_service::server::{init_tracing, ServerHandle, ServerOptions};

/// In-memory rental booking service with a REST API.
#[derive(Parser, Debug)]
#[command(name = "rental-service", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "RENTAL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Start with an empty fleet instead of the configured one.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(rental_service::default_config_path);

    let loaded = AppConfig::load(&config_path);

    if cli.check {
        let mut config = loaded?;
        apply_overrides(&mut config, cli.host, cli.port, cli.log_level);
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Log level   : {} ({})", config.logging.level, config.logging.format);
        println!("   Fleet       : {} items", config.fleet.len());
        return Ok(());
    }

    let mut config = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config: {}. Using defaults.", e);
            AppConfig::defaults()
        }
    };
    apply_overrides(&mut config, cli.host, cli.port, cli.log_level);
    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        seed_fleet: !cli.no_seed,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start rental service: {}", e);
            return Err(e);
        }
    };

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}

fn apply_overrides(
    config: &mut AppConfig,
    host: Option<String>,
    port: Option<u16>,
    log_level: Option<String>,
) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(level) = log_level {
        config.logging.level = level;
    }
}
