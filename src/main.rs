//! Toolverse Entry Point
//!
//! Initializes logging, loads configuration, runs startup, routes the
//! initial hash given on the command line, then reads hash changes from
//! stdin.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use toolverse::core::{Config, Shell, Toolverse};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level, config.logging.with_timestamps);

    info!("Starting {} v{}", config.site.name, config.site.version);
    info!("Content source: {}", config.source.description());

    let app = Toolverse::from_config(config).await?;

    // Initial route, like the first load of the page
    let initial = std::env::args().nth(1).unwrap_or_default();
    let outcome = app.navigate(&initial).await;
    info!("Initial route {:?}: {:?}", initial, outcome);

    Shell::run(&app).await?;

    info!("Shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format. Logs go to
/// stderr so stdout stays free for page content.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
