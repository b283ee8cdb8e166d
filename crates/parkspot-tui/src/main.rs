//! parkspot terminal application.
//!
//! Two screens: pick a parking location on a world map, read it back as
//! text. The shared state holder lives in `parkspot-core`; this binary only
//! assembles the terminal driver and runs the generic runtime.

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use parkspot_app::{App, AppConfig, Runtime, Viewport};
use parkspot_core::{LocationStore, Position};
use parkspot_tui::{PositionSource, TerminalDriver, TerminalError};
use tracing_subscriber::EnvFilter;

/// Remember where the car is parked, from the comfort of a terminal.
#[derive(Debug, Parser)]
#[command(name = "parkspot", version, about)]
struct Cli {
    /// Best-known device position as `<lat>,<lon>`. Omit to simulate a
    /// platform with no position fix available.
    #[arg(long, value_name = "LAT,LON")]
    fix: Option<Position>,

    /// Initial map center as `<lat>,<lon>`.
    #[arg(long, value_name = "LAT,LON")]
    center: Option<Position>,

    /// Initial zoom level (0 shows the whole world).
    #[arg(long, default_value_t = 2.0)]
    zoom: f64,

    /// Input poll interval in milliseconds.
    #[arg(long, default_value_t = 100, value_name = "MS")]
    tick_rate_ms: u64,

    /// Append logs to this file; the terminal itself owns stdout.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), TerminalError> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let source = match cli.fix {
        Some(position) => PositionSource::fixed(position),
        None => PositionSource::unavailable(),
    };

    let mut config = AppConfig::default();
    if let Some(center) = cli.center {
        config.start_center = center.normalized();
    }
    config.start_zoom = cli.zoom.clamp(Viewport::MIN_ZOOM, Viewport::MAX_ZOOM);

    let app = App::new(LocationStore::new(), config);
    let terminal = ratatui::init();
    let driver =
        TerminalDriver::new(terminal, source, Duration::from_millis(cli.tick_rate_ms.max(10)));

    let result = Runtime::new(driver, app).run().await;
    ratatui::restore();
    result
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<(), TerminalError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::options().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
