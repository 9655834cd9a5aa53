use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre;
use kiss3d::light::Light;
use kiss3d::window::Window;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rust_orrery::config::SimulationConfig;
use rust_orrery::file::read_file_or_bundled;
use rust_orrery::gui::{fitting_window_size, Simulation};

/// Animated solar system. Click a body to follow it, click empty space to
/// let go.
#[derive(Debug, Parser)]
struct Args {
    /// Catalog to load, instead of the bundled solar system
    #[arg(long)]
    data: Option<PathBuf>,

    /// Simulated time per tick
    #[arg(long, default_value_t = 0.1)]
    time_step: f64,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// How far to zoom in on the focused body
    #[arg(long, default_value_t = 2.0)]
    zoom: f64,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if args.zoom.is_nan() || args.zoom <= 0.0 {
        eyre::bail!("--zoom must be positive, got {}", args.zoom);
    }
    let config = SimulationConfig {
        time_step: args.time_step,
        tick_interval: Duration::from_millis(args.tick_ms),
        focus_zoom: args.zoom,
        ..SimulationConfig::default()
    };

    let catalog = read_file_or_bundled(args.data.as_deref())?;
    let window_size = fitting_window_size(&catalog);
    info!(
        "Max orbital radius is 10^{:.2}; using a {}px window",
        catalog.max_orbital_radius(),
        window_size
    );

    let mut window = Window::new_with_size("Solar System", window_size, window_size);
    window.set_light(Light::StickToCamera);
    window.set_framerate_limit(Some(60));

    let simulation = Simulation::new(catalog, &mut window, &config);
    window.render_loop(simulation);
    Ok(())
}
