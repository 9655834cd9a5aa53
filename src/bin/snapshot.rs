use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rust_orrery::config::SimulationConfig;
use rust_orrery::file::read_file_or_bundled;
use rust_orrery::gui::fitting_window_size;
use rust_orrery::snapshot::draw_sheet;
use rust_orrery::view::{Focus, Scheduler, Sheet};

/// Renders one frame of the orrery to an image (PNG, or SVG by extension).
#[derive(Debug, Parser)]
struct Args {
    /// Where to write the image
    #[arg(long, default_value = "orrery.png")]
    out: PathBuf,

    /// Catalog to load, instead of the bundled solar system
    #[arg(long)]
    data: Option<PathBuf>,

    /// Simulated time to draw
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Body to zoom in on
    #[arg(long)]
    focus: Option<String>,

    /// Image edge length in pixels; fits the whole system if omitted
    #[arg(long)]
    size: Option<u32>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut catalog = read_file_or_bundled(args.data.as_deref())?;
    catalog.advance(args.time);

    let focus = match &args.focus {
        None => Focus::Unfocused,
        Some(name) => match catalog.find(name) {
            Some(id) => Focus::Focused(id),
            None => eyre::bail!("No body named {:?} in the catalog", name),
        },
    };

    let size = args.size.unwrap_or_else(|| fitting_window_size(&catalog)) as f64;
    let mut sheet = Sheet::new(size, size);
    let mut scheduler = Scheduler::new(catalog, &mut sheet, &SimulationConfig::default());
    scheduler.set_focus(focus);
    scheduler.refresh(&mut sheet);

    draw_sheet(&sheet, scheduler.camera(), &args.out)
        .map_err(|e| eyre::eyre!("Couldn't draw {}: {}", args.out.display(), e))?;
    info!("Wrote {}", args.out.display());
    Ok(())
}
