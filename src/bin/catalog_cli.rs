use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rust_orrery::file::read_file_or_bundled;

/// Prints a summary line for every body in a catalog.
#[derive(Debug, Parser)]
struct Args {
    /// Only show bodies with this name (case-insensitive)
    name: Option<String>,

    /// Catalog to load, instead of the bundled solar system
    #[arg(long)]
    data: Option<PathBuf>,

    /// Simulated time at which to report positions
    #[arg(long, default_value_t = 0.0)]
    time: f64,
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

    for body in catalog.bodies() {
        if let Some(name) = &args.name {
            if body.name.to_lowercase() != name.to_lowercase() {
                continue;
            }
        }
        println!("{}", catalog.report(body.id));
    }

    println!();
    println!("{} bodies at time {}", catalog.len(), catalog.time());
    println!("Max orbital radius: 10^{:.3}", catalog.max_orbital_radius());
    Ok(())
}
