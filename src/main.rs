//! Print the gusset plates of a truss bridge.

mod layout;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gussetx::{build_gussets, Bridge, ConnectionCost, GussetOptions};

use layout::build_demo_bridge;
use report::{render_summary, Frame};

#[derive(Parser)]
#[command(name = "gussetx")]
#[command(about = "Gusset plate outlines for truss bridge joints", long_about = None)]
#[command(version)]
struct Cli {
    /// Bridge description in JSON (default: a three-joint demo bridge)
    bridge: Option<PathBuf>,

    /// Smallest member size in millimetres used to size gussets
    #[arg(long, value_name = "MM", default_value_t = 0.0)]
    min_size_mm: f64,

    /// Print hulls in world coordinates instead of relative to each joint
    #[arg(long)]
    world: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bridge = match &cli.bridge {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Bridge::from_json_str(&json)
                .with_context(|| format!("failed to load bridge from {}", path.display()))?
        }
        None => build_demo_bridge()?,
    };
    let options = GussetOptions::new(cli.min_size_mm).context("invalid --min-size-mm")?;

    let gussets = build_gussets(&bridge, &options);
    let cost = ConnectionCost::for_bridge(&bridge);
    let frame = if cli.world { Frame::World } else { Frame::Joint };
    print!("{}", render_summary(&gussets, &cost, frame));

    Ok(())
}
