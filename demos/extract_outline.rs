//! Extract the floor outline of a room scan
//!
//! Prints the outline as a JSON array of `[x, z]` pairs.
//!
//! ```text
//! extract_outline room.obj --floor-epsilon 0.08
//! ```

use anyhow::Context;
use clap::Parser;
use floorscan_service::{OutlineService, ServiceConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Extract the floor-plan outline of a room scan")]
struct Args {
    /// Scan file (.obj, .ply or .json)
    scan: PathBuf,

    /// Height band above the lowest vertex treated as floor, in meters
    #[arg(long)]
    floor_epsilon: Option<f64>,

    /// Simplification tolerance, in meters
    #[arg(long)]
    tolerance: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut config = ServiceConfig::from_env().outline;
    if let Some(floor_epsilon) = args.floor_epsilon {
        config = config.with_floor_epsilon(floor_epsilon);
    }
    if let Some(tolerance) = args.tolerance {
        config = config.with_simplify_tolerance(tolerance);
    }

    let service = OutlineService::new(config);
    let polygon = service
        .extract_outline_async(args.scan.clone())
        .await
        .with_context(|| format!("extracting outline of {}", args.scan.display()))?;

    tracing::info!(
        vertices = polygon.len(),
        area = polygon.area(),
        perimeter = polygon.perimeter(),
        "Outline ready"
    );
    println!("{}", serde_json::to_string_pretty(&polygon)?);
    Ok(())
}
