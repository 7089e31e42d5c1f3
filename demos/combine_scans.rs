//! Combine room scans into one scene
//!
//! Each `--scan` takes a path followed by its canvas placement:
//!
//! ```text
//! combine_scans --project demo --out-dir ./docs \
//!     --scan kitchen.obj:0,0,0,1 --scan hall.obj:150,0,90,1
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use floorscan_core::ScanTransform;
use floorscan_io::SceneFormat;
use floorscan_service::{generate_output_path, CombineRequest, CombineService, ServiceConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Place several room scans into one composite scene")]
struct Args {
    /// `path:positionX,positionY,rotation,scale`, repeat for each scan
    #[arg(long = "scan", required = true)]
    scans: Vec<String>,

    /// Project identifier used in the output file name
    #[arg(long, default_value = "default")]
    project: String,

    /// Directory under which `scans/combined/` is created
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output format: json, obj or ply
    #[arg(long, default_value = "json")]
    format: String,
}

fn parse_scan(arg: &str) -> anyhow::Result<(String, ScanTransform)> {
    let Some((path, placement)) = arg.rsplit_once(':') else {
        bail!("expected path:positionX,positionY,rotation,scale, got '{}'", arg);
    };
    let values = placement
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("bad placement in '{}'", arg))?;
    let &[x, y, rotation, scale] = values.as_slice() else {
        bail!("expected 4 placement values in '{}', got {}", arg, values.len());
    };
    Ok((path.to_string(), ScanTransform::new(x, y, rotation, scale)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let format = SceneFormat::from_path(format!("out.{}", args.format))?;

    let (paths, transforms): (Vec<_>, Vec<_>) = args
        .scans
        .iter()
        .map(|s| parse_scan(s))
        .collect::<anyhow::Result<Vec<_>>>()?
        .into_iter()
        .unzip();

    let output = generate_output_path(&args.project, &args.out_dir, format);
    let request = CombineRequest {
        paths,
        transforms,
        output_path: output.to_string_lossy().into_owned(),
    };

    let service = CombineService::new(ServiceConfig::from_env().combine);
    let written = service.combine_scans_async(request).await?;
    println!("{}", written);
    Ok(())
}
