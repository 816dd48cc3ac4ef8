//! trilens command-line entry point
//!
//! Reads three circles (built-in example, a TOML file, or `--circle`
//! flags), prints the area of their shared region and optionally writes
//! SVG / DXF diagrams.

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use trilens::{
    locate, total_area, write_dxf, write_svg, AreaResult, CirclePair, CircleSpec, LensConfig,
    Pnt2d, SvgStyle,
};

#[derive(Parser)]
#[command(name = "trilens")]
#[command(about = "Area of the region common to three circles", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML file with exactly three [[circles]] tables
    #[arg(short, long, conflicts_with = "circle")]
    config: Option<PathBuf>,

    /// Circle as X,Y,R; give exactly three times
    #[arg(long, value_name = "X,Y,R", allow_hyphen_values = true)]
    circle: Vec<CircleSpec>,

    /// Write an SVG diagram of circles, vertices and triangle
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,

    /// Write circles, vertices, triangle and lens arcs as DXF
    #[arg(long, value_name = "FILE")]
    dxf: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    vertices: &'a [Pnt2d; 3],
    #[serde(flatten)]
    area: AreaResult,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "trilens=debug" } else { "trilens=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = if let Some(path) = &cli.config {
        tracing::info!("Loading circles from {}", path.display());
        LensConfig::load(path)?
    } else if !cli.circle.is_empty() {
        LensConfig {
            circles: cli.circle.clone(),
        }
    } else {
        LensConfig::example()
    };

    let [a, b, c] = config.circles()?;
    let triangle = locate(&a, &b, &c)?;
    let area = total_area(&triangle)?;

    if cli.json {
        let report = Report {
            vertices: triangle.vertices(),
            area,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (pair, v) in CirclePair::ALL.iter().zip(triangle.vertices()) {
            tracing::info!("Vertex {:?}: ({:.4}, {:.4})", pair, v.x(), v.y());
        }
        println!("Triangle Area: {:.2}", area.triangle_area);
        println!(
            "Segment Areas: {:.2}, {:.2}, {:.2}",
            area.segment_areas[0], area.segment_areas[1], area.segment_areas[2]
        );
        println!("Segment Area: {:.2}", area.segments_total());
        println!("Total Area: {:.2}", area.total_area);
    }

    if let Some(path) = &cli.svg {
        write_svg(triangle.circles(), triangle.vertices(), path, &SvgStyle::default())?;
        tracing::info!("SVG diagram written to {}", path.display());
    }
    if let Some(path) = &cli.dxf {
        write_dxf(&triangle, path)?;
        tracing::info!("DXF drawing written to {}", path.display());
    }

    Ok(())
}
