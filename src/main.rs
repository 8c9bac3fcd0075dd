//! Command-line generator for embroidered coil stitch paths.
//!
//! ```text
//! coilpath -t 78 -o 50 -i 11 --smin 2 --smax 4 -r -s
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use coilpath::export::{
    coil_file_name, ExportConfig, SvgPathSink, VectorPathSink, DEFAULT_CANVAS_SCALE,
    DEFAULT_MARGIN,
};
use coilpath::geometry::DEFAULT_STITCH_LENGTH;
use coilpath::report::{ReportSink, SpiralReport, TracingReporter};
use coilpath::{generate, SpiralParameters};

/// Tool for generating stitching paths for embroidered coils.
#[derive(Debug, Parser)]
#[command(name = "coilpath", version)]
struct Cli {
    /// Outer diameter in mm
    #[arg(short = 'o', long = "outer")]
    outer_diameter: f64,

    /// Inner diameter in mm
    #[arg(short = 'i', long = "inner")]
    inner_diameter: f64,

    /// Number of turns
    #[arg(short = 't', long)]
    turns: u32,

    /// Minimal stitch length in mm
    #[arg(long = "smin", default_value_t = DEFAULT_STITCH_LENGTH)]
    stitch_min: f64,

    /// Maximal stitch length in mm
    #[arg(long = "smax", default_value_t = DEFAULT_STITCH_LENGTH)]
    stitch_max: f64,

    /// Reverse path direction from outward to inward
    #[arg(short = 'r', long)]
    reverse: bool,

    /// Save to svg
    #[arg(short = 's', long)]
    save: bool,

    /// Directory the svg is written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Canvas side as a multiple of the outer diameter
    #[arg(long, default_value_t = DEFAULT_CANVAS_SCALE)]
    canvas_scale: f64,

    /// Margin around the drawing as a fraction of its extent
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    margin: f64,
}

fn main() -> anyhow::Result<()> {
    // Default: WARN for everything, INFO for coilpath.
    // Override with RUST_LOG (e.g. RUST_LOG=coilpath=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("coilpath=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = SpiralParameters::new(cli.outer_diameter, cli.inner_diameter, cli.turns)
        .with_stitch(cli.stitch_min, cli.stitch_max)
        .with_reverse(cli.reverse);

    println!("generating path ...");
    let path = generate(params).context("failed to generate coil path")?;

    let report = SpiralReport::new(&params, &path);
    println!("{report}");
    TracingReporter.report(&report);

    if cli.save {
        println!("saving path ...");
        let config = ExportConfig {
            canvas_scale: cli.canvas_scale,
            margin: cli.margin,
        };
        let name = coil_file_name(&params);
        let file = cli.out_dir.join(&name);

        let mut sink = SvgPathSink::new();
        path.write_to(&mut sink);
        sink.serialize(config.dimensions_for(&params), config.margin, &file)
            .with_context(|| format!("failed to save {}", file.display()))?;
        println!("{name}");
    }

    Ok(())
}
