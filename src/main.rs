//! tcbspline - inspect, render and normalize `.spline` files

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tcbspline::draw::DrawCurve;
use tcbspline::{format, Spline};

use crate::svg::{Circle, Path, SVG};

mod svg;

#[derive(Parser)]
#[command(name = "tcbspline")]
#[command(author, version, about = "Kochanek-Bartels spline tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print dot count, bounds and curve length
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Render the interpolated curve as a svg document
    Svg(SvgArgs),

    /// Read and rewrite a spline file in canonical form
    Normalize(NormalizeArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Spline file
    input: PathBuf,
}

#[derive(Args)]
struct SvgArgs {
    /// Spline file
    input: PathBuf,

    /// Output file, stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stroke color of the curve
    #[arg(long, default_value = "#b6db49")]
    stroke: String,

    /// Stroke width of the curve
    #[arg(long, default_value_t = 2.0)]
    width: f64,

    /// Also draw the dots
    #[arg(long)]
    dots: bool,

    /// Empty space around the curve
    #[arg(long, default_value_t = 10.0)]
    margin: f64,
}

#[derive(Args)]
struct NormalizeArgs {
    /// Spline file
    input: PathBuf,

    /// Output file, overwrites the input if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Info(args) => info(args),
        Commands::Svg(args) => render(args),
        Commands::Normalize(args) => normalize(args),
    }
}

fn load(path: &std::path::Path) -> Result<Spline> {
    format::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn info(args: InfoArgs) -> Result<()> {
    let mut spline = load(&args.input)?;
    let length: f64 = spline
        .curve()
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).norm())
        .sum();

    println!("dots:    {}", spline.len());
    println!("samples: {}", spline.curve().len());
    println!("length:  {}", length);
    if let Some(bb) = spline.bounding_box() {
        println!(
            "bounds:  ({}, {}) - ({}, {})",
            bb.min.x, bb.min.y, bb.max.x, bb.max.y
        );
    }
    Ok(())
}

fn render(args: SvgArgs) -> Result<()> {
    let mut spline = load(&args.input)?;
    let view_box = spline
        .bounding_box()
        .context("Spline has no dots to render")?
        .expand(args.margin);

    let mut svg = SVG {
        view_box,
        elements: Vec::new(),
    };

    let mut path = Path {
        stroke_color: args.stroke.clone(),
        width: args.width,
        ..Path::default()
    };
    path.add_spline(&mut spline);
    svg.add_elem(path);

    if args.dots {
        for dot in spline.dots() {
            svg.add_elem(Circle {
                center: dot.position,
                radius: args.width * 1.5,
                color: args.stroke.clone(),
            });
        }
    }

    match args.output {
        Some(output) => fs::write(&output, svg.to_string())
            .with_context(|| format!("Failed to write {}", output.display()))?,
        None => write!(io::stdout(), "{}", svg).context("Failed to write to stdout")?,
    }
    Ok(())
}

fn normalize(args: NormalizeArgs) -> Result<()> {
    let spline = load(&args.input)?;
    let output = args.output.unwrap_or(args.input);
    format::save(&output, &spline)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    log::info!("Normalized {} dots into {}", spline.len(), output.display());
    Ok(())
}
