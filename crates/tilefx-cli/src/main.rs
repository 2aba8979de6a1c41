//! tilefx - Tiled two-stage image filter CLI
//!
//! Partitions an image into tiles and runs box blur then channel inversion
//! over two concurrent worker pools.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tilefx")]
#[command(author, version, about = "Tiled blur + invert image pipeline")]
#[command(long_about = "
Runs images through a two-stage tile pipeline: box blur, then channel
inversion. Each stage has its own worker pool; tiles move between the
stages through work queues, and the result is identical for any pool
sizes.

Examples:
  tilefx generate                       # Random mosaic -> input.ppm
  tilefx gen -o test.ppm --seed 7       # Reproducible mosaic
  tilefx process input.ppm              # Blur + invert -> output.ppm
  tilefx p input.ppm -o out.ppm -k 31 -t 128
  tilefx info input.ppm output.ppm      # Dimensions and tile layout
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Workers per stage (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Blur and invert an image
    #[command(visible_alias = "p")]
    Process(ProcessArgs),

    /// Generate a random mosaic test image
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct ProcessArgs {
    /// Input image (PPM)
    input: PathBuf,

    /// Output image (PPM)
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,

    /// Box blur kernel size
    #[arg(short, long, default_value = "20")]
    kernel: u32,

    /// Tile edge length in pixels
    #[arg(short, long, default_value = "64")]
    tile: u32,
}

#[derive(Args)]
struct GenerateArgs {
    /// Output image (PPM)
    #[arg(short, long, default_value = "input.ppm")]
    output: PathBuf,

    /// Mosaic cells horizontally
    #[arg(short = 'x', long, default_value = "16")]
    tiles_x: u32,

    /// Mosaic cells vertically
    #[arg(short = 'y', long, default_value = "9")]
    tiles_y: u32,

    /// Cell edge length in pixels
    #[arg(short, long, default_value = "100")]
    scale: u32,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Tile edge length used for the tile summary
    #[arg(short, long, default_value = "64")]
    tile: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Process(args) => commands::process::run(args, cli.verbose, cli.threads),
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
