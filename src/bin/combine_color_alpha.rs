//! `combine-color-alpha` CLI - Merge a color image and an alpha image into RGBA.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use texalpha::{Config, Pipeline};

/// Combine a color texture map and an alpha (opacity) texture map into one RGBA image.
#[derive(Parser, Debug)]
#[command(name = "combine-color-alpha")]
#[command(version, about, long_about = None)]
struct Args {
    /// Color texture map image path.
    #[arg(short, long, value_name = "PATH")]
    color: PathBuf,

    /// Alpha (opacity) texture map image path.
    #[arg(short, long, value_name = "PATH")]
    alpha: PathBuf,

    /// Output image path. The extension selects the format and must support alpha.
    #[arg(short, long, default_value = "output.png", value_name = "PATH")]
    output: PathBuf,

    /// Channel of the alpha image used as opacity (0 = first decoded channel).
    #[arg(long, default_value = "0", value_name = "INT")]
    alpha_channel: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    texalpha::logging::init(env!("CARGO_CRATE_NAME"), args.verbose);

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = Config {
        alpha_channel: args.alpha_channel,
    };

    let pipeline = Pipeline::new(config).context("Invalid arguments")?;

    pipeline
        .combine(&args.color, &args.alpha, &args.output)
        .context("Failed to combine color and alpha")?;

    println!("{} saved", args.output.display());

    Ok(())
}
