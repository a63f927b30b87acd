//! `convert-alpha` CLI - Turn an alpha image into an RGBA cutoff map.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use texalpha::{Config, Pipeline};

/// Convert an alpha texture map into a color map usable in cutoff (alpha-test) mode.
#[derive(Parser, Debug)]
#[command(name = "convert-alpha")]
#[command(version, about, long_about = None)]
struct Args {
    /// Alpha texture map image path.
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
        .convert(&args.alpha, &args.output)
        .context("Failed to convert alpha map")?;

    println!("{} saved", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_defaults_to_png() {
        let args = Args::try_parse_from(["convert-alpha", "-a", "mask.png"]).unwrap();
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert_eq!(args.alpha_channel, 0);
    }

    #[test]
    fn test_alpha_is_required() {
        assert!(Args::try_parse_from(["convert-alpha"]).is_err());
    }
}
