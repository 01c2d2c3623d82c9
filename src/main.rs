use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exr_thumbnail::error::{ThumbnailError, EXIT_FAILURE};
use exr_thumbnail::models::ThumbnailConfig;
use exr_thumbnail::services::generate_thumbnail;

#[derive(Parser)]
#[command(name = "exr-thumbnail")]
#[command(about = "Generate a tone-mapped thumbnail from a high dynamic range scanline image")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Source image (OpenEXR or PNG, scanline storage)
    source: PathBuf,

    /// Target image (.exr keeps float samples, .png is 8-bit)
    target: PathBuf,

    /// Thumbnail width in pixels [default: 512]
    #[arg(short = 'w', long)]
    lowres_width: Option<usize>,

    /// Gamma correction value [default: 1.8]
    #[arg(short, long)]
    gamma: Option<f32>,

    /// Percentile mapped to full brightness [default: 0.99]
    #[arg(short, long)]
    percentile: Option<f64>,

    /// Skip percentile exposure normalization
    #[arg(long)]
    no_normalize: bool,

    /// YAML file with default settings (flags take precedence)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Built-in defaults, then the config file, then command line flags.
    fn resolve_config(&self) -> anyhow::Result<ThumbnailConfig> {
        let mut config = match &self.config {
            Some(path) => ThumbnailConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ThumbnailConfig::default(),
        };

        if let Some(lowres_width) = self.lowres_width {
            config.lowres_width = lowres_width;
        }
        if let Some(gamma) = self.gamma {
            config.gamma = gamma;
        }
        if let Some(percentile) = self.percentile {
            config.percentile = percentile;
        }
        if self.no_normalize {
            config.normalize = false;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e
                .downcast_ref::<ThumbnailError>()
                .map(ThumbnailError::exit_code)
                .unwrap_or(EXIT_FAILURE);
            tracing::debug!(code, "Exiting with error");
            eprintln!("Error: {e:#}");
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let report = generate_thumbnail(&cli.source, &cli.target, &config)?;
    tracing::info!(
        source_width = report.source.width,
        source_height = report.source.height,
        width = report.width,
        height = report.height,
        channels = report.channels,
        format = ?report.format,
        normalization = ?report.normalization,
        "Done"
    );
    Ok(())
}

/// Minimal logging for CLI: warnings by default, debug with `--verbose`.
/// `RUST_LOG` overrides both.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "exr_thumbnail=debug"
    } else {
        "exr_thumbnail=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
