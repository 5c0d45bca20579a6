use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use rgb565_header::MAX_WIDTH;
use std::path::PathBuf;

mod config;
mod emitter;
mod error;
mod pipeline;
#[cfg(test)]
mod testing;

use config::ConvertConfig;

#[derive(Parser, Debug)]
#[command(name = "convert-logo")]
#[command(about = "Convert a logo image into an RGB565 C header for the ST7735 display")]
#[command(version)]
struct Cli {
    /// Project root that relative paths are resolved against
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Source image
    #[arg(short, long, default_value = config::DEFAULT_INPUT)]
    input: PathBuf,

    /// Header to generate
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Target width in pixels, the height keeps the aspect ratio
    #[arg(short, long, default_value_t = MAX_WIDTH)]
    width: u32,

    /// Prefix for the include guard, macros and array
    #[arg(short, long, default_value = config::DEFAULT_PREFIX)]
    name: String,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> ConvertConfig {
        ConvertConfig::new(
            config::resolve(&self.root, &self.input),
            config::resolve(&self.root, &self.output),
            self.width,
            &self.name,
        )
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG still wins over the flag
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config();
    info!("Output header: {}", config.output.display());

    let image = pipeline::run(&config)
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;

    println!("Logo converted to RGB565: {}", config.output.display());
    println!("Dimensions: {}x{}", image.width, image.height);

    Ok(())
}
