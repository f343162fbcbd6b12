use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use block_resize::Size;
use blockscale::models::{AspectSetting, ResizeConfig};
use blockscale::services::{KernelChoice, KernelReport, ResizeService};

#[derive(Parser)]
#[command(name = "blockscale")]
#[command(about = "Blockscale - fixed-ratio block bicubic image downscaler")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Downscale a PNG file
    Resize {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Target width in pixels
        #[arg(short = 'W', long)]
        width: u32,

        /// Target height in pixels
        #[arg(short = 'H', long)]
        height: u32,

        /// Aspect ratio policy (overrides the config file)
        #[arg(long, value_enum)]
        aspect: Option<AspectSetting>,

        /// YAML config file (defaults to $BLOCKSCALE_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print a normalized kernel matrix
    Kernel {
        /// Kernel shape
        #[arg(short, long, value_enum, default_value = "bicubic")]
        variant: KernelChoice,

        /// Kernel edge length
        #[arg(short, long, default_value_t = 4)]
        size: u32,

        /// Bicubic sharpening value or Lanczos lobe count
        #[arg(short, long, allow_negative_numbers = true)]
        param: Option<f32>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute an aspect-preserving target size
    Fit {
        /// Source width
        #[arg(long)]
        width: u32,

        /// Source height
        #[arg(long)]
        height: u32,

        /// Target box width
        #[arg(long)]
        target_width: u32,

        /// Target box height
        #[arg(long)]
        target_height: u32,

        /// Cover the target box instead of fitting inside it
        #[arg(long)]
        cover: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blockscale=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Resize {
            input,
            output,
            width,
            height,
            aspect,
            config,
        }) => run_resize_command(&input, &output, width, height, aspect, config),
        Some(Commands::Kernel {
            variant,
            size,
            param,
            json,
        }) => run_kernel_command(variant, size, param, json),
        Some(Commands::Fit {
            width,
            height,
            target_width,
            target_height,
            cover,
        }) => run_fit_command(
            Size::new(width, height),
            Size::new(target_width, target_height),
            cover,
        ),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn run_resize_command(
    input: &Path,
    output: &Path,
    width: u32,
    height: u32,
    aspect: Option<AspectSetting>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = ResizeConfig::resolve(config.as_deref());
    let service = ResizeService::new(config);

    let written = service.resize_file(input, output, width, height, aspect)?;
    println!("{} -> {} ({})", input.display(), output.display(), written);
    Ok(())
}

fn run_kernel_command(
    variant: KernelChoice,
    size: u32,
    param: Option<f32>,
    json: bool,
) -> anyhow::Result<()> {
    let kernel = variant.build(size, param)?;
    let report = KernelReport::from_kernel(&kernel);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn run_fit_command(source: Size, target: Size, cover: bool) -> anyhow::Result<()> {
    if source.area() == 0 || target.area() == 0 {
        anyhow::bail!("Sizes must be non-zero: {source} into {target}");
    }
    let result = if cover {
        source.scaled_to_cover(target)
    } else {
        source.scaled_to_fit(target)
    };
    println!("{result}");
    Ok(())
}

fn run_status_command() {
    println!("blockscale {}", env!("CARGO_PKG_VERSION"));
    println!("Run `blockscale resize --help` to downscale a PNG.");
}
