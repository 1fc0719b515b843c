use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use raster_stylize::{DitherKind, Palette};
use stylizer::models::AppConfig;
use stylizer::services::RenderService;

#[derive(Parser)]
#[command(name = "stylizer")]
#[command(about = "Palette-constrained image stylizer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stylize a PNG file
    Render {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#FF0000")
        #[arg(long)]
        colors: Option<String>,

        /// Dither kind: none, floyd-steinberg, ordered, atkinson
        #[arg(short, long)]
        dither: Option<DitherKind>,

        /// Dither strength, 0 to 100
        #[arg(long)]
        strength: Option<f32>,

        /// Seed for overlay and noise
        #[arg(long)]
        seed: Option<u64>,

        /// Downscale factor before processing (pixelation)
        #[arg(long)]
        pixel_scale: Option<f32>,
    },
    /// Write the default configuration as YAML
    Config {
        /// Output file path
        #[arg(short, long, default_value = "stylizer.yaml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stylizer=info,raster_stylize=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            config,
            colors,
            dither,
            strength,
            seed,
            pixel_scale,
        }) => run_render_command(
            &input,
            &output,
            config.as_deref(),
            colors,
            RenderOverrides {
                dither,
                strength,
                seed,
                pixel_scale,
            },
        ),
        Some(Commands::Config { output, force }) => run_config_command(&output, force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Command-line values that take precedence over the config file
struct RenderOverrides {
    dither: Option<DitherKind>,
    strength: Option<f32>,
    seed: Option<u64>,
    pixel_scale: Option<f32>,
}

fn run_render_command(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    colors: Option<String>,
    overrides: RenderOverrides,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::default(),
    };

    let mut service = RenderService::new(&config)?;
    if let Some(ref colors) = colors {
        service.set_palette(Palette::parse_list(colors)?);
    }

    let settings = service.settings_mut();
    if let Some(kind) = overrides.dither {
        settings.dither.kind = kind;
    }
    if let Some(strength) = overrides.strength {
        settings.dither.strength = strength;
    }
    if let Some(seed) = overrides.seed {
        settings.seed = Some(seed);
    }
    if let Some(scale) = overrides.pixel_scale {
        settings.pixel_scale = scale;
    }

    service.render_file(input, output)?;

    println!(
        "Rendered {} -> {} ({} colors, {})",
        input.display(),
        output.display(),
        service.palette().len(),
        service.settings().dither.kind.as_str()
    );
    Ok(())
}

fn run_config_command(output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }
    let yaml = AppConfig::default().to_yaml()?;
    std::fs::write(output, yaml)?;
    println!("Wrote default configuration to {}", output.display());
    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Stylizer v{VERSION}");
    println!("Palette-constrained image stylizer\n");

    println!("Commands:");
    println!("  stylizer render -i in.png -o out.png [--config stylizer.yaml]");
    println!("  stylizer config [-o stylizer.yaml] [--force]\n");

    let defaults = AppConfig::default();
    println!("Defaults:");
    println!("  palette     = {}", defaults.palette.join(", "));
    println!("  dither      = {}", defaults.settings.dither.kind.as_str());
    println!("  strength    = {}", defaults.settings.dither.strength);
    println!("  pixel-scale = {}", defaults.settings.pixel_scale);
    println!("\nSet RUST_LOG (e.g. RUST_LOG=raster_stylize=debug) for stage logging.");
}
