//! escmap CLI - render fractal escape-count maps as color images

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use escmap_colormap::{map_to_image, ColorScheme, Palette, RenderParams};
use escmap_core::io::read_count_map;
use escmap_core::CountMap;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "escmap")]
#[command(author, version, about = "Render escape-count maps as color images", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a count-map file
    Info {
        /// Input count-map file
        input: PathBuf,
    },
    /// Render a count map to an image
    Render {
        /// Input count-map file
        input: PathBuf,
        /// Output image file (format chosen by extension, e.g. .png)
        output: PathBuf,
        /// Color scheme: rainbow, grayscale, fire, ocean
        #[arg(short, long, default_value = "rainbow")]
        scheme: String,
        /// Rainbow start hue in degrees
        #[arg(long, default_value = "0")]
        hue_start: f64,
        /// Rainbow end hue in degrees
        #[arg(long, default_value = "360")]
        hue_end: f64,
        /// Palette length (default: largest count in the input + 1)
        #[arg(short, long)]
        colors: Option<usize>,
        /// Flip the image vertically (for bottom-up count maps)
        #[arg(long)]
        flip_y: bool,
    },
    /// Render a palette preview strip
    Swatch {
        /// Output image file
        output: PathBuf,
        /// Color scheme: rainbow, grayscale, fire, ocean
        #[arg(short, long, default_value = "rainbow")]
        scheme: String,
        /// Rainbow start hue in degrees
        #[arg(long, default_value = "0")]
        hue_start: f64,
        /// Rainbow end hue in degrees
        #[arg(long, default_value = "360")]
        hue_end: f64,
        /// Number of palette entries (one pixel column each)
        #[arg(short, long, default_value = "256")]
        colors: usize,
        /// Strip height in pixels
        #[arg(long, default_value = "32")]
        height: u32,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_map(path: &PathBuf) -> Result<CountMap> {
    let pb = spinner("Reading count map...");
    let map = read_count_map(path).context("Failed to read count map")?;
    pb.finish_and_clear();
    info!("Input: {} x {}", map.cols(), map.rows());
    Ok(map)
}

fn save_image(img: &image::RgbImage, path: &PathBuf) -> Result<()> {
    let pb = spinner("Writing image...");
    img.save(path).context("Failed to write image")?;
    pb.finish_and_clear();
    Ok(())
}

fn done(name: &str, path: &PathBuf, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

fn parse_scheme(s: &str, hue_start: f64, hue_end: f64) -> Result<ColorScheme> {
    let scheme = match s.to_lowercase().as_str() {
        "rainbow" | "rb" => ColorScheme::Rainbow {
            start_deg: hue_start,
            end_deg: hue_end,
        },
        "grayscale" | "greyscale" | "gray" => ColorScheme::Grayscale,
        "fire" => ColorScheme::Fire,
        "ocean" => ColorScheme::Ocean,
        _ => anyhow::bail!("Unknown scheme: {}. Use rainbow, grayscale, fire, or ocean.", s),
    };
    Ok(scheme)
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        // ── Info ─────────────────────────────────────────────────────
        Commands::Info { input } => {
            let map = read_map(&input)?;
            let (rows, cols) = map.shape();
            let stats = map.statistics();

            println!("File: {}", input.display());
            println!("Dimensions: {} x {} ({} cells)", cols, rows, map.len());
            if let Some(min) = stats.min {
                println!("Min count: {}", min);
            }
            if let Some(max) = stats.max {
                println!("Max count: {}", max);
            }
            if let Some(mean) = stats.mean {
                println!("Mean count: {:.2}", mean);
            }
            println!("Palette size: {}", map.palette_size());
        }

        // ── Render ───────────────────────────────────────────────────
        Commands::Render {
            input,
            output,
            scheme,
            hue_start,
            hue_end,
            colors,
            flip_y,
        } => {
            let scheme = parse_scheme(&scheme, hue_start, hue_end)?;
            let map = read_map(&input)?;

            let len = colors.unwrap_or_else(|| map.palette_size());
            info!("Scheme: {}, palette size: {}", scheme.name(), len);

            let start = Instant::now();
            let palette =
                Palette::build(scheme, len).context("Failed to build palette")?;
            let img = map_to_image(&map, &palette, &RenderParams { flip_y })
                .context("Failed to render count map")?;
            let elapsed = start.elapsed();

            save_image(&img, &output)?;
            done("Image", &output, elapsed);
        }

        // ── Swatch ───────────────────────────────────────────────────
        Commands::Swatch {
            output,
            scheme,
            hue_start,
            hue_end,
            colors,
            height,
        } => {
            let scheme = parse_scheme(&scheme, hue_start, hue_end)?;

            let start = Instant::now();
            let palette =
                Palette::build(scheme, colors).context("Failed to build palette")?;
            let table = palette.colors();
            let img = image::RgbImage::from_fn(table.len() as u32, height, |x, _| {
                let c = table[x as usize];
                image::Rgb([c.r, c.g, c.b])
            });
            let elapsed = start.elapsed();

            save_image(&img, &output)?;
            done("Swatch", &output, elapsed);
        }
    }

    Ok(())
}
