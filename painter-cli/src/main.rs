//! Voronoi image CLI
//!
//! Scatters random seeds over a canvas, paints every pixel with the color of
//! its nearest seed, marks the seeds with small discs and writes the image.
//!
//! Run with: `voronoi-painter -o image.png --metric manhattan -n 200 --seed 42`
//!
//! ## YAML render file
//!
//! Any option can also come from `--spec render.yaml` (see `spec.rs` for the
//! format); flags given on the command line take precedence. The file may add
//! overlay shapes drawn on top of the diagram.
//!
//! ## Inline lines
//!
//!   voronoi-painter -o lines.png -l 10,10,2000,10 -l -10,-300,2000,400,aa

mod encode;
mod spec;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use painter_core::{
    Color, DistanceMetric, Painter, RenderConfig, DEFAULT_BACKGROUND, DEFAULT_HEIGHT,
    DEFAULT_MARKER_COLOR, DEFAULT_MARKER_RADIUS, DEFAULT_SEED_COUNT, DEFAULT_WIDTH,
};

use encode::OutputFormat;
use spec::{load_spec, parse_color, parse_line, RenderSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Metric {
    Euclidean,
    Manhattan,
}

impl From<Metric> for DistanceMetric {
    fn from(m: Metric) -> Self {
        match m {
            Metric::Euclidean => DistanceMetric::Euclidean,
            Metric::Manhattan => DistanceMetric::Manhattan,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "voronoi-painter")]
#[command(about = "Render a Voronoi diagram of random seeds", long_about = None)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Output image path
    #[arg(short, long)]
    output: PathBuf,

    /// Output format (default: from the output extension, else png)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Distance metric used to find the nearest seed [default: euclidean]
    #[arg(short, long, value_enum)]
    metric: Option<Metric>,

    /// Number of seeds [default: 200]
    #[arg(short = 'n', long)]
    seeds: Option<usize>,

    /// Image width in pixels [default: 1920]
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels [default: 1080]
    #[arg(long)]
    height: Option<u32>,

    /// Random seed for reproducibility (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Background color, `#RRGGBB[AA]` or packed `0xAABBGGRR`
    #[arg(long)]
    background: Option<String>,

    /// Seed marker color
    #[arg(long)]
    marker_color: Option<String>,

    /// Seed marker disc radius [default: 2]
    #[arg(long)]
    marker_radius: Option<i32>,

    /// Do not draw seed markers
    #[arg(long)]
    no_markers: bool,

    /// Refuse to render when width * height * seeds exceeds this
    #[arg(long)]
    work_limit: Option<u64>,

    /// Line overlay: x0,y0,x1,y1 (append ,aa for anti-aliasing)
    #[arg(short = 'l', long = "line", allow_hyphen_values = true)]
    line: Vec<String>,

    /// Color of inline line overlays
    #[arg(long, default_value = "#ff0000")]
    line_color: String,

    /// YAML render file
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

/// Merge CLI flags over the render file over built-in defaults.
/// Returns the render config and the RNG seed to use.
fn resolve_config(args: &Args, spec: &RenderSpec) -> anyhow::Result<(RenderConfig, u64)> {
    let width = args.width.or(spec.width).unwrap_or(DEFAULT_WIDTH);
    let height = args.height.or(spec.height).unwrap_or(DEFAULT_HEIGHT);
    let seed_count = args.seeds.or(spec.seeds).unwrap_or(DEFAULT_SEED_COUNT);
    if width == 0 || height == 0 {
        anyhow::bail!("image dimensions must be positive, got {}x{}", width, height);
    }
    if seed_count == 0 {
        anyhow::bail!("at least one seed is required");
    }

    let metric = match args.metric {
        Some(m) => m.into(),
        None => spec.metric()?.unwrap_or_default(),
    };

    let background = parse_color(
        args.background.as_deref().or(spec.background.as_deref()),
        DEFAULT_BACKGROUND,
    )?;
    let seed_marker_color = parse_color(
        args.marker_color.as_deref().or(spec.marker_color.as_deref()),
        DEFAULT_MARKER_COLOR,
    )?;
    let seed_marker_radius = if args.no_markers {
        -1
    } else {
        args.marker_radius.or(spec.marker_radius).unwrap_or(DEFAULT_MARKER_RADIUS)
    };

    let mut overlays = spec.overlays()?;
    let line_color: Color = args
        .line_color
        .parse()
        .with_context(|| format!("invalid line color '{}'", args.line_color))?;
    for line in &args.line {
        overlays.push(parse_line(line, line_color)?);
    }

    let seed = args.seed.or(spec.seed).unwrap_or_else(rand::random);

    let config = RenderConfig {
        width,
        height,
        metric,
        seed_count,
        background,
        seed_marker_color,
        seed_marker_radius,
        work_limit: args.work_limit.or(spec.work_limit),
        overlays,
    };
    Ok((config, seed))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let spec = args.spec.as_deref().map(load_spec).transpose()?.unwrap_or_default();
    let (config, seed) = resolve_config(&args, &spec)?;

    let format = match args.format.or_else(|| OutputFormat::from_path(&args.output)) {
        Some(format) => format,
        None => {
            log::warn!("unknown output extension {:?}, writing PNG", args.output);
            OutputFormat::Png
        }
    };

    println!(
        "distance formula: {} count: {} width: {} height: {} seed: {}",
        config.metric, config.seed_count, config.width, config.height, seed
    );

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(u64::from(config.height))
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({eta})")?
            .progress_chars("#>-"),
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let render_start = Instant::now();
    let rendered = Painter::new(config)
        .render_with_progress(&mut rng, |_| progress.inc(1))
        .context("render failed")?;
    progress.finish_and_clear();

    let empty = rendered.stats.empty_cells();
    log::info!(
        "rendered {} seeds in {:.2}s{}",
        rendered.seeds.len(),
        render_start.elapsed().as_secs_f64(),
        if empty > 0 { format!(" ({} cells shadowed by duplicate seeds)", empty) } else { String::new() }
    );

    encode::save(&rendered.canvas, &args.output, format)?;
    println!("Output saved to: {:?}", args.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use painter_core::Overlay;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["voronoi-painter", "-o", "out.png"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let (config, _) = resolve_config(&args(&[]), &RenderSpec::default()).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_cli_overrides_spec() {
        let spec = spec::parse_spec("width: 300\nheight: 200\nseeds: 9\nmetric: manhattan\nseed: 5\n").unwrap();
        let (config, seed) =
            resolve_config(&args(&["--width", "640", "--metric", "euclidean"]), &spec).unwrap();
        assert_eq!((config.width, config.height), (640, 200));
        assert_eq!(config.seed_count, 9);
        assert_eq!(config.metric, DistanceMetric::Euclidean);
        assert_eq!(seed, 5);

        let (_, seed) = resolve_config(&args(&["--seed", "77"]), &spec).unwrap();
        assert_eq!(seed, 77);
    }

    #[test]
    fn test_colors_and_markers() {
        let (config, _) = resolve_config(
            &args(&["--background", "#102030", "--marker-color", "0xFFFFFFFF", "--marker-radius", "4"]),
            &RenderSpec::default(),
        )
        .unwrap();
        assert_eq!(config.background, Color::rgb(0x10, 0x20, 0x30));
        assert_eq!(config.seed_marker_color, Color::WHITE);
        assert_eq!(config.seed_marker_radius, 4);

        let (config, _) = resolve_config(&args(&["--no-markers"]), &RenderSpec::default()).unwrap();
        assert!(config.seed_marker_radius < 0);

        assert!(resolve_config(&args(&["--background", "grey"]), &RenderSpec::default()).is_err());
    }

    #[test]
    fn test_inline_lines_follow_spec_overlays() {
        let spec = spec::parse_spec("overlays:\n  - shape: circle\n    center: [5, 5]\n    radius: 2\n").unwrap();
        let (config, _) = resolve_config(
            &args(&["-l", "-10,-300,2000,400,aa", "--line-color", "#00ff00"]),
            &spec,
        )
        .unwrap();
        assert_eq!(config.overlays.len(), 2);
        assert!(matches!(config.overlays[0], Overlay::Circle { radius: 2, .. }));
        assert!(matches!(
            config.overlays[1],
            Overlay::Line { antialiased: true, color, .. } if color == Color::rgb(0, 255, 0)
        ));
    }

    #[test]
    fn test_rejects_empty_render() {
        assert!(resolve_config(&args(&["-n", "0"]), &RenderSpec::default()).is_err());
        assert!(resolve_config(&args(&["--width", "0"]), &RenderSpec::default()).is_err());
    }
}
