use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use distance_chart_core::{
    BoundaryMarker, ChartConfig, ChartRecord, LabelledThumbnail, SortOrder, layout_chart, to_json,
};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "distance-chart",
    about = "Lay out labelled thumbnails along a logarithmic distance axis",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute placements and export them as JSON
    Layout(LayoutArgs),
    /// Compute placements and print statistics only (no output file)
    Stats(LayoutArgs),
}

#[derive(Parser, Debug, Clone)]
struct LayoutArgs {
    // Input/Output
    /// Records file (.json, .yaml or .yml): label, distance and either width/height or thumbnail/text sizes
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output JSON file (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// YAML config file path (overrides layout options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Layout
    /// Margin around the canvas in pixels
    #[arg(long, default_value_t = 20, help_heading = "Layout")]
    margin: i64,
    /// Pixels per decade of distance
    #[arg(long, default_value_t = 500, help_heading = "Layout")]
    step_width: i64,
    /// Sort order: width_desc|none
    #[arg(long, default_value = "width_desc", help_heading = "Layout")]
    sort_order: String,
    /// Do not emit the built-in boundary markers
    #[arg(long, default_value_t = false, help_heading = "Layout")]
    no_boundaries: bool,

    // Sizing
    /// Border around thumbnail and caption (thumbnail/text records only)
    #[arg(long, default_value_t = 5, help_heading = "Sizing")]
    border: i64,
    /// Max thumbnail side (thumbnail/text records only)
    #[arg(long, default_value_t = 100, help_heading = "Sizing")]
    thumbnail_size: u32,

    // Export
    /// Fail if any record is rejected
    #[arg(long, default_value_t = false, help_heading = "Export")]
    strict: bool,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Layout(args) => run_layout(args, true),
        Commands::Stats(args) => run_layout(args, false),
    }
}

fn run_layout(args: &LayoutArgs, write_output: bool) -> anyhow::Result<()> {
    let mut cfg = ChartConfig {
        margin: args.margin,
        log_step_width: args.step_width,
        border: args.border,
        thumbnail_size: args.thumbnail_size,
        sort_order: parse_sort_order(&args.sort_order)?,
        ..Default::default()
    };
    if args.no_boundaries {
        cfg.boundaries.clear();
    }
    // config file sets layout options en bloc
    if let Some(path) = &args.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg = y.into_chart_config(cfg)?;
    }

    if args.print_config {
        match args.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let records = load_records(&args.input, &cfg)?;
    info!(count = records.len(), "loaded records");

    let start = Instant::now();
    let layout = layout_chart(records, &cfg)?;
    let dur = start.elapsed();
    info!(
        items = layout.items.len(),
        rejected = layout.rejected.len(),
        canvas_w = layout.canvas.width,
        canvas_h = layout.canvas.height,
        time = %fmt_dur(dur),
        "layout computed"
    );
    if !layout.rejected.is_empty() {
        warn!(count = layout.rejected.len(), "records left out of the layout");
    }
    if args.strict && !layout.rejected.is_empty() {
        anyhow::bail!(
            "{} record(s) rejected (strict mode)",
            layout.rejected.len()
        );
    }

    if !write_output {
        println!("{}", layout.stats.summary());
        println!(
            "canvas={}x{} decades={} time={}",
            layout.canvas.width,
            layout.canvas.height,
            layout.gridlines.len(),
            fmt_dur(dur)
        );
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&to_json(&layout, &cfg))?;
    match &args.out {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("create out dir {}", dir.display()))?;
            }
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(?path, items = layout.items.len(), "layout written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// One input row. Sizes are either given directly or derived from thumbnail and caption sizes.
#[derive(Debug, Deserialize)]
struct InputRecord {
    label: String,
    distance: f64,
    #[serde(flatten)]
    size: InputSize,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputSize {
    Explicit { width: i64, height: i64 },
    Labelled { thumbnail: Dim, text: Dim },
}

#[derive(Debug, Deserialize, Clone, Copy)]
struct Dim {
    w: u32,
    h: u32,
}

fn load_records(path: &Path, cfg: &ChartConfig) -> anyhow::Result<Vec<ChartRecord<String>>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read records {}", path.display()))?;
    let rows: Vec<InputRecord> = if is_yaml(path) {
        serde_yaml::from_str(&text).with_context(|| format!("parse {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?
    };
    Ok(rows
        .into_iter()
        .map(|row| {
            let (width, height) = match row.size {
                InputSize::Explicit { width, height } => (width, height),
                InputSize::Labelled { thumbnail, text } => LabelledThumbnail {
                    thumbnail: (thumbnail.w, thumbnail.h),
                    text: (text.w, text.h),
                }
                .size(cfg),
            };
            ChartRecord::new(row.label, width, height, row.distance)
        })
        .collect())
}

fn is_yaml(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .as_deref(),
        Some("yaml") | Some("yml")
    )
}

fn fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}µs", d.as_micros())
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    margin: Option<i64>,
    log_step_width: Option<i64>,
    border: Option<i64>,
    thumbnail_size: Option<u32>,
    sort_order: Option<String>,
    boundaries: Option<Vec<BoundaryMarker>>,
}

impl YamlConfig {
    fn into_chart_config(self, mut cfg: ChartConfig) -> anyhow::Result<ChartConfig> {
        if let Some(v) = self.margin {
            cfg.margin = v;
        }
        if let Some(v) = self.log_step_width {
            cfg.log_step_width = v;
        }
        if let Some(v) = self.border {
            cfg.border = v;
        }
        if let Some(v) = self.thumbnail_size {
            cfg.thumbnail_size = v;
        }
        if let Some(v) = self.sort_order {
            cfg.sort_order = parse_sort_order(&v)?;
        }
        if let Some(v) = self.boundaries {
            cfg.boundaries = v;
        }
        Ok(cfg)
    }
}

fn parse_sort_order(s: &str) -> anyhow::Result<SortOrder> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("unknown sort order: {}", s))
}
