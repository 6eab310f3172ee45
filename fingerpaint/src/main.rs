use anyhow::Context;
use clap::Parser;
use fingerpaint_canvas::{parse_color, DrawingSurface, ExportWorker};
use std::path::{Path, PathBuf};

mod script;

/// fingerpaint: Replay a finger-paint gesture script and export the drawing as PNG
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Canvas width in pixels
    #[clap(long, default_value_t = 512)]
    pub width: u32,

    /// Canvas height in pixels
    #[clap(long, default_value_t = 512)]
    pub height: u32,

    /// Path to the JSON gesture script
    #[clap(short, long)]
    pub script: PathBuf,

    /// Image to draw below the strokes, stretched to the canvas
    #[clap(short, long)]
    pub background: Option<PathBuf>,

    /// Solid color painted below everything else
    #[clap(long, default_value = "white")]
    pub background_color: String,

    /// Pixels per inch written to the PNG metadata
    #[clap(long)]
    pub ppi: Option<f32>,

    /// Path to output PNG file to be created
    #[clap(short, long)]
    pub output: PathBuf,

    /// Log more (repeat for trace output)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();
    init_logging(args.verbose);

    // Read and parse the gesture script
    let script_str = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script file: {}", args.script.display()))?;
    let ops = script::parse_script(&script_str)?;
    let base_dir = args.script.parent().unwrap_or_else(|| Path::new("."));

    // Initialize surface
    let background_color = parse_color(&args.background_color)
        .with_context(|| format!("Invalid background color: {}", args.background_color))?;
    let mut surface = DrawingSurface::builder()
        .background_color(background_color)
        .size(args.width, args.height)
        .build()?;
    if let Some(path) = &args.background {
        surface.load_background(Some(script::load_background(path)?));
    }

    script::replay(&mut surface, &ops, base_dir)?;
    log::info!(
        "replayed {} operations, {} strokes committed",
        ops.len(),
        surface.history().committed_len()
    );

    // Snapshot here, encode and write on the export worker
    let raster = surface.export_composite()?;
    let mut worker = ExportWorker::new();
    let written = worker
        .write_png(raster, &args.output, args.ppi)
        .await
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))?;
    log::info!("wrote {}", written.display());
    Ok(())
}
