//! Offline check of the relic highlighting pipeline
//!
//! Loads a frozen interface snapshot, runs one polling cycle over it and
//! prints the detected panel and the resulting highlight frames.
//!
//! Run with: cargo run -p relics-validate -- core/tests/fixtures/relic_locker.toml
//! With `--features visual`, `--png out.png` also renders the frames.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use relics_core::config::resolve_settings;
use relics_core::{
    PanelState, RecordingPainter, RelicHighlighter, RelicsSettings, StaticSnapshot,
    UPDATE_INTERVAL, detect,
};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Run one relic highlighting pass over a UI snapshot")]
struct Cli {
    /// Snapshot TOML describing the host interface tree
    snapshot: PathBuf,

    /// Settings TOML (the default settings location is used when omitted)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Render the frames into this PNG file
    #[cfg(feature = "visual")]
    #[arg(long)]
    png: Option<PathBuf>,

    /// Canvas width for --png
    #[cfg(feature = "visual")]
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Canvas height for --png
    #[cfg(feature = "visual")]
    #[arg(long, default_value_t = 1080)]
    height: u32,
}

/// Initialize logging, writing to RELICS_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("RELICS_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let ui = match StaticSnapshot::load(&cli.snapshot) {
        Ok(ui) => ui,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load snapshot");
            return ExitCode::FAILURE;
        }
    };

    let settings = match resolve_settings(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load settings");
            return ExitCode::FAILURE;
        }
    };

    let highlighter = run_cycle(&ui, &settings);
    let panel = detect(&ui);
    report(panel, &highlighter, &ui);

    #[cfg(feature = "visual")]
    if let Some(path) = cli.png.as_deref() {
        if let Err(e) = render_png(&highlighter, &ui, path, cli.width, cli.height) {
            tracing::error!(error = %e, path = %path.display(), "Failed to write PNG");
            return ExitCode::FAILURE;
        }
        println!("Wrote {}", path.display());
    }

    ExitCode::SUCCESS
}

/// One polling cycle, as if a full interval had passed since start-up.
fn run_cycle(ui: &StaticSnapshot, settings: &RelicsSettings) -> RelicHighlighter {
    let start = Instant::now();
    let mut highlighter = RelicHighlighter::starting_at(start, settings);
    highlighter.tick_at(ui, start + UPDATE_INTERVAL);
    highlighter
}

fn report(panel: PanelState, highlighter: &RelicHighlighter, ui: &StaticSnapshot) {
    println!("Panel: {:?}", panel);
    println!("State: {:?}", highlighter.state());

    let mut painter = RecordingPainter::new();
    let drawn = highlighter.render(ui, &mut painter);
    println!("Frames drawn: {}", drawn);

    for (i, frame) in painter.frames.iter().enumerate() {
        let [r, g, b, a] = frame.color;
        println!(
            "  [{}] x={:.1} y={:.1} w={:.1} h={:.1} color=#{:02X}{:02X}{:02X}{:02X} thickness={:.1}",
            i,
            frame.rect.x,
            frame.rect.y,
            frame.rect.width,
            frame.rect.height,
            r,
            g,
            b,
            a,
            frame.thickness
        );
    }
}

#[cfg(feature = "visual")]
fn render_png(
    highlighter: &RelicHighlighter,
    ui: &StaticSnapshot,
    path: &std::path::Path,
    width: u32,
    height: u32,
) -> Result<(), relics_overlay::CanvasError> {
    let mut painter = relics_overlay::PixmapPainter::new(width, height)?;
    highlighter.render(ui, &mut painter);
    painter.save_png(path)
}
