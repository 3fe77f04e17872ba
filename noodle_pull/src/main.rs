//! noodle_pull: windowed entry point.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use noodle_core::{Tuning, Viewport};
use noodle_pull::app::{run, AppConfig, Autoplay};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "noodle_pull", about = "Pull, spin, cut and push hand-made noodles with the mouse")]
struct Cli {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 640)]
    width: usize,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 960)]
    height: usize,

    /// JSON file overriding any tuning fields
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Play scripted gestures instead of waiting for the mouse
    #[arg(long)]
    autoplay: bool,

    /// Complete cycles to play with --autoplay
    #[arg(long, default_value_t = 1)]
    cycles: u32,

    /// Milliseconds between scripted events
    #[arg(long, default_value_t = 16)]
    step_ms: u64,

    /// Close the window after N frames
    #[arg(long)]
    frames: Option<u64>,

    /// Print the effective tuning as JSON and exit
    #[arg(long)]
    print_tuning: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "noodle_pull=info,noodle_core=info".into()),
        )
        .init();

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    if cli.print_tuning {
        println!("{}", tuning.to_json_pretty()?);
        return Ok(());
    }

    anyhow::ensure!(cli.width > 0 && cli.height > 0, "canvas must be at least 1×1");

    let cfg = AppConfig {
        viewport: Viewport::new(cli.width as f64, cli.height as f64),
        tuning,
        autoplay: cli.autoplay.then(|| Autoplay {
            cycles: cli.cycles,
            delay:  Duration::from_millis(cli.step_ms),
        }),
        frame_limit: cli.frames,
        ..AppConfig::default()
    };

    info!("noodle_pull v{} starting", env!("CARGO_PKG_VERSION"));
    info!(width = cli.width, height = cli.height, autoplay = cli.autoplay, "opening window");

    run(cfg).context("noodle_pull stopped with an error")
}
