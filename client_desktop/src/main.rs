use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use client_desktop::app::App;
use client_desktop::settings::Settings;
use client_desktop::text::GlyphFont;
use tracing::info;
use winit::event_loop::{ControlFlow, EventLoop};

/// Pong for the desktop
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file (defaults to ./pong.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the random number generator for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    client_desktop::logger::init()?;
    let cli = Cli::parse();
    info!(version = env!("CARGO_PKG_VERSION"), seed = ?cli.seed, "starting pong");

    let settings = Settings::load(cli.config.as_deref())?;
    let font = GlyphFont::load(&settings.font).context("failed to load font")?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, font, cli.seed);
    event_loop.run_app(&mut app)?;
    app.finish()
}
