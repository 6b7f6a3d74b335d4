//! First-person grid ray caster.
//!
//! Controls  W/S = forward/back  A/D = turn  Esc = quit
//!
//! ```bash
//! cargo run --release -- [--map world.txt] [--width 800 --height 600] [--fps 60]
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use yarc_rs::{
    Config,
    platform::{MinifbHost, SystemClock},
    renderer::Software,
    sim::FrameLoop,
    world::{Grid, Player},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Frame-rate cap
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// ASCII map to load instead of the built-in one
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let default_level = if opts.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = Config {
        width: opts.width,
        height: opts.height,
        ..Config::for_fps(opts.fps)?
    };
    config.validate()?;

    let grid = match &opts.map {
        Some(path) => Grid::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Grid::classic(),
    };
    let player = Player::spawn();
    anyhow::ensure!(
        grid.is_open_at(player.pos.x, player.pos.y),
        "spawn point ({}, {}) is inside a wall",
        player.pos.x,
        player.pos.y
    );
    tracing::info!(width = grid.width(), height = grid.height(), "world ready");

    let host = MinifbHost::new("Simple Raycaster", config.width, config.height)
        .context("cannot open window")?;

    let mut frame_loop = FrameLoop::new(
        Software::default(),
        grid,
        player,
        host,
        SystemClock::new(),
        config,
    );
    frame_loop.run()?;

    // dropping the loop closes the window
    Ok(())
}
