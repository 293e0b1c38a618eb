use ascii_player::{
    cli::{self, CursorGuard, TerminalScreen},
    common::Config,
    core::{load_animation, DecodeBuffer, Player, ThreadPacer},
    FrameRate,
};

use clap::Parser;
use anyhow::Result;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asciiplay")]
#[command(about = "Play a run-length encoded ASCII animation in the terminal")]
struct Cli {
    /// Animation file (default: data.txt)
    file: Option<PathBuf>,

    /// Frames per second; non-numeric or non-positive values fall back to 30
    #[arg(allow_hyphen_values = true)]
    fps: Option<String>,

    /// Load playback defaults from a TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start playing immediately instead of waiting for Enter
    #[arg(long)]
    no_wait: bool,

    /// Enable debug logging
    #[arg(long)]
    dev: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    setup_logging(args.dev);

    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };

    let file = args.file.unwrap_or_else(|| config.playback.file.clone());
    let frame_rate = match args.fps.as_deref() {
        Some(arg) => FrameRate::parse(arg),
        None => config.playback.frame_rate(),
    };

    let mut stdout = io::stdout();
    cli::print_banner(&mut stdout, &file, frame_rate.fps())?;

    let data = load_animation(&file)?;

    if config.playback.wait_for_key && !args.no_wait {
        cli::wait_for_enter(io::stdin().lock())?;
    }

    let _cursor = CursorGuard::new(io::stdout(), config.playback.hide_cursor)?;

    let buffer = DecodeBuffer::try_new()?;
    let screen = TerminalScreen::new(BufWriter::new(stdout));
    let mut player = Player::new(screen, ThreadPacer, frame_rate, buffer);

    let summary = player.play(&data)?;
    tracing::info!(frames = summary.frames, rows = summary.rows, "done");

    Ok(())
}

fn setup_logging(dev_mode: bool) {
    // Frames go to stdout, so logs stay on stderr.
    if dev_mode {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
}
