use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use stampboard::config::Config;
use stampboard::draw::StampCache;
use stampboard::input::{parse_script, replay};
use stampboard::output;

#[derive(Parser, Debug)]
#[command(name = "stampboard")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STAMPBOARD_GIT_HASH"), ")"),
    about = "Freehand and star-stamp drawing canvas"
)]
struct Cli {
    /// Gesture script to replay (one event per line)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the rendered canvas to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/stampboard/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the surface width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Override the surface height in pixels
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Render the canvas only, without the control strip
    #[arg(long)]
    no_controls: bool,

    /// Print every stroke's path data and every stamp to stdout
    #[arg(long)]
    print_paths: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        // No script: show usage
        println!("stampboard: Freehand and star-stamp drawing canvas");
        println!();
        println!("Usage:");
        println!("  stampboard --script FILE [--output out.png] [--print-paths]");
        println!("  stampboard --help      Show help");
        println!();
        println!("Script commands (one per line, # starts a comment):");
        println!("  pan-start X Y | pan-move X Y | pan-end | tap X Y");
        println!("  color N | palette | tool [pencil|stamp] | clear");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width.clamp(1, 8192);
    }
    if let Some(height) = cli.height {
        config.canvas.height = height.clamp(1, 8192);
    }
    if cli.no_controls {
        config.canvas.show_controls = false;
    }

    let source = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let events = parse_script(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let mut session = config.session()?;
    let summary = replay(&mut session, &events);
    log::info!(
        "Replayed {} event(s) from {} ({} rejected)",
        summary.applied,
        script_path.display(),
        summary.rejected
    );

    if cli.print_paths {
        print!("{}", output::describe(&session));
    }

    if let Some(path) = cli.output {
        let mut stamps = StampCache::new();
        let (surface, skipped) = output::render_surface(&session, &config, &mut stamps)?;
        if skipped > 0 {
            log::warn!("{skipped} stamp(s) could not be drawn");
        }
        output::write_png(&surface, &path)?;
    }

    Ok(())
}
