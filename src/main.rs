use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tmux_styler::cli::{get_program_name, Cli, Command};
use tmux_styler::commands::{callback_program, host_commands};
use tmux_styler::config::{self, StylerConfig};
use tmux_styler::provider::ProviderRegistry;
use tmux_styler::rendering::Renderer;
use tmux_styler::segment::{Side, WindowKind};

const LOG_ENV: &str = "TMUX_STYLER_LOG";

// stdout is what tmux draws, so logs only ever go to stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Left { flag } => render_side(cli.snapshot, Side::Left, flag),
        Command::Right { flag } => render_side(cli.snapshot, Side::Right, flag),
        Command::Window { kind } => render_window(cli.snapshot, kind.into()),
        Command::Apply { config } => apply(cli.snapshot, config),
        Command::ConfigPath => {
            let path =
                config::user_config_path().map(|p| p.display().to_string()).unwrap_or_default();
            println!("{path}");
            Ok(())
        }
    }
}

fn snapshot_location(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(config::snapshot_path()?),
    }
}

fn load_snapshot(explicit: Option<PathBuf>) -> Result<StylerConfig> {
    let path = snapshot_location(explicit)?;
    debug!(path = %path.display(), "reading snapshot");
    config::read_snapshot(&path)
        .with_context(|| "no usable snapshot; run `tmux-styler apply` first")
}

fn render_side(snapshot: Option<PathBuf>, side: Side, flag: bool) -> Result<()> {
    let config = load_snapshot(snapshot)?;
    let registry = ProviderRegistry::with_builtins();
    println!("{}", Renderer::new(&config.statusbar, &registry).side(side, flag));
    Ok(())
}

fn render_window(snapshot: Option<PathBuf>, kind: WindowKind) -> Result<()> {
    let config = load_snapshot(snapshot)?;
    let registry = ProviderRegistry::with_builtins();
    println!("{}", Renderer::new(&config.statusbar, &registry).window(kind));
    Ok(())
}

fn apply(snapshot: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_user_config(config_path.as_deref())?;
    let path = snapshot_location(snapshot)?;
    config::write_snapshot(&config, &path)?;
    for cmd in host_commands(&config, &snapshot_aware_exe(&path)) {
        println!("{cmd}");
    }
    Ok(())
}

/// The program as tmux should invoke it, carrying the snapshot location so
/// the render calls read what `apply` just wrote.
fn snapshot_aware_exe(snapshot: &Path) -> String {
    let exe = get_program_name();
    match config::snapshot_path() {
        Ok(default) if default == snapshot => callback_program(&exe, None),
        _ => callback_program(&exe, Some(snapshot)),
    }
}
