use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::segment::WindowKind;

pub fn get_program_name() -> String {
    std::env::current_exe()
        .ok()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "tmux-styler".to_string())
}

#[derive(Parser, Debug)]
#[command(name = "tmux-styler", version, about = "Powerline-style status line renderer for tmux")]
pub struct Cli {
    /// Read and write the config snapshot here instead of the data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the left status side. FLAG is tmux's #{window_start_flag}
    Left {
        #[arg(action = ArgAction::Set, value_parser = parse_flag)]
        flag: bool,
    },
    /// Render the right status side. FLAG is tmux's #{window_end_flag}
    Right {
        #[arg(action = ArgAction::Set, value_parser = parse_flag)]
        flag: bool,
    },
    /// Render a window-list item
    Window { kind: WindowArg },
    /// Load the user config, snapshot it, and print the tmux commands that install it
    Apply {
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Print the user config path that `apply` would load
    ConfigPath,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowArg {
    Active,
    Inactive,
}

impl From<WindowArg> for WindowKind {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Active => WindowKind::Active,
            WindowArg::Inactive => WindowKind::Inactive,
        }
    }
}

/// tmux passes flags as `0`/`1`; anything else is a usage error.
fn parse_flag(s: &str) -> Result<bool, String> {
    match s {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(format!("expected 0 or 1, got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_side_commands() {
        let cli = Cli::parse_from(["tmux-styler", "left", "1"]);
        assert!(matches!(cli.command, Command::Left { flag: true }));
        let cli = Cli::parse_from(["tmux-styler", "right", "0"]);
        assert!(matches!(cli.command, Command::Right { flag: false }));
    }

    #[test]
    fn test_side_flag_from_status_callback() {
        // The shape tmux runs after expanding #{window_start_flag}.
        let cli =
            Cli::try_parse_from(["tmux-styler", "--snapshot", "s.json", "left", "1"]).unwrap();
        assert!(matches!(cli.command, Command::Left { flag: true }));
        let cli =
            Cli::try_parse_from(["tmux-styler", "right", "0", "--snapshot", "s.json"]).unwrap();
        assert!(matches!(cli.command, Command::Right { flag: false }));
        assert_eq!(cli.snapshot, Some(PathBuf::from("s.json")));
    }

    #[test]
    fn test_bad_flag_is_rejected() {
        assert!(Cli::try_parse_from(["tmux-styler", "left", "yes"]).is_err());
        assert!(Cli::try_parse_from(["tmux-styler", "right"]).is_err());
    }

    #[test]
    fn test_parse_window_and_snapshot() {
        let cli =
            Cli::parse_from(["tmux-styler", "window", "inactive", "--snapshot", "/tmp/s.json"]);
        assert!(matches!(cli.command, Command::Window { kind: WindowArg::Inactive }));
        assert_eq!(cli.snapshot, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(WindowKind::from(WindowArg::Active), WindowKind::Active);
    }

    #[test]
    fn test_parse_apply() {
        let cli = Cli::parse_from(["tmux-styler", "apply", "--config", "a.toml"]);
        assert!(matches!(
            cli.command,
            Command::Apply { config: Some(ref p) } if p == &PathBuf::from("a.toml")
        ));
        let cli = Cli::parse_from(["tmux-styler", "config-path"]);
        assert!(matches!(cli.command, Command::ConfigPath));
    }
}
