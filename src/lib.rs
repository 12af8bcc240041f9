//! Powerline-style status line rendering for tmux.
//!
//! Configuration is a list of styled segments per side plus a window-list
//! item. [`rendering::Renderer`] turns it into tmux format strings, and
//! [`commands::host_commands`] produces the `set -g` lines that make tmux
//! call back into the binary on every redraw.

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod context_var;
pub mod error;
pub mod format;
pub mod provider;
pub mod providers;
pub mod rendering;
pub mod resolve;
pub mod segment;
pub mod separator;
pub mod style;
