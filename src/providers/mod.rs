//! Built-in content providers.

mod date_time;
mod tmux_info;

pub use date_time::{date, date_day, time};
pub use tmux_info::{cwd, session_name, window_info};

use crate::provider::ProviderRegistry;

pub fn register_builtins(registry: &mut ProviderRegistry) {
    registry.register_fn("window_info", window_info);
    registry.register_fn("session_name", session_name);
    registry.register_fn("cwd", cwd);
    registry.register_fn("date_day", date_day);
    registry.register_fn("date", date);
    registry.register_fn("time", time);
}
