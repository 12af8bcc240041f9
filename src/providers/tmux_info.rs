//! Providers built purely from tmux variables.

use serde::Deserialize;

use crate::context_var::ContextVar;
use crate::error::ProviderError;
use crate::provider::{decode_args, Fragment, ProviderArgs, ProviderOutput};

/// Window index, flags and name: `1* | vim`.
pub fn window_info(_args: &ProviderArgs) -> Result<ProviderOutput, ProviderError> {
    Ok(ProviderOutput(vec![
        Fragment::Var(ContextVar::WindowIndex),
        Fragment::Var(ContextVar::WindowFlags),
        Fragment::Text(" | ".into()),
        Fragment::Var(ContextVar::WindowName),
    ]))
}

pub fn session_name(_args: &ProviderArgs) -> Result<ProviderOutput, ProviderError> {
    Ok(ContextVar::SessionName.into())
}

const ELLIPSIS: &str = "...";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CwdArgs {
    #[serde(default = "default_max_length")]
    max_length: usize,
}

fn default_max_length() -> usize {
    30
}

/// Pane working directory. A path longer than `max_length` is trimmed from
/// the left to `max_length` characters including the leading ellipsis.
/// tmux does the trimming so the path is the drawn pane's, not the caller's.
pub fn cwd(args: &ProviderArgs) -> Result<ProviderOutput, ProviderError> {
    let args: CwdArgs = decode_args("cwd", args)?;
    let max = args.max_length;
    let keep = max.saturating_sub(ELLIPSIS.len()).max(1);
    let var = ContextVar::PaneCurrentPath;
    let name = var.name();
    Ok(ProviderOutput(vec![Fragment::Format(format!(
        "#{{?#{{e|>:#{{n:{name}}},{max}}},#{{=/-{keep}/{ELLIPSIS}:{name}}},{var}}}"
    ))]))
}
