// End-to-end: config file -> snapshot -> rendered format strings, the same
// path `apply` followed by tmux's `#(...)` callbacks takes.

use std::fs;

use tmux_styler::commands::host_commands;
use tmux_styler::config::{load_user_config, read_snapshot, write_snapshot};
use tmux_styler::provider::{ProviderOutput, ProviderRegistry};
use tmux_styler::rendering::Renderer;
use tmux_styler::segment::{Side, WindowKind};

const THICK_R: &str = "\u{e0b0}";
const THIN_R: &str = "\u{e0b1}";
const THICK_L: &str = "\u{e0b2}";

const CONFIG: &str = r##"
[statusbar]
separator = "original"

[statusbar.window_list]
alignment = "center"
active = { text = "A", bg = "white", fg = "black" }
inactive = { text = "I", bg = "colour8", fg = "white" }

[[statusbar.left.segments]]
provider = "session_name"
bg = "colour220"
fg = "colour234"

[[statusbar.left.segments]]
provider = "nonexistent"
bg = "colour1"

[[statusbar.left.segments]]
text = "two"
bg = "colour105"
fg = "white"
style = { attrs = ["bold"] }

[[statusbar.right.segments]]
text = "x"
bg = "colour4"

[[statusbar.right.segments]]
text = "y"
bg = "colour4"
fg = "colour7"
"##;

fn load(toml: &str) -> tmux_styler::config::StylerConfig {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, toml).unwrap();
    let config = load_user_config(Some(&config_path)).unwrap();

    let snapshot = dir.path().join("statusbar.json");
    write_snapshot(&config, &snapshot).unwrap();
    read_snapshot(&snapshot).unwrap()
}

#[test]
fn test_left_side_from_config_file() {
    let config = load(CONFIG);
    let registry = ProviderRegistry::with_builtins();
    let out = Renderer::new(&config.statusbar, &registry).side(Side::Left, false);
    assert_eq!(
        out,
        format!(
            "#[fg=colour234,bg=colour220] #{{session_name}} \
             #[fg=colour220,bg=colour105]{THICK_R}\
             #[fg=white,bg=colour105]#[bold] two #[default]\
             #[fg=colour105,bg=default]{THICK_R}"
        )
    );
}

#[test]
fn test_right_side_same_background_is_thin() {
    let config = load(CONFIG);
    let registry = ProviderRegistry::with_builtins();
    let out = Renderer::new(&config.statusbar, &registry).side(Side::Right, true);
    let thin_l = "\u{e0b3}";
    assert_eq!(
        out,
        format!(
            "#[fg=colour4,bg=default]{THICK_L}#[fg=default,bg=colour4] x \
             #[fg=colour7,bg=colour4]{thin_l}#[fg=colour7,bg=colour4] y "
        )
    );
}

#[test]
fn test_inactive_window_left_aligned() {
    let config = load(&CONFIG.replace("alignment = \"center\"", "alignment = \"left\""));
    let registry = ProviderRegistry::with_builtins();
    let out = Renderer::new(&config.statusbar, &registry).window(WindowKind::Inactive);
    assert_eq!(
        out,
        format!(
            "#[fg=white,bg=colour8] I #[fg=colour8,bg=default]\
             #{{?#{{window_end_flag}},#[fg=colour8#,bg=default]{THICK_R},\
             #{{?#{{==:#I,#{{e|-:#{{active_window_index}},1}}}},\
             #[fg=colour8#,bg=white]{THICK_R},\
             #[fg=white#,bg=colour8]{THIN_R}}}}}"
        )
    );
}

#[test]
fn test_centred_active_window_adds_spacer() {
    let config = load(CONFIG);
    let registry = ProviderRegistry::with_builtins();
    let out = Renderer::new(&config.statusbar, &registry).window(WindowKind::Active);
    assert_eq!(
        out,
        "#[fg=black,bg=white] A #[default]#{?#{window_end_flag},,#[fg=black#,bg=white] }"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let config = load(CONFIG);
    let mut registry = ProviderRegistry::with_builtins();
    registry.register_fn("user.clock", |_| Ok(ProviderOutput::from("12:00")));
    let renderer = Renderer::new(&config.statusbar, &registry);
    for side in [Side::Left, Side::Right] {
        assert_eq!(renderer.side(side, true), renderer.side(side, true));
    }
    assert_eq!(renderer.window(WindowKind::Inactive), renderer.window(WindowKind::Inactive));
}

#[test]
fn test_unknown_qualified_provider_shows_error() {
    let config = load(&CONFIG.replace("provider = \"nonexistent\"", "provider = \"user.missing\""));
    let registry = ProviderRegistry::with_builtins();
    let out = Renderer::new(&config.statusbar, &registry).side(Side::Left, false);
    assert!(out.contains("#[fg=default,bg=colour1] unknown provider user.missing "), "{out}");
}

#[test]
fn test_host_commands_point_back_at_binary() {
    let config = load(CONFIG);
    let cmds = host_commands(&config, "/usr/bin/tmux-styler");
    assert!(cmds.contains(&"tmux set -g status-justify centre".to_string()));
    let current = r##"tmux set -g window-status-current-format "#(/usr/bin/tmux-styler window active)""##;
    assert!(cmds.iter().any(|c| c == current));
    assert!(cmds.iter().all(|c| c.starts_with("tmux set -g ")));
}
