//! tmux commands that hook the renderer into the status line.
//!
//! Commands are produced as text, one per line. The status line and the
//! window formats call back into this binary through `#(...)`, so tmux
//! re-runs it on every redraw.

use std::path::Path;

use crate::config::{StatusbarConfig, StylerConfig, StylerOptions};
use crate::style::Style;

/// Double-quote a value for a `set -g` line run by the shell.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if matches!(ch, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// One shell word inside `#(...)`: single-quoted unless plain, with `#`
/// doubled because tmux expands the format before running it.
fn callback_word(word: &str) -> String {
    let plain = !word.is_empty()
        && word.chars().all(|c| c.is_ascii_alphanumeric() || "/._-+:=,@".contains(c));
    let word = if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    };
    word.replace('#', "##")
}

/// The command prefix tmux runs for every redraw: the program, plus the
/// snapshot location when it is not the default one.
pub fn callback_program(exe: &str, snapshot: Option<&Path>) -> String {
    let mut program = callback_word(exe);
    if let Some(path) = snapshot {
        program.push_str(" --snapshot ");
        program.push_str(&callback_word(&path.to_string_lossy()));
    }
    program
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn set(option: &str, value: impl AsRef<str>) -> String {
    format!("tmux set -g {option} {}", value.as_ref())
}

/// All commands for `config`, with `exe` as the program tmux invokes.
pub fn host_commands(config: &StylerConfig, exe: &str) -> Vec<String> {
    let mut cmds = statusbar_commands(&config.statusbar, exe);
    cmds.extend(option_commands(&config.options));
    cmds
}

pub fn statusbar_commands(bar: &StatusbarConfig, exe: &str) -> Vec<String> {
    let side_style = |style: &Option<Style>| match style {
        Some(style) if !style.is_empty() => quoted(&style.to_string()),
        _ => quoted("default"),
    };
    vec![
        // Window list
        set("status-justify", bar.window_list.alignment.to_string()),
        set("window-status-current-format", quoted(&format!("#({exe} window active)"))),
        set("window-status-format", quoted(&format!("#({exe} window inactive)"))),
        // Separators are drawn by the formats themselves.
        set("window-status-separator", quoted("")),
        // Status line
        set("status", on_off(bar.visible)),
        set("status-interval", bar.status_interval.to_string()),
        set("status-style", quoted(&bar.status_style().to_string())),
        set("status-left-length", bar.left_max_length.to_string()),
        set("status-right-length", bar.right_max_length.to_string()),
        set("status-left", quoted(&format!("#({exe} left #{{window_start_flag}})"))),
        set("status-left-style", side_style(&bar.left.style)),
        set("status-right", quoted(&format!("#({exe} right #{{window_end_flag}})"))),
        set("status-right-style", side_style(&bar.right.style)),
    ]
}

pub fn option_commands(opts: &StylerOptions) -> Vec<String> {
    vec![
        set("automatic-rename", on_off(opts.auto_rename_window)),
        set("renumber-windows", on_off(opts.renumber_windows)),
        set("automatic-rename-format", quoted(&opts.auto_rename_format)),
        set("pane-border-status", quoted(&opts.pane_border.to_string())),
        set("pane-border-lines", quoted(&opts.pane_border_line.to_string())),
        set("pane-border-format", quoted(&format!(" {} ", opts.pane_border_content))),
        set("default-terminal", quoted("screen-256color")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::PaneBorder;
    use crate::segment::{Alignment, Segment, WindowListConfig};
    use crate::style::TextAttribute;

    fn has(cmds: &[String], line: &str) -> bool {
        cmds.iter().any(|c| c == line)
    }

    fn bar() -> StatusbarConfig {
        let info = Segment::provider("window_info");
        let list =
            WindowListConfig::new(info.clone(), info).with_alignment(Alignment::AbsoluteCenter);
        StatusbarConfig::new(vec![], vec![], list)
    }

    #[test]
    fn test_statusbar_commands() {
        let mut bar = bar();
        bar.left.style = Some(Style::new().attr(TextAttribute::Bold));
        let cmds = statusbar_commands(&bar, "tmux-styler");
        assert!(has(&cmds, "tmux set -g status-justify absolute-centre"));
        assert!(has(&cmds, r##"tmux set -g status-left "#(tmux-styler left #{window_start_flag})""##));
        assert!(has(&cmds, r##"tmux set -g status-right "#(tmux-styler right #{window_end_flag})""##));
        assert!(has(&cmds, r##"tmux set -g window-status-format "#(tmux-styler window inactive)""##));
        assert!(has(&cmds, r#"tmux set -g window-status-separator """#));
        assert!(has(&cmds, r#"tmux set -g status-left-style "bold""#));
        assert!(has(&cmds, r#"tmux set -g status-right-style "default""#));
        assert!(has(&cmds, r#"tmux set -g status-style "fg=terminal,bg=terminal""#));
        assert!(has(&cmds, "tmux set -g status-left-length 60"));
        assert!(has(&cmds, "tmux set -g status on"));
    }

    #[test]
    fn test_option_commands() {
        let mut opts = StylerOptions::default();
        opts.pane_border = PaneBorder::Off;
        opts.renumber_windows = false;
        let cmds = option_commands(&opts);
        assert!(has(&cmds, "tmux set -g renumber-windows off"));
        assert!(has(&cmds, r#"tmux set -g pane-border-status "off""#));
        assert!(has(&cmds, r##"tmux set -g pane-border-format " #{pane_index} #{pane_current_command} ""##));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let mut opts = StylerOptions::default();
        opts.auto_rename_format = r#"say "hi""#.to_string();
        let cmds = option_commands(&opts);
        assert!(has(&cmds, r#"tmux set -g automatic-rename-format "say \"hi\"""#));
    }

    #[test]
    fn test_callback_program_quotes_paths() {
        assert_eq!(callback_program("/usr/bin/tmux-styler", None), "/usr/bin/tmux-styler");
        let snapshot = Path::new("/home/me/my data/#1.json");
        assert_eq!(
            callback_program("/opt/it's here/tmux-styler", Some(snapshot)),
            r"'/opt/it'\''s here/tmux-styler' --snapshot '/home/me/my data/##1.json'"
        );
    }

    #[test]
    fn test_callback_program_reaches_status_left() {
        let program = callback_program("/a b/tmux-styler", None);
        let cmds = statusbar_commands(&bar(), &program);
        let expected = r##"tmux set -g status-left "#('/a b/tmux-styler' left #{window_start_flag})""##;
        assert!(has(&cmds, expected));
    }

    #[test]
    fn test_empty_side_style_is_default() {
        let mut bar = bar();
        bar.right.style = Some(Style::new());
        let cmds = statusbar_commands(&bar, "x");
        assert!(has(&cmds, r#"tmux set -g status-right-style "default""#));
    }

    #[test]
    fn test_shell_specials_are_escaped() {
        assert_eq!(quoted(r#"a"b\c$d`e"#), r#""a\"b\\c\$d\`e""#);
    }

    #[test]
    fn test_default_style_colours_reach_status_style() {
        let mut bar = bar();
        bar.default_bg = Color::Indexed256(236);
        let cmds = statusbar_commands(&bar, "x");
        assert!(has(&cmds, r#"tmux set -g status-style "fg=terminal,bg=colour236""#));
    }
}
