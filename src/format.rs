// format.rs: tmux format-language output
//
// The renderers build an `Expr` tree and `render()` serializes it into the
// string tmux expands at draw time. Only the subset of the language the
// status line needs is modelled: style tokens #[...], conditionals
// #{?cond,then,else}, and verbatim host syntax.

use crate::color::Color;

// ─────────────────────────── predicates ───────────────────────────

/// Conditions only tmux can answer, evaluated per window when the window
/// list is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Window has the lowest index.
    IsFirst,
    /// Window has the highest index.
    IsLast,
    /// Window sits directly before the active window.
    IsOneLessThanActive,
    /// Window sits directly after the active window.
    IsOneMoreThanActive,
}

impl Predicate {
    pub fn token(self) -> &'static str {
        match self {
            Predicate::IsFirst => "#{window_start_flag}",
            Predicate::IsLast => "#{window_end_flag}",
            Predicate::IsOneLessThanActive => "#{==:#I,#{e|-:#{active_window_index},1}}",
            Predicate::IsOneMoreThanActive => "#{==:#I,#{e|+:#{active_window_index},1}}",
        }
    }
}

// ─────────────────────────── expression tree ───────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Host syntax, emitted verbatim.
    Literal(String),
    /// Plain text; escaped so tmux shows it as written.
    Text(String),
    /// `#[fg=..,bg=..]`. A missing side leaves that colour unchanged.
    Colour { fg: Option<Color>, bg: Option<Color> },
    /// `#[attrs]`, the attribute part of a style.
    Attrs(String),
    /// `#[default]`.
    Reset,
    Cond {
        predicate: Predicate,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Concat(Vec<Expr>),
}

impl Expr {
    pub fn literal(s: impl Into<String>) -> Expr {
        Expr::Literal(s.into())
    }

    pub fn text(s: impl Into<String>) -> Expr {
        Expr::Text(s.into())
    }

    pub fn colour(fg: &Color, bg: &Color) -> Expr {
        Expr::Colour { fg: Some(fg.clone()), bg: Some(bg.clone()) }
    }

    pub fn cond(predicate: Predicate, then: Expr, otherwise: Expr) -> Expr {
        Expr::Cond { predicate, then: Box::new(then), otherwise: Box::new(otherwise) }
    }

    pub fn concat(parts: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Concat(parts.into_iter().collect())
    }

    pub fn empty() -> Expr {
        Expr::Concat(Vec::new())
    }
}

// ─────────────────────────── serialization ───────────────────────────

/// Serialize an expression into tmux format syntax.
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, false);
    out
}

fn write_expr(out: &mut String, expr: &Expr, in_branch: bool) {
    match expr {
        Expr::Literal(s) => out.push_str(s),
        Expr::Text(s) => push_escaped(out, s, in_branch),
        Expr::Colour { fg, bg } => {
            let mut parts = Vec::with_capacity(2);
            if let Some(fg) = fg {
                parts.push(format!("fg={fg}"));
            }
            if let Some(bg) = bg {
                parts.push(format!("bg={bg}"));
            }
            if !parts.is_empty() {
                write_style_token(out, &parts.join(","), in_branch);
            }
        }
        Expr::Attrs(attrs) => {
            if !attrs.is_empty() {
                write_style_token(out, attrs, in_branch);
            }
        }
        Expr::Reset => out.push_str("#[default]"),
        Expr::Cond { predicate, then, otherwise } => {
            out.push_str("#{?");
            out.push_str(predicate.token());
            out.push(',');
            write_expr(out, then, true);
            out.push(',');
            write_expr(out, otherwise, true);
            out.push('}');
        }
        Expr::Concat(parts) => {
            for part in parts {
                write_expr(out, part, in_branch);
            }
        }
    }
}

// Commas inside a conditional branch must be written as `#,` or tmux splits
// the branch there, including the comma between fg= and bg=.
fn write_style_token(out: &mut String, body: &str, in_branch: bool) {
    out.push_str("#[");
    if in_branch {
        out.push_str(&body.replace(',', "#,"));
    } else {
        out.push_str(body);
    }
    out.push(']');
}

fn push_escaped(out: &mut String, s: &str, in_branch: bool) {
    for ch in s.chars() {
        match ch {
            '#' => out.push_str("##"),
            ',' if in_branch => out.push_str("#,"),
            '}' if in_branch => out.push_str("#}"),
            _ => out.push(ch),
        }
    }
}

/// Escape data (a path, a date) for inclusion in a format string.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    push_escaped(&mut out, s, false);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_token() {
        let e = Expr::colour(&Color::Indexed256(220), &Color::Indexed256(105));
        assert_eq!(render(&e), "#[fg=colour220,bg=colour105]");
        assert_eq!(render(&Expr::Colour { fg: Some(Color::DEFAULT), bg: None }), "#[fg=default]");
        assert_eq!(render(&Expr::Colour { fg: None, bg: None }), "");
    }

    #[test]
    fn test_text_escapes_hash() {
        assert_eq!(render(&Expr::text("issue #4")), "issue ##4");
        assert_eq!(escape_text("a#b"), "a##b");
        assert_eq!(render(&Expr::literal("#{session_name}")), "#{session_name}");
    }

    #[test]
    fn test_conditional_escapes_branch_commas() {
        let e = Expr::cond(
            Predicate::IsLast,
            Expr::concat([Expr::colour(&Color::DEFAULT, &Color::Indexed256(1)), Expr::text(">")]),
            Expr::text("a,b}"),
        );
        assert_eq!(
            render(&e),
            "#{?#{window_end_flag},#[fg=default#,bg=colour1]>,a#,b#}}"
        );
    }

    #[test]
    fn test_nested_conditional() {
        let e = Expr::cond(
            Predicate::IsFirst,
            Expr::text("x"),
            Expr::cond(Predicate::IsOneMoreThanActive, Expr::text("y"), Expr::text("z")),
        );
        assert_eq!(
            render(&e),
            "#{?#{window_start_flag},x,#{?#{==:#I,#{e|+:#{active_window_index},1}},y,z}}"
        );
    }

    #[test]
    fn test_empty_attrs_and_concat() {
        assert_eq!(render(&Expr::Attrs(String::new())), "");
        assert_eq!(render(&Expr::empty()), "");
        let styled = Expr::concat([Expr::Attrs("bold".into()), Expr::Reset]);
        assert_eq!(render(&styled), "#[bold]#[default]");
    }
}
