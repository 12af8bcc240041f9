//! Status line and window list rendering.
//!
//! Both sides and both window kinds share one separator rule
//! ([`separator`]). Sides know their neighbours when they render. Window
//! items do not: tmux expands the window format once per window, so the
//! neighbour is chosen at draw time through conditionals on the window's
//! position relative to the active window.

use crate::color::Color;
use crate::config::StatusbarConfig;
use crate::format::{render, Expr, Predicate};
use crate::provider::ProviderRegistry;
use crate::resolve::resolve;
use crate::segment::{Alignment, Segment, Side, WindowKind};
use crate::separator::{Direction, SeparatorSet};

// ─── Separator rule ─────────────────────────────────────────────────────────

/// Separator drawn after `seg` toward `next`, pointing `dir`.
///
/// - an explicit separator on `seg` is used as is, `fg=seg.bg,bg=next.bg`
/// - `next == None` is the end of the line: the end set's thick glyph
///   against `default`
/// - equal backgrounds get the thin glyph in the segment's own colours
/// - otherwise the thick glyph hands `seg.bg` over to `next.bg`
pub fn separator(
    seg: &Segment,
    next: Option<&Segment>,
    separators: &SeparatorSet,
    end: &SeparatorSet,
    dir: Direction,
) -> Expr {
    let default = Color::DEFAULT;
    if let Some(explicit) = &seg.separator {
        let bg = next.map(Segment::bg).unwrap_or(&default);
        return Expr::concat([Expr::colour(seg.bg(), bg), Expr::text(explicit.as_str())]);
    }
    match next {
        None => Expr::concat([Expr::colour(seg.bg(), &default), Expr::text(end.thick(dir))]),
        Some(next) if seg.bg().same_as(next.bg()) => {
            Expr::concat([Expr::colour(seg.fg(), seg.bg()), Expr::text(separators.thin(dir))])
        }
        Some(next) => {
            Expr::concat([Expr::colour(seg.bg(), next.bg()), Expr::text(separators.thick(dir))])
        }
    }
}

/// Glyphs on each side point toward the window list.
fn direction(side: Side) -> Direction {
    match side {
        Side::Left => Direction::Right,
        Side::Right => Direction::Left,
    }
}

// ─── Sides ──────────────────────────────────────────────────────────────────

/// A segment with its resolved, non-empty content.
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub segment: &'a Segment,
    pub content: String,
}

/// Compose one side from already resolved segments.
///
/// `boundary` is the window segment next to this side, when the window
/// list adjoins it. Left segments emit colour, content, separator;
/// right segments emit separator, colour, content, each separator facing
/// the segment's neighbour on the window-list side.
pub fn side_expr(
    side: Side,
    segments: &[Resolved<'_>],
    boundary: Option<&Segment>,
    separators: &SeparatorSet,
    end: &SeparatorSet,
) -> Expr {
    let dir = direction(side);
    let mut parts = Vec::with_capacity(segments.len() * 3);
    for (idx, item) in segments.iter().enumerate() {
        let seg = item.segment;
        let next = match side {
            Side::Left => segments.get(idx + 1).map(|r| r.segment).or(boundary),
            Side::Right => match idx {
                0 => boundary,
                _ => Some(segments[idx - 1].segment),
            },
        };
        let sep = separator(seg, next, separators, end, dir);
        let body = [Expr::colour(seg.fg(), seg.bg()), Expr::literal(item.content.as_str())];
        match side {
            Side::Left => {
                parts.extend(body);
                parts.push(sep);
            }
            Side::Right => {
                parts.push(sep);
                parts.extend(body);
            }
        }
    }
    Expr::Concat(parts)
}

// ─── Window list ────────────────────────────────────────────────────────────

/// Format for one window list slot of `kind`, given its resolved content.
pub fn window_expr(config: &StatusbarConfig, kind: WindowKind, content: &str) -> Expr {
    let list = &config.window_list;
    let (active, inactive) = (&list.active, &list.inactive);
    let seg = list.segment(kind);
    let body = Expr::concat([Expr::colour(seg.fg(), seg.bg()), Expr::literal(content)]);
    let default = Color::DEFAULT;

    match list.alignment {
        Alignment::Left => {
            let sep = &config.separator;
            let end = config.end_separator(Side::Left);
            let dir = Direction::Right;
            let tail = match kind {
                WindowKind::Active => Expr::cond(
                    Predicate::IsLast,
                    separator(active, None, sep, end, dir),
                    separator(active, Some(inactive), sep, end, dir),
                ),
                WindowKind::Inactive => Expr::cond(
                    Predicate::IsLast,
                    separator(inactive, None, sep, end, dir),
                    Expr::cond(
                        Predicate::IsOneLessThanActive,
                        separator(inactive, Some(active), sep, end, dir),
                        separator(inactive, Some(inactive), sep, end, dir),
                    ),
                ),
            };
            Expr::concat([body, Expr::colour(seg.bg(), &default), tail])
        }
        Alignment::Right => {
            let sep = &config.separator;
            let end = config.end_separator(Side::Right);
            let dir = Direction::Left;
            let head = match kind {
                WindowKind::Active => Expr::cond(
                    Predicate::IsFirst,
                    separator(active, None, sep, end, dir),
                    separator(active, Some(inactive), sep, end, dir),
                ),
                WindowKind::Inactive => Expr::cond(
                    Predicate::IsFirst,
                    separator(inactive, None, sep, end, dir),
                    Expr::cond(
                        Predicate::IsOneMoreThanActive,
                        separator(inactive, Some(active), sep, end, dir),
                        separator(inactive, Some(inactive), sep, end, dir),
                    ),
                ),
            };
            Expr::concat([head, body])
        }
        // Centred lists do not touch either side, so only a spacer after
        // the active window is needed.
        Alignment::Center | Alignment::AbsoluteCenter => {
            let mut parts = vec![body, Expr::Reset];
            if kind == WindowKind::Active {
                parts.push(Expr::cond(
                    Predicate::IsLast,
                    Expr::empty(),
                    Expr::concat([Expr::colour(active.fg(), active.bg()), Expr::text(" ")]),
                ));
            }
            Expr::Concat(parts)
        }
    }
}

// ─── Entry points ───────────────────────────────────────────────────────────

/// Renders from one immutable configuration. Holds no state between calls,
/// so identical inputs give identical output.
pub struct Renderer<'a> {
    config: &'a StatusbarConfig,
    registry: &'a ProviderRegistry,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a StatusbarConfig, registry: &'a ProviderRegistry) -> Self {
        Self { config, registry }
    }

    fn resolve(&self, segment: &Segment) -> String {
        resolve(segment, self.registry, &self.config.provider_args)
    }

    /// Resolve a side's segments, dropping those with empty content.
    pub fn resolve_side(&self, side: Side) -> Vec<Resolved<'a>> {
        let config: &'a StatusbarConfig = self.config;
        config
            .side(side)
            .segments
            .iter()
            .filter_map(|segment| {
                let content = self.resolve(segment);
                (!content.is_empty()).then_some(Resolved { segment, content })
            })
            .collect()
    }

    /// `status-left` / `status-right`. `boundary_active` says whether the
    /// window next to this side is the active one (tmux's
    /// `window_start_flag` for the left side, `window_end_flag` for the
    /// right).
    pub fn side(&self, side: Side, boundary_active: bool) -> String {
        let list = &self.config.window_list;
        let boundary = list.alignment.adjoins(side).then(|| {
            list.segment(if boundary_active { WindowKind::Active } else { WindowKind::Inactive })
        });
        let resolved = self.resolve_side(side);
        render(&side_expr(
            side,
            &resolved,
            boundary,
            &self.config.separator,
            self.config.end_separator(side),
        ))
    }

    /// `window-status-current-format` / `window-status-format`.
    pub fn window(&self, kind: WindowKind) -> String {
        let content = self.resolve(self.config.window_list.segment(kind));
        render(&window_expr(self.config, kind, &content))
    }
}
