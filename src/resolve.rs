//! Segment content resolution.
//!
//! Every failure is contained here: an unknown unqualified provider yields
//! empty content (the segment is dropped), and any other provider failure
//! becomes the visible content of that one segment. Literal segments are
//! never dropped; an empty literal is a two-space spacer.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::ProviderError;
use crate::format::{render, escape_text, Expr};
use crate::provider::{Lookup, ProviderArgs, ProviderRegistry};
use crate::segment::{Segment, SegmentKind};

/// Resolve a segment to its display content in format syntax.
///
/// Content is padded with a space on each side, inside the segment's style
/// attributes when it has any. An empty string means a provider segment has
/// nothing to show and must be left out entirely.
pub fn resolve(
    segment: &Segment,
    registry: &ProviderRegistry,
    args_by_name: &BTreeMap<String, ProviderArgs>,
) -> String {
    let body = match &segment.kind {
        SegmentKind::Literal(text) => text.clone(),
        SegmentKind::Provider(name) => match resolve_provider(name, registry, args_by_name) {
            empty if empty.is_empty() => return empty,
            body => body,
        },
    };
    let attrs = segment.style.as_ref().map(|s| s.apply()).unwrap_or_default();
    if attrs.is_empty() {
        format!(" {body} ")
    } else {
        render(&Expr::concat([
            Expr::Attrs(attrs),
            Expr::literal(format!(" {body} ")),
            Expr::Reset,
        ]))
    }
}

fn resolve_provider(
    name: &str,
    registry: &ProviderRegistry,
    args_by_name: &BTreeMap<String, ProviderArgs>,
) -> String {
    let provider = match registry.lookup(name) {
        Lookup::Found(provider) => provider,
        Lookup::NotFound if is_qualified(name) => {
            let err = ProviderError::Unknown(name.to_string());
            warn!(provider = name, "{err}");
            return escape_text(&err.to_string());
        }
        Lookup::NotFound => {
            debug!(provider = name, "unknown provider, segment dropped");
            return String::new();
        }
    };

    let empty = ProviderArgs::new();
    let args = args_by_name.get(name).unwrap_or(&empty);
    match provider.provide(args) {
        Ok(output) => output.to_format_string(),
        Err(err) => {
            warn!(provider = name, error = %err, "provider failed");
            escape_text(&err.to_string())
        }
    }
}

/// `module.name` refers to a user provider; bare names to built-ins.
fn is_qualified(name: &str) -> bool {
    name.contains('.')
}
