// This file is part of expando-rs.
// Copyright (C) 2026 the expando-rs contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The width-aware tree walk
//!
//! Rendering is infallible: a callback that returns no value simply produces
//! empty text for its node, and the walk continues. The only thing the
//! renderer enforces strictly is the column budget — nothing written ever
//! exceeds `max_cols` terminal cells, as measured by [`crate::width`].

use crate::callback::{ExpandoCallbacks, FieldId};
use crate::definition::ValueKind;
use crate::node::{DefinitionId, FormatSpec, Justify, Node, PaddingKind};
use crate::width::{str_width, truncate_to_width};
use std::any::Any;

/// A column budget larger than any real terminal, used when the caller
/// passes `None` for `max_cols`.
const UNBOUNDED_COLS: usize = 8192;

bitflags::bitflags! {
    /// Display-mode bits passed through to callbacks
    ///
    /// No bits are defined yet; the type exists so a future flag can be
    /// added to [`Expando::render`](crate::Expando::render)'s signature
    /// without a breaking change.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct RenderFlags: u8 {
    }
}

/// Renders `root` into `out`, never writing more than `max_cols` columns.
///
/// Returns the number of columns written. `out` is appended to, not reset.
#[tracing::instrument(level = "trace", skip_all)]
pub(crate) fn render(
    root: &Node,
    callbacks: &dyn ExpandoCallbacks,
    data: &dyn Any,
    flags: RenderFlags,
    max_cols: Option<usize>,
    out: &mut String,
) -> usize {
    let budget = max_cols.unwrap_or(UNBOUNDED_COLS);
    render_node(root, callbacks, data, flags, budget, out)
}

fn render_node(
    node: &Node,
    callbacks: &dyn ExpandoCallbacks,
    data: &dyn Any,
    flags: RenderFlags,
    budget: usize,
    out: &mut String,
) -> usize {
    match node {
        Node::Empty => 0,
        Node::Text(s) => {
            let (slice, width) = truncate_to_width(s, budget);
            out.push_str(slice);
            width
        }
        Node::Expando {
            definition, format, ..
        } => render_expando(node, *definition, format, callbacks, data, flags, budget, out),
        Node::CondBool { .. } => {
            debug_assert!(false, "CondBool must only be reached as a Condition's test");
            0
        }
        Node::Condition {
            condition,
            if_true,
            if_false,
        } => {
            let truth = evaluate_test(condition, callbacks, data, flags);
            let branch = if truth {
                if_true.as_ref()
            } else {
                if_false.as_deref().unwrap_or(&Node::Empty)
            };
            render_node(branch, callbacks, data, flags, budget, out)
        }
        Node::Container(children) if is_padded_group(children) => {
            render_padded_chain(node, callbacks, data, flags, budget, out)
        }
        Node::Container(children) => {
            render_sequential(children, callbacks, data, flags, budget, out)
        }
        Node::Padding { .. } => {
            debug_assert!(false, "stray padding node outside a re-padded chain");
            0
        }
    }
}

fn render_sequential(
    children: &[Node],
    callbacks: &dyn ExpandoCallbacks,
    data: &dyn Any,
    flags: RenderFlags,
    budget: usize,
    out: &mut String,
) -> usize {
    let mut remaining = budget;
    let mut written = 0;
    for child in children {
        if remaining == 0 {
            break;
        }
        let w = render_node(child, callbacks, data, flags, remaining, out);
        written += w;
        remaining -= w;
    }
    written
}

fn render_expando(
    node: &Node,
    definition: DefinitionId,
    format: &FormatSpec,
    callbacks: &dyn ExpandoCallbacks,
    data: &dyn Any,
    flags: RenderFlags,
    budget: usize,
    out: &mut String,
) -> usize {
    let field = FieldId {
        namespace_id: definition.namespace_id,
        field_id: definition.field_id,
    };
    let mut value = String::new();
    match definition.value_kind {
        ValueKind::String => {
            callbacks.render_string(field, node, data, flags, &mut value);
        }
        ValueKind::Number => {
            match callbacks.render_number(field, node, data, flags) {
                Some(n) => value.push_str(&n.to_string()),
                None => tracing::trace!(?field, "render_number returned no value"),
            }
        }
    }
    let formatted = apply_format(&value, format);
    let (slice, width) = truncate_to_width(&formatted, budget);
    out.push_str(slice);
    width
}

/// Applies an expando's truncation/padding/justification, without regard to
/// the outer column budget (the caller truncates the result to what's left).
fn apply_format(value: &str, format: &FormatSpec) -> String {
    let truncated = match format.max_width {
        Some(max) => truncate_to_width(value, max).0,
        None => value,
    };
    let width = str_width(truncated);
    if width >= format.min_width {
        return truncated.to_string();
    }
    let pad = format.min_width - width;
    let fill: String = std::iter::repeat(format.leader).take(pad).collect();
    match format.justify {
        Justify::Left => format!("{truncated}{fill}"),
        Justify::Right => format!("{fill}{truncated}"),
        Justify::Centre => {
            let left = pad / 2;
            let right = pad - left;
            let left_fill: String = std::iter::repeat(format.leader).take(left).collect();
            let right_fill: String = std::iter::repeat(format.leader).take(right).collect();
            format!("{left_fill}{truncated}{right_fill}")
        }
    }
}

/// Resolves the truth value of a Condition's test slot.
///
/// A [`Node::CondBool`] dispatches on its own definition's value kind
/// (NUMBER: non-zero; STRING: non-empty); anything else (a nested
/// conditional reached through the test position) is true iff rendering it
/// produces non-empty output.
fn evaluate_test(
    node: &Node,
    callbacks: &dyn ExpandoCallbacks,
    data: &dyn Any,
    flags: RenderFlags,
) -> bool {
    match node {
        Node::CondBool { definition, .. } => {
            let field = FieldId {
                namespace_id: definition.namespace_id,
                field_id: definition.field_id,
            };
            match definition.value_kind {
                ValueKind::Number => callbacks
                    .render_number(field, node, data, flags)
                    .map(|n| n != 0)
                    .unwrap_or(false),
                ValueKind::String => {
                    let mut value = String::new();
                    let has_value = callbacks.render_string(field, node, data, flags, &mut value);
                    has_value && !value.is_empty()
                }
            }
        }
        other => {
            let mut scratch = String::new();
            render_node(other, callbacks, data, flags, UNBOUNDED_COLS, &mut scratch);
            !scratch.is_empty()
        }
    }
}

/// True if `children` is the `[left, padding, right]` shape the re-pad pass
/// produces, as opposed to an ordinary flat sibling list.
fn is_padded_group(children: &[Node]) -> bool {
    children.len() == 3 && matches!(children[1], Node::Padding { .. })
}

/// Flattens a chain of nested padded groups (as produced by repeatedly
/// re-padding around more than one marker) into its segments and the
/// padding markers between them, in source order.
fn flatten_chain(node: &Node) -> (Vec<&Node>, Vec<(PaddingKind, char)>) {
    if let Node::Container(children) = node {
        if is_padded_group(children) {
            let (kind, fill) = match &children[1] {
                Node::Padding { kind, fill } => (*kind, *fill),
                _ => unreachable!(),
            };
            let (right_segs, right_pads) = flatten_chain(&children[2]);
            let mut segs = vec![&children[0]];
            segs.extend(right_segs);
            let mut pads = vec![(kind, fill)];
            pads.extend(right_pads);
            return (segs, pads);
        }
    }
    (vec![node], Vec::new())
}

fn render_padded_chain(
    node: &Node,
    callbacks: &dyn ExpandoCallbacks,
    data: &dyn Any,
    flags: RenderFlags,
    budget: usize,
    out: &mut String,
) -> usize {
    let (segments, pads) = flatten_chain(node);

    let mut rendered: Vec<(String, usize)> = segments
        .iter()
        .map(|seg| {
            let mut buf = String::new();
            let w = render_node(seg, callbacks, data, flags, UNBOUNDED_COLS, &mut buf);
            (buf, w)
        })
        .collect();

    let total_content: usize = rendered.iter().map(|(_, w)| *w).sum();
    let mut pad_widths = vec![0usize; pads.len()];
    let eol_indices: Vec<usize> = pads
        .iter()
        .enumerate()
        .filter(|(_, (kind, _))| *kind == PaddingKind::Eol)
        .map(|(i, _)| i)
        .collect();

    if !eol_indices.is_empty() {
        let fill_budget = budget.saturating_sub(total_content);
        let share = fill_budget / eol_indices.len();
        let remainder = fill_budget % eol_indices.len();
        for (position, &idx) in eol_indices.iter().enumerate() {
            pad_widths[idx] = share + if position + 1 == eol_indices.len() { remainder } else { 0 };
        }
    } else if !pads.is_empty() {
        let slack = budget as i64 - total_content as i64;
        if slack >= 0 {
            let slack = slack as usize;
            let share = slack / pads.len();
            let remainder = slack % pads.len();
            for (i, width) in pad_widths.iter_mut().enumerate() {
                *width = share + if i + 1 == pads.len() { remainder } else { 0 };
            }
        } else if pads.iter().any(|(kind, _)| *kind == PaddingKind::Hard) {
            let mut over = (-slack) as usize;
            for (text, width) in rendered.iter_mut() {
                if over == 0 {
                    break;
                }
                let cut = over.min(*width);
                let (slice, new_width) = truncate_to_width(text, *width - cut);
                over -= *width - new_width;
                *text = slice.to_string();
                *width = new_width;
            }
        }
        // Soft padding that is still over budget after this point leaves
        // its siblings at natural width; the final truncate_to_width below
        // still enforces the overall column budget.
    }

    let mut composed = String::new();
    for (i, (text, _width)) in rendered.iter().enumerate() {
        composed.push_str(text);
        if let Some(&(_, fill_char)) = pads.get(i) {
            for _ in 0..pad_widths[i] {
                composed.push(fill_char);
            }
        }
    }

    let (slice, width) = truncate_to_width(&composed, budget);
    out.push_str(slice);
    width
}
