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

//! The render-time callback table
//!
//! The original design passes the host a parallel, sentinel-terminated array
//! of `{namespace_id, field_id, render_string, render_number}` rows with
//! nullable function pointers. Rust has no need for the sentinel (slices carry
//! their own length) or the null check (a trait method can simply have a
//! default), so the table collapses into a single trait: the host provides
//! one [`ExpandoCallbacks`] implementation that dispatches internally on
//! [`FieldId`], rather than an array of rows the engine searches linearly.

use crate::node::Node;
use crate::render::RenderFlags;
use std::any::Any;

/// Identifies a host data field, matching an [`ExpandoDefinition`](crate::ExpandoDefinition)'s
/// `namespace_id`/`field_id` pair
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FieldId {
    pub namespace_id: i32,
    pub field_id: i32,
}

/// Host-implemented accessors for expando field values
///
/// Both methods default to "no value", so a host whose fields are all
/// [`ValueKind::String`](crate::ValueKind::String) need not implement
/// `render_number`, and vice versa. The renderer never calls a method for a
/// field whose [`ExpandoDefinition::value_kind`](crate::ExpandoDefinition::value_kind)
/// doesn't match it, but a default is provided anyway so partial
/// implementations can't panic.
pub trait ExpandoCallbacks {
    /// Writes the string value of `field` into `out`, returning `true` if a
    /// value was written.
    ///
    /// `node` is the [`Node::Expando`] or [`Node::CondBool`] being rendered,
    /// in case the callback needs its code-specific argument; `data` is the
    /// host's opaque render context.
    #[allow(unused_variables)]
    fn render_string(
        &self,
        field: FieldId,
        node: &Node,
        data: &dyn Any,
        flags: RenderFlags,
        out: &mut String,
    ) -> bool {
        false
    }

    /// Returns the numeric value of `field`, or `None` if it has none.
    #[allow(unused_variables)]
    fn render_number(
        &self,
        field: FieldId,
        node: &Node,
        data: &dyn Any,
        flags: RenderFlags,
    ) -> Option<i64> {
        None
    }
}
