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

//! A width-aware format-string expansion engine.
//!
//! This crate implements the *Expando* domain-specific language used by
//! configurable status lines, index lines, and other bounded-width text: a
//! format string is [parsed](Expando::parse) once into a tree and then
//! [rendered](Expando::render) many times against caller-supplied data.
//!
//! ## Language
//!
//! - `%%` — a literal `%`.
//! - `%[flags][width][.precision]CODE` — a reference to a host-defined data
//!   field, with optional justification, width and precision. See
//!   [`FormatSpec`](node::FormatSpec).
//! - `%<TEST?TRUE&FALSE>` — a nestable conditional. `&FALSE` is optional.
//! - `%?TEST?TRUE&FALSE?` — the legacy, non-nesting conditional.
//! - `%>X`, `%|X`, `%*X` — soft, hard and end-of-row padding with fill glyph
//!   `X`. See the [`repad`] module for how these are turned into structural
//!   [`Node::Padding`](node::Node) nodes.
//!
//! ## Parsing
//!
//! [`Expando::parse`] compiles a format string into an immutable [`Expando`]
//! given a table of [`ExpandoDefinition`](definition::ExpandoDefinition)s that
//! name the recognised codes. The definition table is the only thing that
//! varies between hosts; the grammar itself is frozen.
//!
//! ## Rendering
//!
//! [`Expando::render`] walks the tree, invoking a host-supplied
//! [`ExpandoCallbacks`](callback::ExpandoCallbacks) implementation to obtain
//! the value of each referenced field, and writes the result into a `String`
//! without ever exceeding the caller's column budget. Column accounting is in
//! terminal cells (via [`unicode_width`]), not bytes.
//!
//! This crate does not evaluate arithmetic, does not loop, and does not
//! escape its output for any target. It is a pure, synchronous, allocation-
//! only library: parsing and rendering never block or suspend.

pub mod callback;
pub mod definition;
pub mod error;
pub mod expando;
pub mod node;
pub mod parser;
pub mod render;
pub mod repad;
mod width;

pub use callback::ExpandoCallbacks;
pub use definition::{CustomParser, ExpandoDefinition, ValueKind};
pub use error::{ParseError, SyntaxError};
pub use expando::Expando;
pub use node::{FormatSpec, Justify, Node, Slot};
pub use render::RenderFlags;
