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

//! Terminal-cell width accounting
//!
//! The renderer's column budget is in visible terminal cells, not bytes and
//! not `char`s: a wide CJK character occupies two cells. `unicode-width`
//! provides the `wcwidth`-equivalent table this crate's C ancestor relied on.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// The column width of a full string.
#[must_use]
pub fn str_width(s: &str) -> usize {
    s.width()
}

/// The column width of a single character (0 for combining marks, 2 for wide
/// glyphs, 1 otherwise).
#[must_use]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncates `s` to at most `max_cols` columns, never splitting a multi-byte
/// sequence and never leaving a half-width cell (a wide character that would
/// only half fit is dropped entirely rather than emitted).
///
/// Returns the truncated slice and the column width it occupies.
#[must_use]
pub fn truncate_to_width(s: &str, max_cols: usize) -> (&str, usize) {
    if str_width(s) <= max_cols {
        return (s, str_width(s));
    }
    let mut used = 0;
    let mut end = 0;
    for (idx, ch) in s.char_indices() {
        let w = char_width(ch);
        if used + w > max_cols {
            return (&s[..end], used);
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    (&s[..end], used)
}
