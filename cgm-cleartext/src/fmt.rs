// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Token formatting for the clear-text encoding.

use cgm_core::types::{Colour, Point, VdcValue};

/// Formats a real: four digits after the decimal point, no exponent.
pub(crate) fn real(value: f64) -> String {
    format!("{:.4}", value)
}

/// Formats a VDC. Integer VDCs appear only when the VDC-type override is
/// disabled; they print without a fraction.
pub(crate) fn vdc(value: &VdcValue) -> String {
    match *value {
        VdcValue::Integer(v) => v.to_string(),
        VdcValue::Real(v) => real(v),
    }
}

/// Formats a point as `(x,y)`.
pub(crate) fn point(p: &Point) -> String {
    format!("({},{})", vdc(&p.x), vdc(&p.y))
}

/// Formats a string literal: single-quoted, inner quotes doubled.
pub(crate) fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Formats a colour: the index, or space-separated component values.
pub(crate) fn colour(colour: &Colour) -> String {
    match *colour {
        Colour::Indexed(index) => index.to_string(),
        Colour::Direct(r, g, b) => format!("{} {} {}", r, g, b),
        Colour::DirectCmyk(c, m, y, k) => format!("{} {} {} {}", c, m, y, k),
    }
}

/// The inclusive extent of a signed integer of the given width in bits.
pub(crate) fn signed_extent(bits: u8) -> (i64, i64) {
    let max = (1i64 << (bits - 1)) - 1;
    (-max - 1, max)
}

/// The maximum value of an unsigned integer of the given width in bits.
pub(crate) fn unsigned_max(bits: u8) -> u64 {
    (1u64 << bits) - 1
}

/// The `% n binary bits %` comment of the precision statements, as one
/// unbreakable token.
pub(crate) fn bits_comment(bits: u8) -> String {
    format!("% {} binary bits %", bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reals_have_four_fraction_digits() {
        assert_eq!(real(1.0), "1.0000");
        assert_eq!(real(-0.5), "-0.5000");
        assert_eq!(real(16.0), "16.0000");
    }

    #[test]
    fn quotes_double_inner_quotes() {
        assert_eq!(quoted("it's"), "'it''s'");
    }

    #[test]
    fn signed_extents_cover_the_boundary_widths() {
        assert_eq!(signed_extent(8), (-128, 127));
        assert_eq!(signed_extent(32), (-2147483648, 2147483647));
    }
}
