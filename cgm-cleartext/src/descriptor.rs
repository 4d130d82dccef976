// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statements of the class 1 metafile descriptor elements.
//!
//! The binary precision declarations have no direct clear-text counterpart;
//! Part 4 states them as value extents. Each precision statement therefore
//! prints the extent representable at the declared width, with the width
//! itself in a trailing comment.

use std::io::{self, Write};

use cgm_core::options::{CodecOptions, VdcMode};
use cgm_core::state::{CharacterCodingAnnouncer, ColourModel, RealPrecision, VdcType};
use cgm_core::types::{CharacterSetType, ElementReference, Point};

use crate::fmt;
use crate::writer::{ClearTextWriter, DESCRIPTOR};

/// The extent fields of a real precision statement: minimum, maximum,
/// significant digits, and the width named in the comment.
pub(crate) fn real_extent(precision: RealPrecision) -> (&'static str, &'static str, u8, u8) {
    match precision {
        RealPrecision::Fixed32 => ("-32768.0000", "32767.0000", 4, 16),
        RealPrecision::Fixed64 => ("-2147483648.0000", "2147483647.0000", 9, 32),
        RealPrecision::Floating32 => ("-511.0000", "511.0000", 7, 10),
        RealPrecision::Floating64 => ("-511.0000", "511.0000", 15, 10),
    }
}

/// Writes the `<min>, <max> % n binary bits %` run shared by the integer
/// precision statements.
pub(crate) fn signed_extent_words<W: Write>(
    w: &mut ClearTextWriter<W>,
    bits: u8,
) -> io::Result<()> {
    let (min, max) = fmt::signed_extent(bits);
    w.word(&format!("{},", min))?;
    w.word(&max.to_string())?;
    w.word(&fmt::bits_comment(bits))
}

/// Writes the real precision extent run shared by REALPREC and VDCREALPREC.
pub(crate) fn real_extent_words<W: Write>(
    w: &mut ClearTextWriter<W>,
    precision: RealPrecision,
) -> io::Result<()> {
    let (min, max, digits, bits) = real_extent(precision);
    w.word(&format!("{},", min))?;
    w.word(&format!("{},", max))?;
    w.word(&digits.to_string())?;
    w.word(&fmt::bits_comment(bits))
}

pub(crate) fn mfversion<W: Write>(w: &mut ClearTextWriter<W>, version: i32) -> io::Result<()> {
    w.begin(DESCRIPTOR, "mfversion")?;
    w.word(&version.to_string())?;
    w.end()
}

pub(crate) fn mfdesc<W: Write>(w: &mut ClearTextWriter<W>, description: &str) -> io::Result<()> {
    w.begin(DESCRIPTOR, "mfdesc")?;
    w.word(&fmt::quoted(description))?;
    w.end()
}

pub(crate) fn vdctype<W: Write>(
    w: &mut ClearTextWriter<W>,
    vdc_type: VdcType,
    opts: &CodecOptions,
) -> io::Result<()> {
    let emitted = match opts.vdc_mode {
        VdcMode::ForceRealVdcOnEmit => VdcType::Real,
        VdcMode::PreserveVdcType => vdc_type,
    };

    w.begin(DESCRIPTOR, "vdctype")?;
    w.word(&emitted.to_string())?;
    w.end()
}

pub(crate) fn integerprec<W: Write>(w: &mut ClearTextWriter<W>, bits: u8) -> io::Result<()> {
    w.begin(DESCRIPTOR, "integerprec")?;
    signed_extent_words(w, bits)?;
    w.end()
}

pub(crate) fn realprec<W: Write>(
    w: &mut ClearTextWriter<W>,
    precision: RealPrecision,
) -> io::Result<()> {
    w.begin(DESCRIPTOR, "realprec")?;
    real_extent_words(w, precision)?;
    w.end()
}

pub(crate) fn indexprec<W: Write>(w: &mut ClearTextWriter<W>, bits: u8) -> io::Result<()> {
    w.begin(DESCRIPTOR, "indexprec")?;
    signed_extent_words(w, bits)?;
    w.end()
}

pub(crate) fn colrprec<W: Write>(w: &mut ClearTextWriter<W>, bits: u8) -> io::Result<()> {
    w.begin(DESCRIPTOR, "colrprec")?;
    w.word(&fmt::unsigned_max(bits).to_string())?;
    w.end()
}

pub(crate) fn colrindexprec<W: Write>(w: &mut ClearTextWriter<W>, bits: u8) -> io::Result<()> {
    // The colour index extent is stated as a signed maximum.
    let (_, max) = fmt::signed_extent(bits);

    w.begin(DESCRIPTOR, "colrindexprec")?;
    w.word(&max.to_string())?;
    w.end()
}

pub(crate) fn maxcolrindex<W: Write>(w: &mut ClearTextWriter<W>, index: u32) -> io::Result<()> {
    w.begin(DESCRIPTOR, "maxcolrindex")?;
    w.word(&index.to_string())?;
    w.end()
}

pub(crate) fn colrvalueext<W: Write>(
    w: &mut ClearTextWriter<W>,
    min: &[u32; 3],
    max: &[u32; 3],
) -> io::Result<()> {
    w.begin(DESCRIPTOR, "colrvalueext")?;
    w.word(&min[0].to_string())?;
    w.word(&min[1].to_string())?;
    w.word(&format!("{},", min[2]))?;
    w.word(&max[0].to_string())?;
    w.word(&max[1].to_string())?;
    w.word(&max[2].to_string())?;
    w.end()
}

pub(crate) fn mfelemlist<W: Write>(
    w: &mut ClearTextWriter<W>,
    elements: &[ElementReference],
) -> io::Result<()> {
    let list =
        elements.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(" ");

    w.begin(DESCRIPTOR, "mfelemlist")?;
    w.word(&fmt::quoted(&list))?;
    w.end()
}

pub(crate) fn fontlist<W: Write>(w: &mut ClearTextWriter<W>, fonts: &[String]) -> io::Result<()> {
    w.begin(DESCRIPTOR, "fontlist")?;

    for (i, font) in fonts.iter().enumerate() {
        let token = fmt::quoted(font);
        if i + 1 < fonts.len() {
            w.word(&format!("{},", token))?;
        }
        else {
            w.word(&token)?;
        }
    }

    w.end()
}

pub(crate) fn charsetlist<W: Write>(
    w: &mut ClearTextWriter<W>,
    sets: &[(CharacterSetType, String)],
) -> io::Result<()> {
    w.begin(DESCRIPTOR, "charsetlist")?;

    for (set_type, designation) in sets {
        w.word(&set_type.to_string())?;
        w.word(&fmt::quoted(designation))?;
    }

    w.end()
}

pub(crate) fn charcoding<W: Write>(
    w: &mut ClearTextWriter<W>,
    announcer: CharacterCodingAnnouncer,
) -> io::Result<()> {
    w.begin(DESCRIPTOR, "charcoding")?;
    w.word(&announcer.to_string())?;
    w.end()
}

pub(crate) fn nameprec<W: Write>(w: &mut ClearTextWriter<W>, bits: u8) -> io::Result<()> {
    w.begin(DESCRIPTOR, "nameprec")?;
    signed_extent_words(w, bits)?;
    w.end()
}

pub(crate) fn maxvdcext<W: Write>(
    w: &mut ClearTextWriter<W>,
    first: &Point,
    second: &Point,
) -> io::Result<()> {
    // One of the two uppercase exceptions among the lowercase statements.
    w.begin(DESCRIPTOR, "MAXVDCEXT")?;
    w.word(&fmt::point(first))?;
    w.word(&fmt::point(second))?;
    w.end()
}

pub(crate) fn colrmodel<W: Write>(
    w: &mut ClearTextWriter<W>,
    model: ColourModel,
) -> io::Result<()> {
    w.begin(DESCRIPTOR, "colrmodel")?;
    w.word(&model.to_string())?;
    w.end()
}
