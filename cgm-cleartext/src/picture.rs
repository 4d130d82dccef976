// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statements of the class 2 picture descriptor elements.

use std::io::{self, Write};

use cgm_core::state::{ColourSelectionMode, WidthSpecificationMode};
use cgm_core::types::{Colour, HatchStyleIndicator, Point, ScaleMode, VdcValue};

use crate::fmt;
use crate::writer::{ClearTextWriter, BODY};

pub(crate) fn scalemode<W: Write>(
    w: &mut ClearTextWriter<W>,
    mode: ScaleMode,
    factor: f64,
) -> io::Result<()> {
    w.begin(BODY, "scalemode")?;
    w.word(&format!("{},", mode))?;
    w.word(&fmt::real(factor))?;
    w.end()
}

pub(crate) fn colrmode<W: Write>(
    w: &mut ClearTextWriter<W>,
    mode: ColourSelectionMode,
) -> io::Result<()> {
    w.begin(BODY, "colrmode")?;
    w.word(&mode.to_string())?;
    w.end()
}

pub(crate) fn width_mode<W: Write>(
    w: &mut ClearTextWriter<W>,
    keyword: &'static str,
    mode: WidthSpecificationMode,
) -> io::Result<()> {
    w.begin(BODY, keyword)?;
    w.word(&mode.to_string())?;
    w.end()
}

pub(crate) fn vdcext<W: Write>(
    w: &mut ClearTextWriter<W>,
    first: &Point,
    second: &Point,
) -> io::Result<()> {
    w.begin(BODY, "vdcext")?;
    w.word(&fmt::point(first))?;
    w.word(&fmt::point(second))?;
    w.end()
}

pub(crate) fn backcolr<W: Write>(w: &mut ClearTextWriter<W>, colour: &Colour) -> io::Result<()> {
    w.begin(BODY, "backcolr")?;
    w.word(&fmt::colour(colour))?;
    w.end()
}

pub(crate) fn hatchstyledef<W: Write>(
    w: &mut ClearTextWriter<W>,
    index: i32,
    style: HatchStyleIndicator,
    direction: &[VdcValue; 4],
    duty_cycle_length: &VdcValue,
    gap_widths: &[i32],
    line_types: &[i32],
) -> io::Result<()> {
    w.begin(BODY, "hatchstyledef")?;
    w.word(&index.to_string())?;
    w.word(&style.to_string())?;

    for value in direction {
        w.word(&fmt::vdc(value))?;
    }

    w.word(&fmt::vdc(duty_cycle_length))?;

    for gap in gap_widths {
        w.word(&gap.to_string())?;
    }

    for line_type in line_types {
        w.word(&line_type.to_string())?;
    }

    w.end()
}

pub(crate) fn geopatdef<W: Write>(
    w: &mut ClearTextWriter<W>,
    index: i32,
    segment: i32,
    first: &Point,
    second: &Point,
) -> io::Result<()> {
    w.begin(BODY, "geopatdef")?;
    w.word(&index.to_string())?;
    w.word(&segment.to_string())?;
    w.word(&fmt::point(first))?;
    w.word(&fmt::point(second))?;
    w.end()
}
