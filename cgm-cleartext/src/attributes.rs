// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statements of the class 5 attribute elements.

use std::io::{self, Write};

use cgm_core::types::{
    Colour, HorizontalAlignment, InteriorStyle, InterpolationStyle, Point, TextPath,
    TextPrecisionMode, VdcValue, VerticalAlignment,
};

use crate::fmt;
use crate::writer::{ClearTextWriter, BODY};

/// A statement of one integer-valued token: the index attributes.
pub(crate) fn index<W: Write>(
    w: &mut ClearTextWriter<W>,
    keyword: &'static str,
    value: i32,
) -> io::Result<()> {
    w.begin(BODY, keyword)?;
    w.word(&value.to_string())?;
    w.end()
}

/// A statement of one real-valued token: the width and factor attributes.
pub(crate) fn real<W: Write>(
    w: &mut ClearTextWriter<W>,
    keyword: &'static str,
    value: f64,
) -> io::Result<()> {
    w.begin(BODY, keyword)?;
    w.word(&fmt::real(value))?;
    w.end()
}

/// A statement of one colour token: the colour attributes.
pub(crate) fn colour<W: Write>(
    w: &mut ClearTextWriter<W>,
    keyword: &'static str,
    value: &Colour,
) -> io::Result<()> {
    w.begin(BODY, keyword)?;
    w.word(&fmt::colour(value))?;
    w.end()
}

pub(crate) fn textprec<W: Write>(
    w: &mut ClearTextWriter<W>,
    precision: TextPrecisionMode,
) -> io::Result<()> {
    w.begin(BODY, "textprec")?;
    w.word(&precision.to_string())?;
    w.end()
}

pub(crate) fn charheight<W: Write>(
    w: &mut ClearTextWriter<W>,
    height: &VdcValue,
) -> io::Result<()> {
    w.begin(BODY, "charheight")?;
    w.word(&fmt::vdc(height))?;
    w.end()
}

pub(crate) fn charori<W: Write>(
    w: &mut ClearTextWriter<W>,
    up: &(VdcValue, VdcValue),
    base: &(VdcValue, VdcValue),
) -> io::Result<()> {
    w.begin(BODY, "charori")?;
    w.word(&fmt::vdc(&up.0))?;
    w.word(&fmt::vdc(&up.1))?;
    w.word(&fmt::vdc(&base.0))?;
    w.word(&fmt::vdc(&base.1))?;
    w.end()
}

pub(crate) fn textpath<W: Write>(w: &mut ClearTextWriter<W>, path: TextPath) -> io::Result<()> {
    w.begin(BODY, "textpath")?;
    w.word(&path.to_string())?;
    w.end()
}

pub(crate) fn textalign<W: Write>(
    w: &mut ClearTextWriter<W>,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
    continuous_horizontal: f64,
    continuous_vertical: f64,
) -> io::Result<()> {
    w.begin(BODY, "textalign")?;
    w.word(&horizontal.to_string())?;
    w.word(&vertical.to_string())?;
    w.word(&fmt::real(continuous_horizontal))?;
    w.word(&fmt::real(continuous_vertical))?;
    w.end()
}

pub(crate) fn intstyle<W: Write>(
    w: &mut ClearTextWriter<W>,
    style: InteriorStyle,
) -> io::Result<()> {
    w.begin(BODY, "intstyle")?;
    w.word(&style.to_string())?;
    w.end()
}

pub(crate) fn edgevis<W: Write>(w: &mut ClearTextWriter<W>, visible: bool) -> io::Result<()> {
    w.begin(BODY, "edgevis")?;
    w.word(if visible { "on" } else { "off" })?;
    w.end()
}

pub(crate) fn colrtable<W: Write>(
    w: &mut ClearTextWriter<W>,
    start_index: u32,
    colours: &[Colour],
) -> io::Result<()> {
    w.begin(BODY, "colrtable")?;
    w.word(&start_index.to_string())?;

    for colour in colours {
        w.word(&fmt::colour(colour))?;
    }

    w.end()
}

pub(crate) fn linecap<W: Write>(
    w: &mut ClearTextWriter<W>,
    line_cap: i32,
    dash_cap: i32,
) -> io::Result<()> {
    w.begin(BODY, "linecap")?;
    w.word(&line_cap.to_string())?;
    w.word(&dash_cap.to_string())?;
    w.end()
}

pub(crate) fn interpint<W: Write>(
    w: &mut ClearTextWriter<W>,
    style: InterpolationStyle,
    geometry: &[Point],
    stages: &[f64],
    colours: &[Colour],
) -> io::Result<()> {
    w.begin(BODY, "interpint")?;
    w.word(&style.to_string())?;

    for point in geometry {
        w.word(&fmt::point(point))?;
    }

    w.word(&stages.len().to_string())?;

    for stage in stages {
        w.word(&fmt::real(*stage))?;
    }

    for colour in colours {
        w.word(&fmt::colour(colour))?;
    }

    w.end()
}
