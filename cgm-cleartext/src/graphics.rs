// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statements of the class 4 graphical primitive elements.
//!
//! Point runs print parenthesized `(x,y)` pairs; the fixed-arity geometry
//! statements (circle, arcs, ellipses) and the text positions print bare
//! coordinates.

use std::io::{self, Write};

use cgm_core::types::{Point, TextFinality, VdcValue};

use crate::fmt;
use crate::writer::{ClearTextWriter, BODY};

fn point_run<W: Write>(
    w: &mut ClearTextWriter<W>,
    keyword: &'static str,
    points: &[Point],
) -> io::Result<()> {
    w.begin(BODY, keyword)?;
    for point in points {
        w.word(&fmt::point(point))?;
    }
    w.end()
}

pub(crate) fn line<W: Write>(w: &mut ClearTextWriter<W>, points: &[Point]) -> io::Result<()> {
    point_run(w, "line", points)
}

pub(crate) fn disjtline<W: Write>(w: &mut ClearTextWriter<W>, points: &[Point]) -> io::Result<()> {
    point_run(w, "disjtline", points)
}

pub(crate) fn polygon<W: Write>(w: &mut ClearTextWriter<W>, points: &[Point]) -> io::Result<()> {
    point_run(w, "polygon", points)
}

pub(crate) fn text<W: Write>(
    w: &mut ClearTextWriter<W>,
    position: &Point,
    finality: TextFinality,
    text: &str,
) -> io::Result<()> {
    w.begin(BODY, "text")?;
    w.word(&fmt::vdc(&position.x))?;
    w.word(&fmt::vdc(&position.y))?;
    w.word(&finality.to_string())?;
    w.word(&fmt::quoted(text))?;
    w.end()
}

pub(crate) fn restrtext<W: Write>(
    w: &mut ClearTextWriter<W>,
    delta_width: &VdcValue,
    delta_height: &VdcValue,
    position: &Point,
    finality: TextFinality,
    text: &str,
) -> io::Result<()> {
    w.begin(BODY, "restrtext")?;
    w.word(&fmt::vdc(delta_width))?;
    w.word(&fmt::vdc(delta_height))?;
    w.word(&fmt::vdc(&position.x))?;
    w.word(&fmt::vdc(&position.y))?;
    w.word(&finality.to_string())?;
    w.word(&fmt::quoted(text))?;
    w.end()
}

pub(crate) fn rect<W: Write>(
    w: &mut ClearTextWriter<W>,
    first: &Point,
    second: &Point,
) -> io::Result<()> {
    w.begin(BODY, "rect")?;
    w.word(&fmt::point(first))?;
    w.word(&fmt::point(second))?;
    w.end()
}

pub(crate) fn circle<W: Write>(
    w: &mut ClearTextWriter<W>,
    centre: &Point,
    radius: &VdcValue,
) -> io::Result<()> {
    w.begin(BODY, "circle")?;
    w.word(&fmt::vdc(&centre.x))?;
    w.word(&fmt::vdc(&centre.y))?;
    w.word(&fmt::vdc(radius))?;
    w.end()
}

pub(crate) fn arcctr<W: Write>(
    w: &mut ClearTextWriter<W>,
    centre: &Point,
    start: &(VdcValue, VdcValue),
    end: &(VdcValue, VdcValue),
    radius: &VdcValue,
) -> io::Result<()> {
    w.begin(BODY, "arcctr")?;
    w.word(&fmt::vdc(&centre.x))?;
    w.word(&fmt::vdc(&centre.y))?;
    w.word(&fmt::vdc(&start.0))?;
    w.word(&fmt::vdc(&start.1))?;
    w.word(&fmt::vdc(&end.0))?;
    w.word(&fmt::vdc(&end.1))?;
    w.word(&fmt::vdc(radius))?;
    w.end()
}

pub(crate) fn ellipse<W: Write>(
    w: &mut ClearTextWriter<W>,
    centre: &Point,
    first_conjugate: &Point,
    second_conjugate: &Point,
) -> io::Result<()> {
    w.begin(BODY, "ellipse")?;
    w.word(&fmt::vdc(&centre.x))?;
    w.word(&fmt::vdc(&centre.y))?;
    w.word(&fmt::vdc(&first_conjugate.x))?;
    w.word(&fmt::vdc(&first_conjugate.y))?;
    w.word(&fmt::vdc(&second_conjugate.x))?;
    w.word(&fmt::vdc(&second_conjugate.y))?;
    w.end()
}

pub(crate) fn elliparc<W: Write>(
    w: &mut ClearTextWriter<W>,
    centre: &Point,
    first_conjugate: &Point,
    second_conjugate: &Point,
    start: &(VdcValue, VdcValue),
    end: &(VdcValue, VdcValue),
) -> io::Result<()> {
    w.begin(BODY, "elliparc")?;
    w.word(&fmt::vdc(&centre.x))?;
    w.word(&fmt::vdc(&centre.y))?;
    w.word(&fmt::vdc(&first_conjugate.x))?;
    w.word(&fmt::vdc(&first_conjugate.y))?;
    w.word(&fmt::vdc(&second_conjugate.x))?;
    w.word(&fmt::vdc(&second_conjugate.y))?;
    w.word(&fmt::vdc(&start.0))?;
    w.word(&fmt::vdc(&start.1))?;
    w.word(&fmt::vdc(&end.0))?;
    w.word(&fmt::vdc(&end.1))?;
    w.end()
}

pub(crate) fn polybezier<W: Write>(
    w: &mut ClearTextWriter<W>,
    continuity: i32,
    points: &[Point],
) -> io::Result<()> {
    w.begin(BODY, "polybezier")?;
    w.word(&continuity.to_string())?;
    for point in points {
        w.word(&fmt::point(point))?;
    }
    w.end()
}
