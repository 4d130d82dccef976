// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoders for the class 4 graphical primitive elements.

use cgm_core::commands::Command;
use cgm_core::errors::{unsupported_error, Result};
use cgm_core::options::CodecOptions;
use cgm_core::state::MetafileState;
use cgm_core::types::{Point, TextFinality};

use crate::primitives::PrimitiveReader;

fn finality(value: i16) -> Result<TextFinality> {
    match value {
        0 => Ok(TextFinality::NotFinal),
        1 => Ok(TextFinality::Final),
        _ => unsupported_error("graphics: invalid final/not-final flag"),
    }
}

/// Reads points until the argument buffer is exhausted.
fn point_run(r: &mut PrimitiveReader<'_, '_>) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    while !r.is_empty() {
        points.push(r.read_point()?);
    }
    Ok(points)
}

pub(crate) fn polyline(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let points = point_run(&mut r)?;
    Ok(Command::Polyline { points })
}

pub(crate) fn disjoint_polyline(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let points = point_run(&mut r)?;
    Ok(Command::DisjointPolyline { points })
}

pub(crate) fn polygon(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let points = point_run(&mut r)?;
    Ok(Command::Polygon { points })
}

pub(crate) fn text(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let position = r.read_point()?;
    let finality = finality(r.read_enum()?)?;
    let text = r.read_string()?;

    Ok(Command::Text { position, finality, text })
}

pub(crate) fn restricted_text(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let delta_width = r.read_vdc()?;
    let delta_height = r.read_vdc()?;
    let position = r.read_point()?;
    let finality = finality(r.read_enum()?)?;
    let text = r.read_string()?;

    Ok(Command::RestrictedText { delta_width, delta_height, position, finality, text })
}

pub(crate) fn rectangle(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let first = r.read_point()?;
    let second = r.read_point()?;

    Ok(Command::Rectangle { first, second })
}

pub(crate) fn circle(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let centre = r.read_point()?;
    let radius = r.read_vdc()?;

    Ok(Command::Circle { centre, radius })
}

pub(crate) fn circular_arc_centre(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let centre = r.read_point()?;
    let start = (r.read_vdc()?, r.read_vdc()?);
    let end = (r.read_vdc()?, r.read_vdc()?);
    let radius = r.read_vdc()?;

    Ok(Command::CircularArcCentre { centre, start, end, radius })
}

pub(crate) fn ellipse(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let centre = r.read_point()?;
    let first_conjugate = r.read_point()?;
    let second_conjugate = r.read_point()?;

    Ok(Command::Ellipse { centre, first_conjugate, second_conjugate })
}

pub(crate) fn elliptical_arc(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let centre = r.read_point()?;
    let first_conjugate = r.read_point()?;
    let second_conjugate = r.read_point()?;
    let start = (r.read_vdc()?, r.read_vdc()?);
    let end = (r.read_vdc()?, r.read_vdc()?);

    Ok(Command::EllipticalArc { centre, first_conjugate, second_conjugate, start, end })
}

pub(crate) fn polybezier(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let continuity = r.read_index()?;
    let points = point_run(&mut r)?;

    Ok(Command::Polybezier { continuity, points })
}
