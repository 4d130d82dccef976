// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoders for the class 2 picture descriptor elements.

use cgm_core::commands::Command;
use cgm_core::errors::{unsupported_error, Result};
use cgm_core::options::CodecOptions;
use cgm_core::state::{ColourSelectionMode, MetafileState, WidthSpecificationMode};
use cgm_core::types::{HatchStyleIndicator, ScaleMode};

use crate::primitives::PrimitiveReader;

fn width_mode(value: i16) -> Result<WidthSpecificationMode> {
    match value {
        0 => Ok(WidthSpecificationMode::Absolute),
        1 => Ok(WidthSpecificationMode::Scaled),
        2 => Ok(WidthSpecificationMode::Fractional),
        3 => Ok(WidthSpecificationMode::Mm),
        _ => unsupported_error("picture: invalid specification mode"),
    }
}

pub(crate) fn scaling_mode(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let mode = match r.read_enum()? {
        0 => ScaleMode::Abstract,
        1 => ScaleMode::Metric,
        _ => return unsupported_error("picture: invalid scaling mode"),
    };

    // The metric scale factor is floating-point even under a fixed real
    // precision.
    let factor = r.read_floating_real()?;

    Ok(Command::ScalingMode { mode, factor })
}

pub(crate) fn colour_selection_mode(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_enum()?
    };

    let mode = match value {
        0 => ColourSelectionMode::Indexed,
        1 => ColourSelectionMode::Direct,
        _ => return unsupported_error("picture: invalid colour selection mode"),
    };

    state.colour_selection_mode = mode;
    Ok(Command::ColourSelectionMode { mode })
}

pub(crate) fn line_width_specification_mode(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_enum()?
    };

    let mode = width_mode(value)?;
    state.line_width_mode = mode;
    Ok(Command::LineWidthSpecificationMode { mode })
}

pub(crate) fn marker_size_specification_mode(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_enum()?
    };

    let mode = width_mode(value)?;
    state.marker_size_mode = mode;
    Ok(Command::MarkerSizeSpecificationMode { mode })
}

pub(crate) fn edge_width_specification_mode(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_enum()?
    };

    let mode = width_mode(value)?;
    state.edge_width_mode = mode;
    Ok(Command::EdgeWidthSpecificationMode { mode })
}

pub(crate) fn vdc_extent(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let first = r.read_point()?;
    let second = r.read_point()?;

    Ok(Command::VdcExtent { first, second })
}

pub(crate) fn background_colour(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let colour = r.read_direct_colour()?;
    Ok(Command::BackgroundColour { colour })
}

pub(crate) fn hatch_style_definition(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let index = r.read_index()?;

    let style = match r.read_enum()? {
        0 => HatchStyleIndicator::Parallel,
        1 => HatchStyleIndicator::CrossHatch,
        _ => return unsupported_error("picture: invalid hatch style indicator"),
    };

    let direction = [r.read_vdc()?, r.read_vdc()?, r.read_vdc()?, r.read_vdc()?];
    let duty_cycle_length = r.read_vdc()?;

    let count = r.read_int()?;
    if count < 0 {
        return unsupported_error("picture: negative hatch line count");
    }

    let mut gap_widths = Vec::with_capacity(count as usize);
    for _ in 0..count {
        gap_widths.push(r.read_int()?);
    }

    let mut line_types = Vec::with_capacity(count as usize);
    for _ in 0..count {
        line_types.push(r.read_int()?);
    }

    Ok(Command::HatchStyleDefinition {
        index,
        style,
        direction,
        duty_cycle_length,
        gap_widths,
        line_types,
    })
}

pub(crate) fn geometric_pattern_definition(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let index = r.read_index()?;
    let segment = r.read_name()?;
    let first = r.read_point()?;
    let second = r.read_point()?;

    Ok(Command::GeometricPatternDefinition { index, segment, first, second })
}
