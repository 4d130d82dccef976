// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoders for the class 5 attribute elements.

use cgm_core::commands::Command;
use cgm_core::errors::{unsupported_error, Result};
use cgm_core::options::CodecOptions;
use cgm_core::state::{MetafileState, WidthSpecificationMode};
use cgm_core::types::{
    HorizontalAlignment, InteriorStyle, InterpolationStyle, TextPath, TextPrecisionMode,
    VerticalAlignment,
};

use crate::primitives::PrimitiveReader;

/// Reads a width or size value: a VDC under absolute specification, a real
/// otherwise.
fn width(r: &mut PrimitiveReader<'_, '_>, mode: WidthSpecificationMode) -> Result<f64> {
    match mode {
        WidthSpecificationMode::Absolute => Ok(r.read_vdc()?.as_f64()),
        _ => r.read_real(),
    }
}

pub(crate) fn line_type(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let line_type = r.read_index()?;
    Ok(Command::LineType { line_type })
}

pub(crate) fn line_width(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mode = state.line_width_mode;
    let mut r = PrimitiveReader::new(args, state, opts);
    let width = width(&mut r, mode)?;
    Ok(Command::LineWidth { width })
}

pub(crate) fn line_colour(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let colour = r.read_colour()?;
    Ok(Command::LineColour { colour })
}

pub(crate) fn marker_type(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let marker_type = r.read_index()?;
    Ok(Command::MarkerType { marker_type })
}

pub(crate) fn marker_size(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mode = state.marker_size_mode;
    let mut r = PrimitiveReader::new(args, state, opts);
    let size = width(&mut r, mode)?;
    Ok(Command::MarkerSize { size })
}

pub(crate) fn marker_colour(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let colour = r.read_colour()?;
    Ok(Command::MarkerColour { colour })
}

pub(crate) fn text_font_index(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let index = r.read_index()?;
    Ok(Command::TextFontIndex { index })
}

pub(crate) fn text_precision(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let precision = match r.read_enum()? {
        0 => TextPrecisionMode::String,
        1 => TextPrecisionMode::Char,
        2 => TextPrecisionMode::Stroke,
        _ => return unsupported_error("attributes: invalid text precision"),
    };

    Ok(Command::TextPrecision { precision })
}

pub(crate) fn character_expansion_factor(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let factor = r.read_real()?;
    Ok(Command::CharacterExpansionFactor { factor })
}

pub(crate) fn character_spacing(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let spacing = r.read_real()?;
    Ok(Command::CharacterSpacing { spacing })
}

pub(crate) fn text_colour(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let colour = r.read_colour()?;
    Ok(Command::TextColour { colour })
}

pub(crate) fn character_height(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let height = r.read_vdc()?;
    Ok(Command::CharacterHeight { height })
}

pub(crate) fn character_orientation(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let up = (r.read_vdc()?, r.read_vdc()?);
    let base = (r.read_vdc()?, r.read_vdc()?);

    Ok(Command::CharacterOrientation { up, base })
}

pub(crate) fn text_path(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let path = match r.read_enum()? {
        0 => TextPath::Right,
        1 => TextPath::Left,
        2 => TextPath::Up,
        3 => TextPath::Down,
        _ => return unsupported_error("attributes: invalid text path"),
    };

    Ok(Command::TextPath { path })
}

pub(crate) fn text_alignment(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let horizontal = match r.read_enum()? {
        0 => HorizontalAlignment::Normal,
        1 => HorizontalAlignment::Left,
        2 => HorizontalAlignment::Centre,
        3 => HorizontalAlignment::Right,
        4 => HorizontalAlignment::Continuous,
        _ => return unsupported_error("attributes: invalid horizontal alignment"),
    };

    let vertical = match r.read_enum()? {
        0 => VerticalAlignment::Normal,
        1 => VerticalAlignment::Top,
        2 => VerticalAlignment::Cap,
        3 => VerticalAlignment::Half,
        4 => VerticalAlignment::Base,
        5 => VerticalAlignment::Bottom,
        6 => VerticalAlignment::Continuous,
        _ => return unsupported_error("attributes: invalid vertical alignment"),
    };

    let continuous_horizontal = r.read_real()?;
    let continuous_vertical = r.read_real()?;

    Ok(Command::TextAlignment { horizontal, vertical, continuous_horizontal, continuous_vertical })
}

pub(crate) fn character_set_index(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let index = r.read_index()?;
    Ok(Command::CharacterSetIndex { index })
}

pub(crate) fn alternate_character_set_index(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let index = r.read_index()?;
    Ok(Command::AlternateCharacterSetIndex { index })
}

pub(crate) fn interior_style(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let style = match r.read_enum()? {
        0 => InteriorStyle::Hollow,
        1 => InteriorStyle::Solid,
        2 => InteriorStyle::Pattern,
        3 => InteriorStyle::Hatch,
        4 => InteriorStyle::Empty,
        5 => InteriorStyle::GeometricPattern,
        6 => InteriorStyle::Interpolated,
        _ => return unsupported_error("attributes: invalid interior style"),
    };

    Ok(Command::InteriorStyle { style })
}

pub(crate) fn fill_colour(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let colour = r.read_colour()?;
    Ok(Command::FillColour { colour })
}

pub(crate) fn hatch_index(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let index = r.read_index()?;
    Ok(Command::HatchIndex { index })
}

pub(crate) fn pattern_index(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let index = r.read_index()?;
    Ok(Command::PatternIndex { index })
}

pub(crate) fn edge_type(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let edge_type = r.read_index()?;
    Ok(Command::EdgeType { edge_type })
}

pub(crate) fn edge_width(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mode = state.edge_width_mode;
    let mut r = PrimitiveReader::new(args, state, opts);
    let width = width(&mut r, mode)?;
    Ok(Command::EdgeWidth { width })
}

pub(crate) fn edge_colour(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let colour = r.read_colour()?;
    Ok(Command::EdgeColour { colour })
}

pub(crate) fn edge_visibility(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let visible = match r.read_enum()? {
        0 => false,
        1 => true,
        _ => return unsupported_error("attributes: invalid visibility flag"),
    };

    Ok(Command::EdgeVisibility { visible })
}

pub(crate) fn colour_table(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let start_index = r.read_colour_index()?;

    let mut colours = Vec::new();
    while !r.is_empty() {
        colours.push(r.read_direct_colour()?);
    }

    Ok(Command::ColourTable { start_index, colours })
}

pub(crate) fn line_cap(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let line_cap = r.read_index()?;
    let dash_cap = r.read_index()?;

    Ok(Command::LineCap { line_cap, dash_cap })
}

pub(crate) fn line_join(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let join = r.read_index()?;
    Ok(Command::LineJoin { join })
}

pub(crate) fn line_type_continuation(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let mode = r.read_index()?;
    Ok(Command::LineTypeContinuation { mode })
}

pub(crate) fn interpolated_interior(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let style = match r.read_index()? {
        1 => InterpolationStyle::Parallel,
        2 => InterpolationStyle::Elliptical,
        3 => InterpolationStyle::Triangular,
        _ => return unsupported_error("attributes: invalid interpolation style"),
    };

    let geometry_points = match style {
        InterpolationStyle::Parallel => 2,
        _ => 3,
    };

    let mut geometry = Vec::with_capacity(geometry_points);
    for _ in 0..geometry_points {
        geometry.push(r.read_point()?);
    }

    let count = r.read_int()?;
    if count < 0 {
        return unsupported_error("attributes: negative stage count");
    }

    let mut stages = Vec::with_capacity(count as usize);
    for _ in 0..count {
        stages.push(r.read_real()?);
    }

    let mut colours = Vec::with_capacity(count as usize);
    for _ in 0..count {
        colours.push(r.read_colour()?);
    }

    Ok(Command::InterpolatedInterior { style, geometry, stages, colours })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgm_core::state::{MetafileState, WidthSpecificationMode};
    use cgm_core::types::Colour;

    #[test]
    fn line_width_follows_specification_mode() {
        let mut state = MetafileState::default();
        let opts = CodecOptions::default();

        // Scaled mode: a real at the default fixed 32-bit layout.
        let args = [0x00, 0x02, 0x00, 0x00];
        let cmd = line_width(&args, &mut state, &opts).unwrap();
        assert_eq!(cmd, Command::LineWidth { width: 2.0 });

        // Absolute mode: a VDC, here a 16-bit integer.
        state.line_width_mode = WidthSpecificationMode::Absolute;
        let args = [0x00, 0x03];
        let cmd = line_width(&args, &mut state, &opts).unwrap();
        assert_eq!(cmd, Command::LineWidth { width: 3.0 });
    }

    #[test]
    fn colour_table_reads_to_the_end() {
        let mut state = MetafileState::default();
        let opts = CodecOptions::default();

        let args = [0x00, 255, 255, 255, 0, 0, 0];
        let cmd = colour_table(&args, &mut state, &opts).unwrap();

        assert_eq!(
            cmd,
            Command::ColourTable {
                start_index: 0,
                colours: vec![Colour::Direct(255, 255, 255), Colour::Direct(0, 0, 0)],
            }
        );
    }
}
