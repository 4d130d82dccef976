// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoders for the class 1 metafile descriptor elements.
//!
//! The precision elements write their parsed value back into the metafile
//! state before returning; this is the only path that mutates the state.

use cgm_core::commands::Command;
use cgm_core::errors::{unsupported_error, Result};
use cgm_core::options::CodecOptions;
use cgm_core::state::{
    CharacterCodingAnnouncer, ColourModel, ColourValueExtent, MetafileState, RealPrecision,
    VdcType,
};
use cgm_core::types::{CharacterSetType, ElementReference};

use crate::primitives::PrimitiveReader;

/// Validates a precision width of 8, 16, 24, or 32 bits.
fn precision_bits(value: i32) -> Result<u8> {
    match value {
        8 | 16 | 24 | 32 => Ok(value as u8),
        _ => unsupported_error("descriptor: invalid precision width"),
    }
}

/// Decodes the three-field REAL PRECISION parameter set into a layout.
pub(crate) fn real_precision_fields(form: i16, first: i32, second: i32) -> Result<RealPrecision> {
    match (form, first, second) {
        (0, 9, 23) => Ok(RealPrecision::Floating32),
        (0, 12, 52) => Ok(RealPrecision::Floating64),
        (1, 16, 16) => Ok(RealPrecision::Fixed32),
        (1, 32, 32) => Ok(RealPrecision::Fixed64),
        _ => unsupported_error("descriptor: unrecognized real precision layout"),
    }
}

pub(crate) fn metafile_version(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let version = r.read_int()?;
    Ok(Command::MetafileVersion { version })
}

pub(crate) fn metafile_description(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let description = r.read_string()?;
    Ok(Command::MetafileDescription { description })
}

pub(crate) fn vdc_type(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_enum()?
    };

    let vdc_type = match value {
        0 => VdcType::Integer,
        1 => VdcType::Real,
        _ => return unsupported_error("descriptor: invalid vdc type"),
    };

    state.vdc_type = vdc_type;
    Ok(Command::VdcType { vdc_type })
}

pub(crate) fn integer_precision(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_int()?
    };

    let bits = precision_bits(value)?;
    state.integer_precision = bits;
    Ok(Command::IntegerPrecision { bits })
}

pub(crate) fn real_precision(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let (form, first, second) = {
        let mut r = PrimitiveReader::new(args, state, opts);
        (r.read_enum()?, r.read_int()?, r.read_int()?)
    };

    let precision = real_precision_fields(form, first, second)?;
    state.real_precision = precision;
    Ok(Command::RealPrecision { precision })
}

pub(crate) fn index_precision(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_int()?
    };

    let bits = precision_bits(value)?;
    state.index_precision = bits;
    Ok(Command::IndexPrecision { bits })
}

pub(crate) fn colour_precision(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_int()?
    };

    let bits = precision_bits(value)?;
    state.colour_precision = bits;
    Ok(Command::ColourPrecision { bits })
}

pub(crate) fn colour_index_precision(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_int()?
    };

    let bits = precision_bits(value)?;
    state.colour_index_precision = bits;
    Ok(Command::ColourIndexPrecision { bits })
}

pub(crate) fn maximum_colour_index(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let index = r.read_colour_index()?;
    Ok(Command::MaximumColourIndex { index })
}

pub(crate) fn colour_value_extent(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    match state.colour_model {
        ColourModel::Rgb | ColourModel::RgbRelated => {}
        // CIE extents are real-valued and CMYK has none.
        _ => return unsupported_error("descriptor: colour value extent for a non-RGB model"),
    }

    let (min, max) = {
        let mut r = PrimitiveReader::new(args, state, opts);

        let min = [
            r.read_colour_component()?,
            r.read_colour_component()?,
            r.read_colour_component()?,
        ];
        let max = [
            r.read_colour_component()?,
            r.read_colour_component()?,
            r.read_colour_component()?,
        ];

        (min, max)
    };

    state.colour_value_extent = ColourValueExtent { min, max };
    Ok(Command::ColourValueExtent { min, max })
}

pub(crate) fn metafile_element_list(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let count = r.read_int()?;
    if count < 0 {
        return unsupported_error("descriptor: negative element list count");
    }

    let mut elements = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let class = r.read_index()?;
        let id = r.read_index()?;

        let element = match (class, id) {
            (-1, 0) => ElementReference::DrawingSet,
            (-1, 1) => ElementReference::DrawingPlus,
            (-1, 2) => ElementReference::Version2,
            (-1, 3) => ElementReference::ExtendedPrimitives,
            (-1, 4) => ElementReference::Version2Gksm,
            (-1, 5) => ElementReference::Version3,
            (-1, 6) => ElementReference::Version4,
            _ => ElementReference::Element(class as i16, id as i16),
        };

        elements.push(element);
    }

    Ok(Command::MetafileElementList { elements })
}

pub(crate) fn font_list(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let mut fonts = Vec::new();
    while !r.is_empty() {
        fonts.push(r.read_string()?);
    }

    Ok(Command::FontList { fonts })
}

pub(crate) fn character_set_list(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let mut sets = Vec::new();
    while !r.is_empty() {
        let set_type = match r.read_enum()? {
            0 => CharacterSetType::Std94,
            1 => CharacterSetType::Std96,
            2 => CharacterSetType::Std94Multibyte,
            3 => CharacterSetType::Std96Multibyte,
            4 => CharacterSetType::CompleteCode,
            _ => return unsupported_error("descriptor: invalid character set type"),
        };

        sets.push((set_type, r.read_string()?));
    }

    Ok(Command::CharacterSetList { sets })
}

pub(crate) fn character_coding_announcer(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_enum()?
    };

    let announcer = match value {
        0 => CharacterCodingAnnouncer::Basic7Bit,
        1 => CharacterCodingAnnouncer::Basic8Bit,
        2 => CharacterCodingAnnouncer::Extended7Bit,
        3 => CharacterCodingAnnouncer::Extended8Bit,
        _ => return unsupported_error("descriptor: invalid coding announcer"),
    };

    state.character_coding_announcer = announcer;
    Ok(Command::CharacterCodingAnnouncer { announcer })
}

pub(crate) fn name_precision(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_int()?
    };

    let bits = precision_bits(value)?;
    state.name_precision = bits;
    Ok(Command::NamePrecision { bits })
}

pub(crate) fn maximum_vdc_extent(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let first = r.read_point()?;
    let second = r.read_point()?;

    Ok(Command::MaximumVdcExtent { first, second })
}

pub(crate) fn colour_model(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_index()?
    };

    let model = match value {
        1 => ColourModel::Rgb,
        2 => ColourModel::CieLab,
        3 => ColourModel::CieLuv,
        4 => ColourModel::Cmyk,
        5 => ColourModel::RgbRelated,
        _ => return unsupported_error("descriptor: invalid colour model"),
    };

    state.colour_model = model;
    Ok(Command::ColourModel { model })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgm_core::state::MetafileState;

    #[test]
    fn integer_precision_updates_state() {
        let mut state = MetafileState::default();
        let opts = CodecOptions::default();

        let cmd = integer_precision(&32i16.to_be_bytes(), &mut state, &opts).unwrap();
        assert_eq!(cmd, Command::IntegerPrecision { bits: 32 });
        assert_eq!(state.integer_precision, 32);

        // Subsequent integers read at the new width.
        let cmd = metafile_version(&3i32.to_be_bytes(), &mut state, &opts).unwrap();
        assert_eq!(cmd, Command::MetafileVersion { version: 3 });
    }

    #[test]
    fn rejects_an_unrepresentable_precision() {
        let mut state = MetafileState::default();
        let opts = CodecOptions::default();

        assert!(integer_precision(&12i16.to_be_bytes(), &mut state, &opts).is_err());
        assert_eq!(state.integer_precision, 16);
    }

    #[test]
    fn real_precision_selects_layout() {
        let mut state = MetafileState::default();
        let opts = CodecOptions::default();

        let mut args = Vec::new();
        args.extend_from_slice(&0i16.to_be_bytes());
        args.extend_from_slice(&9i16.to_be_bytes());
        args.extend_from_slice(&23i16.to_be_bytes());

        let cmd = real_precision(&args, &mut state, &opts).unwrap();
        assert_eq!(cmd, Command::RealPrecision { precision: RealPrecision::Floating32 });
        assert_eq!(state.real_precision, RealPrecision::Floating32);
    }

    #[test]
    fn element_list_maps_named_sets() {
        let mut state = MetafileState::default();
        let opts = CodecOptions::default();

        let mut args = Vec::new();
        args.extend_from_slice(&2i16.to_be_bytes());
        args.extend_from_slice(&(-1i16).to_be_bytes());
        args.extend_from_slice(&1i16.to_be_bytes());
        args.extend_from_slice(&0i16.to_be_bytes());
        args.extend_from_slice(&4i16.to_be_bytes());

        let cmd = metafile_element_list(&args, &mut state, &opts).unwrap();
        assert_eq!(
            cmd,
            Command::MetafileElementList {
                elements: vec![
                    ElementReference::DrawingPlus,
                    ElementReference::Element(0, 4),
                ],
            }
        );
    }
}
