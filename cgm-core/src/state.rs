// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `state` module defines the evolving per-stream decode context.
//!
//! Precision and mode commands mutate the state as they are decoded; every
//! later read of an integer, real, index, colour, or VDC consults it. The
//! state is never shared between streams.

use std::fmt;

/// Layout of a real value in the binary encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RealPrecision {
    /// 16-bit signed whole part and 16-bit unsigned fraction.
    Fixed32,
    /// 32-bit signed whole part and 32-bit unsigned fraction.
    Fixed64,
    /// IEEE-754 single precision, big-endian.
    Floating32,
    /// IEEE-754 double precision, big-endian.
    Floating64,
}

/// The declared type of virtual device coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VdcType {
    Integer,
    Real,
}

impl fmt::Display for VdcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            VdcType::Integer => f.write_str("integer"),
            VdcType::Real => f.write_str("real"),
        }
    }
}

/// Colour model declared by the COLOUR MODEL element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColourModel {
    Rgb,
    CieLab,
    CieLuv,
    Cmyk,
    RgbRelated,
}

impl ColourModel {
    /// Number of components of a direct colour under this model.
    pub fn components(&self) -> usize {
        match *self {
            ColourModel::Cmyk => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for ColourModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ColourModel::Rgb => f.write_str("rgb"),
            ColourModel::CieLab => f.write_str("cielab"),
            ColourModel::CieLuv => f.write_str("cieluv"),
            ColourModel::Cmyk => f.write_str("cmyk"),
            ColourModel::RgbRelated => f.write_str("rgbrelated"),
        }
    }
}

/// Whether colours are specified by index or directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColourSelectionMode {
    Indexed,
    Direct,
}

impl fmt::Display for ColourSelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ColourSelectionMode::Indexed => f.write_str("indexed"),
            ColourSelectionMode::Direct => f.write_str("direct"),
        }
    }
}

/// Character coding announcer of the CHARACTER CODING ANNOUNCER element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharacterCodingAnnouncer {
    Basic7Bit,
    Basic8Bit,
    Extended7Bit,
    Extended8Bit,
}

impl fmt::Display for CharacterCodingAnnouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CharacterCodingAnnouncer::Basic7Bit => f.write_str("basic7bit"),
            CharacterCodingAnnouncer::Basic8Bit => f.write_str("basic8bit"),
            CharacterCodingAnnouncer::Extended7Bit => f.write_str("extd7bit"),
            CharacterCodingAnnouncer::Extended8Bit => f.write_str("extd8bit"),
        }
    }
}

/// How a width or size attribute is specified, set by the LINE WIDTH, MARKER
/// SIZE, and EDGE WIDTH specification mode elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WidthSpecificationMode {
    /// The value is a VDC.
    Absolute,
    /// The value is a real scale factor.
    Scaled,
    Fractional,
    Mm,
}

impl fmt::Display for WidthSpecificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            WidthSpecificationMode::Absolute => f.write_str("abs"),
            WidthSpecificationMode::Scaled => f.write_str("scaled"),
            WidthSpecificationMode::Fractional => f.write_str("fractional"),
            WidthSpecificationMode::Mm => f.write_str("mm"),
        }
    }
}

/// Minimum and maximum direct colour component values declared by COLOUR
/// VALUE EXTENT.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColourValueExtent {
    pub min: [u32; 3],
    pub max: [u32; 3],
}

/// The evolving decode context of one metafile stream.
///
/// Mutated only by the decoders of the precision and mode commands; read by
/// every subsequent argument parse. Defaults are those of ISO/IEC 8632-1
/// clause 8.
#[derive(Clone, Debug)]
pub struct MetafileState {
    /// Width of a signed integer, in bits: 8, 16, 24, or 32.
    pub integer_precision: u8,
    pub real_precision: RealPrecision,
    /// Width of an index, in bits.
    pub index_precision: u8,
    /// Width of a direct colour component, in bits.
    pub colour_precision: u8,
    /// Width of a colour index, in bits.
    pub colour_index_precision: u8,
    pub vdc_type: VdcType,
    /// Width of an integer VDC, in bits: 16, 24, or 32.
    pub vdc_integer_precision: u8,
    pub vdc_real_precision: RealPrecision,
    pub colour_model: ColourModel,
    pub colour_selection_mode: ColourSelectionMode,
    pub colour_value_extent: ColourValueExtent,
    /// Width of a name, in bits.
    pub name_precision: u8,
    pub character_coding_announcer: CharacterCodingAnnouncer,
    pub line_width_mode: WidthSpecificationMode,
    pub marker_size_mode: WidthSpecificationMode,
    pub edge_width_mode: WidthSpecificationMode,
}

impl Default for MetafileState {
    fn default() -> Self {
        MetafileState {
            integer_precision: 16,
            real_precision: RealPrecision::Fixed32,
            index_precision: 16,
            colour_precision: 8,
            colour_index_precision: 8,
            vdc_type: VdcType::Integer,
            vdc_integer_precision: 16,
            vdc_real_precision: RealPrecision::Fixed32,
            colour_model: ColourModel::Rgb,
            colour_selection_mode: ColourSelectionMode::Indexed,
            colour_value_extent: ColourValueExtent {
                min: [0, 0, 0],
                max: [255, 255, 255],
            },
            name_precision: 16,
            character_coding_announcer: CharacterCodingAnnouncer::Basic7Bit,
            line_width_mode: WidthSpecificationMode::Scaled,
            marker_size_mode: WidthSpecificationMode::Scaled,
            edge_width_mode: WidthSpecificationMode::Scaled,
        }
    }
}
