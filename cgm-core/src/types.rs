// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `types` module defines the primitive values carried by commands.
//!
//! Enumerated parameters implement [`std::fmt::Display`] with their ISO/IEC
//! 8632-4 keyword, which is what the clear-text emitter prints.

use std::fmt;

/// A virtual device coordinate.
///
/// Under the default VDC-type override the decoder resolves integer VDCs to
/// `Real` at decode time; `Integer` appears only when the override is
/// disabled and the stream declared integer VDCs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VdcValue {
    Integer(i32),
    Real(f64),
}

impl VdcValue {
    /// The coordinate as a real, whatever its declared type.
    pub fn as_f64(&self) -> f64 {
        match *self {
            VdcValue::Integer(v) => f64::from(v),
            VdcValue::Real(v) => v,
        }
    }
}

/// An ordered pair of VDCs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: VdcValue,
    pub y: VdcValue,
}

impl Point {
    pub fn new(x: VdcValue, y: VdcValue) -> Self {
        Point { x, y }
    }
}

/// A colour, either an index into the colour table or a direct value.
///
/// RGB components are held scaled by the declared colour value extent onto
/// the 0 to 255 range the clear text is written in. CMYK components declare
/// no extent and stay raw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Colour {
    Indexed(u32),
    Direct(u32, u32, u32),
    DirectCmyk(u32, u32, u32, u32),
}

/// Scaling mode of a picture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScaleMode {
    Abstract,
    Metric,
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ScaleMode::Abstract => f.write_str("abs"),
            ScaleMode::Metric => f.write_str("metric"),
        }
    }
}

/// Final/not-final flag of the TEXT and RESTRICTED TEXT elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextFinality {
    NotFinal,
    Final,
}

impl fmt::Display for TextFinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TextFinality::NotFinal => f.write_str("notfinal"),
            TextFinality::Final => f.write_str("final"),
        }
    }
}

/// Fidelity with which text is rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextPrecisionMode {
    String,
    Char,
    Stroke,
}

impl fmt::Display for TextPrecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TextPrecisionMode::String => f.write_str("string"),
            TextPrecisionMode::Char => f.write_str("char"),
            TextPrecisionMode::Stroke => f.write_str("stroke"),
        }
    }
}

/// Writing direction of successive characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextPath {
    Right,
    Left,
    Up,
    Down,
}

impl fmt::Display for TextPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TextPath::Right => f.write_str("right"),
            TextPath::Left => f.write_str("left"),
            TextPath::Up => f.write_str("up"),
            TextPath::Down => f.write_str("down"),
        }
    }
}

/// Horizontal text alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Normal,
    Left,
    Centre,
    Right,
    Continuous,
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HorizontalAlignment::Normal => f.write_str("normhoriz"),
            HorizontalAlignment::Left => f.write_str("left"),
            HorizontalAlignment::Centre => f.write_str("ctr"),
            HorizontalAlignment::Right => f.write_str("right"),
            HorizontalAlignment::Continuous => f.write_str("conthoriz"),
        }
    }
}

/// Vertical text alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    Normal,
    Top,
    Cap,
    Half,
    Base,
    Bottom,
    Continuous,
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            VerticalAlignment::Normal => f.write_str("normvert"),
            VerticalAlignment::Top => f.write_str("top"),
            VerticalAlignment::Cap => f.write_str("cap"),
            VerticalAlignment::Half => f.write_str("half"),
            VerticalAlignment::Base => f.write_str("base"),
            VerticalAlignment::Bottom => f.write_str("bottom"),
            VerticalAlignment::Continuous => f.write_str("contvert"),
        }
    }
}

/// Interior style of filled-area primitives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InteriorStyle {
    Hollow,
    Solid,
    Pattern,
    Hatch,
    Empty,
    GeometricPattern,
    Interpolated,
}

impl fmt::Display for InteriorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InteriorStyle::Hollow => f.write_str("hollow"),
            InteriorStyle::Solid => f.write_str("solid"),
            InteriorStyle::Pattern => f.write_str("pat"),
            InteriorStyle::Hatch => f.write_str("hatch"),
            InteriorStyle::Empty => f.write_str("empty"),
            InteriorStyle::GeometricPattern => f.write_str("geopat"),
            InteriorStyle::Interpolated => f.write_str("interp"),
        }
    }
}

/// Character set type of a CHARACTER SET LIST entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharacterSetType {
    Std94,
    Std96,
    Std94Multibyte,
    Std96Multibyte,
    CompleteCode,
}

impl fmt::Display for CharacterSetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CharacterSetType::Std94 => f.write_str("std94"),
            CharacterSetType::Std96 => f.write_str("std96"),
            CharacterSetType::Std94Multibyte => f.write_str("std94multibyte"),
            CharacterSetType::Std96Multibyte => f.write_str("std96multibyte"),
            CharacterSetType::CompleteCode => f.write_str("completecode"),
        }
    }
}

/// Attribute inheritance flag of BEGIN APPLICATION STRUCTURE.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InheritanceFlag {
    StateList,
    ApplicationStructure,
}

impl fmt::Display for InheritanceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InheritanceFlag::StateList => f.write_str("stlist"),
            InheritanceFlag::ApplicationStructure => f.write_str("aps"),
        }
    }
}

/// Action flag of the MESSAGE element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageAction {
    NoAction,
    Action,
}

impl fmt::Display for MessageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MessageAction::NoAction => f.write_str("noaction"),
            MessageAction::Action => f.write_str("action"),
        }
    }
}

/// Style indicator of HATCH STYLE DEFINITION.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HatchStyleIndicator {
    Parallel,
    CrossHatch,
}

impl fmt::Display for HatchStyleIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HatchStyleIndicator::Parallel => f.write_str("parallel"),
            HatchStyleIndicator::CrossHatch => f.write_str("crosshatch"),
        }
    }
}

/// Geometry style of INTERPOLATED INTERIOR.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InterpolationStyle {
    Parallel,
    Elliptical,
    Triangular,
}

impl fmt::Display for InterpolationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InterpolationStyle::Parallel => f.write_str("parallel"),
            InterpolationStyle::Elliptical => f.write_str("elliptical"),
            InterpolationStyle::Triangular => f.write_str("triangular"),
        }
    }
}

/// One entry of METAFILE ELEMENT LIST: a named element set, or a single
/// element given by its (class, id) pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementReference {
    DrawingSet,
    DrawingPlus,
    Version2,
    ExtendedPrimitives,
    Version2Gksm,
    Version3,
    Version4,
    Element(i16, i16),
}

impl fmt::Display for ElementReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ElementReference::DrawingSet => f.write_str("DRAWINGSET"),
            ElementReference::DrawingPlus => f.write_str("DRAWINGPLUS"),
            ElementReference::Version2 => f.write_str("VERSION2"),
            ElementReference::ExtendedPrimitives => f.write_str("EXTDPRIM"),
            ElementReference::Version2Gksm => f.write_str("VERSION2GKSM"),
            ElementReference::Version3 => f.write_str("VERSION3"),
            ElementReference::Version4 => f.write_str("VERSION4"),
            ElementReference::Element(class, id) => write!(f, "{} {}", class, id),
        }
    }
}

/// Data type codes of a structured data record member, per ISO/IEC 8632-3
/// Table 7.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SdrDataType {
    Record = 1,
    ColourIndex = 2,
    ColourDirect = 3,
    Name = 4,
    Enumerated = 5,
    Integer = 6,
    Reserved = 7,
    SignedInt8 = 8,
    SignedInt16 = 9,
    SignedInt32 = 10,
    Index = 11,
    Real = 12,
    String = 13,
    StringFixed = 14,
    Vdc = 15,
    UnsignedInt8 = 16,
    UnsignedInt32 = 17,
    BitStream = 18,
    ColourList = 19,
    UnsignedInt16 = 20,
}

impl SdrDataType {
    pub fn from_code(code: i32) -> Option<SdrDataType> {
        match code {
            1 => Some(SdrDataType::Record),
            2 => Some(SdrDataType::ColourIndex),
            3 => Some(SdrDataType::ColourDirect),
            4 => Some(SdrDataType::Name),
            5 => Some(SdrDataType::Enumerated),
            6 => Some(SdrDataType::Integer),
            7 => Some(SdrDataType::Reserved),
            8 => Some(SdrDataType::SignedInt8),
            9 => Some(SdrDataType::SignedInt16),
            10 => Some(SdrDataType::SignedInt32),
            11 => Some(SdrDataType::Index),
            12 => Some(SdrDataType::Real),
            13 => Some(SdrDataType::String),
            14 => Some(SdrDataType::StringFixed),
            15 => Some(SdrDataType::Vdc),
            16 => Some(SdrDataType::UnsignedInt8),
            17 => Some(SdrDataType::UnsignedInt32),
            18 => Some(SdrDataType::BitStream),
            19 => Some(SdrDataType::ColourList),
            20 => Some(SdrDataType::UnsignedInt16),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }
}

/// One typed value inside a structured data record member.
#[derive(Clone, Debug, PartialEq)]
pub enum SdrValue {
    /// A nested record.
    Record(Sdr),
    ColourIndex(u32),
    Colour(Colour),
    Name(i32),
    Enumerated(i16),
    Integer(i32),
    Index(i32),
    Real(f64),
    String(String),
    Vdc(VdcValue),
    Unsigned(u32),
}

/// One member of a structured data record: a data type, a count, and `count`
/// values of that type.
#[derive(Clone, Debug, PartialEq)]
pub struct SdrMember {
    pub data_type: SdrDataType,
    pub values: Vec<SdrValue>,
}

/// A structured data record: a self-describing nested parameter block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sdr {
    pub members: Vec<SdrMember>,
}
