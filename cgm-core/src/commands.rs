// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `commands` module defines the decoded command model.
//!
//! Every metafile element the codec understands is one variant of
//! [`Command`], carrying its decoded parameters. Elements without a decoder
//! are preserved verbatim in [`Command::Unknown`]. Commands are produced by
//! the binary decoder, never mutated, and consumed by the clear-text emitter.

use crate::state::{
    CharacterCodingAnnouncer, ColourModel, ColourSelectionMode, RealPrecision, VdcType,
    WidthSpecificationMode,
};
use crate::types::{
    CharacterSetType, Colour, ElementReference, HatchStyleIndicator, HorizontalAlignment,
    InheritanceFlag, InteriorStyle, InterpolationStyle, MessageAction, Point, ScaleMode, Sdr,
    TextFinality, TextPath, TextPrecisionMode, VdcValue, VerticalAlignment,
};

/// The ten element classes of ISO/IEC 8632-3 Table 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementClass {
    Delimiter = 0,
    MetafileDescriptor = 1,
    PictureDescriptor = 2,
    Control = 3,
    GraphicalPrimitive = 4,
    Attribute = 5,
    Escape = 6,
    External = 7,
    Segment = 8,
    ApplicationStructure = 9,
}

impl ElementClass {
    /// Maps a 4-bit class code to its class. Codes 10 to 15 are reserved.
    pub fn from_code(code: u8) -> Option<ElementClass> {
        match code {
            0 => Some(ElementClass::Delimiter),
            1 => Some(ElementClass::MetafileDescriptor),
            2 => Some(ElementClass::PictureDescriptor),
            3 => Some(ElementClass::Control),
            4 => Some(ElementClass::GraphicalPrimitive),
            5 => Some(ElementClass::Attribute),
            6 => Some(ElementClass::Escape),
            7 => Some(ElementClass::External),
            8 => Some(ElementClass::Segment),
            9 => Some(ElementClass::ApplicationStructure),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// A decoded metafile command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    // Class 0: delimiter elements.
    NoOp,
    BeginMetafile {
        name: String,
    },
    EndMetafile,
    BeginPicture {
        name: String,
    },
    BeginPictureBody,
    EndPicture,
    BeginFigure,
    EndFigure,
    BeginApplicationStructure {
        identifier: String,
        kind: String,
        inheritance: InheritanceFlag,
    },
    BeginApplicationStructureBody,
    EndApplicationStructure,

    // Class 1: metafile descriptor elements.
    MetafileVersion {
        version: i32,
    },
    MetafileDescription {
        description: String,
    },
    VdcType {
        vdc_type: VdcType,
    },
    IntegerPrecision {
        bits: u8,
    },
    RealPrecision {
        precision: RealPrecision,
    },
    IndexPrecision {
        bits: u8,
    },
    ColourPrecision {
        bits: u8,
    },
    ColourIndexPrecision {
        bits: u8,
    },
    MaximumColourIndex {
        index: u32,
    },
    ColourValueExtent {
        min: [u32; 3],
        max: [u32; 3],
    },
    MetafileElementList {
        elements: Vec<ElementReference>,
    },
    FontList {
        fonts: Vec<String>,
    },
    CharacterSetList {
        sets: Vec<(CharacterSetType, String)>,
    },
    CharacterCodingAnnouncer {
        announcer: CharacterCodingAnnouncer,
    },
    NamePrecision {
        bits: u8,
    },
    MaximumVdcExtent {
        first: Point,
        second: Point,
    },
    ColourModel {
        model: ColourModel,
    },

    // Class 2: picture descriptor elements.
    ScalingMode {
        mode: ScaleMode,
        factor: f64,
    },
    ColourSelectionMode {
        mode: ColourSelectionMode,
    },
    LineWidthSpecificationMode {
        mode: WidthSpecificationMode,
    },
    MarkerSizeSpecificationMode {
        mode: WidthSpecificationMode,
    },
    EdgeWidthSpecificationMode {
        mode: WidthSpecificationMode,
    },
    VdcExtent {
        first: Point,
        second: Point,
    },
    BackgroundColour {
        colour: Colour,
    },
    HatchStyleDefinition {
        index: i32,
        style: HatchStyleIndicator,
        direction: [VdcValue; 4],
        duty_cycle_length: VdcValue,
        gap_widths: Vec<i32>,
        line_types: Vec<i32>,
    },
    GeometricPatternDefinition {
        index: i32,
        segment: i32,
        first: Point,
        second: Point,
    },

    // Class 3: control elements.
    VdcIntegerPrecision {
        bits: u8,
    },
    VdcRealPrecision {
        precision: RealPrecision,
    },
    Transparency {
        on: bool,
    },
    ClipIndicator {
        on: bool,
    },

    // Class 4: graphical primitive elements.
    Polyline {
        points: Vec<Point>,
    },
    DisjointPolyline {
        points: Vec<Point>,
    },
    Text {
        position: Point,
        finality: TextFinality,
        text: String,
    },
    RestrictedText {
        delta_width: VdcValue,
        delta_height: VdcValue,
        position: Point,
        finality: TextFinality,
        text: String,
    },
    Polygon {
        points: Vec<Point>,
    },
    Rectangle {
        first: Point,
        second: Point,
    },
    Circle {
        centre: Point,
        radius: VdcValue,
    },
    CircularArcCentre {
        centre: Point,
        start: (VdcValue, VdcValue),
        end: (VdcValue, VdcValue),
        radius: VdcValue,
    },
    Ellipse {
        centre: Point,
        first_conjugate: Point,
        second_conjugate: Point,
    },
    EllipticalArc {
        centre: Point,
        first_conjugate: Point,
        second_conjugate: Point,
        start: (VdcValue, VdcValue),
        end: (VdcValue, VdcValue),
    },
    Polybezier {
        continuity: i32,
        points: Vec<Point>,
    },

    // Class 5: attribute elements.
    LineType {
        line_type: i32,
    },
    LineWidth {
        width: f64,
    },
    LineColour {
        colour: Colour,
    },
    MarkerType {
        marker_type: i32,
    },
    MarkerSize {
        size: f64,
    },
    MarkerColour {
        colour: Colour,
    },
    TextFontIndex {
        index: i32,
    },
    TextPrecision {
        precision: TextPrecisionMode,
    },
    CharacterExpansionFactor {
        factor: f64,
    },
    CharacterSpacing {
        spacing: f64,
    },
    TextColour {
        colour: Colour,
    },
    CharacterHeight {
        height: VdcValue,
    },
    CharacterOrientation {
        up: (VdcValue, VdcValue),
        base: (VdcValue, VdcValue),
    },
    TextPath {
        path: TextPath,
    },
    TextAlignment {
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
        continuous_horizontal: f64,
        continuous_vertical: f64,
    },
    CharacterSetIndex {
        index: i32,
    },
    AlternateCharacterSetIndex {
        index: i32,
    },
    InteriorStyle {
        style: InteriorStyle,
    },
    FillColour {
        colour: Colour,
    },
    HatchIndex {
        index: i32,
    },
    PatternIndex {
        index: i32,
    },
    EdgeType {
        edge_type: i32,
    },
    EdgeWidth {
        width: f64,
    },
    EdgeColour {
        colour: Colour,
    },
    EdgeVisibility {
        visible: bool,
    },
    ColourTable {
        start_index: u32,
        colours: Vec<Colour>,
    },
    LineCap {
        line_cap: i32,
        dash_cap: i32,
    },
    LineJoin {
        join: i32,
    },
    LineTypeContinuation {
        mode: i32,
    },
    InterpolatedInterior {
        style: InterpolationStyle,
        geometry: Vec<Point>,
        stages: Vec<f64>,
        colours: Vec<Colour>,
    },

    // Class 6: escape elements.
    Escape {
        identifier: i32,
        data: String,
    },

    // Class 7: external elements.
    Message {
        action: MessageAction,
        text: String,
    },
    ApplicationData {
        identifier: i32,
        data: String,
    },

    // Class 9: application structure descriptor elements.
    ApplicationStructureAttribute {
        attribute_type: String,
        record: Sdr,
    },

    /// An element without a decoder. The argument bytes are preserved
    /// verbatim.
    Unknown {
        class: u8,
        id: u16,
        args: Vec<u8>,
    },
}

impl Command {
    /// The `(class code, element id)` pair identifying this command in the
    /// binary encoding.
    pub fn element(&self) -> (u8, u16) {
        match *self {
            Command::NoOp => (0, 0),
            Command::BeginMetafile { .. } => (0, 1),
            Command::EndMetafile => (0, 2),
            Command::BeginPicture { .. } => (0, 3),
            Command::BeginPictureBody => (0, 4),
            Command::EndPicture => (0, 5),
            Command::BeginFigure => (0, 8),
            Command::EndFigure => (0, 9),
            Command::BeginApplicationStructure { .. } => (0, 21),
            Command::BeginApplicationStructureBody => (0, 22),
            Command::EndApplicationStructure => (0, 23),

            Command::MetafileVersion { .. } => (1, 1),
            Command::MetafileDescription { .. } => (1, 2),
            Command::VdcType { .. } => (1, 3),
            Command::IntegerPrecision { .. } => (1, 4),
            Command::RealPrecision { .. } => (1, 5),
            Command::IndexPrecision { .. } => (1, 6),
            Command::ColourPrecision { .. } => (1, 7),
            Command::ColourIndexPrecision { .. } => (1, 8),
            Command::MaximumColourIndex { .. } => (1, 9),
            Command::ColourValueExtent { .. } => (1, 10),
            Command::MetafileElementList { .. } => (1, 11),
            Command::FontList { .. } => (1, 13),
            Command::CharacterSetList { .. } => (1, 14),
            Command::CharacterCodingAnnouncer { .. } => (1, 15),
            Command::NamePrecision { .. } => (1, 16),
            Command::MaximumVdcExtent { .. } => (1, 17),
            Command::ColourModel { .. } => (1, 19),

            Command::ScalingMode { .. } => (2, 1),
            Command::ColourSelectionMode { .. } => (2, 2),
            Command::LineWidthSpecificationMode { .. } => (2, 3),
            Command::MarkerSizeSpecificationMode { .. } => (2, 4),
            Command::EdgeWidthSpecificationMode { .. } => (2, 5),
            Command::VdcExtent { .. } => (2, 6),
            Command::BackgroundColour { .. } => (2, 7),
            Command::HatchStyleDefinition { .. } => (2, 18),
            Command::GeometricPatternDefinition { .. } => (2, 19),

            Command::VdcIntegerPrecision { .. } => (3, 1),
            Command::VdcRealPrecision { .. } => (3, 2),
            Command::Transparency { .. } => (3, 4),
            Command::ClipIndicator { .. } => (3, 6),

            Command::Polyline { .. } => (4, 1),
            Command::DisjointPolyline { .. } => (4, 2),
            Command::Text { .. } => (4, 4),
            Command::RestrictedText { .. } => (4, 5),
            Command::Polygon { .. } => (4, 7),
            Command::Rectangle { .. } => (4, 11),
            Command::Circle { .. } => (4, 12),
            Command::CircularArcCentre { .. } => (4, 15),
            Command::Ellipse { .. } => (4, 17),
            Command::EllipticalArc { .. } => (4, 18),
            Command::Polybezier { .. } => (4, 26),

            Command::LineType { .. } => (5, 2),
            Command::LineWidth { .. } => (5, 3),
            Command::LineColour { .. } => (5, 4),
            Command::MarkerType { .. } => (5, 6),
            Command::MarkerSize { .. } => (5, 7),
            Command::MarkerColour { .. } => (5, 8),
            Command::TextFontIndex { .. } => (5, 10),
            Command::TextPrecision { .. } => (5, 11),
            Command::CharacterExpansionFactor { .. } => (5, 12),
            Command::CharacterSpacing { .. } => (5, 13),
            Command::TextColour { .. } => (5, 14),
            Command::CharacterHeight { .. } => (5, 15),
            Command::CharacterOrientation { .. } => (5, 16),
            Command::TextPath { .. } => (5, 17),
            Command::TextAlignment { .. } => (5, 18),
            Command::CharacterSetIndex { .. } => (5, 19),
            Command::AlternateCharacterSetIndex { .. } => (5, 20),
            Command::InteriorStyle { .. } => (5, 22),
            Command::FillColour { .. } => (5, 23),
            Command::HatchIndex { .. } => (5, 24),
            Command::PatternIndex { .. } => (5, 25),
            Command::EdgeType { .. } => (5, 27),
            Command::EdgeWidth { .. } => (5, 28),
            Command::EdgeColour { .. } => (5, 29),
            Command::EdgeVisibility { .. } => (5, 30),
            Command::ColourTable { .. } => (5, 34),
            Command::LineCap { .. } => (5, 37),
            Command::LineJoin { .. } => (5, 38),
            Command::LineTypeContinuation { .. } => (5, 39),
            Command::InterpolatedInterior { .. } => (5, 43),

            Command::Escape { .. } => (6, 1),

            Command::Message { .. } => (7, 1),
            Command::ApplicationData { .. } => (7, 2),

            Command::ApplicationStructureAttribute { .. } => (9, 1),

            Command::Unknown { class, id, .. } => (class, id),
        }
    }

    /// The element class of this command, when the class code is not
    /// reserved.
    pub fn class(&self) -> Option<ElementClass> {
        ElementClass::from_code(self.element().0)
    }
}
