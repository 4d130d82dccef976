// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Emitter for the CGM clear-text encoding, ISO/IEC 8632-4.
//!
//! [`emit_clear_text`] maps a decoded command list to clear-text statements,
//! strictly in list order. Statement case and indentation follow the element
//! class; numbers, strings, and points follow the Part 4 lexical rules; long
//! statements soft-wrap between tokens. Emission never fails beyond sink
//! errors, which surface unchanged.

use std::io::{self, Write};

use cgm_core::commands::Command;
use cgm_core::diag::{Diagnostics, Severity};
use cgm_core::options::CodecOptions;

mod attributes;
mod control;
mod delimiter;
mod descriptor;
mod external;
mod fmt;
mod graphics;
mod picture;
mod writer;

pub use writer::ClearTextWriter;

/// Writes the clear-text rendition of `commands` to `sink`.
pub fn emit_clear_text<W: Write>(
    commands: &[Command],
    sink: W,
    opts: &CodecOptions,
) -> io::Result<Diagnostics> {
    let mut w = ClearTextWriter::new(sink, opts.wrap_column);
    let mut diags = Diagnostics::new();

    for command in commands {
        emit_command(&mut w, command, opts, &mut diags)?;
    }

    Ok(diags)
}

fn emit_command<W: Write>(
    w: &mut ClearTextWriter<W>,
    command: &Command,
    opts: &CodecOptions,
    diags: &mut Diagnostics,
) -> io::Result<()> {
    match command {
        // Part 4 has no no-op statement.
        Command::NoOp => Ok(()),
        Command::BeginMetafile { name } => delimiter::begmf(w, name),
        Command::EndMetafile => delimiter::endmf(w),
        Command::BeginPicture { name } => delimiter::begpic(w, name),
        Command::BeginPictureBody => delimiter::begpicbody(w),
        Command::EndPicture => delimiter::endpic(w),
        Command::BeginFigure => delimiter::begfigure(w),
        Command::EndFigure => delimiter::endfigure(w),
        Command::BeginApplicationStructure { identifier, kind, inheritance } => {
            delimiter::begaps(w, identifier, kind, *inheritance)
        }
        Command::BeginApplicationStructureBody => delimiter::begapsbody(w),
        Command::EndApplicationStructure => delimiter::endaps(w),

        Command::MetafileVersion { version } => descriptor::mfversion(w, *version),
        Command::MetafileDescription { description } => descriptor::mfdesc(w, description),
        Command::VdcType { vdc_type } => descriptor::vdctype(w, *vdc_type, opts),
        Command::IntegerPrecision { bits } => descriptor::integerprec(w, *bits),
        Command::RealPrecision { precision } => descriptor::realprec(w, *precision),
        Command::IndexPrecision { bits } => descriptor::indexprec(w, *bits),
        Command::ColourPrecision { bits } => descriptor::colrprec(w, *bits),
        Command::ColourIndexPrecision { bits } => descriptor::colrindexprec(w, *bits),
        Command::MaximumColourIndex { index } => descriptor::maxcolrindex(w, *index),
        Command::ColourValueExtent { min, max } => descriptor::colrvalueext(w, min, max),
        Command::MetafileElementList { elements } => descriptor::mfelemlist(w, elements),
        Command::FontList { fonts } => descriptor::fontlist(w, fonts),
        Command::CharacterSetList { sets } => descriptor::charsetlist(w, sets),
        Command::CharacterCodingAnnouncer { announcer } => descriptor::charcoding(w, *announcer),
        Command::NamePrecision { bits } => descriptor::nameprec(w, *bits),
        Command::MaximumVdcExtent { first, second } => descriptor::maxvdcext(w, first, second),
        Command::ColourModel { model } => descriptor::colrmodel(w, *model),

        Command::ScalingMode { mode, factor } => picture::scalemode(w, *mode, *factor),
        Command::ColourSelectionMode { mode } => picture::colrmode(w, *mode),
        Command::LineWidthSpecificationMode { mode } => {
            picture::width_mode(w, "linewidthmode", *mode)
        }
        Command::MarkerSizeSpecificationMode { mode } => {
            picture::width_mode(w, "markersizemode", *mode)
        }
        Command::EdgeWidthSpecificationMode { mode } => {
            picture::width_mode(w, "edgewidthmode", *mode)
        }
        Command::VdcExtent { first, second } => picture::vdcext(w, first, second),
        Command::BackgroundColour { colour } => picture::backcolr(w, colour),
        Command::HatchStyleDefinition {
            index,
            style,
            direction,
            duty_cycle_length,
            gap_widths,
            line_types,
        } => picture::hatchstyledef(
            w,
            *index,
            *style,
            direction,
            duty_cycle_length,
            gap_widths,
            line_types,
        ),
        Command::GeometricPatternDefinition { index, segment, first, second } => {
            picture::geopatdef(w, *index, *segment, first, second)
        }

        Command::VdcIntegerPrecision { bits } => control::vdcintegerprec(w, *bits),
        Command::VdcRealPrecision { precision } => control::vdcrealprec(w, *precision),
        Command::Transparency { on } => control::transparency(w, *on),
        Command::ClipIndicator { on } => control::clip(w, *on),

        Command::Polyline { points } => graphics::line(w, points),
        Command::DisjointPolyline { points } => graphics::disjtline(w, points),
        Command::Text { position, finality, text } => graphics::text(w, position, *finality, text),
        Command::RestrictedText { delta_width, delta_height, position, finality, text } => {
            graphics::restrtext(w, delta_width, delta_height, position, *finality, text)
        }
        Command::Polygon { points } => graphics::polygon(w, points),
        Command::Rectangle { first, second } => graphics::rect(w, first, second),
        Command::Circle { centre, radius } => graphics::circle(w, centre, radius),
        Command::CircularArcCentre { centre, start, end, radius } => {
            graphics::arcctr(w, centre, start, end, radius)
        }
        Command::Ellipse { centre, first_conjugate, second_conjugate } => {
            graphics::ellipse(w, centre, first_conjugate, second_conjugate)
        }
        Command::EllipticalArc { centre, first_conjugate, second_conjugate, start, end } => {
            graphics::elliparc(w, centre, first_conjugate, second_conjugate, start, end)
        }
        Command::Polybezier { continuity, points } => {
            graphics::polybezier(w, *continuity, points)
        }

        Command::LineType { line_type } => attributes::index(w, "linetype", *line_type),
        Command::LineWidth { width } => attributes::real(w, "linewidth", *width),
        Command::LineColour { colour } => attributes::colour(w, "linecolr", colour),
        Command::MarkerType { marker_type } => attributes::index(w, "markertype", *marker_type),
        Command::MarkerSize { size } => attributes::real(w, "markersize", *size),
        Command::MarkerColour { colour } => attributes::colour(w, "markercolr", colour),
        Command::TextFontIndex { index } => attributes::index(w, "textfontindex", *index),
        Command::TextPrecision { precision } => attributes::textprec(w, *precision),
        Command::CharacterExpansionFactor { factor } => attributes::real(w, "charexpan", *factor),
        Command::CharacterSpacing { spacing } => attributes::real(w, "charspace", *spacing),
        Command::TextColour { colour } => attributes::colour(w, "textcolr", colour),
        Command::CharacterHeight { height } => attributes::charheight(w, height),
        Command::CharacterOrientation { up, base } => attributes::charori(w, up, base),
        Command::TextPath { path } => attributes::textpath(w, *path),
        Command::TextAlignment {
            horizontal,
            vertical,
            continuous_horizontal,
            continuous_vertical,
        } => attributes::textalign(
            w,
            *horizontal,
            *vertical,
            *continuous_horizontal,
            *continuous_vertical,
        ),
        Command::CharacterSetIndex { index } => attributes::index(w, "charsetindex", *index),
        Command::AlternateCharacterSetIndex { index } => {
            attributes::index(w, "altcharsetindex", *index)
        }
        Command::InteriorStyle { style } => attributes::intstyle(w, *style),
        Command::FillColour { colour } => attributes::colour(w, "fillcolr", colour),
        Command::HatchIndex { index } => attributes::index(w, "hatchindex", *index),
        Command::PatternIndex { index } => attributes::index(w, "patindex", *index),
        Command::EdgeType { edge_type } => attributes::index(w, "edgetype", *edge_type),
        Command::EdgeWidth { width } => attributes::real(w, "edgewidth", *width),
        Command::EdgeColour { colour } => attributes::colour(w, "edgecolr", colour),
        Command::EdgeVisibility { visible } => attributes::edgevis(w, *visible),
        Command::ColourTable { start_index, colours } => {
            attributes::colrtable(w, *start_index, colours)
        }
        Command::LineCap { line_cap, dash_cap } => attributes::linecap(w, *line_cap, *dash_cap),
        Command::LineJoin { join } => attributes::index(w, "linejoin", *join),
        Command::LineTypeContinuation { mode } => attributes::index(w, "linetypecont", *mode),
        Command::InterpolatedInterior { style, geometry, stages, colours } => {
            attributes::interpint(w, *style, geometry, stages, colours)
        }

        Command::Escape { identifier, data } => external::escape(w, *identifier, data),

        Command::Message { action, text } => external::message(w, *action, text),
        Command::ApplicationData { identifier, data } => {
            external::appldata(w, *identifier, data)
        }

        Command::ApplicationStructureAttribute { attribute_type, record } => {
            external::apsattr(w, attribute_type, record)
        }

        Command::Unknown { class, id, .. } => {
            if opts.emit_unknown_as_comment {
                w.comment(&format!("Unknown command: Class={}, ID={}", class, id))
            }
            else {
                diags.report(Severity::Unsupported, *class, *id, 0, "unknown element skipped");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::emit_clear_text;
    use cgm_core::commands::Command;
    use cgm_core::options::CodecOptions;
    use cgm_core::state::{RealPrecision, VdcType};
    use cgm_core::types::{Colour, ElementReference, Point, VdcValue};

    fn render(commands: &[Command]) -> String {
        let mut out = Vec::new();
        emit_clear_text(commands, &mut out, &CodecOptions::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn statement_case_and_indent_follow_the_class() {
        let text = render(&[
            Command::BeginMetafile { name: "f".into() },
            Command::MetafileVersion { version: 3 },
            Command::ScalingMode { mode: cgm_core::types::ScaleMode::Metric, factor: 1.0 },
            Command::Transparency { on: true },
            Command::LineType { line_type: 1 },
            Command::EndMetafile,
        ]);

        assert_eq!(
            text,
            "BEGMF 'f';\n mfversion 3;\n  scalemode metric, 1.0000;\n  transparency on;\n  linetype 1;\nENDMF;\n"
        );
    }

    #[test]
    fn precision_statements_print_extents() {
        let text = render(&[
            Command::IntegerPrecision { bits: 16 },
            Command::RealPrecision { precision: RealPrecision::Floating32 },
            Command::ColourPrecision { bits: 8 },
            Command::ColourIndexPrecision { bits: 8 },
        ]);

        assert_eq!(
            text,
            " integerprec -32768, 32767 % 16 binary bits %;\n \
             realprec -511.0000, 511.0000, 7 % 10 binary bits %;\n \
             colrprec 255;\n \
             colrindexprec 127;\n"
        );
    }

    #[test]
    fn vdctype_integer_is_emitted_real_by_default() {
        let text = render(&[Command::VdcType { vdc_type: VdcType::Integer }]);
        assert_eq!(text, " vdctype real;\n");

        let mut opts = CodecOptions::default();
        opts.vdc_mode = cgm_core::options::VdcMode::PreserveVdcType;
        let mut out = Vec::new();
        emit_clear_text(&[Command::VdcType { vdc_type: VdcType::Integer }], &mut out, &opts)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), " vdctype integer;\n");
    }

    #[test]
    fn unknown_commands_become_comments() {
        let text = render(&[Command::Unknown { class: 9, id: 42, args: vec![0xAB, 0xCD] }]);
        assert_eq!(text, "% Unknown command: Class=9, ID=42 %;\n");
    }

    #[test]
    fn element_list_prints_named_sets_quoted() {
        let text = render(&[Command::MetafileElementList {
            elements: vec![ElementReference::Version4],
        }]);
        assert_eq!(text, " mfelemlist 'VERSION4';\n");

        let text = render(&[Command::MetafileElementList {
            elements: vec![ElementReference::Element(0, 4)],
        }]);
        assert_eq!(text, " mfelemlist '0 4';\n");
    }

    #[test]
    fn colour_statements_follow_selection_form() {
        let text = render(&[
            Command::LineColour { colour: Colour::Indexed(3) },
            Command::FillColour { colour: Colour::Direct(255, 0, 0) },
            Command::ColourValueExtent { min: [0, 0, 0], max: [255, 255, 255] },
        ]);

        assert_eq!(
            text,
            "  linecolr 3;\n  fillcolr 255 0 0;\n colrvalueext 0 0 0, 255 255 255;\n"
        );
    }

    #[test]
    fn points_print_parenthesized_pairs() {
        let text = render(&[Command::Polyline {
            points: vec![
                Point::new(VdcValue::Real(16.0), VdcValue::Real(32.0)),
                Point::new(VdcValue::Real(48.0), VdcValue::Real(64.0)),
            ],
        }]);

        assert_eq!(text, "  line (16.0000,32.0000) (48.0000,64.0000);\n");
    }
}
