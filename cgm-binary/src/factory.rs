// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Routing of a framed `(class, id)` pair to its element decoder.
//!
//! The element set is closed, so dispatch is a `match` rather than a runtime
//! table. Adding an element means adding a command variant, a decoder here,
//! and an emitter in the clear-text crate.

use cgm_core::commands::Command;
use cgm_core::errors::Result;
use cgm_core::options::CodecOptions;
use cgm_core::state::MetafileState;

use crate::{attributes, control, delimiter, descriptor, external, graphics, picture};

/// Decodes one framed command, or returns `None` when the element has no
/// decoder.
///
/// Decoders of the precision and mode elements update `state` before
/// returning; no other path mutates it.
pub(crate) fn decode_command(
    class: u8,
    id: u16,
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Option<Command>> {
    let command = match (class, id) {
        (0, 0) => Command::NoOp,
        (0, 1) => delimiter::begin_metafile(args, state, opts)?,
        (0, 2) => Command::EndMetafile,
        (0, 3) => delimiter::begin_picture(args, state, opts)?,
        (0, 4) => Command::BeginPictureBody,
        (0, 5) => Command::EndPicture,
        (0, 8) => Command::BeginFigure,
        (0, 9) => Command::EndFigure,
        (0, 21) => delimiter::begin_application_structure(args, state, opts)?,
        (0, 22) => Command::BeginApplicationStructureBody,
        (0, 23) => Command::EndApplicationStructure,

        (1, 1) => descriptor::metafile_version(args, state, opts)?,
        (1, 2) => descriptor::metafile_description(args, state, opts)?,
        (1, 3) => descriptor::vdc_type(args, state, opts)?,
        (1, 4) => descriptor::integer_precision(args, state, opts)?,
        (1, 5) => descriptor::real_precision(args, state, opts)?,
        (1, 6) => descriptor::index_precision(args, state, opts)?,
        (1, 7) => descriptor::colour_precision(args, state, opts)?,
        (1, 8) => descriptor::colour_index_precision(args, state, opts)?,
        (1, 9) => descriptor::maximum_colour_index(args, state, opts)?,
        (1, 10) => descriptor::colour_value_extent(args, state, opts)?,
        (1, 11) => descriptor::metafile_element_list(args, state, opts)?,
        (1, 13) => descriptor::font_list(args, state, opts)?,
        (1, 14) => descriptor::character_set_list(args, state, opts)?,
        (1, 15) => descriptor::character_coding_announcer(args, state, opts)?,
        (1, 16) => descriptor::name_precision(args, state, opts)?,
        (1, 17) => descriptor::maximum_vdc_extent(args, state, opts)?,
        (1, 19) => descriptor::colour_model(args, state, opts)?,

        (2, 1) => picture::scaling_mode(args, state, opts)?,
        (2, 2) => picture::colour_selection_mode(args, state, opts)?,
        (2, 3) => picture::line_width_specification_mode(args, state, opts)?,
        (2, 4) => picture::marker_size_specification_mode(args, state, opts)?,
        (2, 5) => picture::edge_width_specification_mode(args, state, opts)?,
        (2, 6) => picture::vdc_extent(args, state, opts)?,
        (2, 7) => picture::background_colour(args, state, opts)?,
        (2, 18) => picture::hatch_style_definition(args, state, opts)?,
        (2, 19) => picture::geometric_pattern_definition(args, state, opts)?,

        (3, 1) => control::vdc_integer_precision(args, state, opts)?,
        (3, 2) => control::vdc_real_precision(args, state, opts)?,
        (3, 4) => control::transparency(args, state, opts)?,
        (3, 6) => control::clip_indicator(args, state, opts)?,

        (4, 1) => graphics::polyline(args, state, opts)?,
        (4, 2) => graphics::disjoint_polyline(args, state, opts)?,
        (4, 4) => graphics::text(args, state, opts)?,
        (4, 5) => graphics::restricted_text(args, state, opts)?,
        (4, 7) => graphics::polygon(args, state, opts)?,
        (4, 11) => graphics::rectangle(args, state, opts)?,
        (4, 12) => graphics::circle(args, state, opts)?,
        (4, 15) => graphics::circular_arc_centre(args, state, opts)?,
        (4, 17) => graphics::ellipse(args, state, opts)?,
        (4, 18) => graphics::elliptical_arc(args, state, opts)?,
        (4, 26) => graphics::polybezier(args, state, opts)?,

        (5, 2) => attributes::line_type(args, state, opts)?,
        (5, 3) => attributes::line_width(args, state, opts)?,
        (5, 4) => attributes::line_colour(args, state, opts)?,
        (5, 6) => attributes::marker_type(args, state, opts)?,
        (5, 7) => attributes::marker_size(args, state, opts)?,
        (5, 8) => attributes::marker_colour(args, state, opts)?,
        (5, 10) => attributes::text_font_index(args, state, opts)?,
        (5, 11) => attributes::text_precision(args, state, opts)?,
        (5, 12) => attributes::character_expansion_factor(args, state, opts)?,
        (5, 13) => attributes::character_spacing(args, state, opts)?,
        (5, 14) => attributes::text_colour(args, state, opts)?,
        (5, 15) => attributes::character_height(args, state, opts)?,
        (5, 16) => attributes::character_orientation(args, state, opts)?,
        (5, 17) => attributes::text_path(args, state, opts)?,
        (5, 18) => attributes::text_alignment(args, state, opts)?,
        (5, 19) => attributes::character_set_index(args, state, opts)?,
        (5, 20) => attributes::alternate_character_set_index(args, state, opts)?,
        (5, 22) => attributes::interior_style(args, state, opts)?,
        (5, 23) => attributes::fill_colour(args, state, opts)?,
        (5, 24) => attributes::hatch_index(args, state, opts)?,
        (5, 25) => attributes::pattern_index(args, state, opts)?,
        (5, 27) => attributes::edge_type(args, state, opts)?,
        (5, 28) => attributes::edge_width(args, state, opts)?,
        (5, 29) => attributes::edge_colour(args, state, opts)?,
        (5, 30) => attributes::edge_visibility(args, state, opts)?,
        (5, 34) => attributes::colour_table(args, state, opts)?,
        (5, 37) => attributes::line_cap(args, state, opts)?,
        (5, 38) => attributes::line_join(args, state, opts)?,
        (5, 39) => attributes::line_type_continuation(args, state, opts)?,
        (5, 43) => attributes::interpolated_interior(args, state, opts)?,

        (6, 1) => external::escape(args, state, opts)?,

        (7, 1) => external::message(args, state, opts)?,
        (7, 2) => external::application_data(args, state, opts)?,

        (9, 1) => external::application_structure_attribute(args, state, opts)?,

        _ => return Ok(None),
    };

    Ok(Some(command))
}
