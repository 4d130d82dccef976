// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoders for the escape, external, and application structure descriptor
//! elements (classes 6, 7, and 9).

use cgm_core::commands::Command;
use cgm_core::errors::{unsupported_error, Result};
use cgm_core::options::CodecOptions;
use cgm_core::state::MetafileState;
use cgm_core::types::MessageAction;

use crate::primitives::PrimitiveReader;

pub(crate) fn escape(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let identifier = r.read_int()?;
    let data = r.read_string()?;

    Ok(Command::Escape { identifier, data })
}

pub(crate) fn message(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let action = match r.read_enum()? {
        0 => MessageAction::NoAction,
        1 => MessageAction::Action,
        _ => return unsupported_error("external: invalid action flag"),
    };

    let text = r.read_string()?;

    Ok(Command::Message { action, text })
}

pub(crate) fn application_data(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let identifier = r.read_int()?;
    let data = r.read_string()?;

    Ok(Command::ApplicationData { identifier, data })
}

pub(crate) fn application_structure_attribute(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let attribute_type = r.read_string()?;
    let record = r.read_sdr()?;

    Ok(Command::ApplicationStructureAttribute { attribute_type, record })
}
