// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoders for the class 0 delimiter elements.

use cgm_core::commands::Command;
use cgm_core::errors::{unsupported_error, Result};
use cgm_core::options::CodecOptions;
use cgm_core::state::MetafileState;
use cgm_core::types::InheritanceFlag;

use crate::primitives::PrimitiveReader;

pub(crate) fn begin_metafile(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let name = r.read_string()?;
    Ok(Command::BeginMetafile { name })
}

pub(crate) fn begin_picture(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let name = r.read_string()?;
    Ok(Command::BeginPicture { name })
}

pub(crate) fn begin_application_structure(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);

    let identifier = r.read_string()?;
    let kind = r.read_string()?;

    let inheritance = match r.read_enum()? {
        0 => InheritanceFlag::StateList,
        1 => InheritanceFlag::ApplicationStructure,
        _ => return unsupported_error("delimiter: invalid inheritance flag"),
    };

    Ok(Command::BeginApplicationStructure { identifier, kind, inheritance })
}
