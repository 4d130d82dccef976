// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoders for the class 3 control elements.

use cgm_core::commands::Command;
use cgm_core::errors::{unsupported_error, Result};
use cgm_core::options::CodecOptions;
use cgm_core::state::MetafileState;

use crate::descriptor::real_precision_fields;
use crate::primitives::PrimitiveReader;

fn on_off(value: i16) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => unsupported_error("control: invalid on/off flag"),
    }
}

pub(crate) fn vdc_integer_precision(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let value = {
        let mut r = PrimitiveReader::new(args, state, opts);
        r.read_int()?
    };

    let bits = match value {
        16 | 24 | 32 => value as u8,
        _ => return unsupported_error("control: invalid vdc integer precision"),
    };

    state.vdc_integer_precision = bits;
    Ok(Command::VdcIntegerPrecision { bits })
}

pub(crate) fn vdc_real_precision(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let (form, first, second) = {
        let mut r = PrimitiveReader::new(args, state, opts);
        (r.read_enum()?, r.read_int()?, r.read_int()?)
    };

    let precision = real_precision_fields(form, first, second)?;
    state.vdc_real_precision = precision;
    Ok(Command::VdcRealPrecision { precision })
}

pub(crate) fn transparency(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let on = on_off(r.read_enum()?)?;
    Ok(Command::Transparency { on })
}

pub(crate) fn clip_indicator(
    args: &[u8],
    state: &mut MetafileState,
    opts: &CodecOptions,
) -> Result<Command> {
    let mut r = PrimitiveReader::new(args, state, opts);
    let on = on_off(r.read_enum()?)?;
    Ok(Command::ClipIndicator { on })
}
