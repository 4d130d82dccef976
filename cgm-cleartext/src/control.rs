// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statements of the class 3 control elements.

use std::io::{self, Write};

use cgm_core::state::RealPrecision;

use crate::descriptor::{real_extent_words, signed_extent_words};
use crate::writer::{ClearTextWriter, BODY};

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    }
    else {
        "off"
    }
}

pub(crate) fn vdcintegerprec<W: Write>(w: &mut ClearTextWriter<W>, bits: u8) -> io::Result<()> {
    w.begin(BODY, "vdcintegerprec")?;
    signed_extent_words(w, bits)?;
    w.end()
}

pub(crate) fn vdcrealprec<W: Write>(
    w: &mut ClearTextWriter<W>,
    precision: RealPrecision,
) -> io::Result<()> {
    w.begin(BODY, "vdcrealprec")?;
    real_extent_words(w, precision)?;
    w.end()
}

pub(crate) fn transparency<W: Write>(w: &mut ClearTextWriter<W>, on: bool) -> io::Result<()> {
    w.begin(BODY, "transparency")?;
    w.word(on_off(on))?;
    w.end()
}

pub(crate) fn clip<W: Write>(w: &mut ClearTextWriter<W>, on: bool) -> io::Result<()> {
    w.begin(BODY, "clip")?;
    w.word(on_off(on))?;
    w.end()
}
