// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statements of the escape, external, and application structure descriptor
//! elements (classes 6, 7, and 9).

use std::io::{self, Write};

use cgm_core::types::{MessageAction, Sdr, SdrValue};

use crate::fmt;
use crate::writer::{ClearTextWriter, BODY, DESCRIPTOR};

pub(crate) fn escape<W: Write>(
    w: &mut ClearTextWriter<W>,
    identifier: i32,
    data: &str,
) -> io::Result<()> {
    w.begin(DESCRIPTOR, "escape")?;
    w.word(&format!("{},", identifier))?;
    w.word(&fmt::quoted(data))?;
    w.end()
}

pub(crate) fn message<W: Write>(
    w: &mut ClearTextWriter<W>,
    action: MessageAction,
    text: &str,
) -> io::Result<()> {
    // Uppercase, like MAXVDCEXT.
    w.begin(DESCRIPTOR, "MESSAGE")?;
    w.word(&action.to_string())?;
    w.word(&fmt::quoted(text))?;
    w.end()
}

pub(crate) fn appldata<W: Write>(
    w: &mut ClearTextWriter<W>,
    identifier: i32,
    data: &str,
) -> io::Result<()> {
    w.begin(DESCRIPTOR, "appldata")?;
    w.word(&format!("{},", identifier))?;
    w.word(&fmt::quoted(data))?;
    w.end()
}

pub(crate) fn apsattr<W: Write>(
    w: &mut ClearTextWriter<W>,
    attribute_type: &str,
    record: &Sdr,
) -> io::Result<()> {
    w.begin(BODY, "apsattr")?;
    w.word(&fmt::quoted(attribute_type))?;
    sdr_words(w, record)?;
    w.end()
}

/// Writes a structured data record as a flat token run: each member's type
/// code, value count, and values in order. Nested records are bracketed.
fn sdr_words<W: Write>(w: &mut ClearTextWriter<W>, record: &Sdr) -> io::Result<()> {
    for member in &record.members {
        w.word(&member.data_type.code().to_string())?;
        w.word(&member.values.len().to_string())?;

        for value in &member.values {
            sdr_value_words(w, value)?;
        }
    }

    Ok(())
}

fn sdr_value_words<W: Write>(w: &mut ClearTextWriter<W>, value: &SdrValue) -> io::Result<()> {
    match value {
        SdrValue::Record(record) => {
            w.word("(")?;
            sdr_words(w, record)?;
            w.word(")")
        }
        SdrValue::ColourIndex(v) => w.word(&v.to_string()),
        SdrValue::Colour(v) => w.word(&fmt::colour(v)),
        SdrValue::Name(v) => w.word(&v.to_string()),
        SdrValue::Enumerated(v) => w.word(&v.to_string()),
        SdrValue::Integer(v) => w.word(&v.to_string()),
        SdrValue::Index(v) => w.word(&v.to_string()),
        SdrValue::Real(v) => w.word(&fmt::real(*v)),
        SdrValue::String(v) => w.word(&fmt::quoted(v)),
        SdrValue::Vdc(v) => w.word(&fmt::vdc(v)),
        SdrValue::Unsigned(v) => w.word(&v.to_string()),
    }
}
