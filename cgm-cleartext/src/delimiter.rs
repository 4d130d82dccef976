// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statements of the class 0 delimiter elements. Delimiter keywords are
//! uppercase and unindented.

use std::io::{self, Write};

use cgm_core::types::InheritanceFlag;

use crate::fmt;
use crate::writer::{ClearTextWriter, DELIMITER};

pub(crate) fn begmf<W: Write>(w: &mut ClearTextWriter<W>, name: &str) -> io::Result<()> {
    w.begin(DELIMITER, "BEGMF")?;
    w.word(&fmt::quoted(name))?;
    w.end()
}

pub(crate) fn endmf<W: Write>(w: &mut ClearTextWriter<W>) -> io::Result<()> {
    w.begin(DELIMITER, "ENDMF")?;
    w.end()
}

pub(crate) fn begpic<W: Write>(w: &mut ClearTextWriter<W>, name: &str) -> io::Result<()> {
    w.begin(DELIMITER, "BEGPIC")?;
    w.word(&fmt::quoted(name))?;
    w.end()
}

pub(crate) fn begpicbody<W: Write>(w: &mut ClearTextWriter<W>) -> io::Result<()> {
    w.begin(DELIMITER, "BEGPICBODY")?;
    w.end()
}

pub(crate) fn endpic<W: Write>(w: &mut ClearTextWriter<W>) -> io::Result<()> {
    w.begin(DELIMITER, "ENDPIC")?;
    w.end()
}

pub(crate) fn begfigure<W: Write>(w: &mut ClearTextWriter<W>) -> io::Result<()> {
    w.begin(DELIMITER, "BEGFIGURE")?;
    w.end()
}

pub(crate) fn endfigure<W: Write>(w: &mut ClearTextWriter<W>) -> io::Result<()> {
    w.begin(DELIMITER, "ENDFIGURE")?;
    w.end()
}

pub(crate) fn begaps<W: Write>(
    w: &mut ClearTextWriter<W>,
    identifier: &str,
    kind: &str,
    inheritance: InheritanceFlag,
) -> io::Result<()> {
    w.begin(DELIMITER, "BEGAPS")?;
    w.word(&fmt::quoted(identifier))?;
    w.word(&fmt::quoted(kind))?;
    w.word(&inheritance.to_string())?;
    w.end()
}

pub(crate) fn begapsbody<W: Write>(w: &mut ClearTextWriter<W>) -> io::Result<()> {
    w.begin(DELIMITER, "BEGAPSBODY")?;
    w.end()
}

pub(crate) fn endaps<W: Write>(w: &mut ClearTextWriter<W>) -> io::Result<()> {
    w.begin(DELIMITER, "ENDAPS")?;
    w.end()
}
