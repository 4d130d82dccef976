// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! # CGM
//!
//! A pure Rust codec for the Computer Graphics Metafile format defined by
//! ISO/IEC 8632: it decodes the binary encoding (Part 3) into an in-memory
//! command sequence and serializes that sequence as clear text (Part 4).
//!
//! # Usage
//!
//! 1. Decode a byte slice with [`decode`]. Decoding is total: malformed or
//!    unrecognized elements become `Unknown` commands and every anomaly is
//!    reported through the returned [`Diagnostics`][core::diag::Diagnostics],
//!    never as an error.
//! 2. Inspect or transform the [`Command`][core::commands::Command] list as
//!    needed.
//! 3. Serialize it with [`emit_clear_text`], or do both steps at once with
//!    [`convert`].
//!
//! Behaviour is tuned with [`CodecOptions`][core::options::CodecOptions]:
//! the integer-VDC compatibility override, the soft-wrap column, and the
//! treatment of unknown elements.
//!
//! A codec invocation is synchronous and single-threaded; decode independent
//! streams in parallel by calling into this crate from independent threads.

use std::io;

use cgm_core::commands::Command;
use cgm_core::diag::Diagnostics;
use cgm_core::options::CodecOptions;

pub use cgm_binary::BinaryReader;
pub use cgm_cleartext::ClearTextWriter;
pub use cgm_core as core;

/// Decodes a binary metafile into its command list and diagnostics.
pub fn decode(buf: &[u8], opts: &CodecOptions) -> (Vec<Command>, Diagnostics) {
    BinaryReader::new(buf, opts).read_all()
}

/// Writes the clear-text rendition of a command list to `sink`.
///
/// Only sink errors fail the call; they surface unchanged.
pub fn emit_clear_text<W: io::Write>(
    commands: &[Command],
    sink: W,
    opts: &CodecOptions,
) -> io::Result<Diagnostics> {
    cgm_cleartext::emit_clear_text(commands, sink, opts)
}

/// Decodes a binary metafile and writes its clear-text rendition to `sink`.
pub fn convert<W: io::Write>(
    buf: &[u8],
    sink: W,
    opts: &CodecOptions,
) -> io::Result<Diagnostics> {
    let (commands, mut diags) = decode(buf, opts);
    let mut emit_diags = emit_clear_text(&commands, sink, opts)?;
    diags.append(&mut emit_diags);
    Ok(diags)
}
