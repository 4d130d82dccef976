// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `options` module defines the codec settings.

/// Treatment of a metafile that declares integer VDCs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VdcMode {
    /// Keep the declared VDC type: emit `vdctype integer` and print integer
    /// coordinates without a fraction.
    PreserveVdcType,
    /// Emit `vdctype real` and carry integer coordinates as reals. Matches
    /// the behaviour of widely deployed interpreters that reject integer
    /// VDCs.
    ForceRealVdcOnEmit,
}

/// `CodecOptions` is the common set of options the decoder and the emitter
/// use.
#[derive(Copy, Clone, Debug)]
pub struct CodecOptions {
    pub vdc_mode: VdcMode,
    /// Column at which clear-text statements soft-wrap. Wrapping happens
    /// only between top-level tokens.
    pub wrap_column: u16,
    /// Emit elements without an emitter as a `% ... %;` comment rather than
    /// dropping them.
    pub emit_unknown_as_comment: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            vdc_mode: VdcMode::ForceRealVdcOnEmit,
            wrap_column: 80,
            emit_unknown_as_comment: true,
        }
    }
}
