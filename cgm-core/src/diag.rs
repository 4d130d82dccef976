// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `diag` module defines the severity-tagged diagnostic channel filled
//! while decoding or emitting a metafile.

use std::fmt;

use log::{error, info, warn};

/// The severity of a [`Diagnostic`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Expected compatibility behaviour, e.g. the VDC-type override.
    Info,
    /// A command argument uses a precision or mode the decoder cannot
    /// interpret. The command is preserved as `Unknown`.
    Unsupported,
    /// A recognized element has no decoder or emitter. The command is
    /// preserved as `Unknown`.
    Unimplemented,
    /// A framing invariant was violated. Decoding halts at the offending
    /// byte; previously decoded commands are preserved.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Severity::Info => f.write_str("info"),
            Severity::Unsupported => f.write_str("unsupported"),
            Severity::Unimplemented => f.write_str("unimplemented"),
            Severity::Fatal => f.write_str("fatal"),
        }
    }
}

/// A single diagnostic message tied to a command position in the stream.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The element class code of the command being processed.
    pub class: u8,
    /// The element id of the command being processed.
    pub id: u16,
    /// Byte offset of the command header within the input stream.
    pub byte_offset: u64,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (class={}, id={}, offset={}): {}",
            self.severity, self.class, self.id, self.byte_offset, self.message
        )
    }
}

/// `Diagnostics` accumulates the messages produced while processing one
/// stream. Every push is mirrored to the `log` facade.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { items: Vec::new() }
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diag: Diagnostic) {
        match diag.severity {
            Severity::Info => info!("{}", diag),
            Severity::Unsupported | Severity::Unimplemented => warn!("{}", diag),
            Severity::Fatal => error!("{}", diag),
        }
        self.items.push(diag);
    }

    /// Record a diagnostic assembled from its parts.
    pub fn report(
        &mut self,
        severity: Severity,
        class: u8,
        id: u16,
        byte_offset: u64,
        message: impl Into<String>,
    ) {
        self.push(Diagnostic { severity, class, id, byte_offset, message: message.into() });
    }

    /// Returns true if any recorded diagnostic is fatal.
    pub fn has_fatal(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Fatal)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Append all diagnostics of `other`, leaving it empty.
    pub fn append(&mut self, other: &mut Diagnostics) {
        self.items.append(&mut other.items);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
