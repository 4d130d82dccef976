// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Decoder for the CGM binary encoding, ISO/IEC 8632-3.
//!
//! [`BinaryReader`] frames a byte stream into commands, dispatches each to
//! its element decoder, and threads the metafile state (precisions and
//! modes) through the argument parser. Decoding is total: malformed or
//! unrecognized elements become [`Command::Unknown`] with a diagnostic, and
//! only a violated framing invariant halts the stream.

use cgm_core::commands::Command;
use cgm_core::diag::{Diagnostics, Severity};
use cgm_core::options::{CodecOptions, VdcMode};
use cgm_core::state::{MetafileState, VdcType};

use log::debug;

mod attributes;
mod control;
mod delimiter;
mod descriptor;
mod external;
mod factory;
mod frame;
mod graphics;
mod names;
mod picture;
mod primitives;

pub use primitives::PrimitiveReader;

use frame::{Frame, Framer};
use names::element_name;

/// The outer structure of a metafile stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Header,
    MetafileBody,
    PictureDescriptor,
    PictureBody,
    Eof,
}

/// `BinaryReader` decodes one binary metafile stream into commands.
///
/// A reader owns its metafile state exclusively and is used for exactly one
/// stream. Decode multiple streams in parallel with independent readers.
pub struct BinaryReader<'a> {
    framer: Framer<'a>,
    state: MetafileState,
    opts: CodecOptions,
    diags: Diagnostics,
    phase: Phase,
    finished: bool,
}

impl<'a> BinaryReader<'a> {
    pub fn new(buf: &'a [u8], opts: &CodecOptions) -> Self {
        BinaryReader {
            framer: Framer::new(buf),
            state: MetafileState::default(),
            opts: *opts,
            diags: Diagnostics::new(),
            phase: Phase::Header,
            finished: false,
        }
    }

    /// The decode state as mutated by the commands read so far.
    pub fn state(&self) -> &MetafileState {
        &self.state
    }

    /// The diagnostics recorded so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diags
    }

    /// Decodes the next command, or returns `None` once the stream is done.
    ///
    /// The stream is done after END METAFILE, at the end of input, or after a
    /// fatal framing error. Every failure mode short of a framing error
    /// yields a command, so the returned sequence maps the framed sequence
    /// one to one.
    pub fn next_command(&mut self) -> Option<Command> {
        if self.finished {
            return None;
        }

        let frame = match self.framer.next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                if self.phase != Phase::Eof {
                    self.diags.report(
                        Severity::Unsupported,
                        0,
                        2,
                        self.framer.pos(),
                        "stream ended without END METAFILE",
                    );
                }
                self.finished = true;
                return None;
            }
            Err(err) => {
                self.diags.report(
                    Severity::Fatal,
                    0,
                    0,
                    self.framer.pos(),
                    format!("framing failed: {}", err),
                );
                self.finished = true;
                return None;
            }
        };

        let command = self.decode_frame(frame);

        if let Command::EndMetafile = command {
            self.finished = true;

            if self.framer.bytes_available() > 0 {
                self.diags.report(
                    Severity::Unsupported,
                    0,
                    2,
                    self.framer.pos(),
                    format!("{} byte(s) after END METAFILE", self.framer.bytes_available()),
                );
            }
        }

        Some(command)
    }

    /// Decodes the whole stream, returning the command list and the
    /// accumulated diagnostics.
    pub fn read_all(mut self) -> (Vec<Command>, Diagnostics) {
        let mut commands = Vec::new();
        while let Some(command) = self.next_command() {
            commands.push(command);
        }
        (commands, self.diags)
    }

    fn decode_frame(&mut self, frame: Frame) -> Command {
        debug!(
            "command: class={}, id={}, args={} byte(s) at offset {}",
            frame.class,
            frame.id,
            frame.args.len(),
            frame.offset
        );

        self.track_phase(&frame);

        match factory::decode_command(frame.class, frame.id, &frame.args, &mut self.state, &self.opts)
        {
            Ok(Some(command)) => {
                self.note_compatibility(&command, &frame);
                command
            }
            Ok(None) => {
                let message = match element_name(frame.class, frame.id) {
                    Some(name) => format!("{}: no decoder", name),
                    None => "element is not assigned by ISO/IEC 8632-3".to_string(),
                };
                self.diags.report(
                    Severity::Unimplemented,
                    frame.class,
                    frame.id,
                    frame.offset,
                    message,
                );
                Command::Unknown { class: frame.class, id: frame.id, args: frame.args }
            }
            Err(err) => {
                self.diags.report(
                    Severity::Unsupported,
                    frame.class,
                    frame.id,
                    frame.offset,
                    format!("arguments not decodable: {}", err),
                );
                Command::Unknown { class: frame.class, id: frame.id, args: frame.args }
            }
        }
    }

    /// Records the compatibility override when a metafile declares integer
    /// VDCs.
    fn note_compatibility(&mut self, command: &Command, frame: &Frame) {
        if let Command::VdcType { vdc_type: VdcType::Integer } = command {
            if self.opts.vdc_mode == VdcMode::ForceRealVdcOnEmit {
                self.diags.report(
                    Severity::Info,
                    frame.class,
                    frame.id,
                    frame.offset,
                    "integer VDCs will be carried and emitted as reals",
                );
            }
        }
    }

    /// Advances the outer state machine on delimiter elements. Unexpected
    /// transitions are recorded and then honoured; many deployed writers are
    /// loose about picture structure.
    fn track_phase(&mut self, frame: &Frame) {
        if frame.class != 0 {
            return;
        }

        let (expected, next) = match frame.id {
            1 => (Phase::Header, Phase::MetafileBody),
            2 => (Phase::MetafileBody, Phase::Eof),
            3 => (Phase::MetafileBody, Phase::PictureDescriptor),
            4 => (Phase::PictureDescriptor, Phase::PictureBody),
            5 => (Phase::PictureBody, Phase::MetafileBody),
            _ => return,
        };

        if self.phase != expected {
            self.diags.report(
                Severity::Unsupported,
                frame.class,
                frame.id,
                frame.offset,
                format!("unexpected in {:?} state", self.phase),
            );
        }

        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryReader;
    use cgm_core::commands::Command;
    use cgm_core::diag::Severity;
    use cgm_core::options::CodecOptions;
    use cgm_core::types::{Point, VdcValue};

    fn short(class: u8, id: u16, args: &[u8]) -> Vec<u8> {
        let header = (u16::from(class) << 12) | (id << 5) | args.len() as u16;
        let mut out = header.to_be_bytes().to_vec();
        out.extend_from_slice(args);
        if args.len() & 0x1 == 1 {
            out.push(0);
        }
        out
    }

    fn string_arg(text: &[u8]) -> Vec<u8> {
        let mut out = vec![text.len() as u8];
        out.extend_from_slice(text);
        out
    }

    #[test]
    fn decodes_a_minimal_metafile() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&short(0, 1, &string_arg(b"myfile")));
        buf.extend_from_slice(&short(0, 2, &[]));

        let (commands, diags) = BinaryReader::new(&buf, &CodecOptions::default()).read_all();

        assert_eq!(
            commands,
            vec![
                Command::BeginMetafile { name: "myfile".into() },
                Command::EndMetafile,
            ]
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn integer_vdcs_resolve_to_reals() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
        buf.extend_from_slice(&short(1, 4, &16i16.to_be_bytes()));
        buf.extend_from_slice(&short(1, 3, &0i16.to_be_bytes()));
        buf.extend_from_slice(&short(3, 1, &16i16.to_be_bytes()));
        buf.extend_from_slice(&short(4, 1, &[0, 16, 0, 32, 0, 48, 0, 64]));
        buf.extend_from_slice(&short(0, 2, &[]));

        let (commands, diags) = BinaryReader::new(&buf, &CodecOptions::default()).read_all();

        let line = &commands[4];
        assert_eq!(
            *line,
            Command::Polyline {
                points: vec![
                    Point::new(VdcValue::Real(16.0), VdcValue::Real(32.0)),
                    Point::new(VdcValue::Real(48.0), VdcValue::Real(64.0)),
                ],
            }
        );

        // The override is announced once, as an informational diagnostic.
        assert!(diags.iter().any(|d| d.severity == Severity::Info));
    }

    #[test]
    fn unknown_elements_preserve_their_arguments() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
        buf.extend_from_slice(&short(9, 42, &[0xAB, 0xCD]));
        buf.extend_from_slice(&short(0, 2, &[]));

        let (commands, diags) = BinaryReader::new(&buf, &CodecOptions::default()).read_all();

        assert_eq!(
            commands[1],
            Command::Unknown { class: 9, id: 42, args: vec![0xAB, 0xCD] }
        );
        assert!(diags.iter().any(|d| d.severity == Severity::Unimplemented));
    }

    #[test]
    fn truncated_arguments_degrade_to_unknown() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
        // INTEGER PRECISION with a single argument byte; the default
        // precision requires two.
        buf.extend_from_slice(&short(1, 4, &[0x10]));
        buf.extend_from_slice(&short(0, 2, &[]));

        let (commands, diags) = BinaryReader::new(&buf, &CodecOptions::default()).read_all();

        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[1],
            Command::Unknown { class: 1, id: 4, args: vec![0x10] }
        );
        assert!(diags.iter().any(|d| d.severity == Severity::Unsupported));
        assert!(!diags.has_fatal());
    }

    #[test]
    fn trailing_bytes_are_diagnosed_not_fatal() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
        buf.extend_from_slice(&short(0, 2, &[]));
        buf.extend_from_slice(&[0xDE, 0xAD]);

        let (commands, diags) = BinaryReader::new(&buf, &CodecOptions::default()).read_all();

        assert_eq!(commands.len(), 2);
        assert!(diags.iter().any(|d| d.message.contains("after END METAFILE")));
        assert!(!diags.has_fatal());
    }

    #[test]
    fn loose_picture_structure_is_tolerated() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&short(0, 1, &string_arg(b"f")));
        // BEGIN PICTURE BODY without a BEGIN PICTURE.
        buf.extend_from_slice(&short(0, 4, &[]));
        buf.extend_from_slice(&short(0, 5, &[]));
        buf.extend_from_slice(&short(0, 2, &[]));

        let (commands, diags) = BinaryReader::new(&buf, &CodecOptions::default()).read_all();

        assert_eq!(commands.len(), 4);
        assert!(diags.iter().any(|d| d.message.contains("unexpected")));
        assert!(!diags.has_fatal());
    }
}
