// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cgm_core::errors::{decode_error, Result};
use cgm_core::io::{BufReader, FiniteStream, ReadBytes};

/// Value of the header length field selecting the long form.
const LONG_FORM: u16 = 31;

/// One framed command: its element identity and reassembled argument bytes.
pub struct Frame {
    pub class: u8,
    pub id: u16,
    pub args: Vec<u8>,
    /// Byte offset of the command header within the input stream.
    pub offset: u64,
}

/// `Framer` splits a binary metafile stream into commands.
///
/// The command header is one big-endian 16-bit word packing
/// `class(4) | id(7) | length(5)`. A length of 31 selects the long form,
/// where the argument data follows in partitions, each introduced by a word
/// packing `continuation(1) | length(15)`. Argument data of odd length is
/// padded to the next word boundary; the pad byte is consumed here and never
/// reaches the argument buffer.
pub struct Framer<'a> {
    reader: BufReader<'a>,
}

impl<'a> Framer<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Framer { reader: BufReader::new(buf) }
    }

    /// Byte offset of the next unread byte.
    pub fn pos(&self) -> u64 {
        self.reader.pos()
    }

    /// Number of bytes left in the stream.
    pub fn bytes_available(&self) -> u64 {
        self.reader.bytes_available()
    }

    /// Frames the next command, or returns `None` at the end of the stream.
    ///
    /// An error indicates a violated framing invariant (a truncated header or
    /// argument run); the caller treats it as fatal.
    pub fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.reader.bytes_available() == 0 {
            return Ok(None);
        }

        if self.reader.bytes_available() < 2 {
            return decode_error("binary: truncated command header");
        }

        let offset = self.reader.pos();
        let header = self.reader.read_be_u16()?;

        let class = (header >> 12) as u8;
        let id = ((header >> 5) & 0x7F) as u16;
        let length = header & 0x1F;

        let args = if length < LONG_FORM {
            let args = self.reader.read_buf_bytes_ref(usize::from(length))?.to_vec();
            self.skip_pad(usize::from(length))?;
            args
        }
        else {
            self.read_partitions()?
        };

        Ok(Some(Frame { class, id, args, offset }))
    }

    /// Reads the long-form partition run into a single argument buffer.
    fn read_partitions(&mut self) -> Result<Vec<u8>> {
        let mut args = Vec::new();

        loop {
            let word = self.reader.read_be_u16()?;

            let continued = word & 0x8000 != 0;
            let length = usize::from(word & 0x7FFF);

            args.extend_from_slice(self.reader.read_buf_bytes_ref(length)?);
            self.skip_pad(length)?;

            if !continued {
                break;
            }
        }

        Ok(args)
    }

    /// Consumes the pad byte following argument data of odd length. The pad
    /// may be absent when the stream ends with the data.
    fn skip_pad(&mut self, length: usize) -> Result<()> {
        if length & 0x1 == 1 && self.reader.bytes_available() > 0 {
            self.reader.read_byte()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Framer;

    /// Builds a short-form command with the given argument bytes.
    fn short(class: u8, id: u16, args: &[u8]) -> Vec<u8> {
        assert!(args.len() < 31);
        let header = (u16::from(class) << 12) | (id << 5) | args.len() as u16;
        let mut out = header.to_be_bytes().to_vec();
        out.extend_from_slice(args);
        if args.len() & 0x1 == 1 {
            out.push(0);
        }
        out
    }

    #[test]
    fn frames_short_form_with_padding() {
        let mut buf = short(1, 2, &[0x03, 0x61, 0x62, 0x63]);
        buf.extend_from_slice(&short(0, 2, &[]));

        let mut framer = Framer::new(&buf);

        let frame = framer.next_frame().unwrap().unwrap();
        assert_eq!((frame.class, frame.id), (1, 2));
        assert_eq!(frame.args, &[0x03, 0x61, 0x62, 0x63]);

        // The pad byte after the odd-length run must not leak into the next
        // header.
        let frame = framer.next_frame().unwrap().unwrap();
        assert_eq!((frame.class, frame.id), (0, 2));
        assert!(frame.args.is_empty());

        assert!(framer.next_frame().unwrap().is_none());
    }

    #[test]
    fn frames_long_form_partitions() {
        // A command of 40000 argument bytes split over two partitions.
        let first = vec![0xAA; 32766];
        let second = vec![0xBB; 40000 - 32766];

        let mut buf = Vec::new();
        buf.extend_from_slice(&((5u16 << 12) | (34 << 5) | 31).to_be_bytes());
        buf.extend_from_slice(&(0x8000u16 | 32766).to_be_bytes());
        buf.extend_from_slice(&first);
        buf.extend_from_slice(&(second.len() as u16).to_be_bytes());
        buf.extend_from_slice(&second);

        let mut framer = Framer::new(&buf);

        let frame = framer.next_frame().unwrap().unwrap();
        assert_eq!((frame.class, frame.id), (5, 34));
        assert_eq!(frame.args.len(), 40000);
        assert!(frame.args[..32766].iter().all(|&b| b == 0xAA));
        assert!(frame.args[32766..].iter().all(|&b| b == 0xBB));

        assert!(framer.next_frame().unwrap().is_none());
    }

    #[test]
    fn framed_lengths_cover_the_input() {
        // Property: header + argument + pad lengths account for every input
        // byte.
        let mut buf = Vec::new();
        buf.extend_from_slice(&short(0, 1, &[0x02, 0x68, 0x69]));
        buf.extend_from_slice(&short(4, 1, &[0, 16, 0, 32, 0, 48, 0, 64]));
        buf.extend_from_slice(&short(0, 2, &[]));

        let mut framer = Framer::new(&buf);
        let mut accounted = 0;

        while let Some(frame) = framer.next_frame().unwrap() {
            accounted += 2 + frame.args.len() + (frame.args.len() & 0x1);
        }

        assert_eq!(accounted, buf.len());
    }
}
