// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Precision-aware reading of command arguments.
//!
//! All widths and layouts are governed by the [`MetafileState`] active when
//! the owning command was framed. The reader borrows the argument slice and
//! never retains it beyond the command.

use cgm_core::errors::{unsupported_error, Result};
use cgm_core::io::{BufReader, FiniteStream, ReadBytes};
use cgm_core::options::{CodecOptions, VdcMode};
use cgm_core::state::{ColourSelectionMode, MetafileState, RealPrecision, VdcType};
use cgm_core::types::{Colour, Point, Sdr, SdrDataType, SdrMember, SdrValue, VdcValue};

/// `PrimitiveReader` decodes the primitive values of one command's argument
/// buffer.
pub struct PrimitiveReader<'a, 's> {
    buf: BufReader<'a>,
    state: &'s MetafileState,
    opts: &'s CodecOptions,
}

impl<'a, 's> PrimitiveReader<'a, 's> {
    pub fn new(args: &'a [u8], state: &'s MetafileState, opts: &'s CodecOptions) -> Self {
        PrimitiveReader { buf: BufReader::new(args), state, opts }
    }

    /// Number of unread argument bytes.
    pub fn remaining(&self) -> u64 {
        self.buf.bytes_available()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.bytes_available() == 0
    }

    /// Cursor position within the argument buffer.
    pub fn pos(&self) -> u64 {
        self.buf.pos()
    }

    /// Reads a signed two's complement integer of the given width in bits.
    fn read_signed(&mut self, bits: u8) -> Result<i32> {
        match bits {
            8 => Ok(i32::from(self.buf.read_i8()?)),
            16 => Ok(i32::from(self.buf.read_be_i16()?)),
            24 => self.buf.read_be_i24(),
            32 => self.buf.read_be_i32(),
            _ => unsupported_error("primitives: unsupported signed width"),
        }
    }

    /// Reads an unsigned integer of the given width in bits.
    fn read_unsigned(&mut self, bits: u8) -> Result<u32> {
        match bits {
            8 => Ok(u32::from(self.buf.read_u8()?)),
            16 => Ok(u32::from(self.buf.read_be_u16()?)),
            24 => self.buf.read_be_u24(),
            32 => self.buf.read_be_u32(),
            _ => unsupported_error("primitives: unsupported unsigned width"),
        }
    }

    /// Reads a signed integer at the current integer precision.
    pub fn read_int(&mut self) -> Result<i32> {
        self.read_signed(self.state.integer_precision)
    }

    /// Reads an unsigned integer at the current integer precision.
    pub fn read_uint(&mut self) -> Result<u32> {
        self.read_unsigned(self.state.integer_precision)
    }

    /// Reads an index at the current index precision.
    pub fn read_index(&mut self) -> Result<i32> {
        self.read_signed(self.state.index_precision)
    }

    /// Reads a name at the current name precision.
    pub fn read_name(&mut self) -> Result<i32> {
        self.read_signed(self.state.name_precision)
    }

    /// Reads an enumerated value. Enumerations have a fixed 16-bit width.
    pub fn read_enum(&mut self) -> Result<i16> {
        self.buf.read_be_i16()
    }

    fn read_real_with(&mut self, precision: RealPrecision) -> Result<f64> {
        match precision {
            RealPrecision::Fixed32 => {
                let whole = self.buf.read_be_i16()?;
                let fraction = self.buf.read_be_u16()?;
                Ok(f64::from(whole) + f64::from(fraction) / f64::from(1u32 << 16))
            }
            RealPrecision::Fixed64 => {
                let whole = self.buf.read_be_i32()?;
                let fraction = self.buf.read_be_u32()?;
                Ok(f64::from(whole) + f64::from(fraction) / (u64::from(u32::MAX) + 1) as f64)
            }
            RealPrecision::Floating32 => Ok(f64::from(self.buf.read_be_f32()?)),
            RealPrecision::Floating64 => self.buf.read_be_f64(),
        }
    }

    /// Reads a real at the current real precision.
    pub fn read_real(&mut self) -> Result<f64> {
        self.read_real_with(self.state.real_precision)
    }

    /// Reads a real that the binary encoding fixes to a floating-point
    /// layout, whatever the declared real precision. The metric scale factor
    /// of SCALING MODE is the one such value.
    pub fn read_floating_real(&mut self) -> Result<f64> {
        match self.state.real_precision {
            RealPrecision::Floating64 => self.buf.read_be_f64(),
            _ => Ok(f64::from(self.buf.read_be_f32()?)),
        }
    }

    /// Reads one virtual device coordinate.
    ///
    /// Integer VDCs resolve to [`VdcValue::Real`] under the default
    /// [`VdcMode::ForceRealVdcOnEmit`] override.
    pub fn read_vdc(&mut self) -> Result<VdcValue> {
        match self.state.vdc_type {
            VdcType::Integer => {
                let value = self.read_signed(self.state.vdc_integer_precision)?;
                match self.opts.vdc_mode {
                    VdcMode::ForceRealVdcOnEmit => Ok(VdcValue::Real(f64::from(value))),
                    VdcMode::PreserveVdcType => Ok(VdcValue::Integer(value)),
                }
            }
            VdcType::Real => Ok(VdcValue::Real(self.read_real_with(self.state.vdc_real_precision)?)),
        }
    }

    /// Reads a point: two VDCs in (x, y) order.
    pub fn read_point(&mut self) -> Result<Point> {
        let x = self.read_vdc()?;
        let y = self.read_vdc()?;
        Ok(Point::new(x, y))
    }

    /// Reads a colour index at the current colour index precision.
    pub fn read_colour_index(&mut self) -> Result<u32> {
        self.read_unsigned(self.state.colour_index_precision)
    }

    /// Reads one direct colour component at the current colour precision.
    pub fn read_colour_component(&mut self) -> Result<u32> {
        self.read_unsigned(self.state.colour_precision)
    }

    /// Reads a direct colour: three components, or four under the CMYK
    /// model.
    ///
    /// RGB components are scaled by the declared colour value extent into
    /// the 0 to 255 range the clear text is written in. CMYK declares no
    /// extent and stays raw.
    pub fn read_direct_colour(&mut self) -> Result<Colour> {
        if self.state.colour_model.components() == 4 {
            let c = self.read_colour_component()?;
            let m = self.read_colour_component()?;
            let y = self.read_colour_component()?;
            let k = self.read_colour_component()?;
            Ok(Colour::DirectCmyk(c, m, y, k))
        }
        else {
            let extent = self.state.colour_value_extent;
            let r = scale_component(self.read_colour_component()?, extent.min[0], extent.max[0]);
            let g = scale_component(self.read_colour_component()?, extent.min[1], extent.max[1]);
            let b = scale_component(self.read_colour_component()?, extent.min[2], extent.max[2]);
            Ok(Colour::Direct(r, g, b))
        }
    }

    /// Reads a colour in the form selected by the colour selection mode.
    pub fn read_colour(&mut self) -> Result<Colour> {
        match self.state.colour_selection_mode {
            ColourSelectionMode::Indexed => Ok(Colour::Indexed(self.read_colour_index()?)),
            ColourSelectionMode::Direct => self.read_direct_colour(),
        }
    }

    /// Reads a string as raw octets. No transcoding is performed.
    ///
    /// A leading count of 255 selects the long form: 16-bit words whose high
    /// bit announces a further segment, each prefixing up to 32767 bytes.
    pub fn read_string_bytes(&mut self) -> Result<Vec<u8>> {
        let count = self.buf.read_u8()?;

        if count < 255 {
            return Ok(self.buf.read_buf_bytes_ref(usize::from(count))?.to_vec());
        }

        let mut bytes = Vec::new();
        loop {
            let word = self.buf.read_be_u16()?;

            let continued = word & 0x8000 != 0;
            let length = usize::from(word & 0x7FFF);

            bytes.extend_from_slice(self.buf.read_buf_bytes_ref(length)?);

            if !continued {
                break;
            }
        }

        Ok(bytes)
    }

    /// Reads a string and interprets its octets as text.
    pub fn read_string(&mut self) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.read_string_bytes()?).into_owned())
    }

    /// Reads a structured data record: a string envelope containing a nested
    /// `(type, count, values)` stream parsed with the precisions active now.
    pub fn read_sdr(&mut self) -> Result<Sdr> {
        let envelope = self.read_string_bytes()?;
        parse_sdr(&envelope, self.state, self.opts)
    }
}

/// Maps one direct colour component from the declared extent onto 0 to 255,
/// rounding to nearest. Out-of-extent values clamp; a degenerate extent
/// passes the value through.
fn scale_component(value: u32, min: u32, max: u32) -> u32 {
    if max <= min {
        return value;
    }

    let range = u64::from(max - min);
    let offset = u64::from(value.clamp(min, max) - min);

    ((offset * 255 + range / 2) / range) as u32
}

/// Parses the enclosed member stream of a structured data record.
fn parse_sdr(envelope: &[u8], state: &MetafileState, opts: &CodecOptions) -> Result<Sdr> {
    let mut r = PrimitiveReader::new(envelope, state, opts);
    let mut members = Vec::new();

    while !r.is_empty() {
        let code = r.read_index()?;

        let data_type = match SdrDataType::from_code(code) {
            Some(data_type) => data_type,
            None => return unsupported_error("sdr: unknown data type code"),
        };

        let count = r.read_int()?;
        if count < 0 {
            return unsupported_error("sdr: negative member count");
        }

        let mut values = Vec::with_capacity(count as usize);
        for _ in 0..count {
            values.push(read_sdr_value(&mut r, data_type, state, opts)?);
        }

        members.push(SdrMember { data_type, values });
    }

    Ok(Sdr { members })
}

fn read_sdr_value(
    r: &mut PrimitiveReader<'_, '_>,
    data_type: SdrDataType,
    state: &MetafileState,
    opts: &CodecOptions,
) -> Result<SdrValue> {
    let value = match data_type {
        SdrDataType::Record => {
            let envelope = r.read_string_bytes()?;
            SdrValue::Record(parse_sdr(&envelope, state, opts)?)
        }
        SdrDataType::ColourIndex => SdrValue::ColourIndex(r.read_colour_index()?),
        SdrDataType::ColourDirect => SdrValue::Colour(r.read_direct_colour()?),
        SdrDataType::Name => SdrValue::Name(r.read_name()?),
        SdrDataType::Enumerated => SdrValue::Enumerated(r.read_enum()?),
        SdrDataType::Integer => SdrValue::Integer(r.read_int()?),
        SdrDataType::SignedInt8 => SdrValue::Integer(i32::from(r.buf.read_i8()?)),
        SdrDataType::SignedInt16 => SdrValue::Integer(i32::from(r.buf.read_be_i16()?)),
        SdrDataType::SignedInt32 => SdrValue::Integer(r.buf.read_be_i32()?),
        SdrDataType::Index => SdrValue::Index(r.read_index()?),
        SdrDataType::Real => SdrValue::Real(r.read_real()?),
        SdrDataType::String | SdrDataType::StringFixed => SdrValue::String(r.read_string()?),
        SdrDataType::Vdc => SdrValue::Vdc(r.read_vdc()?),
        SdrDataType::UnsignedInt8 => SdrValue::Unsigned(u32::from(r.buf.read_u8()?)),
        SdrDataType::UnsignedInt16 => SdrValue::Unsigned(u32::from(r.buf.read_be_u16()?)),
        SdrDataType::UnsignedInt32 => SdrValue::Unsigned(r.buf.read_be_u32()?),
        SdrDataType::ColourList => SdrValue::Colour(r.read_colour()?),
        SdrDataType::Reserved | SdrDataType::BitStream => {
            return unsupported_error("sdr: unsupported data type");
        }
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::PrimitiveReader;
    use cgm_core::options::{CodecOptions, VdcMode};
    use cgm_core::state::{MetafileState, RealPrecision, VdcType};
    use cgm_core::types::{Colour, SdrDataType, SdrValue, VdcValue};

    fn state() -> MetafileState {
        MetafileState::default()
    }

    fn opts() -> CodecOptions {
        CodecOptions::default()
    }

    #[test]
    fn reads_integers_at_declared_precision() {
        let mut state = state();
        let opts = opts();

        let buf = [0xFF, 0xF0];
        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        assert_eq!(r.read_int().unwrap(), -16);

        state.integer_precision = 8;
        let buf = [0x7F];
        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        assert_eq!(r.read_int().unwrap(), 127);

        state.integer_precision = 32;
        let buf = [0x80, 0x00, 0x00, 0x00];
        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        assert_eq!(r.read_int().unwrap(), i32::MIN);
    }

    #[test]
    fn reads_fixed_point_reals() {
        let state = state();
        let opts = opts();

        // 1 + 32768 / 65536 = 1.5
        let buf = [0x00, 0x01, 0x80, 0x00];
        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        assert!((r.read_real().unwrap() - 1.5).abs() < 1e-9);

        // -2 + 0 = -2.0
        let buf = [0xFF, 0xFE, 0x00, 0x00];
        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        assert!((r.read_real().unwrap() + 2.0).abs() < 1e-9);
    }

    #[test]
    fn reads_floating_reals() {
        let mut state = state();
        let opts = opts();
        state.real_precision = RealPrecision::Floating32;

        let buf = 2.25f32.to_be_bytes();
        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        assert!((r.read_real().unwrap() - 2.25).abs() < 1e-9);

        state.real_precision = RealPrecision::Floating64;
        let buf = (-0.125f64).to_be_bytes();
        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        assert!((r.read_real().unwrap() + 0.125).abs() < 1e-12);
    }

    #[test]
    fn integer_vdc_resolves_per_vdc_mode() {
        let state = state();
        assert_eq!(state.vdc_type, VdcType::Integer);

        let buf = [0x00, 0x10];
        let mut forced = opts();
        forced.vdc_mode = VdcMode::ForceRealVdcOnEmit;
        let mut r = PrimitiveReader::new(&buf, &state, &forced);
        assert_eq!(r.read_vdc().unwrap(), VdcValue::Real(16.0));

        let mut preserved = opts();
        preserved.vdc_mode = VdcMode::PreserveVdcType;
        let mut r = PrimitiveReader::new(&buf, &state, &preserved);
        assert_eq!(r.read_vdc().unwrap(), VdcValue::Integer(16));
    }

    #[test]
    fn direct_colours_scale_through_the_value_extent() {
        let mut state = state();
        let opts = opts();
        state.colour_precision = 16;
        state.colour_value_extent.max = [510, 510, 510];

        let buf = [0x01, 0xFE, 0x00, 0x00, 0x00, 0xFF];
        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        assert_eq!(r.read_direct_colour().unwrap(), Colour::Direct(255, 0, 128));

        // The default extent is the identity mapping.
        state.colour_value_extent.max = [255, 255, 255];
        state.colour_precision = 8;
        let buf = [200, 0, 55];
        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        assert_eq!(r.read_direct_colour().unwrap(), Colour::Direct(200, 0, 55));
    }

    #[test]
    fn reads_long_form_strings() {
        let state = state();
        let opts = opts();

        // 300 bytes split over a continued 200-byte segment and a final
        // 100-byte segment.
        let mut buf = vec![255];
        buf.extend_from_slice(&(0x8000u16 | 200).to_be_bytes());
        buf.extend_from_slice(&[b'A'; 200]);
        buf.extend_from_slice(&100u16.to_be_bytes());
        buf.extend_from_slice(&[b'B'; 100]);

        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        let bytes = r.read_string_bytes().unwrap();
        assert_eq!(bytes.len(), 300);
        assert_eq!(&bytes[..200], &[b'A'; 200][..]);
        assert_eq!(&bytes[200..], &[b'B'; 100][..]);
    }

    #[test]
    fn parses_a_typed_sdr() {
        let state = state();
        let opts = opts();

        // Member 1: type integer (6), count 2, values 7 and -1.
        // Member 2: type string (13), count 1, value "ok".
        let mut inner = Vec::new();
        inner.extend_from_slice(&6i16.to_be_bytes());
        inner.extend_from_slice(&2i16.to_be_bytes());
        inner.extend_from_slice(&7i16.to_be_bytes());
        inner.extend_from_slice(&(-1i16).to_be_bytes());
        inner.extend_from_slice(&13i16.to_be_bytes());
        inner.extend_from_slice(&1i16.to_be_bytes());
        inner.push(2);
        inner.extend_from_slice(b"ok");

        let mut buf = vec![inner.len() as u8];
        buf.extend_from_slice(&inner);

        let mut r = PrimitiveReader::new(&buf, &state, &opts);
        let sdr = r.read_sdr().unwrap();

        assert_eq!(sdr.members.len(), 2);
        assert_eq!(sdr.members[0].data_type, SdrDataType::Integer);
        assert_eq!(
            sdr.members[0].values,
            vec![SdrValue::Integer(7), SdrValue::Integer(-1)]
        );
        assert_eq!(sdr.members[1].values, vec![SdrValue::String("ok".into())]);
    }
}
