//! Bit-accurate cursors over `bytes::{Bytes, BytesMut}` (spec.md §4.2).
//!
//! LLRP packs several fields (`U1`, `U2`, reserved padding, `UNv`) at bit
//! granularity within a byte, MSB-first, with the usual big-endian byte order
//! across multi-byte fields. The teacher's `params.rs`/`llrp.rs` only ever
//! read/wrote whole octets via `Buf`/`BufMut`; this generalizes that to a bit
//! cursor so any `FieldSpec` can be decoded uniformly regardless of width.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::CodecError;

pub struct BitReader {
    data: Bytes,
    /// Absolute bit offset from the start of `data`.
    bit_pos: usize,
}

impl BitReader {
    pub fn new(data: Bytes) -> Self {
        BitReader { data, bit_pos: 0 }
    }

    pub fn total_bits(&self) -> usize {
        self.data.len() * 8
    }

    pub fn remaining_bits(&self) -> usize {
        self.total_bits().saturating_sub(self.bit_pos)
    }

    pub fn bit_pos(&self) -> usize {
        self.bit_pos
    }

    fn require_bits(&self, n: usize) -> Result<(), CodecError> {
        if self.remaining_bits() < n {
            Err(CodecError::Truncated(format!(
                "need {n} more bits, only {} remain",
                self.remaining_bits()
            )))
        } else {
            Ok(())
        }
    }

    /// Reads an unsigned integer of `bits` width (1..=64), MSB-first.
    pub fn read_uint(&mut self, bits: u32) -> Result<u64, CodecError> {
        self.require_bits(bits as usize)?;
        let mut value: u64 = 0;
        for _ in 0..bits {
            let byte_index = self.bit_pos / 8;
            let bit_in_byte = 7 - (self.bit_pos % 8);
            let bit = (self.data[byte_index] >> bit_in_byte) & 1;
            value = (value << 1) | bit as u64;
            self.bit_pos += 1;
        }
        Ok(value)
    }

    /// Reads a two's-complement signed integer of `bits` width (1..=64).
    pub fn read_sint(&mut self, bits: u32) -> Result<i64, CodecError> {
        let raw = self.read_uint(bits)?;
        if bits == 64 {
            return Ok(raw as i64);
        }
        let sign_bit = 1u64 << (bits - 1);
        if raw & sign_bit != 0 {
            Ok((raw as i64) - (1i64 << bits))
        } else {
            Ok(raw as i64)
        }
    }

    /// Reads `n` whole bytes. Requires the cursor to be octet-aligned.
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes, CodecError> {
        self.require_octet_aligned()?;
        self.require_bits(n * 8)?;
        let start = self.bit_pos / 8;
        let slice = self.data.slice(start..start + n);
        self.bit_pos += n * 8;
        Ok(slice)
    }

    /// Reads all remaining whole bytes.
    pub fn read_remaining_bytes(&mut self) -> Result<Bytes, CodecError> {
        self.require_octet_aligned()?;
        let remaining = self.remaining_bits() / 8;
        self.read_bytes(remaining)
    }

    pub fn require_octet_aligned(&self) -> Result<(), CodecError> {
        if self.bit_pos % 8 != 0 {
            Err(CodecError::FramingError(format!(
                "cursor at bit {} is not octet-aligned",
                self.bit_pos
            )))
        } else {
            Ok(())
        }
    }

    pub fn align_to_octet(&mut self) {
        let rem = self.bit_pos % 8;
        if rem != 0 {
            self.bit_pos += 8 - rem;
        }
    }
}

pub struct BitWriter {
    buf: BytesMut,
    /// Partially filled trailing byte and the number of bits already placed
    /// into it (0..8), used when writing sub-byte fields.
    pending_byte: u8,
    pending_bits: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter { buf: BytesMut::new(), pending_byte: 0, pending_bits: 0 }
    }

    pub fn with_capacity(cap: usize) -> Self {
        BitWriter { buf: BytesMut::with_capacity(cap), pending_byte: 0, pending_bits: 0 }
    }

    pub fn write_uint(&mut self, value: u64, bits: u32) {
        for i in (0..bits).rev() {
            let bit = ((value >> i) & 1) as u8;
            self.pending_byte = (self.pending_byte << 1) | bit;
            self.pending_bits += 1;
            if self.pending_bits == 8 {
                self.buf.put_u8(self.pending_byte);
                self.pending_byte = 0;
                self.pending_bits = 0;
            }
        }
    }

    pub fn write_sint(&mut self, value: i64, bits: u32) {
        let mask = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
        self.write_uint((value as u64) & mask, bits);
    }

    pub fn write_bytes(&mut self, data: &[u8]) {
        debug_assert_eq!(self.pending_bits, 0, "write_bytes requires octet alignment");
        self.buf.put_slice(data);
    }

    pub fn align_to_octet(&mut self) {
        if self.pending_bits != 0 {
            let pad = 8 - self.pending_bits;
            self.pending_byte <<= pad;
            self.buf.put_u8(self.pending_byte);
            self.pending_byte = 0;
            self.pending_bits = 0;
        }
    }

    pub fn bit_len(&self) -> usize {
        self.buf.len() * 8 + self.pending_bits as usize
    }

    /// Flushes any partial trailing byte (zero-padded) and returns the bytes.
    pub fn finish(mut self) -> BytesMut {
        self.align_to_octet();
        self.buf
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_octet_aligned_uint() {
        let mut w = BitWriter::new();
        w.write_uint(0x1234, 16);
        let bytes = w.finish().freeze();
        let mut r = BitReader::new(bytes);
        assert_eq!(r.read_uint(16).unwrap(), 0x1234);
    }

    #[test]
    fn round_trips_sub_byte_fields_msb_first() {
        let mut w = BitWriter::new();
        w.write_uint(1, 1); // U1
        w.write_uint(0b10, 2); // U2
        w.write_uint(0, 5); // padding to octet
        let bytes = w.finish().freeze();
        assert_eq!(bytes.len(), 1);
        let mut r = BitReader::new(bytes);
        assert_eq!(r.read_uint(1).unwrap(), 1);
        assert_eq!(r.read_uint(2).unwrap(), 0b10);
    }

    #[test]
    fn read_sint_handles_negative_values() {
        let mut w = BitWriter::new();
        w.write_sint(-5, 8);
        let bytes = w.finish().freeze();
        let mut r = BitReader::new(bytes);
        assert_eq!(r.read_sint(8).unwrap(), -5);
    }

    #[test]
    fn truncated_read_reports_error() {
        let bytes = Bytes::from_static(&[0xFF]);
        let mut r = BitReader::new(bytes);
        let _ = r.read_uint(4).unwrap();
        assert!(r.read_bytes(1).is_err());
    }
}
