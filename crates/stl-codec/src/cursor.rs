//! Sequential little-endian access over byte buffers.
//!
//! Binary STL is little-endian throughout with no alignment guarantees,
//! so both halves here work on raw byte positions: [`ByteCursor`] reads
//! typed primitives out of a borrowed slice, [`ByteWriter`] appends
//! them to an owned buffer.

use crate::error::{CodecError, CodecResult};

/// Reader over a byte slice with a running position.
///
/// Every `read_*` advances the position by the width of the type read.
/// Reading past the end of the buffer fails with
/// [`CodecError::TruncatedInput`].
#[derive(Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Wrap a buffer, starting at position 0.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current read position in bytes.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the buffer.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take the next `len` raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TruncatedInput`] if fewer than `len` bytes
    /// remain.
    pub fn read_bytes(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        let end = self.pos + len;
        if end > self.buf.len() {
            return Err(CodecError::TruncatedInput {
                needed: end,
                available: self.buf.len(),
            });
        }
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Read a little-endian f32, advancing 4 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TruncatedInput`] on buffer overrun.
    pub fn read_f32_le(&mut self) -> CodecResult<f32> {
        let b = self.read_bytes(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a little-endian u32, advancing 4 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TruncatedInput`] on buffer overrun.
    pub fn read_u32_le(&mut self) -> CodecResult<u32> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a little-endian u16, advancing 2 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TruncatedInput`] on buffer overrun.
    pub fn read_u16_le(&mut self) -> CodecResult<u16> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }
}

/// Writer that appends little-endian primitives to an owned buffer.
///
/// The write position is always the end of the buffer; every `write_*`
/// advances it by the width of the type written.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    /// Create a writer with a preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Current write position (bytes written so far).
    #[must_use]
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Zero-fill up to an absolute position. No-op if already past it.
    pub fn pad_to(&mut self, position: usize) {
        if position > self.buf.len() {
            self.buf.resize(position, 0);
        }
    }

    /// Append a little-endian f32 (4 bytes).
    pub fn write_f32_le(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a little-endian u32 (4 bytes).
    pub fn write_u32_le(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a little-endian u16 (2 bytes).
    pub fn write_u16_le(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Consume the writer and return the finished buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
