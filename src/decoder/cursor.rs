//! Bounds-checked, forward-only reader over transaction bytes
//!
//! The offset only ever moves forward, so ranges handed out by consecutive
//! reads can never overlap.

use byteorder::{ByteOrder, LittleEndian};

use super::error::CursorError;

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn check(&self, n: usize) -> Result<(), CursorError> {
        if n > self.remaining() {
            return Err(CursorError {
                offset: self.offset,
                needed: n as u64,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Look at the next `n` bytes without advancing
    pub fn peek(&self, n: usize) -> Result<&'a [u8], CursorError> {
        self.check(n)?;
        Ok(&self.bytes[self.offset..self.offset + n])
    }

    pub fn advance(&mut self, n: usize) -> Result<(), CursorError> {
        self.check(n)?;
        self.offset += n;
        Ok(())
    }

    /// Take the next `n` bytes, advancing past them
    pub fn read(&mut self, n: usize) -> Result<&'a [u8], CursorError> {
        let bytes = self.peek(n)?;
        self.offset += n;
        Ok(bytes)
    }

    /// Take a length that arrived as a u64 (script lengths). Lengths that do
    /// not fit in `usize` can never be satisfied and report as truncation.
    pub fn read_len(&mut self, len: u64) -> Result<&'a [u8], CursorError> {
        match usize::try_from(len) {
            Ok(n) => self.read(n),
            Err(_) => Err(CursorError {
                offset: self.offset,
                needed: len,
                available: self.remaining(),
            }),
        }
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CursorError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, CursorError> {
        Ok(self.read(1)?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, CursorError> {
        Ok(LittleEndian::read_u16(self.read(2)?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, CursorError> {
        Ok(LittleEndian::read_u32(self.read(4)?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, CursorError> {
        Ok(LittleEndian::read_u64(self.read(8)?))
    }
}
