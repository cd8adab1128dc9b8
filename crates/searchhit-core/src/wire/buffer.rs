// crates/searchhit-core/src/wire/buffer.rs

//! Big-endian primitives with natural alignment.
//!
//! Alignment is relative to the start of the buffer: a `u32` starts on a
//! multiple of 4, a `u16` on a multiple of 2. Padding is written as zeros.
//! Strings are NUL-terminated and unaligned.

use crate::error::{HitError, Result};

#[inline]
fn aligned(pos: usize, to: usize) -> usize {
    (pos + to - 1) & !(to - 1)
}

/// Append-only writer over a growable byte buffer.
///
/// Positions handed out by the writer stay valid across growth because they
/// are offsets, never pointers.
#[derive(Debug, Default, Clone)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Capacity left before the next reallocation.
    #[inline]
    pub fn free(&self) -> usize {
        self.buf.capacity() - self.buf.len()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Grows capacity by `grow_by` when less than `min_free` bytes are left.
    /// Returns whether the buffer grew.
    pub fn ensure_free(&mut self, min_free: usize, grow_by: usize) -> bool {
        let free = self.free();
        if free >= min_free {
            return false;
        }
        let old = self.buf.capacity();
        self.buf.reserve_exact(free + grow_by);
        log::debug!(
            "wire buffer grown from {} to {} bytes at position {}",
            old,
            self.buf.capacity(),
            self.buf.len()
        );
        true
    }

    pub fn align(&mut self, to: usize) {
        let target = aligned(self.buf.len(), to);
        self.buf.resize(target, 0);
    }

    pub fn put_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn put_i8(&mut self, v: i8) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_bool(&mut self, v: bool) {
        self.buf.push(u8::from(v));
    }

    pub fn put_u16(&mut self, v: u16) {
        self.align(2);
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_u32(&mut self, v: u32) {
        self.align(4);
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_i32(&mut self, v: i32) {
        self.align(4);
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Two aligned words, high word first.
    pub fn put_u64(&mut self, v: u64) {
        self.put_u32((v >> 32) as u32);
        self.put_u32(v as u32);
    }

    /// Element count as a `u32`.
    pub fn put_count(&mut self, n: usize) -> Result<()> {
        let n = u32::try_from(n)
            .map_err(|_| HitError::InvalidData(format!("count {n} does not fit in 32 bits")))?;
        self.put_u32(n);
        Ok(())
    }

    /// UTF-8 bytes plus a NUL terminator. Interior NULs cannot be framed.
    pub fn put_str(&mut self, s: &str) -> Result<()> {
        if s.as_bytes().contains(&0) {
            return Err(HitError::InvalidData(format!(
                "string {s:?} contains a NUL byte"
            )));
        }
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(0);
        Ok(())
    }

    /// Writes a zero `u32` to be patched later and returns its position.
    pub fn reserve_u32(&mut self) -> usize {
        self.put_u32(0);
        self.buf.len() - 4
    }

    /// Overwrites the `u32` at `at`, which must come from [`reserve_u32`].
    ///
    /// [`reserve_u32`]: WireWriter::reserve_u32
    pub fn patch_u32(&mut self, at: usize, v: u32) {
        self.buf[at..at + 4].copy_from_slice(&v.to_be_bytes());
    }
}

/// Cursor over encoded bytes. Every read is bounds-checked.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.buf.len() {
            return Err(self.truncated(pos.saturating_sub(self.pos)));
        }
        self.pos = pos;
        Ok(())
    }

    fn truncated(&self, needed: usize) -> HitError {
        HitError::Truncated {
            needed,
            offset: self.pos,
            len: self.buf.len(),
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| self.truncated(n))?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn align(&mut self, to: usize) {
        self.pos = aligned(self.pos, to);
    }

    pub fn get_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn get_i8(&mut self) -> Result<i8> {
        Ok(i8::from_be_bytes(self.take_array()?))
    }

    /// Any non-zero byte reads as `true`.
    pub fn get_bool(&mut self) -> Result<bool> {
        Ok(self.get_u8()? != 0)
    }

    pub fn get_u16(&mut self) -> Result<u16> {
        self.align(2);
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    pub fn get_u32(&mut self) -> Result<u32> {
        self.align(4);
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    pub fn get_i32(&mut self) -> Result<i32> {
        self.align(4);
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    pub fn get_u64(&mut self) -> Result<u64> {
        let high = self.get_u32()? as u64;
        let low = self.get_u32()? as u64;
        Ok((high << 32) | low)
    }

    /// Reads an element count and checks that at least `min_elem_size` bytes
    /// per element are still available.
    pub fn get_count(&mut self, min_elem_size: usize) -> Result<usize> {
        let n = self.get_u32()? as usize;
        let needed = n.saturating_mul(min_elem_size);
        if needed > self.remaining() {
            return Err(self.truncated(needed));
        }
        Ok(n)
    }

    pub fn get_str(&mut self) -> Result<String> {
        let rest = self.buf.get(self.pos..).unwrap_or(&[]);
        let nul = rest
            .iter()
            .position(|b| *b == 0)
            .ok_or_else(|| self.truncated(rest.len() + 1))?;
        let bytes = self.take(nul + 1)?;
        String::from_utf8(bytes[..nul].to_vec()).map_err(|e| {
            HitError::InvalidData(format!(
                "string at offset {} is not UTF-8: {e}",
                self.pos - nul - 1
            ))
        })
    }
}
