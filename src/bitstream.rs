//! Output bit buffer cursor
//!
//! The frame writer packs headers and allocation data into a byte region the
//! caller owns. This module only sets up the cursor over that region; the
//! region itself is borrowed, never copied or freed.

/// Cursor over a caller-owned output buffer
#[derive(Debug)]
pub struct BitBuffer<'a> {
    /// Caller-owned output region
    buf: &'a mut [u8],
    /// Index of the byte currently being filled
    byte_idx: usize,
    /// Free bits left in the current byte; 8 means "start of next byte"
    bit_idx: u8,
    /// Total bits written so far
    total_bits: u64,
    /// End of buffer reached
    eob: bool,
    /// End of buffer reached while a write was in progress
    eobs: bool,
}

impl<'a> BitBuffer<'a> {
    /// Initialise a cursor at the start of `buf`
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            byte_idx: 0,
            bit_idx: 8,
            total_bits: 0,
            eob: false,
            eobs: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn byte_position(&self) -> usize {
        self.byte_idx
    }

    pub fn bit_position(&self) -> u8 {
        self.bit_idx
    }

    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    pub fn is_end_of_buffer(&self) -> bool {
        self.eob
    }

    pub fn is_end_of_buffer_in_write(&self) -> bool {
        self.eobs
    }

    /// Bytes still available after the current position
    pub fn remaining_bytes(&self) -> usize {
        self.buf.len().saturating_sub(self.byte_idx)
    }

    /// Give the region back to the caller
    pub fn into_inner(self) -> &'a mut [u8] {
        self.buf
    }
}
