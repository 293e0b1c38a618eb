//! Run-length decoding of encoded frame rows.
//!
//! A row is a sequence of `<byte><digits?>` pairs. The byte is repeated as
//! many times as the decimal number that follows it (at most four digits);
//! with no digits the count is 1, while an explicit `0` produces nothing.

use crate::common::{PlayerError, Result};

/// Fixed size of the decode buffer, terminator slot included.
pub const MAX_OUTPUT: usize = 8192;

/// Maximum number of digits read for one repeat count.
pub const MAX_COUNT_DIGITS: usize = 4;

/// Reusable output buffer for [`decode_line`].
///
/// Allocated once at [`MAX_OUTPUT`] bytes and never grown: a row that would
/// expand past `MAX_OUTPUT - 1` bytes is cut off at that boundary.
#[derive(Debug)]
pub struct DecodeBuffer {
    bytes: Vec<u8>,
    len: usize,
    truncated: bool,
}

impl DecodeBuffer {
    pub fn try_new() -> Result<Self> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(MAX_OUTPUT)
            .map_err(|_| PlayerError::Allocation {
                what: "decode buffer",
                bytes: MAX_OUTPUT,
            })?;
        bytes.resize(MAX_OUTPUT, 0);

        Ok(Self {
            bytes,
            len: 0,
            truncated: false,
        })
    }

    /// Decode `input` into this buffer and return the expanded row.
    pub fn decode(&mut self, input: &[u8]) -> &[u8] {
        decode_line(input, self);
        self.as_bytes()
    }

    /// Bytes produced by the most recent decode.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the most recent decode hit the capacity clamp.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Expand one encoded row into `out`, returning the decoded length.
///
/// Never fails. When a pair would overflow the buffer its count is reduced so
/// the output ends exactly at `capacity - 1` bytes, and the rest of the row is
/// dropped.
pub fn decode_line(input: &[u8], out: &mut DecodeBuffer) -> usize {
    let limit = out.capacity() - 1;
    let mut out_pos = 0;
    let mut truncated = false;
    let mut i = 0;

    while i < input.len() {
        let unit = input[i];
        i += 1;

        let mut count = 0usize;
        let mut digits = 0;
        while i < input.len() && digits < MAX_COUNT_DIGITS && input[i].is_ascii_digit() {
            count = count * 10 + usize::from(input[i] - b'0');
            i += 1;
            digits += 1;
        }

        if digits == 0 {
            count = 1;
        }

        let room = limit - out_pos;
        if count > room {
            count = room;
            truncated = true;
        }

        out.bytes[out_pos..out_pos + count].fill(unit);
        out_pos += count;

        if truncated {
            break;
        }
    }

    out.len = out_pos;
    out.truncated = truncated;
    out_pos
}
