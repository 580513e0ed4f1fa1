//! Compact-size (VarInt) decoding for counts and script lengths
//!
//! Non-minimal encodings are accepted, matching lenient real-world decoders.

use serde::Serialize;

use super::cursor::ByteCursor;
use super::error::CursorError;

/// A decoded compact-size integer and how many bytes it occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VarInt {
    pub value: u64,
    pub encoded_len: usize,
}

/// Decode one compact-size integer. On failure the cursor is left at the
/// prefix byte, and the error is anchored there.
pub fn read_varint(cursor: &mut ByteCursor<'_>) -> Result<VarInt, CursorError> {
    let prefix = cursor.peek(1)?[0];
    let encoded_len = match prefix {
        0xfd => 3,
        0xfe => 5,
        0xff => 9,
        _ => 1,
    };

    // Whole encoding must be present before anything is consumed
    cursor.peek(encoded_len)?;

    cursor.advance(1)?;
    let value = match prefix {
        0xfd => cursor.read_u16_le()? as u64,
        0xfe => cursor.read_u32_le()? as u64,
        0xff => cursor.read_u64_le()?,
        b => b as u64,
    };

    Ok(VarInt { value, encoded_len })
}
