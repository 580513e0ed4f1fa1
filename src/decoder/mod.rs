//! Legacy Bitcoin transaction decoder
//!
//! Turns raw transaction hex into an ordered list of byte-exact segments:
//! version, input count, each input, output count, each output, locktime.
//!
//! - `cursor`: forward-only bounds-checked reader
//! - `varint`: compact-size integers used for counts and script lengths
//! - `segmenter`: the field walk that produces segments
//! - `transaction`: the immutable, fully segmented result
//!
//! Only the legacy layout is understood; a segwit marker after the version
//! reads as a zero input count and will fail or mis-segment accordingly.

use tracing::debug;

pub mod cursor;
pub mod error;
pub mod segmenter;
pub mod transaction;
pub mod varint;

pub use cursor::ByteCursor;
pub use error::{CursorError, DecodeError, DecodeErrorKind, DecodeResult, HexIssue};
pub use segmenter::segment_transaction;
pub use transaction::DecodedTransaction;
pub use varint::{read_varint, VarInt};

/// Validate and convert transaction hex (either case) into bytes
///
/// Rejects non-hex characters, then odd-length strings, before any
/// segmentation is attempted. Positions count characters, not bytes, so
/// non-ASCII input is reported as typed. Whitespace is not stripped.
pub fn parse_hex(input: &str) -> DecodeResult<Vec<u8>> {
    if let Some((position, c)) = input.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(malformed(position, HexIssue::InvalidCharacter(c)));
    }

    // Only ASCII digits remain, so byte and character positions agree
    hex::decode(input).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            malformed(index, HexIssue::InvalidCharacter(c))
        }
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            malformed(input.len(), HexIssue::OddLength)
        }
    })
}

fn malformed(position: usize, issue: HexIssue) -> DecodeError {
    debug!("Rejected hex input at position {}: {}", position, issue);
    DecodeError::MalformedHex { position, issue }
}

/// Parse hex and segment the resulting transaction
pub fn decode_hex(input: &str) -> DecodeResult<DecodedTransaction> {
    segment_transaction(parse_hex(input)?)
}
