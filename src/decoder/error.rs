//! Decoder-specific error types

use serde::Serialize;

use crate::types::{Segment, SegmentKind};

/// Result type for decoder operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Low-level read failure raised by the byte cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("needed {needed} bytes at offset {offset}, {available} available")]
pub struct CursorError {
    pub offset: usize,
    pub needed: u64,
    pub available: usize,
}

/// Why a hex string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", content = "character", rename_all = "snake_case")]
pub enum HexIssue {
    OddLength,
    InvalidCharacter(char),
}

impl std::fmt::Display for HexIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexIssue::OddLength => write!(f, "odd number of hex digits"),
            HexIssue::InvalidCharacter(c) => write!(f, "invalid hex character {:?}", c),
        }
    }
}

/// Tag identifying a decode failure, for machine-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeErrorKind {
    MalformedHex,
    TruncatedInput,
    TrailingData,
}

/// Terminal decoding failure, anchored at an offset
///
/// `TruncatedInput` and `TrailingData` keep every segment produced before
/// the failure so a viewer can still show a partial breakdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Position is in hex characters, not bytes
    #[error("Malformed hex at position {position}: {issue}")]
    MalformedHex { position: usize, issue: HexIssue },

    #[error("Truncated input while reading {segment} at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        segment: SegmentKind,
        offset: usize,
        needed: u64,
        available: usize,
        partial: Vec<Segment>,
    },

    #[error("{remaining} trailing bytes after locktime at offset {offset}")]
    TrailingData {
        offset: usize,
        remaining: usize,
        partial: Vec<Segment>,
    },
}

impl DecodeError {
    pub(crate) fn truncated(segment: SegmentKind, err: CursorError, partial: Vec<Segment>) -> Self {
        DecodeError::TruncatedInput {
            segment,
            offset: err.offset,
            needed: err.needed,
            available: err.available,
            partial,
        }
    }

    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::MalformedHex { .. } => DecodeErrorKind::MalformedHex,
            DecodeError::TruncatedInput { .. } => DecodeErrorKind::TruncatedInput,
            DecodeError::TrailingData { .. } => DecodeErrorKind::TrailingData,
        }
    }

    /// Byte offset of the failure (hex character position for `MalformedHex`)
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::MalformedHex { position, .. } => *position,
            DecodeError::TruncatedInput { offset, .. } => *offset,
            DecodeError::TrailingData { offset, .. } => *offset,
        }
    }

    /// Segments decoded before the failure
    pub fn partial_segments(&self) -> &[Segment] {
        match self {
            DecodeError::MalformedHex { .. } => &[],
            DecodeError::TruncatedInput { partial, .. } => partial,
            DecodeError::TrailingData { partial, .. } => partial,
        }
    }
}
