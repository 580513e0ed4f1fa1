//! Segment types produced by the transaction segmenter
//!
//! A segment is a labelled, byte-exact slice of a serialised transaction.
//! Segments never store their bytes; they hold a [`ByteRange`] into the
//! transaction buffer so the raw view and the decoded view cannot diverge.

use serde::{Deserialize, Serialize};

use super::{InputRecord, OutputRecord};

/// The closed set of top-level fields in a legacy transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Version,
    InputCount,
    Input,
    OutputCount,
    Output,
    Locktime,
}

impl SegmentKind {
    /// Every kind, in wire order
    pub const ALL: [SegmentKind; 6] = [
        SegmentKind::Version,
        SegmentKind::InputCount,
        SegmentKind::Input,
        SegmentKind::OutputCount,
        SegmentKind::Output,
        SegmentKind::Locktime,
    ];

    /// Convert to stable string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Version => "version",
            SegmentKind::InputCount => "input_count",
            SegmentKind::Input => "input",
            SegmentKind::OutputCount => "output_count",
            SegmentKind::Output => "output",
            SegmentKind::Locktime => "locktime",
        }
    }

    /// Whether this kind can occur more than once per transaction
    pub fn is_repeated(&self) -> bool {
        matches!(self, SegmentKind::Input | SegmentKind::Output)
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open `[start, end)` offsets into the transaction bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "byte range start {} > end {}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice `bytes` by this range. Panics if the range lies outside `bytes`,
    /// which can only happen when pairing a range with the wrong buffer.
    pub fn slice<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        &bytes[self.start..self.end]
    }
}

/// Kind-specific semantic value of a segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DecodedValue {
    Version(u32),
    InputCount(u64),
    Input(InputRecord),
    OutputCount(u64),
    Output(OutputRecord),
    Locktime(u32),
}

impl DecodedValue {
    pub fn kind(&self) -> SegmentKind {
        match self {
            DecodedValue::Version(_) => SegmentKind::Version,
            DecodedValue::InputCount(_) => SegmentKind::InputCount,
            DecodedValue::Input(_) => SegmentKind::Input,
            DecodedValue::OutputCount(_) => SegmentKind::OutputCount,
            DecodedValue::Output(_) => SegmentKind::Output,
            DecodedValue::Locktime(_) => SegmentKind::Locktime,
        }
    }
}

/// One decoded top-level field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub range: ByteRange,
    /// Position among segments of the same kind (0 for singletons)
    pub ordinal: usize,
    #[serde(flatten)]
    pub value: DecodedValue,
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        self.value.kind()
    }

    /// The exact bytes this segment was decoded from
    pub fn raw_bytes<'a>(&self, tx_bytes: &'a [u8]) -> &'a [u8] {
        self.range.slice(tx_bytes)
    }

    pub fn raw_hex(&self, tx_bytes: &[u8]) -> String {
        hex::encode(self.raw_bytes(tx_bytes))
    }

    pub fn as_input(&self) -> Option<&InputRecord> {
        match &self.value {
            DecodedValue::Input(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_output(&self) -> Option<&OutputRecord> {
        match &self.value {
            DecodedValue::Output(record) => Some(record),
            _ => None,
        }
    }
}
