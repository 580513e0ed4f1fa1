//! A fully segmented transaction
//!
//! Only the segmenter constructs this type, and only after every byte has
//! been accounted for, so segment ranges always tile `bytes` exactly.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::types::{InputRecord, LocktimeMeaning, OutputRecord, Segment};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedTransaction {
    #[serde(rename = "hex", serialize_with = "hex::serde::serialize")]
    bytes: Vec<u8>,
    segments: Vec<Segment>,
    version: u32,
    locktime: u32,
}

impl DecodedTransaction {
    pub(crate) fn new(bytes: Vec<u8>, segments: Vec<Segment>, version: u32, locktime: u32) -> Self {
        Self {
            bytes,
            segments,
            version,
            locktime,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Serialised size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn raw_bytes(&self, index: usize) -> Option<&[u8]> {
        self.segment(index).map(|s| s.raw_bytes(&self.bytes))
    }

    pub fn raw_hex(&self, index: usize) -> Option<String> {
        self.raw_bytes(index).map(hex::encode)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn locktime(&self) -> u32 {
        self.locktime
    }

    pub fn locktime_meaning(&self) -> LocktimeMeaning {
        LocktimeMeaning::from_consensus(self.locktime)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &InputRecord> {
        self.segments.iter().filter_map(Segment::as_input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &OutputRecord> {
        self.segments.iter().filter_map(Segment::as_output)
    }

    /// Sum of output values in satoshis, saturating on nonsensical inputs
    pub fn total_output_value(&self) -> u64 {
        self.outputs()
            .fold(0u64, |total, output| total.saturating_add(output.value))
    }

    pub fn is_coinbase(&self) -> bool {
        let mut inputs = self.inputs();
        matches!((inputs.next(), inputs.next()), (Some(input), None) if input.is_coinbase())
    }

    /// Transaction id: double SHA-256 of the legacy serialisation, shown in
    /// reversed byte order
    pub fn txid(&self) -> String {
        let first = Sha256::digest(&self.bytes);
        let mut hash = Sha256::digest(first);
        hash.reverse();
        hex::encode(hash)
    }
}
