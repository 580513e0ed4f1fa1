//! Walks a legacy transaction field by field, producing one segment per
//! top-level field.
//!
//! Field order: version, input count, inputs, output count, outputs,
//! locktime. Every byte of the input ends up in exactly one segment, and
//! inside each input/output every byte ends up in exactly one sub-field.

use tracing::{debug, trace};

use super::cursor::ByteCursor;
use super::error::{CursorError, DecodeError, DecodeResult};
use super::transaction::DecodedTransaction;
use super::varint::read_varint;
use crate::types::{
    ByteRange, DecodedValue, FieldKind, InputRecord, OutputRecord, Segment, SegmentKind, SubField,
};

/// Segment a serialised legacy transaction
///
/// Pure: the same bytes always produce the same result.
pub fn segment_transaction(bytes: Vec<u8>) -> DecodeResult<DecodedTransaction> {
    let decoded = Segmenter::new(&bytes).run()?;
    debug!(
        "Segmented {} bytes into {} segments",
        bytes.len(),
        decoded.segments.len()
    );
    Ok(DecodedTransaction::new(
        bytes,
        decoded.segments,
        decoded.version,
        decoded.locktime,
    ))
}

struct Segmented {
    segments: Vec<Segment>,
    version: u32,
    locktime: u32,
}

struct Segmenter<'a> {
    cursor: ByteCursor<'a>,
    segments: Vec<Segment>,
}

impl<'a> Segmenter<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(bytes),
            segments: Vec::new(),
        }
    }

    fn run(mut self) -> DecodeResult<Segmented> {
        let start = self.cursor.offset();
        let version = self.read(SegmentKind::Version, |c| c.read_u32_le())?;
        self.push(start, 0, DecodedValue::Version(version));
        debug!("Transaction version {}", version);

        let start = self.cursor.offset();
        let input_count = self.read(SegmentKind::InputCount, read_varint)?.value;
        self.push(start, 0, DecodedValue::InputCount(input_count));
        debug!("Expecting {} input(s)", input_count);

        // Counts come from untrusted input and are never used to pre-allocate;
        // an absurd count simply runs out of bytes
        for ordinal in 0..input_count {
            let start = self.cursor.offset();
            let input = self.read(SegmentKind::Input, read_input)?;
            trace!(
                "Input {} spends {}:{}",
                ordinal,
                input.prev_txid_display(),
                input.prev_vout
            );
            self.push(start, ordinal as usize, DecodedValue::Input(input));
        }

        let start = self.cursor.offset();
        let output_count = self.read(SegmentKind::OutputCount, read_varint)?.value;
        self.push(start, 0, DecodedValue::OutputCount(output_count));
        debug!("Expecting {} output(s)", output_count);

        for ordinal in 0..output_count {
            let start = self.cursor.offset();
            let output = self.read(SegmentKind::Output, read_output)?;
            trace!("Output {} carries {} sats", ordinal, output.value);
            self.push(start, ordinal as usize, DecodedValue::Output(output));
        }

        let start = self.cursor.offset();
        let locktime = self.read(SegmentKind::Locktime, |c| c.read_u32_le())?;
        self.push(start, 0, DecodedValue::Locktime(locktime));

        if !self.cursor.is_exhausted() {
            debug!(
                "{} bytes left after locktime at offset {}",
                self.cursor.remaining(),
                self.cursor.offset()
            );
            return Err(DecodeError::TrailingData {
                offset: self.cursor.offset(),
                remaining: self.cursor.remaining(),
                partial: self.segments,
            });
        }

        Ok(Segmented {
            segments: self.segments,
            version,
            locktime,
        })
    }

    /// Read one field of `kind`. On failure the segments gathered so far
    /// move into the error.
    fn read<T>(
        &mut self,
        kind: SegmentKind,
        read: impl FnOnce(&mut ByteCursor<'a>) -> Result<T, CursorError>,
    ) -> DecodeResult<T> {
        read(&mut self.cursor).map_err(|err| {
            debug!("Ran out of bytes reading {} at offset {}", kind, err.offset);
            DecodeError::truncated(kind, err, std::mem::take(&mut self.segments))
        })
    }

    /// Record everything consumed since `start` as one segment
    fn push(&mut self, start: usize, ordinal: usize, value: DecodedValue) {
        self.segments.push(Segment {
            range: ByteRange::new(start, self.cursor.offset()),
            ordinal,
            value,
        });
    }
}

/// Run `read` and record the bytes it consumed as a sub-field
fn field<'a, T>(
    cursor: &mut ByteCursor<'a>,
    fields: &mut Vec<SubField>,
    kind: FieldKind,
    read: impl FnOnce(&mut ByteCursor<'a>) -> Result<T, CursorError>,
) -> Result<T, CursorError> {
    let start = cursor.offset();
    let value = read(cursor)?;
    fields.push(SubField {
        kind,
        range: ByteRange::new(start, cursor.offset()),
    });
    Ok(value)
}

fn read_input(cursor: &mut ByteCursor<'_>) -> Result<InputRecord, CursorError> {
    let mut fields = Vec::with_capacity(5);
    let prev_txid = field(cursor, &mut fields, FieldKind::PrevTxid, |c| c.read_array::<32>())?;
    let prev_vout = field(cursor, &mut fields, FieldKind::PrevVout, |c| c.read_u32_le())?;
    let script_len = field(cursor, &mut fields, FieldKind::UnlockingScriptLength, read_varint)?.value;
    let script_sig = field(cursor, &mut fields, FieldKind::UnlockingScript, |c| {
        c.read_len(script_len)
    })?
    .to_vec();
    let sequence = field(cursor, &mut fields, FieldKind::Sequence, |c| c.read_u32_le())?;

    Ok(InputRecord {
        prev_txid,
        prev_vout,
        script_len,
        script_sig,
        sequence,
        fields,
    })
}

fn read_output(cursor: &mut ByteCursor<'_>) -> Result<OutputRecord, CursorError> {
    let mut fields = Vec::with_capacity(3);
    let value = field(cursor, &mut fields, FieldKind::Value, |c| c.read_u64_le())?;
    let script_len = field(cursor, &mut fields, FieldKind::LockingScriptLength, read_varint)?.value;
    let script_pubkey = field(cursor, &mut fields, FieldKind::LockingScript, |c| {
        c.read_len(script_len)
    })?
    .to_vec();

    Ok(OutputRecord {
        value,
        script_len,
        script_pubkey,
        fields,
    })
}
