use anyhow::Result;
use txp::decoder::{decode_hex, segment_transaction, DecodeError, DecodeErrorKind, HexIssue};
use txp::types::{ByteRange, DecodedValue, FieldKind, SegmentKind};

use crate::common::assertion_helpers::{assert_round_trip, assert_total_coverage};
use crate::common::fixture_registry::{COINBASE, EMPTY, PAYMENT_AND_CHANGE};

#[test]
fn test_fixture_segment_order_and_ranges() -> Result<()> {
    let tx = decode_hex(PAYMENT_AND_CHANGE.hex)?;
    let layout: Vec<(SegmentKind, usize, usize)> = tx
        .segments()
        .iter()
        .map(|s| (s.kind(), s.range.start, s.range.end))
        .collect();
    assert_eq!(
        layout,
        vec![
            (SegmentKind::Version, 0, 4),
            (SegmentKind::InputCount, 4, 5),
            (SegmentKind::Input, 5, 153),
            (SegmentKind::OutputCount, 153, 154),
            (SegmentKind::Output, 154, 188),
            (SegmentKind::Output, 188, 222),
            (SegmentKind::Locktime, 222, 226),
        ]
    );
    Ok(())
}

#[test]
fn test_fixture_decoded_values() -> Result<()> {
    let tx = decode_hex(PAYMENT_AND_CHANGE.hex)?;
    let segments = tx.segments();

    assert_eq!(segments[0].value, DecodedValue::Version(1));
    assert_eq!(segments[1].value, DecodedValue::InputCount(1));
    assert_eq!(segments[3].value, DecodedValue::OutputCount(2));
    assert_eq!(segments[6].value, DecodedValue::Locktime(0x0006_4319));
    assert_eq!(tx.locktime(), 410_393);

    let input = segments[2].as_input().unwrap();
    assert_eq!(
        input.prev_txid_display(),
        "d1c789a9c60383bf715f3f6ad9d14b91fe55f3deb369fe5d9280cb1a01793f81"
    );
    assert_eq!(input.prev_vout, 0);
    assert_eq!(input.script_len, 0x6b);
    assert_eq!(input.script_sig.len(), 0x6b);
    assert_eq!(input.sequence, 0xffff_fffe);

    let values: Vec<u64> = tx.outputs().map(|o| o.value).collect();
    assert_eq!(values, vec![32_454_049, 10_011_545]);
    assert_eq!(segments[4].ordinal, 0);
    assert_eq!(segments[5].ordinal, 1);
    Ok(())
}

#[test]
fn test_input_sub_field_ranges() {
    let tx = decode_hex(PAYMENT_AND_CHANGE.hex).unwrap();
    let input = tx.segments()[2].as_input().unwrap();
    let fields: Vec<(FieldKind, ByteRange)> = input.fields.iter().map(|f| (f.kind, f.range)).collect();
    assert_eq!(
        fields,
        vec![
            (FieldKind::PrevTxid, ByteRange::new(5, 37)),
            (FieldKind::PrevVout, ByteRange::new(37, 41)),
            (FieldKind::UnlockingScriptLength, ByteRange::new(41, 42)),
            (FieldKind::UnlockingScript, ByteRange::new(42, 149)),
            (FieldKind::Sequence, ByteRange::new(149, 153)),
        ]
    );
}

#[test]
fn test_coverage_and_round_trip_for_all_fixtures() {
    for fixture in crate::common::fixture_registry::ALL {
        let tx = decode_hex(fixture.hex).unwrap();
        assert_eq!(tx.segment_count(), fixture.segment_count(), "{}", fixture.description);
        assert_eq!(tx.version(), fixture.version, "{}", fixture.description);
        assert_eq!(tx.locktime(), fixture.locktime, "{}", fixture.description);
        assert_total_coverage(&tx);
        assert_round_trip(&tx, &fixture.bytes());
    }
}

#[test]
fn test_decoding_is_idempotent() {
    let first = decode_hex(COINBASE.hex).unwrap();
    let second = segment_transaction(COINBASE.bytes()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_coinbase_input() {
    let tx = decode_hex(COINBASE.hex).unwrap();
    assert!(tx.is_coinbase());
    let input = tx.inputs().next().unwrap();
    assert!(input.is_coinbase());
    assert_eq!(input.script_len, 0x5e);
    assert_eq!(tx.total_output_value(), 1_477_178_106);
}

#[test]
fn test_trailing_byte_after_valid_transaction() {
    let err = decode_hex(&format!("{}00", PAYMENT_AND_CHANGE.hex)).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::TrailingData);
    assert_eq!(err.offset(), 226);
    assert_eq!(err.partial_segments().len(), 7);
    assert!(matches!(err, DecodeError::TrailingData { remaining: 1, .. }));
}

#[test]
fn test_truncation_at_every_cut_keeps_prefix_segments() {
    let bytes = PAYMENT_AND_CHANGE.bytes();
    let complete = segment_transaction(bytes.clone()).unwrap();

    for cut in 0..bytes.len() {
        let err = segment_transaction(bytes[..cut].to_vec()).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TruncatedInput, "cut at {}", cut);

        // Every retained segment is complete and identical to the full decode
        let partial = err.partial_segments();
        assert_eq!(partial, &complete.segments()[..partial.len()], "cut at {}", cut);
        let covered = partial.last().map_or(0, |s| s.range.end);
        assert!(covered <= cut, "cut at {}", cut);
        assert!(err.offset() >= covered && err.offset() <= cut, "cut at {}", cut);
    }
}

#[test]
fn test_truncated_locktime() {
    let hex_str = &EMPTY.hex[..EMPTY.hex.len() - 2];
    match decode_hex(hex_str).unwrap_err() {
        DecodeError::TruncatedInput {
            segment,
            offset,
            needed,
            available,
            partial,
        } => {
            assert_eq!(segment, SegmentKind::Locktime);
            assert_eq!(offset, 6);
            assert_eq!(needed, 4);
            assert_eq!(available, 3);
            assert_eq!(partial.len(), 3);
        }
        other => panic!("expected TruncatedInput, got {:?}", other),
    }
}

#[test]
fn test_malformed_hex_produces_no_segments() {
    let odd = decode_hex(&PAYMENT_AND_CHANGE.hex[1..]).unwrap_err();
    assert!(matches!(
        odd,
        DecodeError::MalformedHex {
            issue: HexIssue::OddLength,
            ..
        }
    ));
    assert!(odd.partial_segments().is_empty());

    let bad_char = decode_hex(&PAYMENT_AND_CHANGE.hex.replace("813f", "81g3")).unwrap_err();
    assert_eq!(
        bad_char,
        DecodeError::MalformedHex {
            position: 12,
            issue: HexIssue::InvalidCharacter('g')
        }
    );
}

#[test]
fn test_uppercase_hex_accepted() -> Result<()> {
    let upper = decode_hex(&PAYMENT_AND_CHANGE.hex.to_uppercase())?;
    let lower = decode_hex(PAYMENT_AND_CHANGE.hex)?;
    assert_eq!(upper, lower);
    Ok(())
}

#[test]
fn test_non_minimal_count_is_one_segment() {
    // input count 0 written as fd0000, output count 0 as fe00000000
    let tx = decode_hex("01000000fd0000fe0000000000000000").unwrap();
    assert_eq!(tx.segments()[1].range, ByteRange::new(4, 7));
    assert_eq!(tx.segments()[2].range, ByteRange::new(7, 12));
    assert_eq!(tx.segments()[2].value, DecodedValue::OutputCount(0));
}
