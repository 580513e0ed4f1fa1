use txp::catalog;
use txp::types::{FieldKind, SegmentKind};

#[test]
fn test_catalog_covers_closed_set_in_wire_order() {
    let kinds: Vec<SegmentKind> = catalog::entries().map(|e| e.kind).collect();
    assert_eq!(kinds, SegmentKind::ALL.to_vec());
}

#[test]
fn test_labels() {
    assert_eq!(catalog::label(SegmentKind::Version), "Version");
    assert_eq!(catalog::label(SegmentKind::InputCount), "Number of TxIns");
    assert_eq!(catalog::label(SegmentKind::OutputCount), "Number of TxOuts");
    assert_eq!(catalog::label(SegmentKind::Locktime), "Locktime");
    assert_eq!(catalog::field_label(FieldKind::Sequence), "Sequence");
}

#[test]
fn test_descriptions_mention_their_field() {
    assert!(catalog::description(SegmentKind::Version).contains("BIP68"));
    assert!(catalog::description(SegmentKind::InputCount).contains("VarInt"));
    assert!(catalog::description(SegmentKind::Locktime).contains("500,000,000"));
}

#[test]
fn test_entries_serialise() {
    let entries: Vec<_> = catalog::entries().collect();
    let json = serde_json::to_value(&entries).unwrap();
    assert_eq!(json[0]["kind"], "version");
    assert_eq!(json[5]["label"], "Locktime");
}
