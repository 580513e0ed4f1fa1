//! Static reference text for every segment kind
//!
//! The lookup is an exhaustive `match` with no fallback arm: adding a
//! [`SegmentKind`] without a catalog entry does not compile.

use serde::Serialize;

use crate::types::{FieldKind, Segment, SegmentKind};

/// Display label and explanatory text for one segment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub kind: SegmentKind,
    pub label: &'static str,
    pub description: &'static str,
}

const VERSION: CatalogEntry = CatalogEntry {
    kind: SegmentKind::Version,
    label: "Version",
    description: "The version number is four bytes, little endian. Version 1 means \
        no relative time lock. Version 2 (BIP68, used with OP_CHECKSEQUENCEVERIFY \
        from BIP112) means inputs may carry a relative time lock in their sequence \
        numbers.",
};

const INPUT_COUNT: CatalogEntry = CatalogEntry {
    kind: SegmentKind::InputCount,
    label: "Number of TxIns",
    description: "A VarInt (one to nine bytes) giving the number of inputs that \
        follow. Each input consumes exactly one previous output (UTXO).",
};

const INPUT: CatalogEntry = CatalogEntry {
    kind: SegmentKind::Input,
    label: "TxIn",
    description: "Each input points at a previous transaction's output by txid and \
        output index, followed by an unlocking script and a sequence number. If the \
        unlocking script satisfies the conditions set by the previous output's \
        locking script, the value that output holds can be spent.",
};

const OUTPUT_COUNT: CatalogEntry = CatalogEntry {
    kind: SegmentKind::OutputCount,
    label: "Number of TxOuts",
    description: "A VarInt giving the number of outputs that follow.",
};

const OUTPUT: CatalogEntry = CatalogEntry {
    kind: SegmentKind::Output,
    label: "TxOut",
    description: "Each output carries an amount in satoshis (eight bytes, little \
        endian) and the locking script that controls it. A typical P2PKH payment \
        has two outputs: the payment itself and the change returned to the sender.",
};

const LOCKTIME: CatalogEntry = CatalogEntry {
    kind: SegmentKind::Locktime,
    label: "Locktime",
    description: "nLockTime sets an absolute time lock. It is four bytes, little \
        endian. The transaction stays invalid until the given block height (values \
        below 500,000,000) or unix time (values at or above) has passed. Zero \
        disables the lock.",
};

/// Catalog entry for `kind`
pub fn entry(kind: SegmentKind) -> &'static CatalogEntry {
    match kind {
        SegmentKind::Version => &VERSION,
        SegmentKind::InputCount => &INPUT_COUNT,
        SegmentKind::Input => &INPUT,
        SegmentKind::OutputCount => &OUTPUT_COUNT,
        SegmentKind::Output => &OUTPUT,
        SegmentKind::Locktime => &LOCKTIME,
    }
}

/// All entries in wire order
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    SegmentKind::ALL.iter().map(|kind| entry(*kind))
}

pub fn label(kind: SegmentKind) -> &'static str {
    entry(kind).label
}

pub fn description(kind: SegmentKind) -> &'static str {
    entry(kind).description
}

/// Label for a field nested inside an input or output
pub fn field_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::PrevTxid => "Previous txid",
        FieldKind::PrevVout => "Previous output index",
        FieldKind::UnlockingScriptLength => "Unlocking script length",
        FieldKind::UnlockingScript => "Unlocking script",
        FieldKind::Sequence => "Sequence",
        FieldKind::Value => "Value",
        FieldKind::LockingScriptLength => "Locking script length",
        FieldKind::LockingScript => "Locking script",
    }
}

/// Segment label including its position for repeated kinds, e.g. "TxIn #0"
pub fn segment_title(segment: &Segment) -> String {
    let kind = segment.kind();
    if kind.is_repeated() {
        format!("{} #{}", label(kind), segment.ordinal)
    } else {
        label(kind).to_string()
    }
}
