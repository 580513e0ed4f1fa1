//! Structured sub-records for input and output segments
//!
//! Each record keeps the decoded field values alongside the byte ranges of
//! its sub-fields. The sub-field ranges tile the enclosing segment's range
//! with no gaps, so a viewer can highlight e.g. just the sequence number.

use bitcoin::hashes::Hash;
use serde::{Deserialize, Serialize};

use super::{ByteRange, ScriptType};

/// Previous output index used by coinbase inputs
pub const COINBASE_VOUT: u32 = 0xffff_ffff;

/// Locktime values below this are block heights, at or above are unix times
pub const LOCKTIME_THRESHOLD: u32 = 500_000_000;

/// Fields nested inside an input or output segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    PrevTxid,
    PrevVout,
    UnlockingScriptLength,
    UnlockingScript,
    Sequence,
    Value,
    LockingScriptLength,
    LockingScript,
}

/// A labelled sub-range within an input or output segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubField {
    pub kind: FieldKind,
    pub range: ByteRange,
}

/// Decoded transaction input (outpoint, unlocking script, sequence)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputRecord {
    /// Previous transaction id in wire (internal) byte order
    #[serde(serialize_with = "hex::serde::serialize")]
    pub prev_txid: [u8; 32],
    pub prev_vout: u32,
    pub script_len: u64,
    #[serde(serialize_with = "hex::serde::serialize")]
    pub script_sig: Vec<u8>,
    pub sequence: u32,
    pub fields: Vec<SubField>,
}

impl InputRecord {
    /// Previous txid in the reversed byte order block explorers display
    pub fn prev_txid_display(&self) -> String {
        bitcoin::Txid::from_byte_array(self.prev_txid).to_string()
    }

    /// Coinbase inputs spend the null outpoint
    pub fn is_coinbase(&self) -> bool {
        self.prev_vout == COINBASE_VOUT && self.prev_txid.iter().all(|b| *b == 0)
    }

    pub fn sequence_flags(&self) -> SequenceFlags {
        SequenceFlags::from_consensus(self.sequence)
    }
}

/// Decoded transaction output (value, locking script)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    /// Amount in satoshis
    pub value: u64,
    pub script_len: u64,
    #[serde(serialize_with = "hex::serde::serialize")]
    pub script_pubkey: Vec<u8>,
    pub fields: Vec<SubField>,
}

impl OutputRecord {
    pub fn script_type(&self) -> ScriptType {
        ScriptType::classify(&self.script_pubkey)
    }
}

/// What a sequence number signals under BIP68/BIP125
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceFlags {
    pub is_final: bool,
    pub signals_rbf: bool,
    pub relative_locktime: bool,
}

impl SequenceFlags {
    pub fn from_consensus(sequence: u32) -> Self {
        let sequence = bitcoin::Sequence(sequence);
        Self {
            is_final: sequence.is_final(),
            signals_rbf: sequence.is_rbf(),
            relative_locktime: sequence.is_relative_lock_time(),
        }
    }
}

/// Interpretation of the transaction-level locktime field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LocktimeMeaning {
    /// Zero: no absolute time lock
    Disabled,
    BlockHeight(u32),
    UnixTime(u32),
}

impl LocktimeMeaning {
    pub fn from_consensus(locktime: u32) -> Self {
        if locktime == 0 {
            return LocktimeMeaning::Disabled;
        }
        match bitcoin::absolute::LockTime::from_consensus(locktime) {
            bitcoin::absolute::LockTime::Blocks(height) => {
                LocktimeMeaning::BlockHeight(height.to_consensus_u32())
            }
            bitcoin::absolute::LockTime::Seconds(time) => {
                LocktimeMeaning::UnixTime(time.to_consensus_u32())
            }
        }
    }
}

impl std::fmt::Display for LocktimeMeaning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocktimeMeaning::Disabled => write!(f, "no absolute time lock"),
            LocktimeMeaning::BlockHeight(height) => write!(f, "block height {}", height),
            LocktimeMeaning::UnixTime(time) => write!(f, "unix time {}", time),
        }
    }
}
