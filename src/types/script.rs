//! Locking script classification
//!
//! Scripts are opaque bytes to the segmenter; this module only recognises
//! the standard templates so a viewer can name what an output pays to.

use serde::{Deserialize, Serialize};

/// Standard output script templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    /// Pay-to-PubKey-Hash (standard address)
    P2PKH,
    /// Pay-to-Script-Hash
    P2SH,
    /// Pay-to-Witness-PubKey-Hash (SegWit)
    P2WPKH,
    /// Pay-to-Witness-Script-Hash (SegWit)
    P2WSH,
    /// Pay-to-Taproot
    P2TR,
    /// OP_RETURN data carrier
    #[serde(rename = "op_return")]
    OpReturn,
    /// Anything else, including empty scripts
    Nonstandard,
}

impl ScriptType {
    pub fn classify(script_bytes: &[u8]) -> Self {
        let script = bitcoin::Script::from_bytes(script_bytes);
        if script.is_p2pkh() {
            ScriptType::P2PKH
        } else if script.is_p2sh() {
            ScriptType::P2SH
        } else if script.is_p2wpkh() {
            ScriptType::P2WPKH
        } else if script.is_p2wsh() {
            ScriptType::P2WSH
        } else if script.is_p2tr() {
            ScriptType::P2TR
        } else if script.is_op_return() {
            ScriptType::OpReturn
        } else {
            ScriptType::Nonstandard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::P2PKH => "p2pkh",
            ScriptType::P2SH => "p2sh",
            ScriptType::P2WPKH => "p2wpkh",
            ScriptType::P2WSH => "p2wsh",
            ScriptType::P2TR => "p2tr",
            ScriptType::OpReturn => "op_return",
            ScriptType::Nonstandard => "nonstandard",
        }
    }
}

impl std::fmt::Display for ScriptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable opcode listing for a script
pub fn script_asm(script_bytes: &[u8]) -> String {
    bitcoin::Script::from_bytes(script_bytes).to_asm_string()
}
