//! Fixture Registry for decoder tests
//!
//! Real legacy transactions with the facts each test needs about them.

/// Metadata for a transaction test fixture
#[derive(Debug, Clone)]
pub struct TxFixture {
    pub hex: &'static str,
    /// Display-order txid
    pub txid: &'static str,
    pub input_count: usize,
    pub output_count: usize,
    pub version: u32,
    pub locktime: u32,
    /// Human-readable description for test documentation
    pub description: &'static str,
}

impl TxFixture {
    pub fn bytes(&self) -> Vec<u8> {
        hex::decode(self.hex).unwrap()
    }

    /// Version, two counts and locktime plus one segment per input/output
    pub fn segment_count(&self) -> usize {
        4 + self.input_count + self.output_count
    }
}

/// One P2PKH input, payment + change outputs, locktime at block 410393
pub const PAYMENT_AND_CHANGE: TxFixture = TxFixture {
    hex: "0100000001813f79011acb80925dfe69b3def355fe914bd1d96a3f5f71bf8303c6a989c7d1000000006b483045022100ed81ff192e75a3fd2304004dcadb746fa5e24c5031ccfcf21320b0277457c98f02207a986d955c6e0cb35d446a89d3f56100f4d7f67801c31967743a9c8e10615bed01210349fc4e631e3624a545de3f89f5d8684c7b8138bd94bdd531d2e213bf016b278afeffffff02a135ef01000000001976a914bc3b654dca7e56b04dca18f2566cdaf02e8d9ada88ac99c39800000000001976a9141c4bc762dd5423e332166702cb75f40df79fea1288ac19430600",
    txid: "452c629d67e41baec3ac6f04fe744b4b9617f8f859c63b3002f8684e7a4fee03",
    input_count: 1,
    output_count: 2,
    version: 1,
    locktime: 410393,
    description: "Legacy P2PKH payment with change output",
};

/// Coinbase transaction paying a single P2PKH output
pub const COINBASE: TxFixture = TxFixture {
    hex: "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff5e03d71b07254d696e656420627920416e74506f6f6c20626a31312f4542312f4144362f43205914293101fabe6d6d678e2c8c34afc36896e7d9402824ed38e856676ee94bfdb0c6c4bcd8b2e5666a0400000000000000c7270000a5e00e00ffffffff01faf20b58000000001976a914338c84849423992471bffb1a54a8d9b1d69dc28a88ac00000000",
    txid: "51bdce0f8a1edd5bc023fd4de42edb63478ca67fc8a37a6e533229c17d794d3f",
    input_count: 1,
    output_count: 1,
    version: 1,
    locktime: 0,
    description: "AntPool coinbase",
};

/// Version 2, no inputs, no outputs: atypical but structurally valid
pub const EMPTY: TxFixture = TxFixture {
    hex: "02000000000000000000",
    txid: "",
    input_count: 0,
    output_count: 0,
    version: 2,
    locktime: 0,
    description: "Zero inputs and zero outputs",
};

pub const ALL: [&TxFixture; 3] = [&PAYMENT_AND_CHANGE, &COINBASE, &EMPTY];
