//! Bitcoin Transaction Anatomy Explorer - Type System
//!
//! - `segment`: Segment kinds, byte ranges and the decoded value per segment
//! - `records`: Input/output sub-records with their sub-field ranges
//! - `script`: Locking script classification

mod records;
pub mod script;
mod segment;

pub use records::*;
pub use script::ScriptType;
pub use segment::*;
