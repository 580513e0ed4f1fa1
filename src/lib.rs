//! Bitcoin Transaction Anatomy Explorer
//!
//! Decodes a raw legacy transaction into byte-exact, labelled segments and
//! tracks which segments a viewer has expanded.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod errors;
pub mod interaction;
pub mod types;
pub mod utils;
