pub mod catalog;
pub mod decode;
pub mod inspect;

use crate::errors::{AppError, AppResult};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Where the raw transaction hex comes from
#[derive(Args, Debug, Clone)]
pub struct TxSource {
    /// Raw transaction hex (read from --file or stdin when omitted)
    pub hex: Option<String>,

    /// Read the transaction hex from a file
    #[arg(long, conflicts_with = "hex")]
    pub file: Option<PathBuf>,
}

impl TxSource {
    /// Read the hex, trimming surrounding whitespace (trailing newlines from
    /// files and pipes). Interior whitespace is left for the decoder to reject.
    pub fn read(&self) -> AppResult<String> {
        let raw = match (&self.hex, &self.file) {
            (Some(hex), _) => hex.clone(),
            (None, Some(path)) => {
                debug!("Reading transaction hex from {}", path.display());
                std::fs::read_to_string(path)?
            }
            (None, None) => {
                debug!("Reading transaction hex from stdin");
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidData(
                "No transaction hex provided".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}
