use crate::cli::render;
use crate::config::{AppConfig, OutputFormat};
use crate::decoder::{self, DecodeError, DecodedTransaction};
use crate::errors::AppResult;
use crate::interaction::InteractionStore;
use clap::Args;
use std::sync::Arc;
use tracing::{info, warn};

use super::TxSource;

/// Decode a raw transaction into labelled segments
#[derive(Args)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub source: TxSource,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Expand the segment at this index (repeatable)
    #[arg(long = "expand", value_name = "INDEX")]
    pub expand: Vec<usize>,

    /// Expand every segment
    #[arg(long, conflicts_with = "expand")]
    pub expand_all: bool,
}

impl DecodeCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        let hex_input = self.source.read()?;
        let format = self.format.unwrap_or(config.display.format);

        match decode(&hex_input) {
            Ok(tx) => {
                let store = self.build_store(tx)?;
                let tx = store.transaction();
                info!(
                    "Decoded transaction {} into {} segments",
                    tx.txid(),
                    tx.segment_count()
                );
                let views = store.view_model();
                match format {
                    OutputFormat::Text => {
                        print!("{}", render::render_text(tx, &views, &config.display))
                    }
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::to_string_pretty(&render::render_json(tx, &views))?
                    ),
                }
                Ok(())
            }
            Err((bytes, err)) => {
                warn!("Failed to decode transaction: {}", err);
                match format {
                    OutputFormat::Text => print!(
                        "{}",
                        render::render_failure_text(&hex_input, bytes.as_deref(), &err, &config.display)
                    ),
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::to_string_pretty(&render::render_failure_json(&hex_input, &err))?
                    ),
                }
                Err(err.into())
            }
        }
    }

    /// Apply the requested expansions as toggle commands
    fn build_store(&self, tx: DecodedTransaction) -> AppResult<InteractionStore> {
        let mut store = InteractionStore::new(Arc::new(tx));

        let mut indices: Vec<usize> = if self.expand_all {
            (0..store.view_state().len()).collect()
        } else {
            self.expand.clone()
        };
        // Repeating an index would toggle it back closed
        indices.sort_unstable();
        indices.dedup();

        for index in indices {
            store.toggle(index)?;
        }
        Ok(store)
    }
}

/// Decode, handing back the parsed bytes (when the hex was valid) on
/// failure so partial segments can still be shown
pub(crate) fn decode(hex_input: &str) -> Result<DecodedTransaction, (Option<Vec<u8>>, DecodeError)> {
    let bytes = decoder::parse_hex(hex_input).map_err(|err| (None, err))?;
    decoder::segment_transaction(bytes).map_err(|err| {
        // The bytes moved into the segmenter; hex already validated once
        (decoder::parse_hex(hex_input).ok(), err)
    })
}
