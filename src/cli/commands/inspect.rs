use crate::cli::render;
use crate::config::{AppConfig, DisplayConfig};
use crate::errors::{AppError, AppResult};
use crate::interaction::InteractionStore;
use clap::Args;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{info, warn};

use super::decode::decode;
use super::TxSource;

const HELP: &str = "Commands: <index> toggle a segment, load <hex> decode another transaction, q quit";

/// Interactively expand and collapse segments of a transaction
#[derive(Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub source: TxSource,
}

impl InspectCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        // Commands arrive on stdin, so the transaction must come from an
        // argument or a file
        if self.source.hex.is_none() && self.source.file.is_none() {
            return Err(AppError::InvalidData(
                "inspect reads commands from stdin; pass the transaction hex as an argument or with --file"
                    .to_string(),
            ));
        }
        let hex_input = self.source.read()?;
        let tx = match decode(&hex_input) {
            Ok(tx) => tx,
            Err((bytes, err)) => {
                print!(
                    "{}",
                    render::render_failure_text(&hex_input, bytes.as_deref(), &err, &config.display)
                );
                return Err(err.into());
            }
        };

        let store = InteractionStore::new(Arc::new(tx));
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        run_session(store, stdin.lock(), stdout.lock(), &config.display)
    }
}

/// One interactive session: render, read a command, apply it, re-render.
/// Bad commands are reported and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    mut store: InteractionStore,
    input: R,
    mut output: W,
    display: &DisplayConfig,
) -> AppResult<()> {
    write_view(&store, &mut output, display)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        if command == "q" || command == "quit" {
            break;
        }

        if let Some(hex_input) = command.strip_prefix("load ") {
            match decode(hex_input.trim()) {
                Ok(tx) => {
                    info!("Loaded transaction {}", tx.txid());
                    store.load(Arc::new(tx));
                }
                Err((bytes, err)) => {
                    warn!("Load failed: {}", err);
                    write!(
                        output,
                        "{}",
                        render::render_failure_text(hex_input.trim(), bytes.as_deref(), &err, display)
                    )?;
                    writeln!(output, "{}", HELP)?;
                    continue;
                }
            }
        } else if let Ok(index) = command.parse::<usize>() {
            if let Err(err) = store.toggle(index) {
                warn!("Toggle rejected: {}", err);
                writeln!(output, "{}", err)?;
                continue;
            }
        } else {
            writeln!(output, "{}", HELP)?;
            continue;
        }

        write_view(&store, &mut output, display)?;
    }

    output.flush()?;
    Ok(())
}

fn write_view<W: Write>(store: &InteractionStore, output: &mut W, display: &DisplayConfig) -> AppResult<()> {
    let views = store.view_model();
    write!(
        output,
        "{}",
        render::render_text(store.transaction(), &views, display)
    )?;
    writeln!(output, "{}", HELP)?;
    Ok(())
}
