use crate::catalog;
use crate::config::{AppConfig, OutputFormat};
use crate::errors::AppResult;
use clap::Args;

/// List the reference text for every segment kind
#[derive(Args)]
pub struct CatalogCommand {
    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl CatalogCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        match self.format.unwrap_or(config.display.format) {
            OutputFormat::Text => {
                for entry in catalog::entries() {
                    println!("{} ({})", entry.label, entry.kind);
                    println!("  {}\n", entry.description);
                }
            }
            OutputFormat::Json => {
                let entries: Vec<_> = catalog::entries().collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
        }
        Ok(())
    }
}
