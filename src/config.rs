use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the working directory (any
/// extension the `config` crate understands, e.g. `txp.toml`)
pub const DEFAULT_CONFIG_NAME: &str = "txp";

/// Application configuration loaded from txp.toml and environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// How a decoded transaction is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    /// Show catalog descriptions for expanded segments
    pub show_descriptions: bool,
    /// Wrap raw hex at this many characters (0 disables wrapping)
    pub hex_wrap: usize,
    /// Show scripts as opcode listings when expanded
    pub script_asm: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_descriptions: true,
            hex_wrap: 64,
            script_asm: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from txp.toml (if present) and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file when
    /// given. An explicit path must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let display = DisplayConfig::default();
        let logging = LoggingConfig::default();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = Config::builder()
            // Start with default values
            .set_default("display.format", "text")?
            .set_default("display.show_descriptions", display.show_descriptions)?
            .set_default("display.hex_wrap", display.hex_wrap as i64)?
            .set_default("display.script_asm", display.script_asm)?
            .set_default("logging.level", logging.level)?
            .add_source(file)
            // TXP_DISPLAY__FORMAT=json style overrides
            .add_source(
                Environment::with_prefix("TXP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
