//! Import settings.
//!
//! Built-in defaults, overlaid by an optional TOML file, overlaid by
//! `STATION_NORMALIZER_*` environment variables. Command line flags are
//! applied on top by the CLI.

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{DATE_FORMAT, DEFAULT_CHUNK_SIZE, DEFAULT_DELIMITER, ENV_PREFIX};
use chrono::NaiveDate;
use ::config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Single ASCII character placed between output fields.
    pub delimiter: String,

    pub write_header: bool,

    /// Worker threads for parsing, 0 = one per CPU.
    pub max_workers: usize,

    /// Lines handed to a worker at a time.
    pub chunk_size: usize,

    /// `YYYY-MM-DD` stamped into `last_updated` instead of the source default.
    pub last_updated: Option<String>,

    /// Memory-map the input file instead of buffered reads.
    pub use_mmap: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            write_header: false,
            max_workers: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            last_updated: None,
            use_mmap: false,
        }
    }
}

impl ImportConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            let name = path.to_str().ok_or_else(|| {
                ProcessingError::Config(format!("Config path is not UTF-8: {}", path.display()))
            })?;
            builder = builder.add_source(File::new(name, FileFormat::Toml).required(true));
        }

        builder = builder.add_source(env.try_parsing(true));

        let config: ImportConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(?config, "Loaded import configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.delimiter_char()?;

        if self.chunk_size == 0 {
            return Err(ProcessingError::Config(
                "chunk_size must be greater than zero".to_string(),
            ));
        }

        if let Some(date) = &self.last_updated {
            NaiveDate::parse_from_str(date, DATE_FORMAT)?;
        }

        Ok(())
    }

    pub fn delimiter_char(&self) -> Result<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Ok(c),
            _ => Err(ProcessingError::Config(format!(
                "Delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    pub fn effective_workers(&self) -> usize {
        if self.max_workers == 0 {
            num_cpus::get()
        } else {
            self.max_workers
        }
    }
}
