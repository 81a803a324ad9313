pub mod cli;
pub mod toml_config;

use crate::core::{GeneratorParams, ParamsProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HJSON_PATH: &str = "data/tagger_regs.hjson";

#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "tagger-regs"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Generate the tagger register description (Hjson) from partition parameters")
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Register bit width, same as `RegWidth` in the RTL (e.g. 32)
    pub reg_width: u32,

    /// Number of partitions, same as `MaxPartition` in the RTL (e.g. 16)
    pub max_partition: u32,

    /// Partition ID bit length (e.g. 8)
    pub patid_len: u32,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_HJSON_PATH))]
    pub output: String,

    /// Also write C register defines to this path
    #[cfg_attr(feature = "cli", arg(long))]
    pub header: Option<String>,

    /// Print the rendered document instead of writing it
    #[cfg_attr(feature = "cli", arg(long))]
    pub dry_run: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ParamsProvider for CliConfig {
    fn params(&self) -> GeneratorParams {
        GeneratorParams::new(self.reg_width, self.max_partition, self.patid_len)
    }

    fn hjson_path(&self) -> &str {
        &self.output
    }

    fn header_path(&self) -> Option<&str> {
        self.header.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.params().validate()?;
        validate_path("output", &self.output)?;
        if let Some(header) = &self.header {
            validate_path("header", header)?;
        }
        Ok(())
    }
}
