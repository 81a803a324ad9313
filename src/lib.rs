pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{
    generator::{GeneratorEngine, RegisterGenerator},
    params::derive_counts,
};
pub use domain::model::{DerivedCounts, GeneratorParams};
pub use utils::error::{RegGenError, Result};
