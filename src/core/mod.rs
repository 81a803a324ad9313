pub mod generator;
pub mod header;
pub mod hjson;
pub mod params;

pub use crate::domain::model::{DerivedCounts, GeneratorParams, RenderedOutput};
pub use crate::domain::ports::{Generator, ParamsProvider, Storage};
pub use crate::utils::error::Result;
