use crate::domain::model::{DerivedCounts, GeneratorParams, RenderedOutput};
use crate::utils::error::Result;

pub trait Storage {
    /// Replace the file at `path` with `data`.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ParamsProvider {
    fn params(&self) -> GeneratorParams;
    fn hjson_path(&self) -> &str;
    fn header_path(&self) -> Option<&str>;
}

pub trait Generator {
    fn derive(&self) -> Result<DerivedCounts>;
    fn render(&self, counts: &DerivedCounts) -> Result<RenderedOutput>;
    /// Returns the paths that were written.
    fn write(&self, output: &RenderedOutput) -> Result<Vec<String>>;
}
