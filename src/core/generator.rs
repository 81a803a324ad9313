use crate::core::hjson::{render_hjson, tagger_register_block};
use crate::core::header::render_header;
use crate::core::params::derive_counts;
use crate::core::{DerivedCounts, Generator, ParamsProvider, RenderedOutput, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct RegisterGenerator<S: Storage, C: ParamsProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ParamsProvider> RegisterGenerator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ParamsProvider> Generator for RegisterGenerator<S, C> {
    fn derive(&self) -> Result<DerivedCounts> {
        let params = self.config.params();
        params.validate()?;
        derive_counts(&params)
    }

    fn render(&self, counts: &DerivedCounts) -> Result<RenderedOutput> {
        let block = tagger_register_block(&self.config.params(), counts);
        let hjson = render_hjson(&block)?;

        // header 與 hjson 來自同一份描述，避免兩者不同步
        let header = match self.config.header_path() {
            Some(_) => Some(render_header(&block)?),
            None => None,
        };

        Ok(RenderedOutput { hjson, header })
    }

    fn write(&self, output: &RenderedOutput) -> Result<Vec<String>> {
        let mut written = vec![self
            .storage
            .write_file(self.config.hjson_path(), output.hjson.as_bytes())?];

        if let (Some(path), Some(header)) = (self.config.header_path(), &output.header) {
            written.push(self.storage.write_file(path, header.as_bytes())?);
        }

        Ok(written)
    }
}

pub struct GeneratorEngine<G: Generator> {
    generator: G,
}

impl<G: Generator> GeneratorEngine<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Derive, render and write. Nothing is written unless rendering succeeds.
    pub fn run(&self) -> Result<Vec<String>> {
        let output = self.preview()?;

        tracing::info!("💾 Writing output files...");
        let written = self.generator.write(&output)?;
        for path in &written {
            tracing::info!("📁 Wrote {}", path);
        }

        Ok(written)
    }

    /// 只計算與產生內容，不寫入檔案 (dry run)
    pub fn preview(&self) -> Result<RenderedOutput> {
        tracing::info!("🔢 Deriving register counts...");
        let counts = self.generator.derive()?;
        tracing::info!(
            "PATID registers: {}, ADDR_CONF registers: {} ({} PatIDs per register)",
            counts.id_register_count,
            counts.conf_register_count,
            counts.entries_per_register
        );

        tracing::info!("📝 Rendering register description...");
        let output = self.generator.render(&counts)?;
        tracing::debug!("Rendered {} bytes of Hjson", output.hjson.len());

        Ok(output)
    }
}
