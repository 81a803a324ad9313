use anyhow::{Context, Result};
use clap::Parser;
use tagger_regs::core::ParamsProvider;
use tagger_regs::utils::{logger, validation::Validate};
use tagger_regs::{GeneratorEngine, LocalStorage, RegisterGenerator, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-regs")]
#[command(about = "Generate the tagger register description from a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "regs-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the derived counts and rendered document without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置 (日誌格式由配置決定，所以先載入)
    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if config.json_logging() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based register generator");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    config.validate().context("Configuration validation failed")?;
    display_config_summary(&config);

    let engine = GeneratorEngine::new(RegisterGenerator::new(LocalStorage::new("."), config));

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let output = engine.preview().context("Failed to render registers")?;
        print!("{}", output.hjson);
        return Ok(());
    }

    let written = engine.run().context("Register generation failed")?;
    for path in written {
        println!("📁 Output saved to: {}", path);
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    let params = config.params();
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   RegWidth: {}", params.reg_width);
    tracing::info!("   MaxPartition: {}", params.max_partition);
    tracing::info!("   PatidLen: {}", params.patid_len);
    tracing::info!("   Hjson output: {}", config.hjson_path());
    if let Some(header) = config.header_path() {
        tracing::info!("   C header output: {}", header);
    }
}
