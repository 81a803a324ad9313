use clap::Parser;
use tagger_regs::utils::{logger, validation::Validate};
use tagger_regs::{CliConfig, GeneratorEngine, LocalStorage, RegGenError, RegisterGenerator};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tagger-regs");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let dry_run = config.dry_run;
    let storage = LocalStorage::new(".");
    let engine = GeneratorEngine::new(RegisterGenerator::new(storage, config));

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        match engine.preview() {
            Ok(output) => {
                print!("{}", output.hjson);
                if let Some(header) = output.header {
                    print!("\n{}", header);
                }
            }
            Err(e) => fail(&e),
        }
        return;
    }

    match engine.run() {
        Ok(written) => {
            tracing::info!("✅ Register description generated");
            for path in written {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &RegGenError) -> ! {
    tracing::error!(
        "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
