use tagger_regs::core::hjson::LICENSE_PREAMBLE;
use tagger_regs::domain::model::RegisterBlock;
use tagger_regs::{CliConfig, GeneratorEngine, LocalStorage, RegGenError, RegisterGenerator};
use tempfile::TempDir;

fn cli_config(reg_width: u32, max_partition: u32, patid_len: u32, header: Option<&str>) -> CliConfig {
    CliConfig {
        reg_width,
        max_partition,
        patid_len,
        output: "data/tagger_regs.hjson".to_string(),
        header: header.map(str::to_string),
        dry_run: false,
        verbose: false,
    }
}

fn parse_document(text: &str) -> RegisterBlock {
    let body: String = text
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");
    serde_json::from_str(&body).unwrap()
}

#[test]
fn test_end_to_end_generation() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let engine = GeneratorEngine::new(RegisterGenerator::new(storage, cli_config(32, 16, 8, None)));

    let written = engine.run().unwrap();
    assert_eq!(written.len(), 1);

    let text = std::fs::read_to_string(temp_dir.path().join("data/tagger_regs.hjson")).unwrap();
    assert!(text.starts_with(LICENSE_PREAMBLE));

    let block = parse_document(&text);
    let names: Vec<&str> = block
        .registers
        .iter()
        .map(|r| r.multireg().name.as_str())
        .collect();
    assert_eq!(names, vec!["PAT_COMMIT", "PAT_ADDR", "PATID", "ADDR_CONF"]);

    let count_of = |name: &str| {
        block
            .registers
            .iter()
            .map(|r| r.multireg())
            .find(|m| m.name == name)
            .map(|m| m.count)
    };
    assert_eq!(count_of("PAT_ADDR"), Some(16));
    assert_eq!(count_of("PATID"), Some(4));
    assert_eq!(count_of("ADDR_CONF"), Some(1));
}

#[test]
fn test_header_matches_shipped_defines() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let config = cli_config(32, 8, 4, Some("include/tagger_regs.h"));
    let engine = GeneratorEngine::new(RegisterGenerator::new(storage, config));

    engine.run().unwrap();

    let generated = std::fs::read_to_string(temp_dir.path().join("include/tagger_regs.h")).unwrap();
    let expected = include_str!("fixtures/tagger_regs.h");
    assert_eq!(generated.trim_end(), expected.trim_end());
}

#[test]
fn test_failure_leaves_existing_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("data/tagger_regs.hjson");
    std::fs::create_dir_all(target.parent().unwrap()).unwrap();
    std::fs::write(&target, "previous").unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let engine = GeneratorEngine::new(RegisterGenerator::new(storage, cli_config(32, 16, 0, None)));

    let err = engine.run().unwrap_err();
    assert!(matches!(err, RegGenError::InvalidArgument { .. }));
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "previous");
}

#[test]
fn test_rerun_overwrites_previous_output() {
    let temp_dir = TempDir::new().unwrap();

    let first = GeneratorEngine::new(RegisterGenerator::new(
        LocalStorage::new(temp_dir.path()),
        cli_config(32, 17, 8, None),
    ));
    first.run().unwrap();

    let second = GeneratorEngine::new(RegisterGenerator::new(
        LocalStorage::new(temp_dir.path()),
        cli_config(32, 16, 8, None),
    ));
    second.run().unwrap();

    let text = std::fs::read_to_string(temp_dir.path().join("data/tagger_regs.hjson")).unwrap();
    let block = parse_document(&text);
    assert_eq!(block.registers[1].multireg().count, 16);
    assert_eq!(block.registers[2].multireg().count, 4);
}
