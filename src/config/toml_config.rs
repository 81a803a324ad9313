use crate::config::DEFAULT_HJSON_PATH;
use crate::core::{GeneratorParams, ParamsProvider};
use crate::utils::error::{RegGenError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub params: GeneratorParams,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_hjson_path")]
    pub hjson_path: String,
    pub header_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            hjson_path: default_hjson_path(),
            header_path: None,
        }
    }
}

fn default_hjson_path() -> String {
    DEFAULT_HJSON_PATH.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "compact" (default) or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RegGenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 `max_partition = ${MAX_PARTITION}`)，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

impl ParamsProvider for TomlConfig {
    fn params(&self) -> GeneratorParams {
        self.params
    }

    fn hjson_path(&self) -> &str {
        &self.output.hjson_path
    }

    fn header_path(&self) -> Option<&str> {
        self.output.header_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.params.validate()?;
        validate_path("output.hjson_path", &self.output.hjson_path)?;
        if let Some(header) = &self.output.header_path {
            validate_path("output.header_path", header)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[params]
reg_width = 32
max_partition = 16
patid_len = 8

[output]
hjson_path = "out/tagger_regs.hjson"
header_path = "out/tagger_regs.h"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.params, GeneratorParams::new(32, 16, 8));
        assert_eq!(config.hjson_path(), "out/tagger_regs.hjson");
        assert_eq!(config.header_path(), Some("out/tagger_regs.h"));
        assert!(!config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_section_is_optional() {
        let toml_content = r#"
[params]
reg_width = 32
max_partition = 8
patid_len = 4

[logging]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.hjson_path(), DEFAULT_HJSON_PATH);
        assert_eq!(config.header_path(), None);
        assert!(config.json_logging());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TAGGER_TEST_MAX_PARTITION", "24");

        let toml_content = r#"
[params]
reg_width = 32
max_partition = ${TAGGER_TEST_MAX_PARTITION}
patid_len = 8
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.params.max_partition, 24);

        std::env::remove_var("TAGGER_TEST_MAX_PARTITION");
    }

    #[test]
    fn test_missing_params_is_config_error() {
        let toml_content = r#"
[params]
reg_width = 32
patid_len = 8
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, RegGenError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[params]
reg_width = 32
max_partition = 16
patid_len = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[params]
reg_width = 32
max_partition = 16
patid_len = 8
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.params.patid_len, 8);
    }
}
