use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegGenError {
    #[error("Invalid argument '{field}' = '{value}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Arithmetic error: {message}")]
    Arithmetic { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Arithmetic,
    Configuration,
    Render,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 使用者輸入錯誤，修正參數後重跑即可
    High,
    /// 檔案系統或序列化失敗
    Critical,
}

impl RegGenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegGenError::InvalidArgument { .. } => ErrorCategory::Argument,
            RegGenError::Arithmetic { .. } => ErrorCategory::Arithmetic,
            RegGenError::ConfigError { .. } => ErrorCategory::Configuration,
            RegGenError::Render { .. } | RegGenError::FormatError(_) => ErrorCategory::Render,
            RegGenError::IoError(_) | RegGenError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 對應的程序退出碼 (clap 的參數錯誤自行以 2 結束)
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Argument => {
                "Pass positive integers with PATID_LEN no larger than REG_WIDTH (e.g. 32 16 8)"
            }
            ErrorCategory::Arithmetic => {
                "PATID_LEN must be non-zero and fit at least once into REG_WIDTH"
            }
            ErrorCategory::Configuration => {
                "Check the TOML file: [params] needs reg_width, max_partition and patid_len"
            }
            ErrorCategory::Render => "Use a register width that is a multiple of 8",
            ErrorCategory::System => "Check that the output directory exists and is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegGenError::InvalidArgument { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            RegGenError::Arithmetic { message } => {
                format!("Cannot derive register counts: {}", message)
            }
            RegGenError::ConfigError { message } => format!("Bad configuration: {}", message),
            RegGenError::Render { message } => format!("Cannot render output: {}", message),
            RegGenError::FormatError(e) => format!("Cannot render output: {}", e),
            RegGenError::IoError(e) => format!("Failed to write output: {}", e),
            RegGenError::SerializationError(e) => format!("Failed to serialize registers: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegGenError>;
