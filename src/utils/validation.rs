use crate::domain::model::GeneratorParams;
use crate::utils::error::{RegGenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RegGenError::InvalidArgument {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegGenError::InvalidArgument {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(RegGenError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RegGenError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

impl Validate for GeneratorParams {
    fn validate(&self) -> Result<()> {
        validate_positive_number("reg_width", self.reg_width, 1)?;
        validate_positive_number("max_partition", self.max_partition, 1)?;
        // PatID 至少要能在一個暫存器中放下一份
        validate_range("patid_len", self.patid_len, 1, self.reg_width)?;
        Ok(())
    }
}
