use crate::core::hjson::LICENSE_PREAMBLE;
use crate::domain::model::{Field, Multireg, RegisterBlock};
use crate::utils::error::{RegGenError, Result};
use std::fmt::Write;

/// Render C register defines for `block`.
///
/// Each multireg is packed `reg_width / field_width` fields per physical
/// register; registers are laid out back to back starting at offset 0.
pub fn render_header(block: &RegisterBlock) -> Result<String> {
    if block.regwidth == 0 || block.regwidth % 8 != 0 {
        return Err(RegGenError::Render {
            message: format!(
                "register width {} is not a whole number of bytes",
                block.regwidth
            ),
        });
    }

    let prefix = block.name.to_uppercase();
    let guard = format!("_{}_REG_DEFS_", prefix);
    let mut out = String::new();

    writeln!(out, "// Generated register defines for {}", block.name)?;
    writeln!(out)?;
    writeln!(out, "// Copyright information found in source file:")?;
    for line in LICENSE_PREAMBLE.lines().filter(|l| l.contains("Copyright")) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "// Licensing information found in source file:")?;
    writeln!(out, "// ")?;
    for line in LICENSE_PREAMBLE.lines().filter(|l| l.contains("SPDX-License-Identifier")) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "#ifndef {}", guard)?;
    writeln!(out, "#define {}", guard)?;
    writeln!(out)?;
    writeln!(out, "#ifdef __cplusplus")?;
    writeln!(out, "extern \"C\" {{")?;
    writeln!(out, "#endif")?;
    writeln!(out, "// Register width")?;
    writeln!(out, "#define {}_PARAM_REG_WIDTH {}", prefix, block.regwidth)?;
    writeln!(out)?;

    let mut offset = 0u64;
    for entry in &block.registers {
        offset = write_multireg(&mut out, &prefix, block.regwidth, entry.multireg(), offset)?;
    }

    writeln!(out, "#ifdef __cplusplus")?;
    writeln!(out, "}}  // extern \"C\"")?;
    writeln!(out, "#endif")?;
    writeln!(out, "#endif  // {}", guard)?;
    writeln!(out, "// End generated register defines for {}", block.name)?;

    Ok(out)
}

/// 寫出一個 multireg 並回傳下一個可用的位移
fn write_multireg(
    out: &mut String,
    prefix: &str,
    reg_width: u32,
    reg: &Multireg,
    mut offset: u64,
) -> Result<u64> {
    let field = match reg.fields.as_slice() {
        [field] => field,
        _ => {
            return Err(RegGenError::Render {
                message: format!("multireg {} must have exactly one field", reg.name),
            })
        }
    };
    let (lsb, width) = field_span(field, reg_width)?;
    let fields_per_reg = reg_width / width;
    let physical_regs = reg.count.div_ceil(fields_per_reg);

    let reg_name = format!("{}_{}", prefix, reg.name.to_uppercase());
    let field_name = field.name.to_uppercase();

    writeln!(out, "// {} (common parameters)", reg.desc)?;
    writeln!(out, "#define {}_{}_FIELD_WIDTH {}", reg_name, field_name, width)?;
    writeln!(out, "#define {}_{}_FIELDS_PER_REG {}", reg_name, field_name, fields_per_reg)?;
    writeln!(out, "#define {}_MULTIREG_COUNT {}", reg_name, reg.count)?;
    writeln!(out)?;

    for index in 0..physical_regs {
        let name = if physical_regs == 1 {
            reg_name.clone()
        } else {
            format!("{}_{}", reg_name, index)
        };
        writeln!(out, "// {}", reg.desc)?;
        writeln!(out, "#define {}_REG_OFFSET {:#x}", name, offset)?;

        let first = index * fields_per_reg;
        let last = reg.count.min(first + fields_per_reg);
        for slot in first..last {
            let position = (slot - first) * width + lsb;
            if width == 1 {
                writeln!(out, "#define {}_{}_{}_BIT {}", name, field_name, slot, position)?;
            } else if width < reg_width {
                let mask = (1u64 << width) - 1;
                writeln!(out, "#define {}_{}_{}_MASK {:#x}", name, field_name, slot, mask)?;
                writeln!(out, "#define {}_{}_{}_OFFSET {}", name, field_name, slot, position)?;
            }
        }
        writeln!(out)?;

        offset += u64::from(reg_width / 8);
    }

    Ok(offset)
}

/// 解析 `bits`，回傳 (lsb, width)
fn field_span(field: &Field, reg_width: u32) -> Result<(u32, u32)> {
    let malformed = || RegGenError::Render {
        message: format!("field {} has malformed bits '{}'", field.name, field.bits),
    };
    let parse = |s: &str| s.trim().parse::<u32>().map_err(|_| malformed());

    let (msb, lsb) = match field.bits.split_once(':') {
        Some((msb, lsb)) => (parse(msb)?, parse(lsb)?),
        None => {
            let bit = parse(&field.bits)?;
            (bit, bit)
        }
    };

    if msb < lsb || msb >= reg_width {
        return Err(malformed());
    }

    Ok((lsb, msb - lsb + 1))
}
