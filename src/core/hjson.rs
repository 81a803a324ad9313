use crate::core::{DerivedCounts, GeneratorParams};
use crate::domain::model::{BusInterface, Field, Multireg, RegisterBlock, RegisterEntry};
use crate::utils::error::{RegGenError, Result};
use serde::Serialize;

pub const BLOCK_NAME: &str = "tagger_reg";
pub const CNAME: &str = "TAGGER";

pub const LICENSE_PREAMBLE: &str = "\
// Copyright 2018-2021 ETH Zurich and University of Bologna.
// Solderpad Hardware License, Version 0.51, see LICENSE for details.
// SPDX-License-Identifier: SHL-0.51
//
// Authors:
// Diyou Shen <dishen@student.ethz.ch>
";

/// Build the tagger register block for the given parameters.
pub fn tagger_register_block(params: &GeneratorParams, counts: &DerivedCounts) -> RegisterBlock {
    let full_width = format!("{}:0", params.reg_width.saturating_sub(1));

    RegisterBlock {
        name: BLOCK_NAME.to_string(),
        clock_primary: "clk_i".to_string(),
        reset_primary: "rst_ni".to_string(),
        bus_interfaces: vec![BusInterface {
            protocol: "reg_iface".to_string(),
            direction: "device".to_string(),
        }],
        regwidth: params.reg_width,
        registers: vec![
            multireg(
                "PAT_COMMIT",
                "Partition configuration commit register",
                1,
                "hrw",
                field("0", "commit", "commit changes of partition configuration"),
            ),
            multireg(
                "PAT_ADDR",
                "Partition address",
                params.max_partition,
                "hro",
                field(&full_width, "PAT_ADDR", "Single partition configurations: address"),
            ),
            multireg(
                "PATID",
                "Partition ID",
                counts.id_register_count,
                "hro",
                field(
                    &full_width,
                    "PATID",
                    "Partition ID (PatID) for each partition, length determined by params",
                ),
            ),
            multireg(
                "ADDR_CONF",
                "Address encoding mode switch register",
                counts.conf_register_count,
                "hro",
                field(
                    &full_width,
                    "addr_comf",
                    "2 bits configuration for each partition. 2'b00: OFF, 2'b01: TOR, 2'b10: NA4",
                ),
            ),
        ],
    }
}

fn multireg(name: &str, desc: &str, count: u32, hwaccess: &str, field: Field) -> RegisterEntry {
    RegisterEntry::Multireg(Multireg {
        name: name.to_string(),
        desc: desc.to_string(),
        count,
        cname: CNAME.to_string(),
        swaccess: "rw".to_string(),
        hwaccess: hwaccess.to_string(),
        fields: vec![field],
    })
}

fn field(bits: &str, name: &str, desc: &str) -> Field {
    Field {
        bits: bits.to_string(),
        name: name.to_string(),
        desc: desc.to_string(),
        resval: "0".to_string(),
    }
}

/// 產生完整的 Hjson 文件：授權註解 + 暫存器描述
pub fn render_hjson(block: &RegisterBlock) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    block.serialize(&mut serializer)?;

    let body = String::from_utf8(buf).map_err(|e| RegGenError::Render {
        message: format!("register description is not valid UTF-8: {}", e),
    })?;

    Ok(format!("{}\n{}\n", LICENSE_PREAMBLE, body))
}
