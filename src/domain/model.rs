use serde::{Deserialize, Serialize};

/// The three generator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Register bit width, same as `RegWidth` in the RTL (normally 32)
    pub reg_width: u32,
    /// Number of partitions, same as `MaxPartition` in the RTL
    pub max_partition: u32,
    /// Bit length of one partition ID
    pub patid_len: u32,
}

impl GeneratorParams {
    pub fn new(reg_width: u32, max_partition: u32, patid_len: u32) -> Self {
        Self {
            reg_width,
            max_partition,
            patid_len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedCounts {
    pub entries_per_register: u32,
    pub id_register_count: u32,
    pub conf_register_count: u32,
}

#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub hjson: String,
    pub header: Option<String>,
}

// 以下為 register tool 的描述格式。JSON 是 Hjson 的子集，直接以 serde 序列化。

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterBlock {
    pub name: String,
    pub clock_primary: String,
    pub reset_primary: String,
    pub bus_interfaces: Vec<BusInterface>,
    #[serde(with = "decimal_string")]
    pub regwidth: u32,
    pub registers: Vec<RegisterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusInterface {
    pub protocol: String,
    pub direction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegisterEntry {
    Multireg(Multireg),
}

impl RegisterEntry {
    pub fn multireg(&self) -> &Multireg {
        match self {
            RegisterEntry::Multireg(m) => m,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multireg {
    pub name: String,
    pub desc: String,
    #[serde(with = "decimal_string")]
    pub count: u32,
    pub cname: String,
    pub swaccess: String,
    pub hwaccess: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// `"msb:lsb"` or a single bit index
    pub bits: String,
    pub name: String,
    pub desc: String,
    pub resval: String,
}

/// register tool 的數值欄位皆為字串 (`count: "16"`)
mod decimal_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse().map_err(D::Error::custom)
    }
}
