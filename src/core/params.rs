use crate::core::{DerivedCounts, GeneratorParams};
use crate::utils::error::{RegGenError, Result};

/// 每個 ADDR_CONF 暫存器容納的分區數 (每分區 2 bits)
pub const PARTITIONS_PER_CONF_REGISTER: u32 = 16;

/// Compute the register counts that the template needs.
///
/// Both divisions are checked: a zero `patid_len`, or one wider than the
/// register, is an error rather than a zero or unbounded count.
pub fn derive_counts(params: &GeneratorParams) -> Result<DerivedCounts> {
    let entries_per_register = params
        .reg_width
        .checked_div(params.patid_len)
        .ok_or_else(|| RegGenError::Arithmetic {
            message: format!(
                "patid_len is 0, cannot split a {}-bit register into partition IDs",
                params.reg_width
            ),
        })?;

    if entries_per_register == 0 {
        return Err(RegGenError::Arithmetic {
            message: format!(
                "patid_len {} does not fit into a {}-bit register",
                params.patid_len, params.reg_width
            ),
        });
    }

    let counts = DerivedCounts {
        entries_per_register,
        id_register_count: params.max_partition.div_ceil(entries_per_register),
        conf_register_count: params.max_partition.div_ceil(PARTITIONS_PER_CONF_REGISTER),
    };

    tracing::debug!(
        "Derived counts: {} PatIDs per register, {} PATID registers, {} ADDR_CONF registers",
        counts.entries_per_register,
        counts.id_register_count,
        counts.conf_register_count
    );

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_per_register_floors() {
        let counts = derive_counts(&GeneratorParams::new(32, 16, 8)).unwrap();
        assert_eq!(counts.entries_per_register, 4);

        let counts = derive_counts(&GeneratorParams::new(32, 16, 5)).unwrap();
        assert_eq!(counts.entries_per_register, 6);
    }

    #[test]
    fn test_default_configuration() {
        let counts = derive_counts(&GeneratorParams::new(32, 16, 8)).unwrap();
        assert_eq!(
            counts,
            DerivedCounts {
                entries_per_register: 4,
                id_register_count: 4,
                conf_register_count: 1,
            }
        );
    }

    #[test]
    fn test_register_counts_round_up() {
        let counts = derive_counts(&GeneratorParams::new(32, 17, 8)).unwrap();
        assert_eq!(counts.id_register_count, 5);
        assert_eq!(counts.conf_register_count, 2);

        let counts = derive_counts(&GeneratorParams::new(32, 1, 8)).unwrap();
        assert_eq!(counts.id_register_count, 1);
        assert_eq!(counts.conf_register_count, 1);
    }

    #[test]
    fn test_zero_patid_len_fails() {
        let err = derive_counts(&GeneratorParams::new(32, 16, 0)).unwrap_err();
        assert!(matches!(err, RegGenError::Arithmetic { .. }));
    }

    #[test]
    fn test_patid_wider_than_register_fails() {
        let err = derive_counts(&GeneratorParams::new(32, 16, 40)).unwrap_err();
        assert!(matches!(err, RegGenError::Arithmetic { .. }));
    }
}
