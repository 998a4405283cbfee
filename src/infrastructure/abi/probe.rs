//! Codec probe implementation using alloy-dyn-abi

use alloy_dyn_abi::{DynSolType, DynSolValue};
use anyhow::{Context, Result};

use crate::domain::abi::CodecProbe;

/// Codec probe backed by alloy-dyn-abi
#[derive(Debug, Default, Clone, Copy)]
pub struct AlloyCodecProbe;

impl CodecProbe for AlloyCodecProbe {
    fn decode_tuple(&self, types: &[DynSolType], data: &[u8]) -> Result<Vec<DynSolValue>> {
        let tuple = DynSolType::Tuple(types.to_vec());
        let decoded = tuple
            .abi_decode_sequence(data)
            .context("failed to decode against candidate types")?;

        match decoded {
            DynSolValue::Tuple(values) => Ok(values),
            other => Ok(vec![other]),
        }
    }

    fn test_params(&self, types: &[DynSolType], data: &[u8]) -> bool {
        match self.decode_tuple(types, data) {
            Ok(values) => {
                for value in &values {
                    let _ = format_value(value);
                }
                true
            }
            Err(_) => false,
        }
    }
}

/// Format a DynSolValue for display
pub fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::FixedBytes(word, size) => {
            let bytes = &word.as_slice()[..(*size).min(32)];
            format!("0x{}", hex::encode(bytes))
        }
        DynSolValue::Address(addr) => format!("{:?}", addr),
        DynSolValue::Function(func) => format!("0x{}", hex::encode(func.as_slice())),
        DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        DynSolValue::String(s) => format!("\"{}\"", s),
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) => {
            let rendered: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        DynSolValue::Tuple(fields) => {
            let rendered: Vec<String> = fields.iter().map(format_value).collect();
            format!("({})", rendered.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};

    #[test]
    fn test_decode_static_tuple() {
        let probe = AlloyCodecProbe;
        let types = [DynSolType::Address, DynSolType::Uint(256)];
        let data = hex::decode(concat!(
            "000000000000000000000000742d35cc6634c0532925a3b844bc9e7595f0beb0",
            "00000000000000000000000000000000000000000000000000000000000f4240",
        ))
        .unwrap();

        let values = probe.decode_tuple(&types, &data).unwrap();
        assert_eq!(values.len(), 2);
        assert!(matches!(values[0], DynSolValue::Address(_)));
        assert_eq!(values[1], DynSolValue::Uint(U256::from(1_000_000u64), 256));
    }

    #[test]
    fn test_probe_accepts_and_rejects() {
        let probe = AlloyCodecProbe;
        let data = [0u8; 32];

        assert!(probe.test_params(&[DynSolType::FixedBytes(32)], &data));
        // a dynamic string cannot live in a 32-byte buffer pointing nowhere
        assert!(!probe.test_params(&[DynSolType::String, DynSolType::String], &data));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&DynSolValue::Bool(true)), "true");
        assert_eq!(
            format_value(&DynSolValue::Uint(U256::from(1_000_000u64), 256)),
            "1000000"
        );
        assert_eq!(
            format_value(&DynSolValue::String("hello".to_string())),
            "\"hello\""
        );
        assert_eq!(
            format_value(&DynSolValue::Bytes(vec![0xca, 0xfe])),
            "0xcafe"
        );

        let addr = Address::from([0x12; 20]);
        assert!(format_value(&DynSolValue::Address(addr)).starts_with("0x"));

        let nested = DynSolValue::Tuple(vec![
            DynSolValue::Uint(U256::from(1u64), 256),
            DynSolValue::Array(vec![DynSolValue::Bool(false)]),
        ]);
        assert_eq!(format_value(&nested), "(1, [false])");
    }
}
