//! Post-inference type refinement
//!
//! The search only distinguishes layout, so it reports every static slot
//! as `bytes32` and every byte string as `bytes`. The decoded values carry
//! enough shape to narrow those into friendlier types.

use std::collections::BTreeSet;

use alloy_dyn_abi::{DynSolType, DynSolValue};

use super::word::{leading_zero_bytes, trailing_zero_bytes};

/// Narrow each inferred type using the value decoded for it.
pub(crate) fn pretty_types(types: &[DynSolType], values: &[DynSolValue]) -> Vec<DynSolType> {
    types
        .iter()
        .zip(values)
        .map(|(ty, value)| pretty_type(ty, value))
        .collect()
}

fn pretty_type(ty: &DynSolType, value: &DynSolValue) -> DynSolType {
    match (ty, value) {
        (DynSolType::FixedBytes(32), DynSolValue::FixedBytes(word, _)) => {
            let leading = leading_zero_bytes(word.as_slice());
            let trailing = trailing_zero_bytes(word.as_slice());
            if (12..=17).contains(&leading) {
                // 20-byte payload left-padded to a word, give or take a
                // few zero bytes of its own
                DynSolType::Address
            } else if leading > 16 {
                DynSolType::Uint(256)
            } else if trailing > 0 {
                DynSolType::FixedBytes(32 - trailing)
            } else {
                DynSolType::FixedBytes(32)
            }
        }
        (DynSolType::Bytes, DynSolValue::Bytes(bytes)) => {
            if std::str::from_utf8(bytes).is_ok() {
                DynSolType::String
            } else {
                DynSolType::Bytes
            }
        }
        (DynSolType::Array(element), DynSolValue::Array(items)) => {
            if items.is_empty() {
                return DynSolType::Array(element.clone());
            }
            let refined: Vec<DynSolType> =
                items.iter().map(|item| pretty_type(element, item)).collect();
            DynSolType::Array(Box::new(merge_types(&refined)))
        }
        (DynSolType::Tuple(components), DynSolValue::Tuple(items)) => DynSolType::Tuple(
            components
                .iter()
                .zip(items)
                .map(|(component, item)| pretty_type(component, item))
                .collect(),
        ),
        _ => ty.clone(),
    }
}

/// Collapse a set of types that describe the same slot into one.
///
/// Tuples merge component-wise and arrays merge their element types;
/// elementary disagreements widen to `bytes`, then `uint256`, then
/// `bytes32`.
pub(crate) fn merge_types(types: &[DynSolType]) -> DynSolType {
    if types.iter().any(|ty| matches!(ty, DynSolType::Tuple(_))) {
        let tuples: Vec<&Vec<DynSolType>> = types
            .iter()
            .filter_map(|ty| match ty {
                DynSolType::Tuple(components) => Some(components),
                _ => None,
            })
            .collect();
        let arity = tuples.iter().map(|components| components.len()).min().unwrap_or(0);
        let merged = (0..arity)
            .map(|i| {
                let column: Vec<DynSolType> =
                    tuples.iter().map(|components| components[i].clone()).collect();
                merge_types(&column)
            })
            .collect();
        return DynSolType::Tuple(merged);
    }

    if types.iter().any(|ty| matches!(ty, DynSolType::Array(_))) {
        let elements: Vec<DynSolType> = types
            .iter()
            .filter_map(|ty| match ty {
                DynSolType::Array(element) => Some((**element).clone()),
                _ => None,
            })
            .collect();
        return DynSolType::Array(Box::new(merge_types(&elements)));
    }

    let names: BTreeSet<String> = types
        .iter()
        .map(|ty| ty.sol_type_name().into_owned())
        .collect();
    if names.len() == 1 {
        if let Some(ty) = types.first() {
            return ty.clone();
        }
    }
    if names.contains("bytes") {
        DynSolType::Bytes
    } else if names.contains("uint256") {
        DynSolType::Uint(256)
    } else {
        DynSolType::FixedBytes(32)
    }
}
