//! Type-signature inference for opaque ABI-encoded data
//!
//! Given raw calldata with no known signature, search the space of ABI
//! layouts the bytes could encode, validate candidates against the codec,
//! and narrow the surviving types with value-shape heuristics.

mod decode;
mod refine;
mod word;

use alloy_dyn_abi::DynSolType;
use tracing::debug;

use crate::domain::abi::{CodecProbe, GuessedFunction};
use crate::infrastructure::abi::AlloyCodecProbe;

use decode::TupleDecoder;

/// Infer the parameter types of an ABI-encoded tuple payload.
///
/// Returns `None` when no type list consistent with the data was found.
/// The result is one plausible reading; payloads consistent with several
/// signatures yield the interpretation with the tersest formatting.
pub fn guess_abi_encoded_data(data: &[u8]) -> Option<Vec<DynSolType>> {
    guess_with_probe(&AlloyCodecProbe, data)
}

/// Infer parameter types using a caller-supplied codec probe.
pub fn guess_with_probe(probe: &dyn CodecProbe, data: &[u8]) -> Option<Vec<DynSolType>> {
    let candidate = TupleDecoder::new(probe).decode(data)?;
    debug!(
        candidate = %format_params(&candidate),
        "layout search found a decodable signature"
    );
    let values = probe.decode_tuple(&candidate, data).ok()?;
    Some(refine::pretty_types(&candidate, &values))
}

/// Split off the 4-byte selector and infer a synthetic function fragment
/// for the remaining payload.
pub fn guess_fragment(calldata: &[u8]) -> Option<GuessedFunction> {
    if calldata.len() < 4 {
        return None;
    }
    let selector: [u8; 4] = calldata[..4].try_into().unwrap();
    let inputs = guess_abi_encoded_data(&calldata[4..])?;
    Some(GuessedFunction::new(selector, inputs))
}

/// Canonical comma-joined rendering of a parameter list.
pub fn format_params(types: &[DynSolType]) -> String {
    types
        .iter()
        .map(|ty| ty.sol_type_name().into_owned())
        .collect::<Vec<_>>()
        .join(",")
}
