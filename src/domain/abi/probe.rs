//! Codec probe trait

use alloy_dyn_abi::{DynSolType, DynSolValue};

/// Trait for ABI codec implementations
///
/// This trait abstracts over the canonical codec so the inference engine
/// can treat it as a black-box validity oracle, and so it could be swapped
/// out for a different library if needed.
pub trait CodecProbe: Send + Sync {
    /// Decode `data` as a tuple of `types`.
    ///
    /// # Arguments
    /// * `types` - The candidate parameter types
    /// * `data` - The ABI-encoded payload (no selector)
    ///
    /// # Returns
    /// * `Ok(values)` - One decoded value per candidate type
    /// * `Err(...)` - If the data does not decode against the candidates
    fn decode_tuple(
        &self,
        types: &[DynSolType],
        data: &[u8],
    ) -> anyhow::Result<Vec<DynSolValue>>;

    /// Check whether `data` decodes as a tuple of `types` and every
    /// decoded value renders to text. Rendering walks the whole value
    /// tree, surfacing validity checks a decoder may defer.
    fn test_params(&self, types: &[DynSolType], data: &[u8]) -> bool;
}
