//! Backtracking search over candidate ABI layouts
//!
//! The static region of a well-formed payload is the prefix up to the
//! smallest dynamic offset, so every discovered pointer tightens the search
//! window. Each 32-byte slot is explored as a pointer-with-length, a bare
//! pointer, or a plain word, and a full candidate only survives if the
//! codec accepts it.

use alloy_dyn_abi::DynSolType;
use tracing::trace;

use crate::domain::abi::CodecProbe;

use super::word::{trailing_zero_bytes, try_parse_length, try_parse_offset, WORD_SIZE};

/// Maximum nesting of dynamic-region resolutions.
const MAX_DEPTH: usize = 64;

/// A slot discovered while walking the static region.
#[derive(Debug, Clone)]
enum Slot {
    /// A concrete 32-byte value.
    Value(DynSolType),
    /// A pointer into the dynamic region, optionally carrying the length
    /// word found at its target.
    Pointer { offset: usize, length: Option<usize> },
}

/// Search driver. Holds the codec probe that prunes candidates.
pub(crate) struct TupleDecoder<'p> {
    probe: &'p dyn CodecProbe,
}

impl<'p> TupleDecoder<'p> {
    pub(crate) fn new(probe: &'p dyn CodecProbe) -> Self {
        Self { probe }
    }

    /// Find a type list that decodes `data` as a well-formed tuple.
    pub(crate) fn decode(&self, data: &[u8]) -> Option<Vec<DynSolType>> {
        self.decode_well_formed_tuple(data, 0, 0, &[], data.len(), None, None)
    }

    /// One step of the search. `dynamic_elements` is set inside array
    /// frames: `Some(true)` forces every slot to be a pointer with a
    /// length, `Some(false)` a pointer without one.
    #[allow(clippy::too_many_arguments)]
    fn decode_well_formed_tuple(
        &self,
        data: &[u8],
        depth: usize,
        param_idx: usize,
        collected: &[Slot],
        end_of_static: usize,
        expected_len: Option<usize>,
        dynamic_elements: Option<bool>,
    ) -> Option<Vec<DynSolType>> {
        let param_offset = param_idx * WORD_SIZE;
        if param_offset >= end_of_static {
            return self.finish_tuple(data, depth, collected, expected_len);
        }

        if let Some(offset) = try_parse_offset(data, param_offset) {
            // Pointer with a length prefix at its target.
            if dynamic_elements.unwrap_or(true) {
                if let Some(length) = try_parse_length(data, offset) {
                    trace!(param_idx, offset, length, "trying pointer with length");
                    let mut next = collected.to_vec();
                    next.push(Slot::Pointer {
                        offset,
                        length: Some(length),
                    });
                    if let Some(types) = self.decode_well_formed_tuple(
                        data,
                        depth,
                        param_idx + 1,
                        &next,
                        end_of_static.min(offset),
                        expected_len,
                        dynamic_elements,
                    ) {
                        return Some(types);
                    }
                }
            }

            // Bare pointer: the target region carries no length word.
            if !dynamic_elements.unwrap_or(false) {
                trace!(param_idx, offset, "trying pointer without length");
                let mut next = collected.to_vec();
                next.push(Slot::Pointer {
                    offset,
                    length: None,
                });
                if let Some(types) = self.decode_well_formed_tuple(
                    data,
                    depth,
                    param_idx + 1,
                    &next,
                    end_of_static.min(offset),
                    expected_len,
                    dynamic_elements,
                ) {
                    return Some(types);
                }
            }
        }

        // Plain static word. Forbidden inside array frames: elements must
        // be uniformly dynamic or uniformly static.
        if dynamic_elements.is_none() {
            let mut next = collected.to_vec();
            next.push(Slot::Value(DynSolType::FixedBytes(32)));
            return self.decode_well_formed_tuple(
                data,
                depth,
                param_idx + 1,
                &next,
                end_of_static,
                expected_len,
                dynamic_elements,
            );
        }

        None
    }

    /// Base case: enforce the length constraint, resolve every pointer
    /// left to right, and let the codec judge the result.
    fn finish_tuple(
        &self,
        data: &[u8],
        depth: usize,
        collected: &[Slot],
        expected_len: Option<usize>,
    ) -> Option<Vec<DynSolType>> {
        if let Some(expected) = expected_len {
            if collected.len() != expected {
                return None;
            }
        }

        let mut resolved = Vec::with_capacity(collected.len());
        for (idx, slot) in collected.iter().enumerate() {
            match slot {
                Slot::Value(ty) => resolved.push(ty.clone()),
                Slot::Pointer { offset, length } => {
                    resolved.push(self.resolve_pointer(data, depth, collected, idx, *offset, *length)?);
                }
            }
        }

        if self.probe.test_params(&resolved, data) {
            Some(resolved)
        } else {
            trace!(?resolved, "codec rejected candidate");
            None
        }
    }

    /// Turn one pointer slot into a concrete type by decoding its payload.
    fn resolve_pointer(
        &self,
        data: &[u8],
        depth: usize,
        collected: &[Slot],
        idx: usize,
        offset: usize,
        length: Option<usize>,
    ) -> Option<DynSolType> {
        if depth >= MAX_DEPTH {
            return None;
        }

        // The payload runs up to the next pointer's region; the trailing
        // pointer owns the rest of the buffer.
        let next_offset = collected[idx + 1..].iter().find_map(|slot| match slot {
            Slot::Pointer { offset, .. } => Some(*offset),
            Slot::Value(_) => None,
        });
        let start = match length {
            Some(_) => offset + WORD_SIZE,
            None => offset,
        };
        let end = next_offset.unwrap_or(data.len());
        let payload = data.get(start..end)?;
        let trailing = next_offset.is_none();

        match length {
            // No length word: a static tuple or static array laid out
            // inline. Decode it as its own buffer and wrap the fields.
            None => {
                let types =
                    self.decode_well_formed_tuple(payload, depth + 1, 0, &[], payload.len(), None, None)?;
                Some(DynSolType::Tuple(types))
            }
            // An empty payload is indistinguishable among empty bytes,
            // empty string, and any empty dynamic array.
            Some(0) => Some(DynSolType::Array(Box::new(DynSolType::Tuple(Vec::new())))),
            // The declared length covers the payload exactly, or covers it
            // minus right-padding in a word-aligned buffer: a byte string.
            Some(len)
                if len == payload.len()
                    || (payload.len() % WORD_SIZE == 0
                        && len == payload.len() - trailing_zero_bytes(payload)) =>
            {
                Some(DynSolType::Bytes)
            }
            Some(len) => self.resolve_array(payload, depth, len, trailing),
        }
    }

    /// A length-prefixed payload that is not a byte string must be an
    /// array of `length` elements. Three layouts can encode one; keep the
    /// interpretations whose element types agree and prefer the tersest.
    fn resolve_array(
        &self,
        payload: &[u8],
        depth: usize,
        length: usize,
        trailing: bool,
    ) -> Option<DynSolType> {
        let mut candidates = Vec::new();

        // Elements are dynamic, each with its own length prefix.
        if let Some(types) = self.decode_well_formed_tuple(
            payload,
            depth + 1,
            0,
            &[],
            payload.len(),
            Some(length),
            Some(true),
        ) {
            candidates.push(types);
        }

        // Elements are dynamic without a length prefix.
        if let Some(types) = self.decode_well_formed_tuple(
            payload,
            depth + 1,
            0,
            &[],
            payload.len(),
            Some(length),
            Some(false),
        ) {
            candidates.push(types);
        }

        // Elements are static, all spanning the same number of words.
        if let Some(types) = self.resolve_static_array(payload, depth, length, trailing) {
            candidates.push(types);
        }

        candidates
            .into_iter()
            .filter_map(|types| {
                let first = types.first()?.clone();
                let name = first.sol_type_name().into_owned();
                types
                    .iter()
                    .all(|ty| ty.sol_type_name() == name.as_str())
                    .then_some((name, first))
            })
            .min_by_key(|(name, _)| name.len())
            .map(|(_, element)| DynSolType::Array(Box::new(element)))
    }

    /// Split the payload into `length` equal element buffers and decode
    /// each independently. Only the trailing dynamic region may carry
    /// words beyond an even split.
    fn resolve_static_array(
        &self,
        payload: &[u8],
        depth: usize,
        length: usize,
        trailing: bool,
    ) -> Option<Vec<DynSolType>> {
        let num_words = payload.len() / WORD_SIZE;
        if num_words % length != 0 && !trailing {
            return None;
        }
        let element_size = (num_words / length) * WORD_SIZE;

        let mut elements = Vec::with_capacity(length);
        for i in 0..length {
            let chunk = payload.get(i * element_size..(i + 1) * element_size)?;
            let types =
                self.decode_well_formed_tuple(chunk, depth + 1, 0, &[], chunk.len(), None, None)?;
            let element = if types.len() == 1 {
                types.into_iter().next()?
            } else {
                DynSolType::Tuple(types)
            };
            elements.push(element);
        }
        Some(elements)
    }
}
