//! Signature registry - stores known function signatures by selector

use std::collections::HashMap;

use alloy_json_abi::Function;
use anyhow::{Context, Result};

/// Registry of known function signatures indexed by selector
///
/// A selector hit here is ground truth and is always preferred over a
/// guessed signature.
#[derive(Debug, Default, Clone)]
pub struct SignatureRegistry {
    /// Functions indexed by 4-byte selector
    functions: HashMap<[u8; 4], Function>,
}

impl SignatureRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a human-readable signature such as
    /// `transfer(address,uint256)` and return its selector
    ///
    /// Note: First signature for a given selector wins (no overwrite)
    pub fn register(&mut self, signature: &str) -> Result<[u8; 4]> {
        let function = Function::parse(signature)
            .with_context(|| format!("failed to parse signature '{signature}'"))?;
        let selector = function.selector().0;
        self.functions.entry(selector).or_insert(function);
        Ok(selector)
    }

    /// Look up a function by selector
    pub fn lookup(&self, selector: [u8; 4]) -> Option<&Function> {
        self.functions.get(&selector)
    }

    /// Look up a function by selector hex string (e.g., "0xa9059cbb")
    pub fn lookup_hex(&self, selector_hex: &str) -> Option<&Function> {
        let normalized = selector_hex
            .strip_prefix("0x")
            .or_else(|| selector_hex.strip_prefix("0X"))
            .unwrap_or(selector_hex);

        if normalized.len() != 8 {
            return None;
        }

        let bytes = hex::decode(normalized).ok()?;
        let selector: [u8; 4] = bytes.try_into().ok()?;
        self.lookup(selector)
    }

    /// Get the number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Get all selectors
    pub fn selectors(&self) -> impl Iterator<Item = &[u8; 4]> {
        self.functions.keys()
    }
}
