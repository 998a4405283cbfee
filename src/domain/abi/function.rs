//! Synthetic function fragments recovered from raw calldata

use std::fmt;

use alloy_dyn_abi::DynSolType;

/// A function fragment guessed from calldata alone
///
/// The name is synthesized from the selector; parameter names are not
/// recoverable, so only types are carried.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessedFunction {
    /// 4-byte function selector
    pub selector: [u8; 4],
    /// Synthesized function name (`guessed_<selector hex>`)
    pub name: String,
    /// Inferred input parameter types
    pub inputs: Vec<DynSolType>,
}

impl GuessedFunction {
    /// Build a fragment for `selector` with the given parameter types
    pub fn new(selector: [u8; 4], inputs: Vec<DynSolType>) -> Self {
        let name = format!("guessed_{}", hex::encode(selector));
        Self {
            selector,
            name,
            inputs,
        }
    }

    /// Get selector as hex string
    pub fn selector_hex(&self) -> String {
        format!("0x{}", hex::encode(self.selector))
    }

    /// Full signature string (e.g. `guessed_a9059cbb(address,uint256)`)
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .inputs
            .iter()
            .map(|ty| ty.sol_type_name().into_owned())
            .collect();
        format!("{}({})", self.name, params.join(","))
    }
}

impl fmt::Display for GuessedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_rendering() {
        let fragment = GuessedFunction::new(
            [0xa9, 0x05, 0x9c, 0xbb],
            vec![DynSolType::Address, DynSolType::Uint(256)],
        );

        assert_eq!(fragment.name, "guessed_a9059cbb");
        assert_eq!(fragment.selector_hex(), "0xa9059cbb");
        assert_eq!(fragment.signature(), "guessed_a9059cbb(address,uint256)");
        assert_eq!(fragment.to_string(), fragment.signature());
    }

    #[test]
    fn test_fragment_without_params() {
        let fragment = GuessedFunction::new([0, 0, 0, 1], Vec::new());
        assert_eq!(fragment.signature(), "guessed_00000001()");
    }
}
