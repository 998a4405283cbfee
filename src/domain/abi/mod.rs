//! ABI domain models and contracts
//!
//! This module defines the traits and types for signature guessing and
//! lookup, independent of the underlying codec implementation
//! (alloy-dyn-abi).

mod function;
mod probe;
mod registry;

pub use function::GuessedFunction;
pub use probe::CodecProbe;
pub use registry::SignatureRegistry;
