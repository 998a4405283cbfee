//! Infrastructure layer - External codec integrations
//!
//! This layer contains the alloy-dyn-abi backed implementation of the
//! codec probe used by the inference engine and the CLI.

pub mod abi;
