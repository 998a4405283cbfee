//! Domain layer - ABI models and contracts

pub mod abi;
