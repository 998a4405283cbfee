//! Guess function signatures from raw Ethereum calldata
//!
//! When no ABI is available, [`guess_abi_encoded_data`] searches the space
//! of layouts an encoded payload could have and returns one plausible
//! parameter type list; [`guess_fragment`] additionally splits off the
//! 4-byte selector and wraps the result in a `guessed_<selector>(…)`
//! fragment. Known signatures can be kept in a [`SignatureRegistry`] so
//! callers can prefer ground truth over a guess.

pub mod config;
pub mod domain;
pub mod guesser;
pub mod infrastructure;

pub use domain::abi::{CodecProbe, GuessedFunction, SignatureRegistry};
pub use guesser::{format_params, guess_abi_encoded_data, guess_fragment, guess_with_probe};
pub use infrastructure::abi::{format_value, AlloyCodecProbe};
