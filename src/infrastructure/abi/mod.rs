//! ABI infrastructure - Alloy-based decoding and value rendering

mod probe;

pub use probe::{format_value, AlloyCodecProbe};
