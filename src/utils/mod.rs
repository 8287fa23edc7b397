// Shared utils

pub mod constants;

#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use constants::*;
