mod config;
pub use config::*;
mod generic;
pub use generic::*;
mod simd_f32;
pub use simd_f32::*;
#[cfg(test)]
mod test_utils;
