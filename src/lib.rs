pub mod config;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{Config, ConfigError};
pub use units::*;
