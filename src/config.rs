//! Registry definition parsing and validation

pub mod registry_toml;

pub use registry_toml::{ConfigError, OptionConfig, RegistryConfig};
