//! Layered configuration for a batch run.
//!
//! Values are resolved from lowest to highest precedence: built-in defaults,
//! the optional TOML file, `--set KEY=VALUE` overrides, then dedicated flags.

mod builder;
mod defaults;
mod file;

pub use builder::build_config;
