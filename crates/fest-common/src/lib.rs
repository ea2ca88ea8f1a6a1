//! # fest-common
//!
//! Cross-cutting concerns shared by the other crates: configuration loaded
//! from environment variables and tracing/telemetry setup.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, Environment};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
