//! Gantry Core - Core library for commit message linting
//!
//! This crate provides the error taxonomy and configuration handling shared
//! by the Gantry linting and git crates.

pub mod config;
pub mod error;

pub use config::{find_config, load_config, load_config_from_dir, Config, LintConfig};
pub use error::{ConfigError, GantryError, Result, StoreError};
