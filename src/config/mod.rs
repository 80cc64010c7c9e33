//! Configuration loading and management for the reporting engine.
//!
//! This module loads report settings and chart palettes from YAML files.
//! [`ReportingConfig::default`] carries the same values as the shipped
//! `config/default` directory, so loading is optional.
//!
//! # Example
//!
//! ```no_run
//! use workforce_analytics::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded report: {}", config.config().settings().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Palettes, ReportSettings, ReportingConfig};
