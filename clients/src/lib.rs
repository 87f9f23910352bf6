//! Shared support for the `rdf-to-json` client: settings resolution from a
//! TOML file and command-line overrides.

pub mod config;

pub use config::{FileConfig, Overrides, Settings};
