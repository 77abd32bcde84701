//! Configuration management
//!
//! Settings for the command-line tool: the default version byte, network and
//! log level. The codec itself never reads configuration.

pub mod settings;

pub use settings::{Config, Settings, GLOBAL_CONFIG};
