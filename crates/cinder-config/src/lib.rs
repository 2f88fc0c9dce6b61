//! Configuration system for the Cinder client core.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap. Every section is `#[serde(default)]` so older or
//! partial config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, NetworkConfig, PhysicsConfig, SimulationConfig, default_config_dir,
};
pub use error::ConfigError;
