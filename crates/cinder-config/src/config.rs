//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
const CONFIG_FILE: &str = "config.ron";

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Server connection and protocol cadence.
    pub network: NetworkConfig,
    /// Kinematic tuning for the local player.
    pub physics: PhysicsConfig,
    /// Physics tick driver settings.
    pub simulation: SimulationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Network/session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Server host name or address.
    pub server_address: String,
    /// Server port.
    pub server_port: u16,
    /// Name the player logs in with. Chat from this name is treated as our own.
    pub username: String,
    /// Interval between keep-alive position echoes, in milliseconds.
    pub keep_alive_interval_ms: u64,
    /// Maximum number of characters in one outgoing chat line.
    pub chat_length_limit: usize,
}

/// Kinematic constants that may be tuned per client instance.
///
/// Geometric constants (player size, jump speed, chunk size) are fixed and
/// live with the physics code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Maximum horizontal speed in blocks per second.
    pub max_ground_speed: f32,
    /// Maximum vertical speed magnitude in blocks per second.
    pub terminal_velocity: f32,
    /// Acceleration applied by movement input, blocks/s².
    pub input_acceleration: f32,
    /// Downward acceleration, blocks/s².
    pub gravity: f32,
    /// Deceleration applied while on the ground, blocks/s².
    pub ground_friction: f32,
}

/// Settings for the fixed-timestep physics driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Physics steps per second.
    pub tick_rate_hz: u32,
    /// Longest frame the driver will try to catch up on, in seconds.
    pub max_frame_time_s: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1".to_string(),
            server_port: 25565,
            username: "player".to_string(),
            keep_alive_interval_ms: 200,
            chat_length_limit: 100,
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let input_acceleration = 35.0;
        Self {
            max_ground_speed: 4.27,
            terminal_velocity: 20.0,
            input_acceleration,
            gravity: 9.81,
            ground_friction: input_acceleration / 4.0,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60,
            max_frame_time_s: 0.25,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Length of one physics step in seconds.
    pub fn fixed_dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate_hz.max(1))
    }
}

/// Returns the platform config directory for Cinder (e.g. `~/.config/cinder`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("cinder"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
