//! Player kinematic state and tuning.

use cinder_config::PhysicsConfig;
use serde::{Deserialize, Serialize};

/// Half-width of the player's square footprint, in blocks.
pub const PLAYER_APOTHEM: f64 = 0.3;

/// Height of the player's collision box above the feet, in blocks.
pub const PLAYER_HEIGHT: f64 = 1.62;

/// Vertical speed given by a jump, blocks per second.
pub const JUMP_SPEED: f32 = 8.0;

/// Position, velocity and look of the local player.
///
/// `z` is vertical and measures the feet. Positions are `f64` to match the
/// precision the server uses; velocities and angles are `f32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPosition {
    /// World X.
    pub x: f64,
    /// World Y.
    pub y: f64,
    /// World Z (feet).
    pub z: f64,
    /// Eye-height value the server expects to be echoed back unchanged.
    pub stance: f64,
    /// Velocity along X, blocks/s.
    pub dx: f32,
    /// Velocity along Y, blocks/s.
    pub dy: f32,
    /// Velocity along Z, blocks/s.
    pub dz: f32,
    /// Heading in radians; 0 faces +X, π/2 faces +Y.
    pub yaw: f32,
    /// Pitch in radians.
    pub pitch: f32,
    /// Whether the player is standing on something.
    pub on_ground: bool,
}

impl PlayerPosition {
    /// Squared horizontal speed. Used for "stopped" checks to skip the sqrt.
    pub fn ground_speed_squared(&self) -> f32 {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Horizontal speed.
    pub fn ground_speed(&self) -> f32 {
        self.ground_speed_squared().sqrt()
    }
}

/// Per-instance kinematic tuning. Geometry (apothem, height, jump speed) is
/// fixed and not part of this struct.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    /// Horizontal speed cap, blocks/s.
    pub max_ground_speed: f32,
    /// Vertical speed cap in either direction, blocks/s.
    pub terminal_velocity: f32,
    /// Acceleration from movement input, blocks/s².
    pub input_acceleration: f32,
    /// Downward acceleration, blocks/s².
    pub gravity: f32,
    /// Deceleration while on the ground, blocks/s².
    pub ground_friction: f32,
}

impl From<&PhysicsConfig> for Kinematics {
    fn from(config: &PhysicsConfig) -> Self {
        Self {
            max_ground_speed: config.max_ground_speed,
            terminal_velocity: config.terminal_velocity,
            input_acceleration: config.input_acceleration,
            gravity: config.gravity,
            ground_friction: config.ground_friction,
        }
    }
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::from(&PhysicsConfig::default())
    }
}
