//! Local player physics: kinematic state, logical controls, the per-tick
//! integrator, and axis-separated collision against the voxel store.
//!
//! Everything here is single-threaded and lock-free; the caller (the game
//! controller) runs a whole [`step`] under its own lock so that reading the
//! controls, integrating and resolving collisions happen atomically.

pub mod collision;
pub mod controls;
pub mod integrator;
pub mod player;

#[cfg(test)]
mod integrator_tests;

pub use collision::{player_bounding_box, resolve_movement};
pub use controls::{Control, ControlState};
pub use integrator::{StepOutcome, step};
pub use player::{JUMP_SPEED, Kinematics, PLAYER_APOTHEM, PLAYER_HEIGHT, PlayerPosition};
