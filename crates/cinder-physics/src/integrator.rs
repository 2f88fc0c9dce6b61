//! Per-tick player integrator.
//!
//! Order of operations within one step:
//!
//! 1. Input acceleration from the movement controls, rotated by yaw.
//! 2. Jump impulse if on the ground.
//! 3. Gravity.
//! 4. Ground friction (or a hard stop below an epsilon of speed).
//! 5. Velocity integration.
//! 6. Horizontal and vertical speed caps.
//! 7. Axis-separated collision (see [`crate::collision`]).

use std::f32::consts::FRAC_PI_2;

use cinder_voxel::ChunkStore;
use glam::{Vec2, Vec3};

use crate::collision::resolve_movement;
use crate::controls::{Control, ControlState};
use crate::player::{JUMP_SPEED, Kinematics, PlayerPosition};

/// Which axes were blocked during a step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub collided_x: bool,
    pub collided_y: bool,
    pub collided_z: bool,
}

impl StepOutcome {
    /// `true` if any axis was blocked.
    pub fn any(&self) -> bool {
        self.collided_x || self.collided_y || self.collided_z
    }
}

/// Advances `pos` by `dt` seconds under `controls` inside `world`.
pub fn step(
    pos: &mut PlayerPosition,
    controls: &ControlState,
    kinematics: &Kinematics,
    world: &ChunkStore,
    dt: f32,
) -> StepOutcome {
    let mut acceleration = Vec3::ZERO;

    let right = controls.axis(Control::Right, Control::Left);
    let forward = controls.axis(Control::Forward, Control::Back);
    if right != 0 || forward != 0 {
        let heading = f32::from(forward).atan2(f32::from(right)) - FRAC_PI_2 + pos.yaw;
        acceleration.x += heading.cos() * kinematics.input_acceleration;
        acceleration.y += heading.sin() * kinematics.input_acceleration;
    }

    if controls.is_activated(Control::Jump) && pos.on_ground {
        pos.on_ground = false;
        pos.dz = JUMP_SPEED;
    }

    acceleration.z -= kinematics.gravity;

    let mut friction = Vec2::ZERO;
    let ground_speed_sq = pos.ground_speed_squared();
    if ground_speed_sq < f32::EPSILON {
        pos.dx = 0.0;
        pos.dy = 0.0;
    } else if pos.on_ground {
        let speed = ground_speed_sq.sqrt();
        let magnitude = kinematics.ground_friction.min(speed / dt);
        friction = -Vec2::new(pos.dx, pos.dy) / speed * magnitude;
    }

    // Friction is applied first and clamped so it can only bring a component
    // to rest, never past it.
    pos.dx = decelerate(pos.dx, friction.x * dt) + acceleration.x * dt;
    pos.dy = decelerate(pos.dy, friction.y * dt) + acceleration.y * dt;
    pos.dz += acceleration.z * dt;

    let ground_speed_sq = pos.ground_speed_squared();
    let max = kinematics.max_ground_speed;
    if ground_speed_sq > max * max {
        let scale = max / ground_speed_sq.sqrt();
        pos.dx *= scale;
        pos.dy *= scale;
    }
    pos.dz = pos
        .dz
        .clamp(-kinematics.terminal_velocity, kinematics.terminal_velocity);

    resolve_movement(pos, world, dt)
}

fn decelerate(velocity: f32, delta: f32) -> f32 {
    let slowed = velocity + delta;
    if slowed * velocity < 0.0 { 0.0 } else { slowed }
}
