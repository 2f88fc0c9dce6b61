//! Axis-separated collision resolution against the block store.
//!
//! Movement is applied one axis at a time (X, then Y, then Z). After each
//! tentative move the slab of cells at the player's leading edge is probed;
//! on contact the player is snapped flush to the blocking face and that
//! velocity component is zeroed. The bounding box is recomputed after every
//! snap so later axes see the corrected position.

use cinder_voxel::{ChunkStore, Int3D};
use tracing::trace;

use crate::integrator::StepOutcome;
use crate::player::{PLAYER_APOTHEM, PLAYER_HEIGHT, PlayerPosition};

/// Inclusive integer cell range occupied by the player's collision box.
///
/// Returns `(min, max)` with X/Y spanning `floor(p ± apothem)` and Z spanning
/// `floor(z) ..= floor(z + height)`.
pub fn player_bounding_box(pos: &PlayerPosition) -> (Int3D, Int3D) {
    let min = Int3D::new(
        (pos.x - PLAYER_APOTHEM).floor() as i32,
        (pos.y - PLAYER_APOTHEM).floor() as i32,
        pos.z.floor() as i32,
    );
    let max = Int3D::new(
        (pos.x + PLAYER_APOTHEM).floor() as i32,
        (pos.y + PLAYER_APOTHEM).floor() as i32,
        (pos.z + PLAYER_HEIGHT).floor() as i32,
    );
    (min, max)
}

/// Moves `pos` by its velocity over `dt`, resolving collisions per axis.
///
/// Only the Z axis touches `on_ground`: a Z contact sets it, a clear Z move
/// clears it. A zero velocity component skips that axis entirely.
pub fn resolve_movement(pos: &mut PlayerPosition, world: &ChunkStore, dt: f32) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    let (mut min, mut max) = player_bounding_box(pos);

    // ---- X --------------------------------------------------------------

    if pos.dx != 0.0 {
        pos.x += f64::from(pos.dx * dt);
        let leading = pos.x + f64::from(pos.dx.signum()) * PLAYER_APOTHEM;
        let block_x = leading.floor() as i32;
        if world.collides_in_volume(
            Int3D::new(block_x, min.y, min.z),
            Int3D::new(block_x, max.y, max.z),
        ) {
            pos.x = if pos.dx < 0.0 {
                f64::from(block_x) + 1.0 + PLAYER_APOTHEM
            } else {
                f64::from(block_x) - PLAYER_APOTHEM
            };
            trace!(block_x, x = pos.x, "X collision");
            pos.dx = 0.0;
            outcome.collided_x = true;
            (min, max) = player_bounding_box(pos);
        }
    }

    // ---- Y --------------------------------------------------------------

    if pos.dy != 0.0 {
        pos.y += f64::from(pos.dy * dt);
        let leading = pos.y + f64::from(pos.dy.signum()) * PLAYER_APOTHEM;
        let block_y = leading.floor() as i32;
        if world.collides_in_volume(
            Int3D::new(min.x, block_y, min.z),
            Int3D::new(max.x, block_y, max.z),
        ) {
            pos.y = if pos.dy < 0.0 {
                f64::from(block_y) + 1.0 + PLAYER_APOTHEM
            } else {
                f64::from(block_y) - PLAYER_APOTHEM
            };
            trace!(block_y, y = pos.y, "Y collision");
            pos.dy = 0.0;
            outcome.collided_y = true;
            (min, max) = player_bounding_box(pos);
        }
    }

    // ---- Z --------------------------------------------------------------

    if pos.dz != 0.0 {
        pos.z += f64::from(pos.dz * dt);
        let leading = if pos.dz < 0.0 {
            pos.z
        } else {
            pos.z + PLAYER_HEIGHT
        };
        let block_z = leading.floor() as i32;
        if world.collides_in_volume(
            Int3D::new(min.x, min.y, block_z),
            Int3D::new(max.x, max.y, block_z),
        ) {
            pos.z = if pos.dz < 0.0 {
                f64::from(block_z) + 1.0
            } else {
                f64::from(block_z) - PLAYER_HEIGHT
            };
            trace!(block_z, z = pos.z, "Z collision");
            pos.dz = 0.0;
            pos.on_ground = true;
            outcome.collided_z = true;
        } else {
            pos.on_ground = false;
        }
    }

    outcome
}
