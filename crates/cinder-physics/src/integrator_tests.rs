use cinder_voxel::{Block, CHUNK_SIZE, Chunk, ChunkStore, Int3D, ItemType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::controls::{Control, ControlState};
use crate::integrator::step;
use crate::player::{JUMP_SPEED, Kinematics, PLAYER_HEIGHT, PlayerPosition};

const DT: f32 = 0.05;
const FLOOR_TOP: f64 = 64.0;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One full chunk at the origin with stone for every z below 64.
fn floor_chunk() -> Chunk {
    let mut chunk = Chunk::new(Int3D::ZERO, CHUNK_SIZE);
    for x in 0..CHUNK_SIZE.x {
        for y in 0..CHUNK_SIZE.y {
            for z in 0..FLOOR_TOP as i32 {
                chunk.set_block(Int3D::new(x, y, z), Block::of(ItemType::STONE));
            }
        }
    }
    chunk
}

fn floor_world() -> ChunkStore {
    let mut world = ChunkStore::new();
    world.apply_update(&floor_chunk()).unwrap();
    world
}

/// Floor world plus a full-height wall occupying column `x = wall_x`.
fn walled_world(wall_x: i32) -> ChunkStore {
    let mut chunk = floor_chunk();
    for y in 0..CHUNK_SIZE.y {
        for z in FLOOR_TOP as i32..FLOOR_TOP as i32 + 8 {
            chunk.set_block(Int3D::new(wall_x, y, z), Block::of(ItemType::COBBLESTONE));
        }
    }
    let mut world = ChunkStore::new();
    world.apply_update(&chunk).unwrap();
    world
}

fn standing_at(x: f64, y: f64) -> PlayerPosition {
    PlayerPosition {
        x,
        y,
        z: FLOOR_TOP,
        stance: FLOOR_TOP + PLAYER_HEIGHT,
        on_ground: true,
        ..Default::default()
    }
}

fn holding(controls: &[Control]) -> ControlState {
    let mut state = ControlState::new();
    for &control in controls {
        state.set(control, true);
    }
    state
}

// ---------------------------------------------------------------------------
// Free motion
// ---------------------------------------------------------------------------

#[test]
fn test_rest_in_empty_world_only_falls() {
    let world = ChunkStore::new();
    let kin = Kinematics::default();
    let mut pos = PlayerPosition {
        x: 1.5,
        y: 2.5,
        z: 10.0,
        ..Default::default()
    };

    step(&mut pos, &ControlState::new(), &kin, &world, DT);

    assert_eq!(pos.x, 1.5);
    assert_eq!(pos.y, 2.5);
    assert_eq!(pos.dx, 0.0);
    assert_eq!(pos.dy, 0.0);
    assert!((pos.dz - (-kin.gravity * DT)).abs() < 1e-6);
    let expected_z = 10.0 + f64::from(-kin.gravity * DT * DT);
    assert!((pos.z - expected_z).abs() < 1e-6);
    assert!(!pos.on_ground);
}

#[test]
fn test_forward_at_zero_yaw_accelerates_along_x() {
    let world = ChunkStore::new();
    let kin = Kinematics::default();
    let mut pos = PlayerPosition {
        z: 10.0,
        ..Default::default()
    };

    step(&mut pos, &holding(&[Control::Forward]), &kin, &world, DT);

    assert!((pos.dx - kin.input_acceleration * DT).abs() < 1e-5);
    assert!(pos.dy.abs() < 1e-5);
    assert!(pos.x > 0.0);
}

#[test]
fn test_forward_follows_yaw() {
    let world = ChunkStore::new();
    let kin = Kinematics::default();
    let mut pos = PlayerPosition {
        z: 10.0,
        yaw: std::f32::consts::FRAC_PI_2,
        ..Default::default()
    };

    step(&mut pos, &holding(&[Control::Forward]), &kin, &world, DT);

    assert!(pos.dx.abs() < 1e-5);
    assert!((pos.dy - kin.input_acceleration * DT).abs() < 1e-5);
}

#[test]
fn test_strafe_right_at_zero_yaw_is_negative_y() {
    let world = ChunkStore::new();
    let kin = Kinematics::default();
    let mut pos = PlayerPosition {
        z: 10.0,
        ..Default::default()
    };

    step(&mut pos, &holding(&[Control::Right]), &kin, &world, DT);

    assert!(pos.dx.abs() < 1e-5);
    assert!((pos.dy + kin.input_acceleration * DT).abs() < 1e-5);
}

#[test]
fn test_opposing_controls_cancel() {
    let world = ChunkStore::new();
    let kin = Kinematics::default();
    let mut pos = PlayerPosition {
        z: 10.0,
        ..Default::default()
    };

    let controls = holding(&[Control::Forward, Control::Back, Control::Left, Control::Right]);
    step(&mut pos, &controls, &kin, &world, DT);

    assert_eq!(pos.dx, 0.0);
    assert_eq!(pos.dy, 0.0);
}

#[test]
fn test_tiny_ground_speed_snaps_to_rest() {
    let world = ChunkStore::new();
    let kin = Kinematics::default();
    let mut pos = PlayerPosition {
        z: 10.0,
        dx: 1e-4,
        dy: -1e-4,
        ..Default::default()
    };

    step(&mut pos, &ControlState::new(), &kin, &world, DT);

    assert_eq!(pos.dx, 0.0);
    assert_eq!(pos.dy, 0.0);
}

#[test]
fn test_vertical_speed_is_capped() {
    let world = ChunkStore::new();
    let kin = Kinematics::default();
    let mut pos = PlayerPosition {
        z: 100.0,
        dz: -100.0,
        ..Default::default()
    };

    step(&mut pos, &ControlState::new(), &kin, &world, DT);
    assert_eq!(pos.dz, -kin.terminal_velocity);

    pos.dz = 100.0;
    step(&mut pos, &ControlState::new(), &kin, &world, DT);
    assert_eq!(pos.dz, kin.terminal_velocity);
}

#[test]
fn test_horizontal_speed_never_exceeds_cap() {
    let world = floor_world();
    let kin = Kinematics::default();
    let mut rng = StdRng::seed_from_u64(0xC1DE);

    for _ in 0..2_000 {
        let mut pos = standing_at(rng.random_range(2.0..14.0), rng.random_range(2.0..14.0));
        pos.z = FLOOR_TOP + rng.random_range(0.0..4.0);
        pos.on_ground = rng.random_bool(0.5);
        pos.dx = rng.random_range(-30.0..30.0);
        pos.dy = rng.random_range(-30.0..30.0);
        pos.yaw = rng.random_range(-6.3..6.3);

        let mut controls = ControlState::new();
        for control in Control::ALL {
            controls.set(control, rng.random_bool(0.4));
        }
        let dt = rng.random_range(0.001..0.2);

        step(&mut pos, &controls, &kin, &world, dt);

        assert!(
            pos.ground_speed() <= kin.max_ground_speed + 1e-4,
            "speed {} above cap",
            pos.ground_speed()
        );
        assert!(pos.dz.abs() <= kin.terminal_velocity);
    }
}

// ---------------------------------------------------------------------------
// Ground contact
// ---------------------------------------------------------------------------

#[test]
fn test_standing_on_floor_stays_put() {
    let world = floor_world();
    let kin = Kinematics::default();
    let mut pos = standing_at(8.5, 8.5);

    for _ in 0..20 {
        let outcome = step(&mut pos, &ControlState::new(), &kin, &world, DT);
        assert!(outcome.collided_z);
        assert_eq!(pos.z, FLOOR_TOP);
        assert_eq!(pos.dz, 0.0);
        assert!(pos.on_ground);
    }
}

#[test]
fn test_falling_lands_flush_on_floor() {
    let world = floor_world();
    let kin = Kinematics::default();
    let mut pos = standing_at(8.5, 8.5);
    pos.z = FLOOR_TOP + 0.2;
    pos.dz = -5.0;
    pos.on_ground = false;

    let outcome = step(&mut pos, &ControlState::new(), &kin, &world, DT);

    assert!(outcome.collided_z);
    assert_eq!(pos.z, FLOOR_TOP);
    assert_eq!(pos.dz, 0.0);
    assert!(pos.on_ground);
}

#[test]
fn test_friction_never_reverses_direction() {
    let world = floor_world();
    let kin = Kinematics::default();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..2_000 {
        let mut pos = standing_at(8.5, 8.5);
        pos.dx = rng.random_range(-10.0..10.0);
        pos.dy = rng.random_range(-10.0..10.0);
        let (dx, dy) = (pos.dx, pos.dy);
        let dt = rng.random_range(0.001..0.5);

        step(&mut pos, &ControlState::new(), &kin, &world, dt);

        assert!(pos.dx * dx >= 0.0, "dx flipped from {dx} to {}", pos.dx);
        assert!(pos.dy * dy >= 0.0, "dy flipped from {dy} to {}", pos.dy);
    }
}

#[test]
fn test_friction_brings_player_to_rest() {
    let world = floor_world();
    let kin = Kinematics::default();
    let mut pos = standing_at(4.5, 8.5);
    pos.dx = 4.0;

    let mut previous = pos.dx;
    for _ in 0..60 {
        step(&mut pos, &ControlState::new(), &kin, &world, 1.0 / 60.0);
        assert!(pos.dx <= previous);
        assert!(pos.dx >= 0.0);
        previous = pos.dx;
    }
    assert_eq!(pos.dx, 0.0);
    assert_eq!(pos.z, FLOOR_TOP);
}

#[test]
fn test_jump_from_ground() {
    let world = floor_world();
    let kin = Kinematics::default();
    let mut pos = standing_at(8.5, 8.5);

    step(&mut pos, &holding(&[Control::Jump]), &kin, &world, DT);

    assert!((pos.dz - (JUMP_SPEED - kin.gravity * DT)).abs() < 1e-5);
    assert!(pos.z > FLOOR_TOP);
    assert!(!pos.on_ground);
}

#[test]
fn test_jump_in_midair_does_nothing() {
    let world = ChunkStore::new();
    let kin = Kinematics::default();
    let mut pos = PlayerPosition {
        z: 10.0,
        dz: -1.0,
        ..Default::default()
    };

    step(&mut pos, &holding(&[Control::Jump]), &kin, &world, DT);

    assert!(pos.dz < 0.0);
}

// ---------------------------------------------------------------------------
// Walls and ceilings
// ---------------------------------------------------------------------------

#[test]
fn test_wall_in_positive_x_stops_player_flush() {
    let world = walled_world(5);
    let kin = Kinematics::default();
    let mut pos = standing_at(4.6, 8.5);
    pos.dx = 4.0;

    let outcome = step(&mut pos, &ControlState::new(), &kin, &world, DT);

    assert!(outcome.collided_x);
    assert!((pos.x - 4.7).abs() < 1e-9);
    assert_eq!(pos.dx, 0.0);
    assert_eq!(pos.z, FLOOR_TOP);
}

#[test]
fn test_wall_in_negative_x_stops_player_flush() {
    let world = walled_world(2);
    let kin = Kinematics::default();
    let mut pos = standing_at(3.35, 8.5);
    pos.dx = -4.0;

    let outcome = step(&mut pos, &ControlState::new(), &kin, &world, DT);

    assert!(outcome.collided_x);
    assert!((pos.x - 3.3).abs() < 1e-9);
    assert_eq!(pos.dx, 0.0);
}

#[test]
fn test_wall_blocks_only_its_axis() {
    let world = walled_world(2);
    let kin = Kinematics::default();
    let mut pos = standing_at(3.35, 8.5);
    pos.dx = -3.0;
    pos.dy = 3.0;

    let outcome = step(&mut pos, &ControlState::new(), &kin, &world, DT);

    assert!(outcome.collided_x);
    assert!(!outcome.collided_y);
    assert!((pos.x - 3.3).abs() < 1e-9);
    assert_eq!(pos.dx, 0.0);
    assert!(pos.dy > 0.0);
    assert!(pos.y > 8.5);
}

#[test]
fn test_ceiling_contact_zeroes_vertical_velocity() {
    let mut chunk = floor_chunk();
    for x in 0..CHUNK_SIZE.x {
        for y in 0..CHUNK_SIZE.y {
            chunk.set_block(Int3D::new(x, y, 67), Block::of(ItemType::GLASS));
        }
    }
    let mut world = ChunkStore::new();
    world.apply_update(&chunk).unwrap();

    let kin = Kinematics::default();
    let mut pos = standing_at(8.5, 8.5);
    pos.z = 65.3;
    pos.dz = 5.0;
    pos.on_ground = false;

    let outcome = step(&mut pos, &ControlState::new(), &kin, &world, DT);

    assert!(outcome.collided_z);
    assert!((pos.z - (67.0 - PLAYER_HEIGHT)).abs() < 1e-9);
    assert_eq!(pos.dz, 0.0);
    assert!(pos.on_ground);
}
