use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use cinder_physics::{Control, PlayerPosition};
use cinder_voxel::{Block, CHUNK_SIZE, Chunk, Int3D, ItemStackTable, ItemType, UNKNOWN_STACK_HEIGHT};
use crossbeam_channel::Receiver;
use parking_lot::Mutex;

use crate::events::GameEvent;
use crate::game::{Game, GameSettings, MAX_HEALTH};
use crate::link::{EntityPosition, LinkError, LoginStatus, ServerEvent, ServerLink};

// ---------------------------------------------------------------------------
// Recording link
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Outbound {
    Connect,
    Position(PlayerPosition),
    Chat(String),
    Respawn,
}

#[derive(Default)]
struct RecordingLink {
    sent: Mutex<Vec<Outbound>>,
}

impl RecordingLink {
    fn sent(&self) -> Vec<Outbound> {
        self.sent.lock().clone()
    }

    fn positions(&self) -> Vec<PlayerPosition> {
        self.sent
            .lock()
            .iter()
            .filter_map(|o| match o {
                Outbound::Position(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    fn chats(&self) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter_map(|o| match o {
                Outbound::Chat(c) => Some(c.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ServerLink for RecordingLink {
    fn connect(&self) -> Result<(), LinkError> {
        self.sent.lock().push(Outbound::Connect);
        Ok(())
    }

    fn send_position_and_look(&self, position: &PlayerPosition) {
        self.sent.lock().push(Outbound::Position(*position));
    }

    fn send_chat(&self, message: &str) {
        self.sent.lock().push(Outbound::Chat(message.to_owned()));
    }

    fn send_respawn_request(&self) {
        self.sent.lock().push(Outbound::Respawn);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn settings(keep_alive_ms: u64) -> GameSettings {
    GameSettings {
        username: "me".into(),
        keep_alive_interval: Duration::from_millis(keep_alive_ms),
        ..GameSettings::default()
    }
}

/// Game with a keep-alive slow enough not to interfere with assertions.
fn quiet_game() -> (Arc<Game>, Arc<RecordingLink>) {
    game_with_keep_alive(60_000)
}

fn game_with_keep_alive(keep_alive_ms: u64) -> (Arc<Game>, Arc<RecordingLink>) {
    let link = Arc::new(RecordingLink::default());
    let game = Game::new(
        link.clone(),
        settings(keep_alive_ms),
        Arc::new(ItemStackTable::standard()),
    );
    (game, link)
}

fn spawn_point() -> EntityPosition {
    EntityPosition {
        x: 8.5,
        y: -3.25,
        z: 64.0,
        stance: 65.62,
        yaw: 1.25,
        pitch: -0.5,
        on_ground: true,
    }
}

fn drain(rx: &Receiver<GameEvent>) -> Vec<GameEvent> {
    rx.try_iter().collect()
}

fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

fn floor_chunk(origin: Int3D) -> Chunk {
    let mut chunk = Chunk::new(origin, CHUNK_SIZE);
    for x in 0..CHUNK_SIZE.x {
        for y in 0..CHUNK_SIZE.y {
            chunk.set_block(Int3D::new(x, y, 63), Block::of(ItemType::STONE));
        }
    }
    chunk
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_start_connects_link() {
    let (game, link) = quiet_game();
    game.start().unwrap();
    assert_eq!(link.sent(), vec![Outbound::Connect]);
}

#[test]
fn test_new_game_defaults() {
    let (game, link) = quiet_game();
    assert_eq!(game.player_health(), MAX_HEALTH);
    assert_eq!(game.player_position(), PlayerPosition::default());
    assert_eq!(game.loaded_chunk_count(), 0);
    assert!(!game.has_spawned());
    assert!(link.sent().is_empty());
}

#[test]
fn test_login_status_passes_through() {
    let (game, _link) = quiet_game();
    let rx = game.subscribe();

    game.handle_server_event(ServerEvent::LoginStatus(LoginStatus::Success));
    game.handle_server_event(ServerEvent::LoginStatus(LoginStatus::Disconnected));

    assert_eq!(
        drain(&rx),
        vec![
            GameEvent::LoginStatusUpdated(LoginStatus::Success),
            GameEvent::LoginStatusUpdated(LoginStatus::Disconnected),
        ]
    );
}

// ---------------------------------------------------------------------------
// Position and look
// ---------------------------------------------------------------------------

#[test]
fn test_first_position_push_echoes_and_adopts_look() {
    let (game, link) = quiet_game();
    let rx = game.subscribe();
    let pushed = spawn_point();

    game.handle_server_event(ServerEvent::PositionAndLook(pushed));

    assert!(game.has_spawned());
    let position = game.player_position();
    assert_eq!(position.x, pushed.x);
    assert_eq!(position.y, pushed.y);
    assert_eq!(position.z, pushed.z);
    assert_eq!(position.stance, pushed.stance);
    assert_eq!(position.yaw, pushed.yaw);
    assert_eq!(position.pitch, pushed.pitch);
    assert!(position.on_ground);

    assert_eq!(link.positions(), vec![position]);
    assert_eq!(drain(&rx), vec![GameEvent::PositionUpdated(position)]);
}

#[test]
fn test_later_pushes_keep_local_look() {
    let (game, link) = quiet_game();
    game.handle_server_event(ServerEvent::PositionAndLook(spawn_point()));
    game.update_look(0.5, 0.25);

    let moved = EntityPosition {
        x: 100.0,
        yaw: -3.0,
        pitch: 1.0,
        ..spawn_point()
    };
    game.handle_server_event(ServerEvent::PositionAndLook(moved));

    let position = game.player_position();
    assert_eq!(position.x, 100.0);
    assert_eq!(position.yaw, spawn_point().yaw + 0.5);
    assert_eq!(position.pitch, spawn_point().pitch + 0.25);
    assert_eq!(link.positions().len(), 2);
    assert_eq!(link.positions()[1], position);
}

#[test]
fn test_update_look_is_additive_and_published() {
    let (game, _link) = quiet_game();
    let rx = game.subscribe();

    game.update_look(0.5, -0.25);
    game.update_look(0.5, -0.25);

    let position = game.player_position();
    assert_eq!(position.yaw, 1.0);
    assert_eq!(position.pitch, -0.5);
    assert_eq!(drain(&rx).len(), 2);
}

#[test]
fn test_send_position_echoes_current_state() {
    let (game, link) = quiet_game();
    game.update_look(0.75, 0.0);
    game.send_position();
    assert_eq!(link.positions(), vec![game.player_position()]);
}

// ---------------------------------------------------------------------------
// Keep-alive
// ---------------------------------------------------------------------------

#[test]
fn test_keep_alive_not_started_before_first_push() {
    let (_game, link) = game_with_keep_alive(5);
    thread::sleep(Duration::from_millis(60));
    assert!(link.positions().is_empty());
}

#[test]
fn test_keep_alive_repeats_position() {
    let (game, link) = game_with_keep_alive(10);
    game.handle_server_event(ServerEvent::PositionAndLook(spawn_point()));

    assert!(wait_until(Duration::from_secs(5), || link.positions().len() >= 4));
    let expected = game.player_position();
    assert!(link.positions().iter().all(|p| *p == expected));
}

#[test]
fn test_keep_alive_stops_when_game_dropped() {
    let (game, link) = game_with_keep_alive(5);
    game.handle_server_event(ServerEvent::PositionAndLook(spawn_point()));
    assert!(wait_until(Duration::from_secs(5), || link.positions().len() >= 2));

    drop(game);

    // Once the thread observes the drop, the game (and its link handle) is gone.
    assert!(wait_until(Duration::from_secs(5), || Arc::strong_count(&link) == 1));
    let settled = link.positions().len();
    thread::sleep(Duration::from_millis(50));
    assert_eq!(link.positions().len(), settled);
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[test]
fn test_death_is_emitted_once_per_transition() {
    let (game, _link) = quiet_game();
    let rx = game.subscribe();

    game.handle_server_event(ServerEvent::Health(5));
    game.handle_server_event(ServerEvent::Health(0));
    game.handle_server_event(ServerEvent::Health(0));
    game.handle_server_event(ServerEvent::Health(-3));

    assert_eq!(
        drain(&rx),
        vec![
            GameEvent::HealthUpdated(5),
            GameEvent::HealthUpdated(0),
            GameEvent::PlayerDied,
            GameEvent::HealthUpdated(0),
            GameEvent::HealthUpdated(0),
        ]
    );
    assert_eq!(game.player_health(), 0);

    game.handle_server_event(ServerEvent::Health(MAX_HEALTH));
    game.handle_server_event(ServerEvent::Health(0));
    assert_eq!(
        drain(&rx),
        vec![
            GameEvent::HealthUpdated(MAX_HEALTH),
            GameEvent::HealthUpdated(0),
            GameEvent::PlayerDied,
        ]
    );
}

#[test]
fn test_respawn_sends_request_and_keeps_health() {
    let (game, link) = quiet_game();
    game.handle_server_event(ServerEvent::Health(0));

    game.respawn();

    assert_eq!(link.sent(), vec![Outbound::Respawn]);
    assert_eq!(game.player_health(), 0);
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[test]
fn test_chat_from_other_player() {
    let (game, _link) = quiet_game();
    let rx = game.subscribe();

    game.handle_server_event(ServerEvent::Chat("<alice> hi bob".into()));

    assert_eq!(
        drain(&rx),
        vec![GameEvent::ChatReceived {
            username: "alice".into(),
            content: "hi bob".into(),
        }]
    );
}

#[test]
fn test_own_chat_is_suppressed() {
    let (game, _link) = quiet_game();
    let rx = game.subscribe();

    game.handle_server_event(ServerEvent::Chat("<me> talking to myself".into()));

    assert!(drain(&rx).is_empty());
}

#[test]
fn test_system_chat_becomes_server_message() {
    let (game, _link) = quiet_game();
    let rx = game.subscribe();

    game.handle_server_event(ServerEvent::Chat("alice joined the game".into()));

    assert_eq!(
        drain(&rx),
        vec![GameEvent::ServerMessage("alice joined the game".into())]
    );
}

#[test]
fn test_send_chat_splits_long_messages() {
    let (game, link) = quiet_game();
    let limit = game.settings().chat_length_limit;
    let message = "z".repeat(limit * 2 + 7);

    game.send_chat(&message);

    let chats = link.chats();
    assert_eq!(chats.len(), 3);
    assert_eq!(chats[2].len(), 7);
    assert_eq!(chats.concat(), message);
}

#[test]
fn test_send_empty_chat_sends_nothing() {
    let (game, link) = quiet_game();
    game.send_chat("");
    assert!(link.chats().is_empty());
}

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

#[test]
fn test_map_chunk_is_stored_and_published() {
    let (game, _link) = quiet_game();
    let rx = game.subscribe();
    let origin = Int3D::new(-16, 32, 0);

    game.handle_server_event(ServerEvent::MapChunk(floor_chunk(origin)));

    assert_eq!(
        drain(&rx),
        vec![GameEvent::ChunkUpdated {
            position: origin,
            size: CHUNK_SIZE,
        }]
    );
    assert_eq!(game.loaded_chunk_count(), 1);
    assert_eq!(game.block_at(Int3D::new(-10, 40, 63)).item, ItemType::STONE);
    assert!(game.block_at(Int3D::new(-10, 40, 64)).is_air());
}

#[test]
fn test_rejected_chunk_publishes_nothing() {
    let (game, _link) = quiet_game();
    let rx = game.subscribe();

    // Partial update for a chunk that was never loaded.
    let fragment = Chunk::new(Int3D::new(4, 4, 4), Int3D::new(2, 2, 2));
    game.handle_server_event(ServerEvent::MapChunk(fragment));
    // Fragment crossing a chunk boundary.
    let straddling = Chunk::new(Int3D::new(15, 0, 0), Int3D::new(2, 1, 1));
    game.handle_server_event(ServerEvent::MapChunk(straddling));

    assert!(drain(&rx).is_empty());
    assert_eq!(game.loaded_chunk_count(), 0);
}

#[test]
fn test_unload_publishes_even_when_absent() {
    let (game, _link) = quiet_game();
    game.handle_server_event(ServerEvent::MapChunk(floor_chunk(Int3D::ZERO)));
    let rx = game.subscribe();

    game.handle_server_event(ServerEvent::UnloadChunk(Int3D::new(3, 3, 3)));
    game.handle_server_event(ServerEvent::UnloadChunk(Int3D::new(500, 0, 0)));

    assert_eq!(
        drain(&rx),
        vec![
            GameEvent::ChunkUnloaded(Int3D::new(3, 3, 3)),
            GameEvent::ChunkUnloaded(Int3D::new(500, 0, 0)),
        ]
    );
    assert_eq!(game.loaded_chunk_count(), 0);
    assert!(game.block_at(Int3D::new(3, 3, 63)).is_air());
}

#[test]
fn test_item_stack_height_lookup() {
    let (game, _link) = quiet_game();
    assert_eq!(game.item_stack_height(ItemType::STONE), 64);
    assert_eq!(game.item_stack_height(ItemType(31_000)), UNKNOWN_STACK_HEIGHT);
}

// ---------------------------------------------------------------------------
// Physics through the controller
// ---------------------------------------------------------------------------

#[test]
fn test_controls_round_trip() {
    let (game, _link) = quiet_game();
    assert!(!game.is_control_activated(Control::Forward));
    game.set_control(Control::Forward, true);
    assert!(game.is_control_activated(Control::Forward));
    assert!(!game.is_control_activated(Control::Back));
    game.set_control(Control::Forward, false);
    assert!(!game.is_control_activated(Control::Forward));
}

#[test]
fn test_physics_tick_publishes_position() {
    let (game, _link) = quiet_game();
    game.handle_server_event(ServerEvent::MapChunk(floor_chunk(Int3D::ZERO)));
    game.handle_server_event(ServerEvent::PositionAndLook(EntityPosition {
        x: 8.5,
        y: 8.5,
        z: 64.0,
        stance: 65.62,
        ..EntityPosition::default()
    }));
    let rx = game.subscribe();

    for _ in 0..10 {
        game.do_physics(0.05);
    }

    let events = drain(&rx);
    assert_eq!(events.len(), 10);
    assert!(events.iter().all(|e| matches!(e, GameEvent::PositionUpdated(_))));
    let position = game.player_position();
    assert_eq!(position.z, 64.0);
    assert!(position.on_ground);
}

#[test]
fn test_walking_moves_player_forward() {
    let (game, _link) = quiet_game();
    game.handle_server_event(ServerEvent::MapChunk(floor_chunk(Int3D::ZERO)));
    game.handle_server_event(ServerEvent::PositionAndLook(EntityPosition {
        x: 4.5,
        y: 8.5,
        z: 64.0,
        stance: 65.62,
        ..EntityPosition::default()
    }));

    game.set_control(Control::Forward, true);
    for _ in 0..10 {
        game.do_physics(0.05);
    }

    let position = game.player_position();
    assert!(position.x > 4.5);
    assert!((position.y - 8.5).abs() < 1e-3);
    assert!(position.ground_speed() <= game.settings().kinematics.max_ground_speed + 1e-4);
}
