//! The game controller.
//!
//! [`Game`] owns the world, the player and the event bus behind a single
//! mutex. Two threads typically drive it: the network thread calls
//! [`Game::handle_server_event`] and the presentation thread calls
//! [`Game::do_physics`] and the control setters. A third, internal thread
//! echoes the position to the server (see [`crate::keep_alive`]).
//!
//! Every public method takes the lock exactly once. Work shared between entry
//! points lives in private helpers that take `&mut GameState`, so no path
//! ever needs to re-acquire the lock.

use std::sync::{Arc, Weak};
use std::time::Duration;

use cinder_config::Config;
use cinder_physics::{Control, ControlState, Kinematics, PlayerPosition, StepOutcome};
use cinder_voxel::{Block, ChunkStore, ChunkUpdateRejection, Int3D, ItemStackTable, ItemType};
use crossbeam_channel::Receiver;
use parking_lot::Mutex;
use tracing::{debug, error, info, trace, warn};

use crate::chat::{ChatLine, parse_chat_line, split_chat};
use crate::events::{EventBus, GameEvent};
use crate::keep_alive;
use crate::link::{EntityPosition, LinkError, LoginStatus, ServerEvent, ServerLink};

/// Health of a freshly spawned player.
pub const MAX_HEALTH: i32 = 20;

// ---------------------------------------------------------------------------
// GameSettings
// ---------------------------------------------------------------------------

/// Per-instance tuning, normally taken from [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    /// Our own login name; chat from it is not re-published.
    pub username: String,
    /// Cadence of the position echo.
    pub keep_alive_interval: Duration,
    /// Maximum characters per outgoing chat line.
    pub chat_length_limit: usize,
    /// Movement constants for the physics step.
    pub kinematics: Kinematics,
}

impl From<&Config> for GameSettings {
    fn from(config: &Config) -> Self {
        Self {
            username: config.network.username.clone(),
            keep_alive_interval: Duration::from_millis(config.network.keep_alive_interval_ms),
            chat_length_limit: config.network.chat_length_limit,
            kinematics: Kinematics::from(&config.physics),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

struct GameState {
    world: ChunkStore,
    position: PlayerPosition,
    controls: ControlState,
    health: i32,
    events: EventBus,
    /// Set by the first position push; gates look adoption and keep-alive.
    position_received: bool,
}

impl GameState {
    fn new() -> Self {
        Self {
            world: ChunkStore::new(),
            position: PlayerPosition::default(),
            controls: ControlState::new(),
            health: MAX_HEALTH,
            events: EventBus::new(),
            position_received: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// Thread-safe client game state.
pub struct Game {
    state: Mutex<GameState>,
    link: Arc<dyn ServerLink>,
    stack_heights: Arc<ItemStackTable>,
    settings: GameSettings,
    weak_self: Weak<Game>,
}

impl Game {
    /// Creates a game bound to `link`. Nothing is sent until [`start`](Self::start).
    pub fn new(
        link: Arc<dyn ServerLink>,
        settings: GameSettings,
        stack_heights: Arc<ItemStackTable>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Game {
            state: Mutex::new(GameState::new()),
            link,
            stack_heights,
            settings,
            weak_self: weak_self.clone(),
        })
    }

    /// Asks the link to connect. Login progress arrives as
    /// [`ServerEvent::LoginStatus`].
    pub fn start(&self) -> Result<(), LinkError> {
        info!("Connecting as {}", self.settings.username);
        self.link.connect()
    }

    /// Settings this game was created with.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    // ---- Controls and look ---------------------------------------------

    /// Sets a control's held flag. Takes effect on the next physics step.
    pub fn set_control(&self, control: Control, activated: bool) {
        self.state.lock().controls.set(control, activated);
    }

    /// Returns `true` if the control is held.
    pub fn is_control_activated(&self, control: Control) -> bool {
        self.state.lock().controls.is_activated(control)
    }

    /// Turns the player by the given deltas (radians).
    pub fn update_look(&self, delta_yaw: f32, delta_pitch: f32) {
        let mut state = self.state.lock();
        state.position.yaw += delta_yaw;
        state.position.pitch += delta_pitch;
        let position = state.position;
        state.events.publish(GameEvent::PositionUpdated(position));
    }

    // ---- Physics --------------------------------------------------------

    /// Runs one physics step of `dt` seconds and publishes the result.
    pub fn do_physics(&self, dt: f32) -> StepOutcome {
        let mut state = self.state.lock();
        let GameState {
            world,
            position,
            controls,
            events,
            ..
        } = &mut *state;
        let outcome = cinder_physics::step(position, controls, &self.settings.kinematics, world, dt);
        events.publish(GameEvent::PositionUpdated(*position));
        outcome
    }

    // ---- Server events --------------------------------------------------

    /// Applies one inbound server event.
    pub fn handle_server_event(&self, event: ServerEvent) {
        let mut state = self.state.lock();
        match event {
            ServerEvent::LoginStatus(status) => Self::on_login_status(&mut state, status),
            ServerEvent::PositionAndLook(position) => self.on_position_and_look(&mut state, position),
            ServerEvent::Health(health) => Self::on_health(&mut state, health),
            ServerEvent::Chat(line) => self.on_chat(&mut state, &line),
            ServerEvent::MapChunk(chunk) => match state.world.apply_update(&chunk) {
                Ok(updated) => state.events.publish(GameEvent::ChunkUpdated {
                    position: updated.position,
                    size: updated.size,
                }),
                Err(rejection @ ChunkUpdateRejection::NotLoaded { .. }) => {
                    debug!("Ignoring chunk update: {rejection}");
                }
                Err(rejection) => warn!("Rejected chunk update: {rejection}"),
            },
            ServerEvent::UnloadChunk(coord) => {
                if state.world.evict(coord).is_none() {
                    trace!("Unload for chunk at {coord} which was not loaded");
                }
                state.events.publish(GameEvent::ChunkUnloaded(coord));
            }
        }
    }

    fn on_login_status(state: &mut GameState, status: LoginStatus) {
        if status.is_fatal() {
            warn!("Connection lost: {status:?}");
        } else {
            info!("Login status: {status:?}");
        }
        state.events.publish(GameEvent::LoginStatusUpdated(status));
    }

    fn on_position_and_look(&self, state: &mut GameState, pushed: EntityPosition) {
        let position = &mut state.position;
        position.x = pushed.x;
        position.y = pushed.y;
        position.z = pushed.z;
        position.stance = pushed.stance;
        position.on_ground = pushed.on_ground;

        if !state.position_received {
            state.position_received = true;
            state.position.yaw = pushed.yaw;
            state.position.pitch = pushed.pitch;
            info!(
                "Spawned at ({:.2}, {:.2}, {:.2})",
                pushed.x, pushed.y, pushed.z
            );
            self.start_keep_alive();
        }

        // The server expects the corrected position echoed back verbatim.
        self.link.send_position_and_look(&state.position);

        let position = state.position;
        state.events.publish(GameEvent::PositionUpdated(position));
    }

    fn on_health(state: &mut GameState, health: i32) {
        let health = health.max(0);
        let was_alive = state.health > 0;
        state.health = health;
        state.events.publish(GameEvent::HealthUpdated(health));
        if was_alive && health == 0 {
            info!("Player died");
            state.events.publish(GameEvent::PlayerDied);
        }
    }

    fn on_chat(&self, state: &mut GameState, line: &str) {
        match parse_chat_line(line) {
            ChatLine::Player { username, content } => {
                if username == self.settings.username {
                    trace!("Suppressing echo of our own chat");
                } else {
                    state
                        .events
                        .publish(GameEvent::ChatReceived { username, content });
                }
            }
            ChatLine::System(text) => state.events.publish(GameEvent::ServerMessage(text)),
        }
    }

    fn start_keep_alive(&self) {
        if let Err(err) = keep_alive::spawn(self.weak_self.clone(), self.settings.keep_alive_interval) {
            error!("Failed to start keep-alive thread: {err}");
        }
    }

    // ---- Outbound -------------------------------------------------------

    /// Asks the server to respawn a dead player. Local health is left as is
    /// until the server pushes a new value.
    pub fn respawn(&self) {
        let state = self.state.lock();
        debug_assert_eq!(state.health, 0, "respawn requested while alive");
        self.link.send_respawn_request();
    }

    /// Sends a chat message, split to the server's line limit.
    pub fn send_chat(&self, message: &str) {
        let _state = self.state.lock();
        for piece in split_chat(message, self.settings.chat_length_limit) {
            self.link.send_chat(piece);
        }
    }

    /// Re-sends the current position to the server.
    pub fn send_position(&self) {
        let state = self.state.lock();
        self.link.send_position_and_look(&state.position);
    }

    // ---- Queries --------------------------------------------------------

    /// Block at a world coordinate; air where nothing is loaded.
    pub fn block_at(&self, coord: Int3D) -> Block {
        self.state.lock().world.block_at(coord)
    }

    /// Snapshot of the player's position.
    pub fn player_position(&self) -> PlayerPosition {
        self.state.lock().position
    }

    /// `true` once the server has pushed the first position.
    pub fn has_spawned(&self) -> bool {
        self.state.lock().position_received
    }

    /// Current health, `0` when dead.
    pub fn player_health(&self) -> i32 {
        self.state.lock().health
    }

    /// Number of chunks currently held.
    pub fn loaded_chunk_count(&self) -> usize {
        self.state.lock().world.loaded_count()
    }

    /// Maximum stack size for `item`, or
    /// [`UNKNOWN_STACK_HEIGHT`](cinder_voxel::UNKNOWN_STACK_HEIGHT).
    pub fn item_stack_height(&self, item: ItemType) -> i32 {
        self.stack_heights.stack_height(item)
    }

    /// Registers an observer. Events published from now on are delivered to
    /// the returned receiver until it is dropped.
    pub fn subscribe(&self) -> Receiver<GameEvent> {
        self.state.lock().events.subscribe()
    }
}
