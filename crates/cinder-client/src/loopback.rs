//! In-process stand-in for a server connection.
//!
//! [`LoopbackLink`] implements [`ServerLink`] without a socket: on connect it
//! walks through the login states and streams a flat world around the spawn
//! point, and it answers chat and respawn requests the way a server would.
//! Inbound traffic is queued on a channel that the client's network thread
//! drains into [`Game::handle_server_event`](cinder_game::Game::handle_server_event).

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use cinder_config::Config;
use cinder_game::{EntityPosition, LinkError, LoginStatus, MAX_HEALTH, ServerEvent, ServerLink};
use cinder_physics::{PLAYER_HEIGHT, PlayerPosition};
use cinder_voxel::{Block, CHUNK_SIZE, Chunk, Int3D, ItemType};
use crossbeam_channel::Sender;
use tracing::{debug, trace};

/// Chunks streamed in each horizontal direction from the spawn chunk.
const WORLD_RADIUS: i32 = 2;

/// Top surface of the generated floor (first air layer).
const SURFACE_Z: i32 = 64;

/// Offline link that plays the server's part.
pub struct LoopbackLink {
    inbound: Sender<ServerEvent>,
    username: String,
    address: String,
    connected: AtomicBool,
    positions_sent: AtomicU64,
    chats_sent: AtomicU64,
    respawns_requested: AtomicU64,
}

impl LoopbackLink {
    pub fn new(inbound: Sender<ServerEvent>, config: &Config) -> Self {
        Self {
            inbound,
            username: config.network.username.clone(),
            address: format!("{}:{}", config.network.server_address, config.network.server_port),
            connected: AtomicBool::new(false),
            positions_sent: AtomicU64::new(0),
            chats_sent: AtomicU64::new(0),
            respawns_requested: AtomicU64::new(0),
        }
    }

    /// Number of position packets the game has sent.
    pub fn positions_sent(&self) -> u64 {
        self.positions_sent.load(Ordering::Relaxed)
    }

    /// Number of chat lines the game has sent.
    pub fn chats_sent(&self) -> u64 {
        self.chats_sent.load(Ordering::Relaxed)
    }

    /// Number of respawn requests the game has sent.
    pub fn respawns_requested(&self) -> u64 {
        self.respawns_requested.load(Ordering::Relaxed)
    }

    fn push(&self, event: ServerEvent) {
        if self.inbound.send(event).is_err() {
            trace!("Loopback inbound channel closed");
        }
    }

    fn spawn_position() -> EntityPosition {
        let z = f64::from(SURFACE_Z);
        EntityPosition {
            x: 8.5,
            y: 8.5,
            z,
            stance: z + PLAYER_HEIGHT,
            yaw: 0.0,
            pitch: 0.0,
            on_ground: true,
        }
    }
}

impl ServerLink for LoopbackLink {
    fn connect(&self) -> Result<(), LinkError> {
        if self.connected.swap(true, Ordering::SeqCst) {
            return Err(LinkError::Closed);
        }
        debug!("Loopback connecting to {}", self.address);

        for status in [
            LoginStatus::Connecting,
            LoginStatus::WaitingForHandshakeResponse,
            LoginStatus::WaitingForLoginResponse,
            LoginStatus::Success,
        ] {
            self.push(ServerEvent::LoginStatus(status));
        }

        for cx in -WORLD_RADIUS..=WORLD_RADIUS {
            for cy in -WORLD_RADIUS..=WORLD_RADIUS {
                let origin = Int3D::new(cx * CHUNK_SIZE.x, cy * CHUNK_SIZE.y, 0);
                self.push(ServerEvent::MapChunk(flat_chunk(origin)));
            }
        }

        self.push(ServerEvent::Health(MAX_HEALTH));
        self.push(ServerEvent::PositionAndLook(Self::spawn_position()));
        self.push(ServerEvent::Chat(format!("{} joined the game", self.username)));
        Ok(())
    }

    fn send_position_and_look(&self, position: &PlayerPosition) {
        self.positions_sent.fetch_add(1, Ordering::Relaxed);
        trace!(
            x = position.x,
            y = position.y,
            z = position.z,
            on_ground = position.on_ground,
            "-> position"
        );
    }

    fn send_chat(&self, message: &str) {
        self.chats_sent.fetch_add(1, Ordering::Relaxed);
        debug!("-> chat: {message}");
        self.push(ServerEvent::Chat(format!("<{}> {message}", self.username)));
    }

    fn send_respawn_request(&self) {
        self.respawns_requested.fetch_add(1, Ordering::Relaxed);
        debug!("-> respawn");
        self.push(ServerEvent::Health(MAX_HEALTH));
        self.push(ServerEvent::PositionAndLook(Self::spawn_position()));
    }
}

/// Full chunk of stone capped with grass below [`SURFACE_Z`].
fn flat_chunk(origin: Int3D) -> Chunk {
    let mut chunk = Chunk::new(origin, CHUNK_SIZE);
    for x in 0..CHUNK_SIZE.x {
        for y in 0..CHUNK_SIZE.y {
            for z in 0..SURFACE_Z - 1 {
                chunk.set_block(Int3D::new(x, y, z), Block::of(ItemType::STONE));
            }
            chunk.set_block(Int3D::new(x, y, SURFACE_Z - 1), Block::of(ItemType::GRASS));
        }
    }
    chunk
}
