//! Contract with the network layer: inbound [`ServerEvent`]s and the outbound
//! [`ServerLink`] trait.

use cinder_physics::PlayerPosition;
use cinder_voxel::{Chunk, Int3D};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LoginStatus
// ---------------------------------------------------------------------------

/// Connection/login progress reported by the network layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginStatus {
    /// Opening the socket.
    Connecting,
    /// Handshake sent, waiting for the server's reply.
    WaitingForHandshakeResponse,
    /// Login request sent, waiting for the server's reply.
    WaitingForLoginResponse,
    /// Logged in; world data will start to arrive.
    Success,
    /// The socket failed.
    SocketError,
    /// The server closed the connection.
    Disconnected,
}

impl LoginStatus {
    /// `true` for statuses after which no more server traffic will arrive.
    pub fn is_fatal(self) -> bool {
        matches!(self, LoginStatus::SocketError | LoginStatus::Disconnected)
    }
}

// ---------------------------------------------------------------------------
// EntityPosition
// ---------------------------------------------------------------------------

/// Position-and-look snapshot pushed by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub stance: f64,
    pub yaw: f32,
    pub pitch: f32,
    pub on_ground: bool,
}

// ---------------------------------------------------------------------------
// ServerEvent (server → game)
// ---------------------------------------------------------------------------

/// A decoded server message relevant to game state.
#[derive(Debug, Clone)]
pub enum ServerEvent {
    /// Login progress changed.
    LoginStatus(LoginStatus),
    /// Authoritative position and look for the local player.
    PositionAndLook(EntityPosition),
    /// New health value.
    Health(i32),
    /// One raw chat line.
    Chat(String),
    /// A chunk fragment to merge into the world.
    MapChunk(Chunk),
    /// The chunk containing this coordinate should be dropped.
    UnloadChunk(Int3D),
}

// ---------------------------------------------------------------------------
// ServerLink (game → server)
// ---------------------------------------------------------------------------

/// Errors raised when the link cannot be established.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Connecting to the server failed.
    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },
    /// The link was already shut down.
    #[error("server link is closed")]
    Closed,
}

/// Outbound half of the network layer.
///
/// The game calls these while holding its state lock, so implementations
/// must not block (queue the message and return) and must not call back
/// into the [`Game`](crate::Game).
pub trait ServerLink: Send + Sync {
    /// Starts connecting. Progress is reported back as
    /// [`ServerEvent::LoginStatus`].
    fn connect(&self) -> Result<(), LinkError>;

    /// Sends the player's position and look.
    fn send_position_and_look(&self, position: &PlayerPosition);

    /// Sends one chat line. The caller has already split it to the server's
    /// length limit.
    fn send_chat(&self, message: &str);

    /// Asks the server to respawn the player.
    fn send_respawn_request(&self);
}
