//! Observer notifications published by the [`Game`](crate::Game).

use cinder_physics::PlayerPosition;
use cinder_voxel::Int3D;
use crossbeam_channel::{Receiver, Sender};

use crate::link::LoginStatus;

/// Something observable happened to the game state.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The player's position or look changed.
    PositionUpdated(PlayerPosition),
    /// The player's health changed (or was re-sent).
    HealthUpdated(i32),
    /// Health dropped to zero.
    PlayerDied,
    /// Another player said something.
    ChatReceived { username: String, content: String },
    /// A chat line that is not from a player (server notices, join messages).
    ServerMessage(String),
    /// A region of the world changed.
    ChunkUpdated { position: Int3D, size: Int3D },
    /// The chunk containing this coordinate was dropped.
    ChunkUnloaded(Int3D),
    /// Login progress changed.
    LoginStatusUpdated(LoginStatus),
}

/// Fan-out of [`GameEvent`]s to any number of channel subscribers.
///
/// Channels are unbounded so publishing never blocks while the game lock is
/// held. A subscriber whose receiver has been dropped is removed on the next
/// publish.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<GameEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber and returns its receiving end.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Sends `event` to every live subscriber.
    pub fn publish(&mut self, event: GameEvent) {
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            tracing::debug!("Pruned {pruned} disconnected event subscriber(s)");
        }
    }

    /// Number of subscribers still registered.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
