//! Client-side game state for Cinder.
//!
//! [`Game`] is the thread-safe controller that sits between the network layer
//! (which feeds it [`ServerEvent`]s and receives outbound traffic through a
//! [`ServerLink`]) and the presentation layer (which drives physics ticks,
//! sets controls, and listens for [`GameEvent`]s).

pub mod chat;
pub mod events;
pub mod game;
mod keep_alive;
pub mod link;

#[cfg(test)]
mod game_tests;

pub use chat::{ChatLine, parse_chat_line, split_chat};
pub use events::{EventBus, GameEvent};
pub use game::{Game, GameSettings, MAX_HEALTH};
pub use link::{EntityPosition, LinkError, LoginStatus, ServerEvent, ServerLink};
