//! Periodic position echo.
//!
//! The server expects a position packet every tick even when the player is
//! idle. A dedicated thread re-sends the current position at a fixed cadence
//! for as long as the [`Game`] is alive.

use std::sync::Weak;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::game::Game;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Starts the keep-alive thread.
///
/// The thread holds only a weak reference and exits on the first tick after
/// the last strong reference to the game is dropped.
pub(crate) fn spawn(game: Weak<Game>, interval: Duration) -> std::io::Result<JoinHandle<()>> {
    let interval = interval.max(MIN_INTERVAL);
    thread::Builder::new()
        .name("cinder-keep-alive".into())
        .spawn(move || {
            debug!("Keep-alive started, interval {interval:?}");
            let ticker = crossbeam_channel::tick(interval);
            for _ in ticker.iter() {
                let Some(game) = game.upgrade() else {
                    break;
                };
                game.send_position();
            }
            debug!("Keep-alive stopped");
        })
}
