//! Headless Cinder client.
//!
//! Loads configuration, initializes logging, and runs the game core against
//! an in-process loopback server: a network thread feeds server events into
//! the [`Game`], the main thread drives physics at a fixed rate and reacts to
//! game events, and the game's own keep-alive thread echoes the position.
//!
//! Run with: `cargo run -p cinder-client -- --walk --seconds 5`

mod game_loop;
mod loopback;

use std::process::ExitCode;
use std::sync::{Arc, Weak};
use std::thread;
use std::time::{Duration, Instant};

use cinder_config::{CliArgs, Config, default_config_dir};
use cinder_game::{Game, GameEvent, GameSettings, LoginStatus, ServerEvent};
use cinder_physics::Control;
use cinder_voxel::ItemStackTable;
use clap::Parser;
use crossbeam_channel::Receiver;
use tracing::{debug, error, info, warn};

use crate::game_loop::GameLoop;
use crate::loopback::LoopbackLink;

/// CLI arguments for the client binary.
#[derive(Parser, Debug)]
#[command(name = "cinder-client", about = "Headless Cinder client")]
struct ClientArgs {
    #[command(flatten)]
    common: CliArgs,

    /// How long to run before exiting, in seconds.
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Hold the forward control for the whole run.
    #[arg(long)]
    walk: bool,

    /// Chat line to send once logged in.
    #[arg(long)]
    say: Option<String>,
}

fn main() -> ExitCode {
    let args = ClientArgs::parse();

    let config_dir = args.common.config.clone().or_else(|| default_config_dir().ok());
    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|err| {
            eprintln!("Failed to load config from {}: {err}; using defaults", dir.display());
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args.common);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    cinder_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    info!("Cinder client");
    info!(
        "Server: {}:{} | User: {} | Tick: {} Hz",
        config.network.server_address,
        config.network.server_port,
        config.network.username,
        config.simulation.tick_rate_hz
    );

    let (inbound_tx, inbound_rx) = crossbeam_channel::unbounded();
    let link = Arc::new(LoopbackLink::new(inbound_tx, &config));
    let game = Game::new(
        link.clone(),
        GameSettings::from(&config),
        Arc::new(ItemStackTable::standard()),
    );
    let observer = game.subscribe();

    let network = match spawn_network_thread(Arc::downgrade(&game), inbound_rx) {
        Ok(handle) => handle,
        Err(err) => {
            error!("Failed to start network thread: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = game.start() {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    game.set_control(Control::Forward, args.walk);

    let code = run(&game, &observer, &config, &args);

    let position = game.player_position();
    info!(
        "Final position ({:.2}, {:.2}, {:.2}), on ground: {}, chunks loaded: {}",
        position.x,
        position.y,
        position.z,
        position.on_ground,
        game.loaded_chunk_count()
    );
    info!(
        "Sent {} position(s), {} chat line(s), {} respawn request(s)",
        link.positions_sent(),
        link.chats_sent(),
        link.respawns_requested()
    );

    // Dropping the last handles closes the inbound channel and ends the
    // network and keep-alive threads.
    drop(game);
    drop(link);
    if network.join().is_err() {
        warn!("Network thread panicked");
    }
    code
}

/// Drains inbound server events into the game until the link goes away.
fn spawn_network_thread(
    game: Weak<Game>,
    inbound: Receiver<ServerEvent>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("cinder-net".into())
        .spawn(move || {
            for event in inbound.iter() {
                let Some(game) = game.upgrade() else {
                    break;
                };
                game.handle_server_event(event);
            }
            debug!("Network thread stopped");
        })
}

/// Main loop: fixed-rate physics plus reactions to game events.
fn run(game: &Game, observer: &Receiver<GameEvent>, config: &Config, args: &ClientArgs) -> ExitCode {
    let mut game_loop = GameLoop::from(&config.simulation);
    let deadline = Instant::now() + Duration::from_secs_f64(args.seconds.max(0.0));
    let mut pending_say = args.say.clone();

    while Instant::now() < deadline {
        // Physics waits for the server to place the player.
        let spawned = game.has_spawned();
        game_loop.tick(|dt| {
            if spawned {
                game.do_physics(dt as f32);
            }
        });

        for event in observer.try_iter() {
            match event {
                GameEvent::LoginStatusUpdated(status) if status.is_fatal() => {
                    error!("Disconnected: {status:?}");
                    return ExitCode::FAILURE;
                }
                GameEvent::LoginStatusUpdated(status) => {
                    if status == LoginStatus::Success
                        && let Some(message) = pending_say.take()
                    {
                        game.send_chat(&message);
                    }
                }
                GameEvent::ChatReceived { username, content } => info!("<{username}> {content}"),
                GameEvent::ServerMessage(text) => info!("[server] {text}"),
                GameEvent::HealthUpdated(health) => debug!("Health: {health}"),
                GameEvent::PlayerDied => {
                    warn!("You died; requesting respawn");
                    game.respawn();
                }
                GameEvent::ChunkUpdated { position, size } => {
                    debug!("Chunk updated at {position} ({size})");
                }
                GameEvent::ChunkUnloaded(coord) => debug!("Chunk unloaded at {coord}"),
                GameEvent::PositionUpdated(_) => {}
            }
        }

        thread::sleep(Duration::from_millis(1));
    }

    info!(
        "Simulated {:.2}s in {} steps",
        game_loop.total_sim_time(),
        game_loop.update_count()
    );
    ExitCode::SUCCESS
}
