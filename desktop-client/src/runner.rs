use std::sync::Arc;

use snake_engine::game::{GameSession, GameSettings, SessionRng, TickLoop, run_tick_loop};
use snake_engine::log;
use tokio::sync::{Mutex, mpsc};

use crate::broadcaster::LocalBroadcaster;
use crate::state::{AppState, ClientCommand, SharedState};

/// Command loop owning the session and its tick loop. Direction changes go
/// through the session lock, so they land between ticks, never inside one.
pub async fn game_task(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    settings: GameSettings,
    seed: Option<u64>,
) {
    let mut active: Option<(Arc<Mutex<GameSession>>, TickLoop)> = None;

    loop {
        let Some(command) = command_rx.recv().await else {
            break;
        };

        match command {
            ClientCommand::StartGame | ClientCommand::Restart if active.is_none() => {
                match launch(&shared_state, &settings, seed).await {
                    Ok(launched) => active = Some(launched),
                    Err(e) => shared_state.set_error(e),
                }
            }

            ClientCommand::StartGame => {}

            ClientCommand::Turn { direction } => {
                if let Some((session, _)) = &active {
                    session.lock().await.set_direction(direction);
                }
            }

            ClientCommand::Restart => {
                if let Some((session, tick_loop)) = &mut active {
                    // The previous loop must be gone before the session is
                    // reset, or two loops would tick one session.
                    tick_loop.stop();

                    let mut locked = session.lock().await;
                    locked.restart();
                    let snapshot = locked.snapshot();
                    drop(locked);

                    shared_state.set_state(AppState::InGame {
                        snapshot: Some(snapshot),
                    });

                    *tick_loop = TickLoop::new(tokio::spawn(run_tick_loop(
                        session.clone(),
                        LocalBroadcaster::new(shared_state.clone()),
                        settings.tick_interval(),
                    )));
                }
            }

            ClientCommand::Quit => {
                if let Some((_, mut tick_loop)) = active.take() {
                    tick_loop.stop();
                }
                break;
            }
        }
    }

    log!("Game task finished");
}

async fn launch(
    shared_state: &SharedState,
    settings: &GameSettings,
    seed: Option<u64>,
) -> Result<(Arc<Mutex<GameSession>>, TickLoop), String> {
    let seed = match seed {
        Some(seed) => seed,
        None => rand::random(),
    };

    let mut session = GameSession::new(settings, SessionRng::new(seed))?;
    session.start();
    let snapshot = session.snapshot();
    let session = Arc::new(Mutex::new(session));

    shared_state.set_state(AppState::InGame {
        snapshot: Some(snapshot),
    });

    let tick_loop = TickLoop::new(tokio::spawn(run_tick_loop(
        session.clone(),
        LocalBroadcaster::new(shared_state.clone()),
        settings.tick_interval(),
    )));

    Ok((session, tick_loop))
}
