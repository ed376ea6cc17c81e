use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::interval;

use super::events::{GameBroadcaster, GameEvent};
use super::session::GameSession;

/// Drives `tick()` at a fixed interval and forwards the emitted events,
/// returning once the session reports game over. Callers spawn this and
/// keep the task under a [`TickLoop`] so it can be stopped or replaced.
pub async fn run_tick_loop<B: GameBroadcaster>(
    session: Arc<Mutex<GameSession>>,
    broadcaster: B,
    tick_interval: Duration,
) {
    let mut timer = interval(tick_interval);

    loop {
        timer.tick().await;

        let events = session.lock().await.tick();

        let mut game_over = false;
        for event in events {
            match event {
                GameEvent::Moved { snapshot } => {
                    broadcaster.broadcast_moved(snapshot).await;
                }
                GameEvent::Ate { cell, score } => {
                    broadcaster.broadcast_ate(cell, score).await;
                }
                GameEvent::GameOver {
                    reason,
                    final_score,
                } => {
                    broadcaster.broadcast_game_over(reason, final_score).await;
                    game_over = true;
                }
            }
        }

        if game_over {
            break;
        }
    }
}

/// Handle over one spawned tick loop. Only one loop may drive a session at a
/// time: stop the old handle before spawning a replacement.
pub struct TickLoop {
    handle: Option<JoinHandle<()>>,
}

impl TickLoop {
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Idempotent: stopping an already stopped or finished loop is a no-op.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TickLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
