use snake_engine::game::{Cell, GameBroadcaster, GameOverReason, GameSnapshot};

use crate::state::{AppState, SharedState};

/// In-process sink for session events: writes them into [`SharedState`] for
/// the egui thread to render.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_moved(&self, snapshot: GameSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_ate(&self, _cell: Cell, _score: u32) {
        // Hook for a bite sound cue; this client has no audio output, and the
        // score reaches the UI through the moved snapshot.
    }

    async fn broadcast_game_over(&self, reason: GameOverReason, final_score: u32) {
        let last_snapshot = self.shared_state.last_snapshot();
        self.shared_state.set_state(AppState::GameOver {
            final_score,
            reason,
            last_snapshot,
        });
    }
}
