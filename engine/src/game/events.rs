use super::types::{Cell, GameOverReason, GameStatus};

/// Read-only view of the session for renderers and UI; assembled fresh on
/// every moved event so consumers never touch live state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    /// Body cells in order, head first.
    pub snake_cells: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub status: GameStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Moved {
        snapshot: GameSnapshot,
    },
    Ate {
        cell: Cell,
        score: u32,
    },
    GameOver {
        reason: GameOverReason,
        final_score: u32,
    },
}

/// Outbound edge of the core: one method per signal the session emits.
/// Implementations forward to whatever the host wires up (UI state, logs);
/// they never mutate session state.
pub trait GameBroadcaster {
    async fn broadcast_moved(&self, snapshot: GameSnapshot);
    async fn broadcast_ate(&self, cell: Cell, score: u32);
    async fn broadcast_game_over(&self, reason: GameOverReason, final_score: u32);
}
