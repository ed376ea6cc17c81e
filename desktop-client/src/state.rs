use std::sync::{Arc, Mutex};

use snake_engine::game::{Direction, GameOverReason, GameSnapshot};

#[derive(Debug, Clone, Copy)]
pub enum ClientCommand {
    StartGame,
    Turn { direction: Direction },
    Restart,
    Quit,
}

#[derive(Debug, Clone)]
pub enum AppState {
    Menu,
    InGame {
        snapshot: Option<GameSnapshot>,
    },
    GameOver {
        final_score: u32,
        reason: GameOverReason,
        last_snapshot: Option<GameSnapshot>,
    },
}

/// State shared between the game task and the egui thread. The UI only reads;
/// the game task and broadcaster write.
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Menu)),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    /// Replaces the live snapshot; ignored outside a running game so a late
    /// moved event cannot resurrect a finished session on screen.
    pub fn update_snapshot(&self, snapshot: GameSnapshot) {
        let mut state = self.state.lock().unwrap();
        if let AppState::InGame { snapshot: current } = &mut *state {
            *current = Some(snapshot);
        }
    }

    pub fn last_snapshot(&self) -> Option<GameSnapshot> {
        match self.get_state() {
            AppState::InGame { snapshot } => snapshot,
            AppState::GameOver { last_snapshot, .. } => last_snapshot,
            AppState::Menu => None,
        }
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap() = None;
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            error: Arc::clone(&self.error),
        }
    }
}
