use super::collision;
use super::events::{GameEvent, GameSnapshot};
use super::food;
use super::grid::Grid;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Cell, Direction, GameOverReason, GameStatus};
use crate::config::Validate;
use crate::log;

const INITIAL_DIRECTION: Direction = Direction::Right;

/// The simulation: owns the snake, the food, the score, and the lifecycle.
/// `tick()` is a plain state transition so tests can drive it without a
/// clock; the scheduler only decides *when* it runs.
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    level: u32,
    status: GameStatus,
    direction: Direction,
    pending_direction: Option<Direction>,
    start_length: usize,
    game_over_reason: Option<GameOverReason>,
    rng: SessionRng,
}

impl GameSession {
    /// Fails on configuration errors (bad cell size, grid too small, ...);
    /// a constructed session is always playable.
    pub fn new(settings: &GameSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        let grid = settings.grid()?;
        let start_length = settings.start_length as usize;

        Ok(Self {
            grid,
            snake: Snake::new(Self::start_head(&grid), INITIAL_DIRECTION, start_length),
            food: None,
            score: 0,
            level: settings.level,
            status: GameStatus::Idle,
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            start_length,
            game_over_reason: None,
            rng,
        })
    }

    fn start_head(grid: &Grid) -> Cell {
        Cell::new(grid.width_cells() / 2, grid.height_cells() / 2)
    }

    /// `Idle | Over -> Running`: resets the snake, direction, and score,
    /// then places the initial food. Silent no-op while already `Running`.
    pub fn start(&mut self) {
        if self.status == GameStatus::Running {
            return;
        }

        self.snake = Snake::new(
            Self::start_head(&self.grid),
            INITIAL_DIRECTION,
            self.start_length,
        );
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.score = 0;
        self.game_over_reason = None;
        self.status = GameStatus::Running;
        self.food = Some(food::place_food(
            self.snake.occupied(),
            &self.grid,
            &mut self.rng,
        ));

        log!(
            "Session started: {}x{} grid, seed {}",
            self.grid.width_cells(),
            self.grid.height_cells(),
            self.rng.seed()
        );
    }

    /// Full reset regardless of current state; always leaves the session
    /// `Running`. The owner of the tick loop stops it before calling this.
    pub fn restart(&mut self) {
        self.status = GameStatus::Idle;
        self.start();
    }

    /// Buffers a direction change for the next tick. Ignored unless
    /// `Running`, and ignored when `requested` would reverse the snake into
    /// its own neck. Requests between two ticks collapse to the last one
    /// accepted.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        if requested.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = Some(requested);
    }

    /// One simulation step. No-op unless `Running`. Returns the events in
    /// emission order: `Ate` before `Moved` on an eating tick, or a single
    /// `GameOver` on a fatal one.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if self.status != GameStatus::Running {
            return Vec::new();
        }

        if let Some(pending) = self.pending_direction.take() {
            self.direction = pending;
        }

        let candidate = self.snake.peek_next_head(self.direction);

        // Wall before self, so the failure mode is deterministic.
        if collision::is_wall_collision(candidate, &self.grid) {
            return self.finish(GameOverReason::WallCollision, candidate);
        }
        if collision::is_self_collision(candidate, &self.snake) {
            return self.finish(GameOverReason::SelfCollision, candidate);
        }

        let mut events = Vec::with_capacity(2);
        let grew = self.food == Some(candidate);
        self.snake.advance(candidate, grew);

        if grew {
            self.score += self.level;
            log!(
                "Ate food at ({}, {}). Score: {}",
                candidate.col,
                candidate.row,
                self.score
            );
            events.push(GameEvent::Ate {
                cell: candidate,
                score: self.score,
            });
            // Re-place against the post-grow body so food never spawns
            // under the new head or a retained segment.
            self.food = Some(food::place_food(
                self.snake.occupied(),
                &self.grid,
                &mut self.rng,
            ));
        }

        events.push(GameEvent::Moved {
            snapshot: self.snapshot(),
        });
        events
    }

    fn finish(&mut self, reason: GameOverReason, candidate: Cell) -> Vec<GameEvent> {
        self.status = GameStatus::Over;
        self.game_over_reason = Some(reason);
        log!(
            "Game over: {:?} at ({}, {}). Final score: {}",
            reason,
            candidate.col,
            candidate.row,
            self.score
        );
        vec![GameEvent::GameOver {
            reason,
            final_score: self.score,
        }]
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake_cells: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    #[cfg(test)]
    fn force_running(&mut self, cells: &[Cell], direction: Direction, food: Cell) {
        self.snake = Snake::from_cells(cells);
        self.direction = direction;
        self.pending_direction = None;
        self.food = Some(food);
        self.status = GameStatus::Running;
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Cell) {
        self.food = Some(food);
    }
}
