mod collision;
mod events;
mod food;
mod grid;
mod scheduler;
mod session;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use collision::{is_self_collision, is_wall_collision};
pub use events::{GameBroadcaster, GameEvent, GameSnapshot};
pub use food::place_food;
pub use grid::Grid;
pub use scheduler::{TickLoop, run_tick_loop};
pub use session::GameSession;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use types::{Cell, Direction, GameOverReason, GameStatus};
