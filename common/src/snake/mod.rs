mod body;
mod clock;
mod food;
mod grid;
mod session;
mod settings;
mod snapshot;
mod types;

pub use body::{Advance, Snake, INITIAL_LENGTH};
pub use clock::{interval_for_speed, TickClock};
pub use food::{spawn_food, MAX_SPAWN_ATTEMPTS};
pub use grid::GridConfig;
pub use session::{Frame, SnakeSession, POINTS_PER_FOOD};
pub use settings::{GameSettings, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use snapshot::{format_clock, FoodView, Snapshot};
pub use types::{
    Cell, DeathReason, Direction, Food, GameOverReport, RunState, SessionEvent, StartOutcome,
    TickOutcome,
};
