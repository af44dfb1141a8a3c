pub mod labyrinth;

pub use labyrinth::ascii_utils::render_ascii;
pub use labyrinth::cell::Cell;
pub use labyrinth::command::Command;
pub use labyrinth::config::SessionConfig;
pub use labyrinth::direction::Direction;
pub use labyrinth::error::{LabyError, Result};
pub use labyrinth::events::{Highlight, LogTelemetry, MazeEvent, Renderer, Telemetry};
pub use labyrinth::generator::{generate, generate_maze, generate_with};
pub use labyrinth::json_utils::{event_to_json, JsonLinesRenderer};
pub use labyrinth::map::{Dimensions, MazeMap, MAX_SIDE, MIN_SIDE};
pub use labyrinth::maze::Maze;
pub use labyrinth::path::Path;
pub use labyrinth::session::{Session, StepDelay, MAX_STEP_DELAY_MS};
pub use labyrinth::solver::{solve, solve_with, SolveStep, Solver};
pub use labyrinth::tracker::{ClickOutcome, DragOutcome, PathTracker, Rejection};
pub use labyrinth::walls::{Wall, Walls};
