//! Sling Jump - a slingshot platformer with an endless vertical climb
//!
//! Core modules:
//! - `sim`: Deterministic simulation (generation, physics, collisions, recycling)
//! - `input`: Drag gesture to launch vector conversion
//! - `settings`: Injected game configuration
//! - `highscores`: File-backed high score store
//! - `session`: Session driver tying the simulation to the high score store
//! - `autopilot`: Headless demo player

pub mod autopilot;
pub mod highscores;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::{HighScoreError, HighScoreStore};
pub use session::Session;
pub use settings::{ConfigError, GameConfig};

/// Default game constants (used to build `GameConfig::default()`)
pub mod consts {
    /// Frame cadence the tick loop is tuned for
    pub const FPS: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Per-tick downward acceleration
    pub const GRAVITY: f32 = 0.5;
    /// Fall speed ceiling (keeps the player from tunneling through platforms)
    pub const MAX_VELOCITY: f32 = 25.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Platforms never spawn closer than this to the top edge
    pub const PLATFORM_TOP_LIMIT: f32 = 30.0;
    /// Platforms in the very first world
    pub const INITIAL_PLATFORMS: usize = 10;
    /// Platforms in every recycled world (restart platform included)
    pub const NUM_PLATFORMS: usize = 8;
    /// How far the player's bottom may sink below a platform top and still land
    pub const PLATFORM_COLLISION_BUFFER: f32 = 20.0;

    /// Item defaults
    pub const ITEM_SIZE: f32 = 25.0;
    pub const ITEM_X_OFFSET: f32 = 38.0;
    pub const ITEM_Y_OFFSET: f32 = 30.0;

    /// Score rewards
    pub const PLATFORM_SCORE: u64 = 1;
    pub const ITEM_SCORE: u64 = 5;

    /// Drag gesture tuning
    pub const MAX_JUMP_STRENGTH: f32 = 20.0;
    pub const JUMP_REDUCTION_FACTOR: f32 = 10.0;

    /// Frozen ticks after a world recycle (0.5 s at 60 Hz)
    pub const TRANSITION_TICKS: u32 = 30;
}
