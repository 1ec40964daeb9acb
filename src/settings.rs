//! Game configuration
//!
//! Every tunable the simulation reads lives here and is passed explicitly
//! into the sim. Loaded from an optional JSON file; missing fields fall back
//! to the defaults in `crate::consts`.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a `GameConfig`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Physics ===
    /// Added to vy every airborne tick
    pub gravity: f32,
    /// Ceiling applied to falling speed only
    pub max_velocity: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    /// Minimum spawn y for generated platforms
    pub platform_top_limit: f32,
    /// Platform count of the first world
    pub initial_platform_count: usize,
    /// Platform count of every recycled world (restart platform included)
    pub platform_count: usize,
    /// Landing tolerance below a platform top
    pub collision_buffer: f32,

    // === Items ===
    pub item_size: f32,
    pub item_x_offset: f32,
    pub item_y_offset: f32,

    // === Scoring ===
    pub platform_reward: u64,
    pub item_reward: u64,

    // === Input ===
    pub max_jump_strength: f32,
    /// Drag distance is divided by this before clamping
    pub jump_scale: f32,

    // === Presentation ===
    /// Ticks the world stays frozen after a recycle
    pub transition_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            max_velocity: MAX_VELOCITY,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_top_limit: PLATFORM_TOP_LIMIT,
            initial_platform_count: INITIAL_PLATFORMS,
            platform_count: NUM_PLATFORMS,
            collision_buffer: PLATFORM_COLLISION_BUFFER,

            item_size: ITEM_SIZE,
            item_x_offset: ITEM_X_OFFSET,
            item_y_offset: ITEM_Y_OFFSET,

            platform_reward: PLATFORM_SCORE,
            item_reward: ITEM_SCORE,

            max_jump_strength: MAX_JUMP_STRENGTH,
            jump_scale: JUMP_REDUCTION_FACTOR,

            transition_ticks: TRANSITION_TICKS,
        }
    }
}

impl GameConfig {
    /// Load a config file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("item_size", self.item_size),
            ("gravity", self.gravity),
            ("max_velocity", self.max_velocity),
            ("max_jump_strength", self.max_jump_strength),
            ("jump_scale", self.jump_scale),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.collision_buffer.is_nan() || self.collision_buffer < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "collision_buffer must not be negative, got {}",
                self.collision_buffer
            )));
        }

        if self.platform_width > self.screen_width {
            return Err(ConfigError::Invalid(
                "platform_width exceeds screen_width".to_string(),
            ));
        }
        if self.platform_top_limit < 0.0
            || self.platform_top_limit > self.screen_height - self.platform_height
        {
            return Err(ConfigError::Invalid(format!(
                "platform_top_limit {} leaves no room to spawn platforms",
                self.platform_top_limit
            )));
        }
        if self.initial_platform_count < 1 {
            return Err(ConfigError::Invalid(
                "initial_platform_count must be at least 1".to_string(),
            ));
        }
        // The restart platform takes one slot of every recycled world
        if self.platform_count < 2 {
            return Err(ConfigError::Invalid(
                "platform_count must be at least 2".to_string(),
            ));
        }
        Ok(())
    }

    /// Platforms generated for the first world
    pub fn initial_batch(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.initial_platform_count).unwrap_or(NonZeroUsize::MIN)
    }

    /// Platforms generated on recycle, leaving a slot for the restart platform
    pub fn recycle_batch(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.platform_count.saturating_sub(1)).unwrap_or(NonZeroUsize::MIN)
    }
}
