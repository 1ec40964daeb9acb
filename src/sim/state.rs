//! Game state and core simulation types
//!
//! Everything the tick loop mutates lives in `GameState`. Entities are plain
//! data; platforms and items are referred to by `EntityId`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::generate::generate_batch;
use super::rect::Rect;
use super::score::ScoreState;
use crate::settings::GameConfig;

/// Precondition violations inside the simulation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("Platform {0:?} is not in the live set")]
    MissingPlatform(EntityId),
}

/// Stable identity of a platform or item
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

/// Hands out entity IDs in increasing order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// In flight after a launch; cleared on landing
    pub airborne: bool,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::new(config.player_width, config.player_height),
            vel: Vec2::ZERO,
            airborne: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Move vertically so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Stand centered on top of a platform
    pub fn stand_on(&mut self, platform: &Platform) {
        self.pos.x = platform.rect.center().x - self.size.x / 2.0;
        self.set_bottom(platform.rect.top());
        self.vel = Vec2::ZERO;
        self.airborne = false;
    }

    /// Launch with the given velocity
    pub fn jump(&mut self, vector: Vec2) {
        self.vel = vector;
        self.airborne = true;
    }
}

/// A platform the player can land on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: EntityId,
    pub rect: Rect,
    /// Already counted toward the score
    pub credited: bool,
}

impl Platform {
    pub fn new(id: EntityId, x: f32, y: f32, config: &GameConfig) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, config.platform_width, config.platform_height),
            credited: false,
        }
    }
}

/// A collectible bonus item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub rect: Rect,
}

impl Item {
    pub fn new(id: EntityId, x: f32, y: f32, size: f32) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, size, size),
        }
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub rng: Pcg32,
    pub ids: IdAllocator,
    pub player: Player,
    /// Live platforms, in generation order
    pub platforms: Vec<Platform>,
    /// Live items, in generation order
    pub items: Vec<Item>,
    /// Spawn anchor (largest y)
    pub lowest: EntityId,
    /// Recycle trigger (smallest y)
    pub highest: EntityId,
    pub score: ScoreState,
    /// Frozen ticks remaining after a recycle
    pub breather_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh world and stand the player on its lowest platform.
    ///
    /// `config` must already be validated.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        debug_assert!(config.validate().is_ok(), "GameState built from invalid config");

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ids = IdAllocator::default();
        let batch = generate_batch(config.initial_batch(), &config, &mut rng, &mut ids);

        let mut player = Player::new(&config);
        player.stand_on(batch.lowest());

        let lowest = batch.lowest().id;
        let highest = batch.highest().id;
        let mut platforms = batch.platforms;
        let mut score = ScoreState::default();

        // The spawn foothold never scores
        if let Some(spawn) = platforms.iter_mut().find(|p| p.id == lowest) {
            spawn.credited = true;
        }
        score.mark_touched(lowest);

        log::info!(
            "New world (seed {}): {} platforms, {} items",
            seed,
            platforms.len(),
            batch.items.len()
        );

        Self {
            seed,
            config,
            rng,
            ids,
            player,
            platforms,
            items: batch.items,
            lowest,
            highest,
            score,
            breather_ticks: 0,
            time_ticks: 0,
        }
    }

    /// Look up a live platform
    pub fn platform(&self, id: EntityId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.score.is_game_over()
    }

    /// Replace the world with hand-placed platforms.
    ///
    /// The first platform is the spawn; the highest is picked first-seen.
    /// Items are cleared.
    #[cfg(test)]
    pub(crate) fn with_layout(config: GameConfig, layout: &[(f32, f32)]) -> Self {
        let mut state = Self::new(config, 0);
        state.platforms.clear();
        state.items.clear();
        state.score.reset_for_new_session();

        for &(x, y) in layout {
            let id = state.ids.next_id();
            state.platforms.push(Platform::new(id, x, y, &state.config));
        }

        state.lowest = state.platforms[0].id;
        let mut highest = 0;
        for (i, p) in state.platforms.iter().enumerate() {
            if p.rect.top() < state.platforms[highest].rect.top() {
                highest = i;
            }
        }
        state.highest = state.platforms[highest].id;

        state.platforms[0].credited = true;
        state.score.mark_touched(state.lowest);
        let spawn = state.platforms[0].clone();
        state.player.stand_on(&spawn);
        state
    }
}
