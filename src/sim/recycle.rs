//! World recycling for the endless climb
//!
//! Once the player lands on the highest known platform, the whole world is
//! rebuilt: the player drops back to the bottom of the screen onto a restart
//! platform under the same x, and a fresh band of platforms is generated
//! above. From the player's point of view the screen scrolled up.

use glam::Vec2;

use super::generate::generate_batch;
use super::state::{EntityId, GameState, Platform, SimError};

/// IDs of the platforms that anchor the rebuilt world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecycleOutcome {
    /// New lowest platform, under the player
    pub restart: EntityId,
    /// New recycle trigger
    pub highest: EntityId,
}

/// The player has landed on the highest platform
pub fn needs_recycle(state: &GameState) -> bool {
    state.score.is_touched(state.highest)
}

/// Rebuild the world around a restart platform at the bottom of the screen
pub fn recycle(state: &mut GameState) -> Result<RecycleOutcome, SimError> {
    let anchor_x = state
        .platform(state.highest)
        .ok_or(SimError::MissingPlatform(state.highest))?
        .rect
        .left();

    let config = &state.config;
    let floor = config.screen_height - config.platform_height;

    // Player keeps its x and stands on the restart platform
    state.player.set_bottom(floor);
    state.player.vel = Vec2::ZERO;
    state.player.airborne = false;

    let mut restart = Platform::new(state.ids.next_id(), anchor_x, floor, config);
    restart.credited = true;

    state.platforms.clear();
    state.items.clear();
    state.score.clear_touched();

    state.score.mark_touched(restart.id);
    let restart_id = restart.id;
    state.platforms.push(restart);

    let batch = generate_batch(
        config.recycle_batch(),
        config,
        &mut state.rng,
        &mut state.ids,
    );
    let highest = batch.highest().id;
    state.platforms.extend(batch.platforms);
    state.items.extend(batch.items);

    state.lowest = restart_id;
    state.highest = highest;

    log::info!(
        "World recycled: restart {:?} at x={}, new highest {:?}, {} items",
        restart_id,
        anchor_x,
        highest,
        state.items.len()
    );

    Ok(RecycleOutcome {
        restart: restart_id,
        highest,
    })
}
