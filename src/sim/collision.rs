//! Player vs platform and player vs item collision
//!
//! Platforms are one-way: a rising player passes through from below and only
//! a falling player can land. Landing snaps only when the overlap is shallow,
//! so a player clipping a platform's side (or a platform spawned deep inside
//! the player's path) does not teleport it.

use super::score::ScoreState;
use super::state::{EntityId, Item, Platform, Player};
use crate::settings::GameConfig;

/// What a single collision pass changed
#[derive(Debug, Clone, Default)]
pub struct Collisions {
    /// Platforms credited this tick
    pub credited: Vec<EntityId>,
    /// Items removed from the live set this tick
    pub collected: Vec<Item>,
}

/// Resolve the player against every live platform and item
pub fn resolve(
    player: &mut Player,
    platforms: &mut [Platform],
    items: &mut Vec<Item>,
    score: &mut ScoreState,
    config: &GameConfig,
) -> Collisions {
    let mut result = Collisions::default();

    for platform in platforms.iter_mut() {
        // Only a falling player lands
        if player.vel.y <= 0.0 || !player.rect().overlaps(&platform.rect) {
            continue;
        }

        if player.bottom() <= platform.rect.top() + config.collision_buffer {
            player.set_bottom(platform.rect.top());
            player.vel.y = 0.0;
            player.airborne = false;
        }

        if player.vel.y == 0.0 && score.mark_touched(platform.id) {
            platform.credited = true;
            score.record_score_delta(config.platform_reward);
            result.credited.push(platform.id);
        }
    }

    let player_rect = player.rect();
    items.retain(|item| {
        if player_rect.overlaps(&item.rect) {
            result.collected.push(item.clone());
            false
        } else {
            true
        }
    });
    for _ in &result.collected {
        score.record_score_delta(config.item_reward);
    }

    result
}
