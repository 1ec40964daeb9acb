//! Fixed-order simulation tick
//!
//! launch → integrate → collide → recycle, once per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve;
use super::motion::integrate;
use super::recycle::{needs_recycle, recycle};
use super::state::{EntityId, GameState, SimError};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Launch velocity from a completed drag gesture
    pub launch: Option<Vec2>,
}

/// Things that happened during a tick, for the render/audio layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player jumped
    Launched { vel: Vec2 },
    /// Player landed on a new platform
    PlatformCredited { id: EntityId },
    /// Player picked up an item (pickup sound)
    ItemCollected { id: EntityId, pos: Vec2 },
    /// World rebuilt around a restart platform
    WorldRecycled { restart: EntityId, highest: EntityId },
    /// Player fell off the bottom of the screen
    GameOver { score: u64 },
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<Vec<GameEvent>, SimError> {
    let mut events = Vec::new();

    // Terminal: nothing moves any more
    if state.is_game_over() {
        return Ok(events);
    }

    state.time_ticks += 1;

    // World frozen briefly after a recycle
    if state.breather_ticks > 0 {
        state.breather_ticks -= 1;
        return Ok(events);
    }

    if let Some(vel) = input.launch {
        if state.player.airborne {
            log::debug!("Launch ignored while airborne");
        } else {
            state.player.jump(vel);
            events.push(GameEvent::Launched { vel });
        }
    }

    if integrate(&mut state.player, &state.config) {
        state.score.end();
        let score = state.score.score();
        log::info!("Game over at tick {} with score {}", state.time_ticks, score);
        events.push(GameEvent::GameOver { score });
        return Ok(events);
    }

    let collisions = resolve(
        &mut state.player,
        &mut state.platforms,
        &mut state.items,
        &mut state.score,
        &state.config,
    );
    events.extend(
        collisions
            .credited
            .into_iter()
            .map(|id| GameEvent::PlatformCredited { id }),
    );
    events.extend(collisions.collected.into_iter().map(|item| GameEvent::ItemCollected {
        id: item.id,
        pos: item.rect.center(),
    }));

    if needs_recycle(state) {
        let outcome = recycle(state)?;
        state.breather_ticks = state.config.transition_ticks;
        events.push(GameEvent::WorldRecycled {
            restart: outcome.restart,
            highest: outcome.highest,
        });
    }

    Ok(events)
}
