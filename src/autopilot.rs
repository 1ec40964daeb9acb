//! Headless demo player
//!
//! Picks the nearest reachable platform above the player and produces the
//! drag gesture that lobs the player onto it.

use glam::Vec2;

use crate::sim::{GameState, Platform};

/// Extra apex height above the target so the player clears it before falling
const APEX_MARGIN: f32 = 40.0;

/// A press/release pair in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub start: Vec2,
    pub end: Vec2,
}

/// Plan the next jump, or `None` if the player cannot jump right now or
/// nothing above is reachable.
pub fn plan_drag(state: &GameState) -> Option<Drag> {
    if state.player.airborne || state.breather_ticks > 0 || state.is_game_over() {
        return None;
    }

    let config = &state.config;
    let gravity = config.gravity;
    let bottom = state.player.bottom();
    let reach = config.max_jump_strength.powi(2) / (2.0 * gravity) - APEX_MARGIN;

    let target = pick_target(state, bottom, reach)?;
    let rise = bottom - target.rect.top();

    // Launch speed for an apex `APEX_MARGIN` above the target
    let vy = -(2.0 * gravity * (rise + APEX_MARGIN)).sqrt();
    // Ticks until the player comes back down to the target's top
    let ticks = (-vy + (vy * vy - 2.0 * gravity * rise).max(0.0).sqrt()) / gravity;

    let from = state.player.rect().center().x;
    let dx = wrapped_dx(from, target.rect.center().x, config.screen_width);
    let launch = Vec2::new(dx / ticks, vy).clamp_length_max(config.max_jump_strength);

    // Dragging backwards along the launch direction
    let start = state.player.rect().center();
    Some(Drag {
        start,
        end: start - launch * config.jump_scale,
    })
}

/// Lowest platform above the player within reach, preferring ones not yet
/// credited.
fn pick_target(state: &GameState, bottom: f32, reach: f32) -> Option<&Platform> {
    state
        .platforms
        .iter()
        .filter(|p| {
            let rise = bottom - p.rect.top();
            rise > 1.0 && rise <= reach
        })
        .max_by(|a, b| {
            let fresh_a = !state.score.is_touched(a.id);
            let fresh_b = !state.score.is_touched(b.id);
            fresh_a
                .cmp(&fresh_b)
                .then(a.rect.top().total_cmp(&b.rect.top()))
        })
}

/// Shortest horizontal offset, allowing for screen wrap
fn wrapped_dx(from: f32, to: f32, width: f32) -> f32 {
    let dx = to - from;
    [dx, dx - width, dx + width]
        .into_iter()
        .min_by(|a, b| a.abs().total_cmp(&b.abs()))
        .unwrap_or(dx)
}
