//! Slingshot drag input
//!
//! Press records an anchor, release turns the drag into a launch vector
//! pointing the opposite way: pull down-right to fly up-left.

use glam::Vec2;

use crate::settings::GameConfig;

/// Launch vector for a drag from `start` to `end`
pub fn drag_vector(start: Vec2, end: Vec2, config: &GameConfig) -> Vec2 {
    let delta = end - start;
    let strength = (delta.length() / config.jump_scale).min(config.max_jump_strength);
    let angle = delta.y.atan2(delta.x);
    Vec2::new(-strength * angle.cos(), -strength * angle.sin())
}

/// Tracks a press-and-release gesture
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    start: Option<Vec2>,
}

impl DragGesture {
    /// Begin a drag. Refused while the player is in the air.
    pub fn press(&mut self, pos: Vec2, airborne: bool) -> bool {
        if airborne {
            return false;
        }
        self.start = Some(pos);
        true
    }

    /// Finish the drag. A release without a press yields nothing.
    pub fn release(&mut self, pos: Vec2, config: &GameConfig) -> Option<Vec2> {
        match self.start.take() {
            Some(start) => Some(drag_vector(start, pos, config)),
            None => {
                log::debug!("Release without press ignored");
                None
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}
