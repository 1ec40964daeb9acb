//! Score bookkeeping for a single session

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::state::EntityId;

/// Running score, credited platforms, and the terminal flag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreState {
    score: u64,
    /// Platforms that already contributed to the score
    touched: BTreeSet<EntityId>,
    game_over: bool,
}

impl ScoreState {
    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Add to the score. Ignored once the session has ended.
    pub fn record_score_delta(&mut self, delta: u64) -> u64 {
        if !self.game_over {
            self.score = self.score.saturating_add(delta);
        }
        self.score
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Enter the terminal state. There is no way back short of a reset.
    pub fn end(&mut self) {
        self.game_over = true;
    }

    pub fn is_touched(&self, id: EntityId) -> bool {
        self.touched.contains(&id)
    }

    /// Returns false if the platform was already touched
    pub fn mark_touched(&mut self, id: EntityId) -> bool {
        self.touched.insert(id)
    }

    pub fn touched(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.touched.iter().copied()
    }

    pub fn clear_touched(&mut self) {
        self.touched.clear();
    }

    pub fn reset_for_new_session(&mut self) {
        *self = Self::default();
    }
}
