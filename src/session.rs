//! Session driver
//!
//! Owns one run of the game: the simulation state, the in-progress drag
//! gesture, and the high score store the final score is submitted to.

use glam::Vec2;

use crate::highscores::{HighScoreError, HighScoreStore};
use crate::input::DragGesture;
use crate::settings::GameConfig;
use crate::sim::{GameEvent, GameState, SimError, TickInput, tick};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    HighScore(#[from] HighScoreError),
}

/// One playthrough, from spawn to game over
pub struct Session {
    state: GameState,
    gesture: DragGesture,
    pending_launch: Option<Vec2>,
    store: HighScoreStore,
    /// Set once the final score has been submitted
    high_score: Option<u64>,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64, store: HighScoreStore) -> Self {
        log::info!("Session started with seed {}", seed);
        Self {
            state: GameState::new(config, seed),
            gesture: DragGesture::default(),
            pending_launch: None,
            store,
            high_score: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score.score()
    }

    /// High score after this session ended, `None` while still playing
    pub fn high_score(&self) -> Option<u64> {
        self.high_score
    }

    pub fn is_over(&self) -> bool {
        self.high_score.is_some()
    }

    /// Mouse/touch press in screen coordinates
    pub fn press(&mut self, pos: Vec2) {
        if self.is_over() || !self.gesture.press(pos, self.state.player.airborne) {
            log::debug!("Press ignored");
        }
    }

    /// Mouse/touch release; queues a launch for the next tick
    pub fn release(&mut self, pos: Vec2) {
        if let Some(vel) = self.gesture.release(pos, &self.state.config) {
            self.pending_launch = Some(vel);
        }
    }

    /// Run one tick. On game over the score is submitted to the store.
    pub fn step(&mut self) -> Result<Vec<GameEvent>, SessionError> {
        if self.is_over() {
            return Ok(Vec::new());
        }

        let input = TickInput {
            launch: self.pending_launch.take(),
        };
        let events = tick(&mut self.state, &input)?;

        if self.state.is_game_over() {
            if self.gesture.is_dragging() {
                log::debug!("Drag in progress dropped at game over");
                self.gesture.cancel();
            }
            let best = self.store.submit(self.score())?;
            log::info!("Final score {}, high score {}", self.score(), best);
            self.high_score = Some(best);
        }
        Ok(events)
    }

    /// Throw the world away and start over with a new seed
    pub fn restart(&mut self, seed: u64) {
        let config = self.state.config.clone();
        *self = Self::new(config, seed, self.store.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(dir: &tempfile::TempDir) -> Session {
        let mut session = Session::new(
            GameConfig::default(),
            0,
            HighScoreStore::new(dir.path().join("highscore.json")),
        );
        session.state = GameState::with_layout(
            GameConfig::default(),
            &[(300.0, 500.0), (300.0, 100.0)],
        );
        session
    }

    fn run_until_over(session: &mut Session) {
        for _ in 0..1000 {
            if session.is_over() {
                return;
            }
            session.step().unwrap();
        }
        panic!("session never ended");
    }

    #[test]
    fn test_drag_launches_player() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        session.press(Vec2::new(400.0, 300.0));
        session.release(Vec2::new(400.0, 400.0));
        let events = session.step().unwrap();

        match events.first() {
            // 100px straight down pulls to a straight-up launch of 10
            Some(GameEvent::Launched { vel }) => {
                assert!((*vel - Vec2::new(0.0, -10.0)).length() < 1e-4, "got {vel:?}");
            }
            other => panic!("expected launch, got {other:?}"),
        }
        assert!(session.state().player.airborne);
    }

    #[test]
    fn test_release_without_press_does_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        session.release(Vec2::new(400.0, 400.0));
        let events = session.step().unwrap();
        assert!(events.is_empty());
        assert!(!session.state().player.airborne);
    }

    #[test]
    fn test_game_over_submits_high_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        std::fs::write(dir.path().join("highscore.json"), "3").unwrap();
        session.state.score.record_score_delta(8);

        // Sideways pull off the spawn platform
        session.press(Vec2::new(400.0, 300.0));
        session.release(Vec2::new(280.0, 320.0));
        run_until_over(&mut session);

        assert_eq!(session.high_score(), Some(8));
        assert_eq!(
            HighScoreStore::new(dir.path().join("highscore.json"))
                .load()
                .unwrap(),
            8
        );
        // Terminal: further steps do nothing
        assert!(session.step().unwrap().is_empty());
    }

    #[test]
    fn test_lower_score_keeps_stored_high_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        std::fs::write(dir.path().join("highscore.json"), "50").unwrap();

        session.press(Vec2::new(400.0, 300.0));
        session.release(Vec2::new(280.0, 320.0));
        run_until_over(&mut session);

        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), Some(50));
    }

    #[test]
    fn test_drag_held_at_game_over_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        session.press(Vec2::new(400.0, 300.0));
        session.state.player.jump(Vec2::new(12.0, -2.0));
        assert!(session.gesture.is_dragging());
        run_until_over(&mut session);

        assert!(!session.gesture.is_dragging());
        session.release(Vec2::new(400.0, 400.0));
        assert_eq!(session.pending_launch, None);
    }

    #[test]
    fn test_restart_rebuilds_world() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        session.press(Vec2::new(400.0, 300.0));
        session.release(Vec2::new(280.0, 320.0));
        run_until_over(&mut session);

        session.restart(77);
        assert!(!session.is_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.state().seed, 77);
        assert_eq!(session.state().platforms.len(), GameConfig::default().initial_platform_count);
        assert!(session.state().score.is_touched(session.state().lowest));
    }
}
