//! Reset/step façade for one session slot
//!
//! A `Game` starts empty; `reset` creates a session and `step` drives it.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::sim::{GameOutcome, GameState, RenderSnapshot, StepResult, TickInput, tick};

#[derive(Debug, Clone, Default)]
pub struct Game {
    state: Option<GameState>,
}

impl Game {
    /// Uninitialized game; `step` fails until `reset` succeeds
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Start a fresh session, discarding any previous one.
    ///
    /// On an invalid config the game is left uninitialized.
    pub fn reset(&mut self, config: GameConfig) -> Result<(), GameError> {
        self.state = None;
        let state = GameState::new(config)?;
        log::info!(
            "New session: {}x{} field, {} bricks, {} lives",
            state.config.field_width,
            state.config.field_height,
            state.target_score(),
            state.lives
        );
        self.state = Some(state);
        Ok(())
    }

    /// Advance the session by one tick
    pub fn step(&mut self, input: &TickInput) -> Result<StepResult, GameError> {
        let state = self.state.as_mut().ok_or(GameError::NotInitialized)?;
        Ok(tick(state, input))
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    /// Outcome of the current session, if any
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.as_ref().map(|s| s.outcome)
    }

    /// Snapshot of the current session without advancing it
    pub fn snapshot(&self) -> Option<RenderSnapshot> {
        self.state.as_ref().map(GameState::snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_before_reset_fails() {
        let mut game = Game::new();
        assert!(matches!(
            game.step(&TickInput::default()),
            Err(GameError::NotInitialized)
        ));
        assert!(game.outcome().is_none());
    }

    #[test]
    fn test_reset_then_step() {
        let mut game = Game::new();
        game.reset(GameConfig::default()).unwrap();
        let result = game.step(&TickInput::default()).unwrap();
        assert_eq!(result.outcome, GameOutcome::InProgress);
        assert_eq!(game.state().unwrap().time_ticks, 1);
    }

    #[test]
    fn test_invalid_reset_leaves_game_uninitialized() {
        let mut game = Game::new();
        game.reset(GameConfig::default()).unwrap();

        let bad = GameConfig {
            paddle_width: 1000.0,
            ..Default::default()
        };
        assert!(matches!(
            game.reset(bad),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(!game.is_initialized());
        assert!(matches!(
            game.step(&TickInput::default()),
            Err(GameError::NotInitialized)
        ));
    }

    #[test]
    fn test_reset_restarts_session() {
        let mut game = Game::new();
        game.reset(GameConfig::default()).unwrap();
        for _ in 0..10 {
            game.step(&TickInput::default()).unwrap();
        }
        game.reset(GameConfig::default()).unwrap();
        let state = game.state().unwrap();
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
    }
}
