//! Game-side hooks driven by the engine.

use crate::{clock::FrameTime, input::KeyboardState};

/// The interface the engine uses to drive a game once per frame.
pub trait Game {
    /// Name of the game, used as the window title when none is configured.
    fn name(&self) -> &str;

    /// Called after the frame's events have been collected.
    fn handle_input(&mut self, _keyboard: &KeyboardState) {}

    /// Called once per frame before rendering.
    fn update(&mut self, _time: &FrameTime) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Starting,
    Running,
    Stopped,
}

/// Basic game logic: tracks its lifecycle and how long it has been running.
#[derive(Debug)]
pub struct GameLogic {
    name: String,
    state: GameState,
    ticks: u64,
    elapsed: f32,
}

impl GameLogic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: GameState::Starting,
            ticks: 0,
            elapsed: 0.0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of updates run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Seconds spent in the running state.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn stop(&mut self) {
        if self.state != GameState::Stopped {
            log::info!("{} stopped after {} ticks", self.name, self.ticks);
        }
        self.state = GameState::Stopped;
    }
}

impl Game for GameLogic {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, time: &FrameTime) {
        match self.state {
            GameState::Starting => {
                log::debug!("{} running", self.name);
                self.state = GameState::Running;
            }
            GameState::Running => {}
            GameState::Stopped => return,
        }
        self.ticks += 1;
        self.elapsed += time.delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(delta: f32) -> FrameTime {
        FrameTime {
            elapsed: 0.0,
            delta,
        }
    }

    #[test]
    fn test_first_update_starts_running() {
        let mut game = GameLogic::new("Test");
        assert_eq!(game.state(), GameState::Starting);
        game.update(&frame(0.016));
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.ticks(), 1);
    }

    #[test]
    fn test_updates_accumulate_time() {
        let mut game = GameLogic::new("Test");
        game.update(&frame(0.5));
        game.update(&frame(0.25));
        assert_eq!(game.ticks(), 2);
        assert!((game.elapsed() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_stopped_game_ignores_updates() {
        let mut game = GameLogic::new("Test");
        game.update(&frame(1.0));
        game.stop();
        game.update(&frame(1.0));
        assert_eq!(game.state(), GameState::Stopped);
        assert_eq!(game.ticks(), 1);
        assert_eq!(game.name(), "Test");
    }
}
