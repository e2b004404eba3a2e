//! The core of the GameLogic engine. This crate holds everything that does not
//! need a live OpenGL context: configuration, shader sources, vertex data,
//! transforms, frame timing, keyboard state and the game logic itself.

pub mod clock;
pub mod config;
pub mod game;
pub mod geometry;
pub mod input;
pub mod shader_source;
pub mod transform;

pub use clock::{FrameClock, FrameTime};
pub use config::{EngineConfig, SceneKind};
pub use game::{Game, GameLogic, GameState};
pub use input::{Key, KeyboardState};
pub use shader_source::{ShaderSources, ShaderStage};
