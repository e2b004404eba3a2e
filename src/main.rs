use std::process::ExitCode;

use gamelogic_core::{EngineConfig, Game, GameLogic, config::default_config_path};

use crate::engine::Engine;

mod abs;
mod engine;
mod logger;
mod render;

const GAME_NAME: &str = "GameLogic";

fn main() -> ExitCode {
    if let Err(e) = logger::init() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let config_path = default_config_path();
    let config = EngineConfig::load_or_default(config_path.as_deref());
    logger::set_level(config.log_level_filter());

    let mut game = GameLogic::new(GAME_NAME);
    let title = config
        .window
        .title
        .clone()
        .unwrap_or_else(|| game.name().to_string());

    let mut engine = match Engine::new(config, &title) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Drawing {} indices per frame", engine.indices_per_frame());

    engine.run(&mut game);
    game.stop();

    ExitCode::SUCCESS
}
