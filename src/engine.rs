//! The engine's main loop.
//!
//! [`Engine`] owns the window, the OpenGL context and the scene being drawn. It drives a
//! [`Game`] once per frame: poll events, update, render, swap.

use gamelogic_core::{EngineConfig, FrameClock, FrameTime, Game, Key, KeyboardState};
use glow::HasContext;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
};

use crate::{abs::App, render::Scene};

fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::LCtrl => Key::LeftCtrl,
        Keycode::RCtrl => Key::RightCtrl,
        Keycode::Q => Key::Q,
        Keycode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

pub struct Engine {
    // dropped before `app` so GPU objects go away while the context is still alive
    scene: Scene,
    app: App,
    config: EngineConfig,
    keyboard: KeyboardState,
    clock: FrameClock,
    running: bool,
}

impl Engine {
    /// Opens the window and builds the configured scene.
    pub fn new(config: EngineConfig, title: &str) -> Result<Self, String> {
        config.validate()?;

        let app = App::new(title, &config.window, &config.gl)?;

        let (width, height) = app.drawable_size();
        unsafe {
            app.gl.viewport(0, 0, width as i32, height as i32);
        }

        let scene = Scene::new(&app.gl, &config)?;

        Ok(Self {
            scene,
            app,
            config,
            keyboard: KeyboardState::default(),
            clock: FrameClock::new(),
            running: false,
        })
    }

    /// Runs until the window is closed or Ctrl+Q is pressed.
    pub fn run(&mut self, game: &mut dyn Game) {
        log::info!("Starting {}", game.name());
        self.running = true;
        self.clock = FrameClock::new();

        let mut frames: u64 = 0;
        while self.running {
            self.handle_events();
            let time = self.clock.tick();
            self.update(game, &time);
            self.render(&time);
            frames += 1;
        }

        let elapsed = self.clock.tick().elapsed;
        log::info!(
            "Stopped {} after {} frames in {:.1}s",
            game.name(),
            frames,
            elapsed
        );
    }

    fn handle_events(&mut self) {
        self.keyboard.begin_frame();

        for event in self.app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.running = false,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, height),
                    ..
                } => {
                    log::debug!("Framebuffer resized to {}x{}", width, height);
                    unsafe {
                        self.app.gl.viewport(0, 0, width, height);
                    }
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => self.keyboard.key_down(map_keycode(keycode)),
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => self.keyboard.key_up(map_keycode(keycode)),
                _ => {}
            }
        }

        if self.keyboard.quit_requested() {
            log::debug!("Quit requested from keyboard");
            self.running = false;
        }
    }

    fn update(&mut self, game: &mut dyn Game, time: &FrameTime) {
        game.handle_input(&self.keyboard);
        game.update(time);
    }

    fn render(&mut self, time: &FrameTime) {
        let [r, g, b, a] = self.config.clear_color;
        unsafe {
            self.app.gl.clear_color(r, g, b, a);
            self.app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.scene.render(time.elapsed);

        self.app.window.gl_swap_window();
    }

    /// Indices submitted per frame by the current scene.
    pub fn indices_per_frame(&self) -> usize {
        self.scene.index_count()
    }
}
