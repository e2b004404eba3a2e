//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use gamelogic_core::config::{GlConfig, WindowConfig};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Opens a window titled `title` and makes a core profile OpenGL context current on it.
    pub fn new(
        title: &str,
        window_config: &WindowConfig,
        gl_config: &GlConfig,
    ) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(gl_config.major, gl_config.minor);
        if cfg!(target_os = "macos") {
            gl_attr.set_context_flags().forward_compatible().set();
        }

        let mut builder = video_subsystem.window(title, window_config.width, window_config.height);
        builder.opengl().position_centered();
        if window_config.resizable {
            builder.resizable();
        }
        let window = builder
            .build()
            .map_err(|e| format!("Failed to create window: {}", e))?;

        let gl_context = window.gl_create_context().map_err(|e| {
            format!(
                "Failed to create OpenGL {}.{} context: {}",
                gl_config.major, gl_config.minor, e
            )
        })?;
        window.gl_make_current(&gl_context)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let gl = Arc::new(gl);

        let interval = if window_config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {}", e);
        }

        let event_pump = sdl.event_pump()?;

        log::info!(
            "Opened {}x{} window \"{}\" with OpenGL {}.{} core",
            window_config.width,
            window_config.height,
            title,
            gl_config.major,
            gl_config.minor
        );

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }

    /// Size of the drawable area in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }
}
