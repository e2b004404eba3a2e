//! The shapes the engine can draw.
//!
//! Each scene owns its shader program and mesh (and texture, if any). Everything is created once
//! in [`Scene::new`] and released when the scene is dropped.

use std::sync::Arc;

use gamelogic_core::{
    EngineConfig, SceneKind, ShaderSources,
    geometry::{QUAD_INDICES, QUAD_VERTICES, TRIANGLE_INDICES, TRIANGLE_VERTICES},
    transform::spin_transform,
};

use crate::{
    abs::{Mesh, ShaderProgram, Texture},
    render::build_program,
};

const TRIANGLE_VERT: &str = include_str!("shaders/triangle/vert.glsl");
const TRIANGLE_FRAG: &str = include_str!("shaders/triangle/frag.glsl");
const TEXTURED_VERT: &str = include_str!("shaders/textured/vert.glsl");
const TEXTURED_FRAG: &str = include_str!("shaders/textured/frag.glsl");

const TEXTURE_UNIT: u32 = 0;

/// A single static shape and the GPU objects needed to draw it.
pub enum Scene {
    /// A triangle with red, green and blue corners.
    Triangle {
        program: ShaderProgram,
        mesh: Mesh,
    },
    /// A textured quad spinning around the lower-right quadrant.
    TexturedQuad {
        program: ShaderProgram,
        mesh: Mesh,
        texture: Texture,
    },
}

impl Scene {
    /// Builds the scene selected in `config`.
    pub fn new(gl: &Arc<glow::Context>, config: &EngineConfig) -> Result<Self, String> {
        match config.scene {
            SceneKind::Triangle => {
                let sources = ShaderSources::builtin(TRIANGLE_VERT, TRIANGLE_FRAG)
                    .with_overrides(&config.shaders);
                let program = build_program(gl, &sources)?;
                let mesh = Mesh::new(gl, &TRIANGLE_VERTICES, &TRIANGLE_INDICES, glow::TRIANGLES)?;
                log::info!("Triangle scene ready");
                Ok(Scene::Triangle { program, mesh })
            }
            SceneKind::TexturedQuad => {
                let sources = ShaderSources::builtin(TEXTURED_VERT, TEXTURED_FRAG)
                    .with_overrides(&config.shaders);
                let program = build_program(gl, &sources)?;
                let mesh = Mesh::new(gl, &QUAD_VERTICES, &QUAD_INDICES, glow::TRIANGLES)?;
                let texture = load_texture(gl, config)?;

                program.use_program();
                program.set_uniform("textureID", TEXTURE_UNIT as i32);

                log::info!(
                    "Textured quad scene ready ({}x{} texture)",
                    texture.width(),
                    texture.height()
                );
                Ok(Scene::TexturedQuad {
                    program,
                    mesh,
                    texture,
                })
            }
        }
    }

    /// Number of indices submitted by one [`Scene::render`] call.
    pub fn index_count(&self) -> usize {
        match self {
            Scene::Triangle { mesh, .. } | Scene::TexturedQuad { mesh, .. } => mesh.index_count(),
        }
    }

    /// Draws the scene. `time` is the number of seconds since startup.
    pub fn render(&self, time: f32) {
        match self {
            Scene::Triangle { program, mesh } => {
                program.use_program();
                mesh.draw();
            }
            Scene::TexturedQuad {
                program,
                mesh,
                texture,
            } => {
                texture.bind(TEXTURE_UNIT);
                program.use_program();
                program.set_uniform("transform", spin_transform(time));
                mesh.draw();
            }
        }
    }
}

/// Loads the configured texture, or a plain white one when none is configured or it fails to
/// load.
fn load_texture(gl: &Arc<glow::Context>, config: &EngineConfig) -> Result<Texture, String> {
    if let Some(path) = &config.texture {
        match Texture::from_file(gl, path) {
            Ok(texture) => return Ok(texture),
            Err(e) => log::error!("{}", e),
        }
    } else {
        log::debug!("No texture configured");
    }
    Texture::solid(gl, [255, 255, 255, 255])
}
