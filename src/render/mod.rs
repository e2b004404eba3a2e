//! Module for anything related to rendering.
//!
//! This module holds the vertex layouts of the core geometry, the shader pipeline that turns
//! [`ShaderSources`] into a linked program, and the scenes drawn each frame.

use std::sync::Arc;

use gamelogic_core::{
    ShaderSources,
    geometry::{ColorVertex, TexturedVertex},
};
use glow::HasContext;

use crate::abs::{Shader, ShaderProgram, Vertex};

pub mod scene;

pub use scene::Scene;

const F32_SIZE: i32 = std::mem::size_of::<f32>() as i32;

impl Vertex for ColorVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<ColorVertex>() as i32;
            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            // Color attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 3 * F32_SIZE);
        }
    }
}

impl Vertex for TexturedVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<TexturedVertex>() as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 3 * F32_SIZE);
            // UV attribute
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(2, 2, glow::FLOAT, false, stride, 6 * F32_SIZE);
        }
    }
}

/// Compiles every stage in `sources` and links them into a program.
///
/// The individual shader objects are deleted once the program is linked.
pub fn build_program(
    gl: &Arc<glow::Context>,
    sources: &ShaderSources,
) -> Result<ShaderProgram, String> {
    sources.validate()?;

    let shaders = sources
        .stages()
        .map(|(stage, source)| Shader::new(gl, stage, source))
        .collect::<Result<Vec<_>, String>>()?;

    let stages: Vec<_> = shaders.iter().map(|shader| shader.stage().label()).collect();
    log::debug!("Linking shader program from {} stages", stages.join(" + "));

    let refs: Vec<&Shader> = shaders.iter().collect();
    ShaderProgram::new(gl, &refs)
}
