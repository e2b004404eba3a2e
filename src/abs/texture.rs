//! GPU textures.
//!
//! [`Texture`] owns a single 2D texture object. Images are decoded with the `image` crate and
//! uploaded as RGBA8.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::DynamicImage;

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Loads and uploads the image at `path`.
    pub fn from_file(gl: &Arc<glow::Context>, path: &Path) -> Result<Self, String> {
        let image = image::open(path)
            .map_err(|e| format!("Failed to load texture {}: {}", path.display(), e))?;
        let texture = Self::from_image(gl, &image)?;
        log::debug!(
            "Loaded {}x{} texture from {}",
            texture.width,
            texture.height,
            path.display()
        );
        Ok(texture)
    }

    /// Uploads a decoded image. Images are stored top row first, OpenGL expects the bottom row
    /// first, so the image is flipped on the way up.
    pub fn from_image(gl: &Arc<glow::Context>, image: &DynamicImage) -> Result<Self, String> {
        let rgba = image.flipv().to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(gl, width, height, rgba.as_raw())
    }

    /// A 1x1 texture of a single colour.
    pub fn solid(gl: &Arc<glow::Context>, rgba: [u8; 4]) -> Result<Self, String> {
        Self::from_rgba(gl, 1, 1, &rgba)
    }

    /// Uploads raw RGBA8 pixels and builds the mipmap chain.
    pub fn from_rgba(
        gl: &Arc<glow::Context>,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<Self, String> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(format!(
                "Texture data is {} bytes, expected {} for {}x{} RGBA",
                data.len(),
                expected,
                width,
                height
            ));
        }

        unsafe {
            let texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}
