//! Engine configuration.
//!
//! The configuration is read from a JSON file in the user's config directory. Every field has a
//! default, so an empty object (or no file at all) gives the stock 800x600 window.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

/// Window settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Falls back to the game's name when unset.
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: 800,
            height: 600,
            resizable: true,
            vsync: true,
        }
    }
}

/// Requested OpenGL context version. Always a core profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlConfig {
    pub major: u8,
    pub minor: u8,
}

impl Default for GlConfig {
    fn default() -> Self {
        Self { major: 3, minor: 3 }
    }
}

/// Which shape the engine draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// A vertex-coloured triangle.
    Triangle,
    /// A textured quad spinning around its corner.
    #[default]
    TexturedQuad,
}

/// Optional GLSL files replacing the built-in shaders stage by stage.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShaderPaths {
    pub vertex: Option<PathBuf>,
    pub geometry: Option<PathBuf>,
    pub fragment: Option<PathBuf>,
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window: WindowConfig,
    pub gl: GlConfig,
    pub scene: SceneKind,
    pub shaders: ShaderPaths,
    pub texture: Option<PathBuf>,
    pub clear_color: [f32; 4],
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            gl: GlConfig::default(),
            scene: SceneKind::default(),
            shaders: ShaderPaths::default(),
            texture: None,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            log_level: "info".to_string(),
        }
    }
}

/// Returns `<config dir>/gamelogic/config.json`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gamelogic").join("config.json"))
}

impl EngineConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_json(&text).map_err(|e| format!("Invalid config at {}: {}", path.display(), e))
    }

    /// Loads the configuration at `path`, falling back to the defaults when the file is missing
    /// or malformed.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::debug!("No config directory, using default configuration");
            return Self::default();
        };

        if !path.exists() {
            log::debug!("No config at {}, using default configuration", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}, using default configuration", e);
                Self::default()
            }
        }
    }

    /// Checks values serde cannot rule out on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            ));
        }
        // core profiles and geometry shaders start at 3.2
        if (self.gl.major, self.gl.minor) < (3, 2) {
            return Err(format!(
                "OpenGL {}.{} is too old, at least 3.2 is required",
                self.gl.major, self.gl.minor
            ));
        }
        if self.clear_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(format!(
                "Clear color components must be within [0, 1], got {:?}",
                self.clear_color
            ));
        }
        Ok(())
    }

    /// The configured log level, `Info` if it cannot be parsed.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.gl, GlConfig { major: 3, minor: 3 });
        assert_eq!(config.scene, SceneKind::TexturedQuad);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{
            "window": { "title": "Triangle", "width": 1024 },
            "scene": "triangle",
            "shaders": { "fragment": "shaders/frag.glsl" },
            "log_level": "debug"
        }"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.window.title.as_deref(), Some("Triangle"));
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.scene, SceneKind::Triangle);
        assert_eq!(config.shaders.vertex, None);
        assert_eq!(
            config.shaders.fragment,
            Some(PathBuf::from("shaders/frag.glsl"))
        );
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_scene_is_rejected() {
        assert!(EngineConfig::from_json(r#"{ "scene": "cube" }"#).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(EngineConfig::default().validate().is_ok());

        let mut config = EngineConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.gl = GlConfig { major: 3, minor: 1 };
        assert!(config.validate().is_err());
        config.gl = GlConfig { major: 4, minor: 0 };
        assert!(config.validate().is_ok());

        let mut config = EngineConfig::default();
        config.clear_color = [0.0, 1.5, 0.0, 1.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = EngineConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(EngineConfig::load_or_default(None), EngineConfig::default());

        let dir = std::env::temp_dir().join(format!("gamelogic-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert_eq!(
            EngineConfig::load_or_default(Some(&missing)),
            EngineConfig::default()
        );
        assert!(EngineConfig::load(&missing).is_err());

        let broken = dir.join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert_eq!(
            EngineConfig::load_or_default(Some(&broken)),
            EngineConfig::default()
        );

        let good = dir.join("good.json");
        std::fs::write(&good, r#"{ "window": { "vsync": false } }"#).unwrap();
        let config = EngineConfig::load_or_default(Some(&good));
        assert!(!config.window.vsync);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
