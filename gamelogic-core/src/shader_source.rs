//! GLSL source handling.
//!
//! [`ShaderSources`] collects the text of every pipeline stage before anything touches the GPU.
//! Built-in sources are compiled into the binary; files named in the configuration replace them
//! one stage at a time.

use std::path::Path;

use crate::config::ShaderPaths;

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Geometry,
    Fragment,
}

impl ShaderStage {
    /// Lowercase name used in log and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Geometry => "geometry",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reads GLSL source from disk.
pub fn read_shader(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Shader file not read at {}: {}", path.display(), e))
}

/// The source text of every stage of a shader program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub geometry: Option<String>,
    pub fragment: String,
}

impl ShaderSources {
    /// Sources for a plain vertex + fragment program.
    pub fn builtin(vertex: &str, fragment: &str) -> Self {
        Self {
            vertex: vertex.to_string(),
            geometry: None,
            fragment: fragment.to_string(),
        }
    }

    /// Replaces stages with the files named in `paths`.
    ///
    /// A file that cannot be read leaves its stage empty, which [`ShaderSources::validate`]
    /// then rejects for the vertex and fragment stages.
    pub fn with_overrides(mut self, paths: &ShaderPaths) -> Self {
        if let Some(path) = &paths.vertex {
            self.vertex = read_or_empty(ShaderStage::Vertex, path);
        }
        if let Some(path) = &paths.geometry {
            self.geometry = Some(read_or_empty(ShaderStage::Geometry, path));
        }
        if let Some(path) = &paths.fragment {
            self.fragment = read_or_empty(ShaderStage::Fragment, path);
        }
        self
    }

    /// A program needs at least a vertex and a fragment stage.
    pub fn validate(&self) -> Result<(), String> {
        let mut missing = Vec::new();
        if self.vertex.trim().is_empty() {
            missing.push(ShaderStage::Vertex.label());
        }
        if self.fragment.trim().is_empty() {
            missing.push(ShaderStage::Fragment.label());
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("No shader code compiled, missing {} source", missing.join(" and ")))
        }
    }

    /// Non-empty stages in pipeline order.
    pub fn stages(&self) -> impl Iterator<Item = (ShaderStage, &str)> {
        [
            (ShaderStage::Vertex, Some(self.vertex.as_str())),
            (ShaderStage::Geometry, self.geometry.as_deref()),
            (ShaderStage::Fragment, Some(self.fragment.as_str())),
        ]
        .into_iter()
        .filter_map(|(stage, source)| match source {
            Some(source) if !source.trim().is_empty() => Some((stage, source)),
            _ => None,
        })
    }
}

fn read_or_empty(stage: ShaderStage, path: &Path) -> String {
    match read_shader(path) {
        Ok(source) => {
            log::debug!("Read {} shader from {}", stage, path.display());
            source
        }
        Err(e) => {
            log::error!("{}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const VERT: &str = "#version 330 core\nvoid main() { gl_Position = vec4(0.0); }\n";
    const FRAG: &str = "#version 330 core\nout vec4 c;\nvoid main() { c = vec4(1.0); }\n";

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gamelogic-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_builtin_stages() {
        let sources = ShaderSources::builtin(VERT, FRAG);
        assert!(sources.validate().is_ok());
        let stages: Vec<_> = sources.stages().map(|(stage, _)| stage).collect();
        assert_eq!(stages, vec![ShaderStage::Vertex, ShaderStage::Fragment]);
    }

    #[test]
    fn test_geometry_stage_order() {
        let sources = ShaderSources {
            geometry: Some("#version 330 core\n".to_string()),
            ..ShaderSources::builtin(VERT, FRAG)
        };
        let stages: Vec<_> = sources.stages().map(|(stage, _)| stage).collect();
        assert_eq!(
            stages,
            vec![ShaderStage::Vertex, ShaderStage::Geometry, ShaderStage::Fragment]
        );
    }

    #[test]
    fn test_empty_geometry_is_skipped() {
        let sources = ShaderSources {
            geometry: Some("   ".to_string()),
            ..ShaderSources::builtin(VERT, FRAG)
        };
        assert_eq!(sources.stages().count(), 2);
    }

    #[test]
    fn test_missing_stage_is_rejected() {
        let err = ShaderSources::builtin("", FRAG).validate().unwrap_err();
        assert!(err.contains("vertex"));
        assert!(!err.contains("fragment"));

        let err = ShaderSources::builtin("", "\n").validate().unwrap_err();
        assert!(err.starts_with("No shader code compiled"));
        assert!(err.contains("vertex and fragment"));
    }

    #[test]
    fn test_overrides_replace_stages() {
        let dir = temp_dir("overrides");
        let frag_path = dir.join("frag.glsl");
        std::fs::write(&frag_path, "// custom fragment").unwrap();

        let paths = ShaderPaths {
            fragment: Some(frag_path),
            ..Default::default()
        };
        let sources = ShaderSources::builtin(VERT, FRAG).with_overrides(&paths);
        assert_eq!(sources.vertex, VERT);
        assert_eq!(sources.fragment, "// custom fragment");
        assert_eq!(sources.geometry, None);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unreadable_override_blanks_stage() {
        let dir = temp_dir("unreadable");
        let paths = ShaderPaths {
            vertex: Some(dir.join("does-not-exist.glsl")),
            ..Default::default()
        };
        let sources = ShaderSources::builtin(VERT, FRAG).with_overrides(&paths);
        assert!(sources.vertex.is_empty());
        assert!(sources.validate().is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_shader_names_path() {
        let err = read_shader(Path::new("/nonexistent/gamelogic/vert.glsl")).unwrap_err();
        assert!(err.contains("/nonexistent/gamelogic/vert.glsl"));
    }
}
