//! Vertex layouts and the static shapes the engine draws.
//!
//! Both vertex types are `#[repr(C)]` so they can be uploaded to a vertex buffer as raw bytes.

/// A position with a per-vertex colour.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// A position with a per-vertex colour and texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

pub const TRIANGLE_VERTICES: [ColorVertex; 3] = [
    // bottom right
    ColorVertex {
        position: [0.5, -0.5, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    // bottom left
    ColorVertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    // top
    ColorVertex {
        position: [0.0, 0.5, 0.0],
        color: [0.0, 0.0, 1.0],
    },
];

pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

pub const QUAD_VERTICES: [TexturedVertex; 4] = [
    // top right
    TexturedVertex {
        position: [0.5, 0.5, 0.0],
        color: [1.0, 0.0, 0.0],
        uv: [1.0, 1.0],
    },
    // bottom right
    TexturedVertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
        uv: [1.0, 0.0],
    },
    // bottom left
    TexturedVertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 0.0, 1.0],
        uv: [0.0, 0.0],
    },
    // top left
    TexturedVertex {
        position: [-0.5, 0.5, 0.0],
        color: [1.0, 1.0, 0.0],
        uv: [0.0, 1.0],
    },
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Whether every index refers to one of `vertex_count` vertices.
pub fn indices_in_bounds(indices: &[u32], vertex_count: usize) -> bool {
    indices.iter().all(|&i| (i as usize) < vertex_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_strides() {
        assert_eq!(std::mem::size_of::<ColorVertex>(), 6 * std::mem::size_of::<f32>());
        assert_eq!(std::mem::size_of::<TexturedVertex>(), 8 * std::mem::size_of::<f32>());
        assert_eq!(std::mem::offset_of!(ColorVertex, color), 12);
        assert_eq!(std::mem::offset_of!(TexturedVertex, uv), 24);
    }

    #[test]
    fn test_shapes_index_their_own_vertices() {
        assert!(indices_in_bounds(&TRIANGLE_INDICES, TRIANGLE_VERTICES.len()));
        assert!(indices_in_bounds(&QUAD_INDICES, QUAD_VERTICES.len()));
        assert!(!indices_in_bounds(&[0, 1, 3], TRIANGLE_VERTICES.len()));
    }

    #[test]
    fn test_quad_is_two_triangles() {
        assert_eq!(QUAD_INDICES.len() % 3, 0);
        assert_eq!(QUAD_INDICES.len() / 3, 2);
        // both triangles share the bottom-right/top-left diagonal
        assert!(QUAD_INDICES[..3].contains(&1) && QUAD_INDICES[3..].contains(&1));
        assert!(QUAD_INDICES[..3].contains(&3) && QUAD_INDICES[3..].contains(&3));
    }

    #[test]
    fn test_quad_uvs_cover_unit_square() {
        for vertex in QUAD_VERTICES {
            let expected_u = if vertex.position[0] > 0.0 { 1.0 } else { 0.0 };
            let expected_v = if vertex.position[1] > 0.0 { 1.0 } else { 0.0 };
            assert_eq!(vertex.uv, [expected_u, expected_v]);
        }
    }
}
