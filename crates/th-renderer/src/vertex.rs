//! Vertex layout shared with GPU backends

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Handle vertex data
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GizmoVertex {
    /// World-space position
    pub position: [f32; 3],
    /// Linear RGBA
    pub color: [f32; 4],
}

impl GizmoVertex {
    /// Create a vertex
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.into(),
            color,
        }
    }

    /// Position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// `color` with its alpha replaced
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}

/// `color` multiplied component-wise, alpha included
pub fn shaded(color: [f32; 4], factor: f32) -> [f32; 4] {
    color.map(|c| c * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<GizmoVertex>(), 28);
        let vertices = [GizmoVertex::new(Vec3::new(1.0, 2.0, 3.0), [0.5; 4])];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 28);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats[..3], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(with_alpha([1.0, 0.5, 0.25, 1.0], 0.3), [1.0, 0.5, 0.25, 0.3]);
        assert_eq!(shaded([1.0, 0.5, 0.0, 1.0], 0.5), [0.5, 0.25, 0.0, 0.5]);
    }
}
