//! Batched draw collection
//!
//! Handle geometry is accumulated into three vertex buffers (lines,
//! triangles and quads) during a frame and handed to a [`DrawBackend`] in at
//! most three calls. Widths are given in pixels and converted to world units
//! at the geometry's distance from the camera, so lines keep their apparent
//! weight as the camera moves.

use std::f32::consts::TAU;

use glam::Vec3;
use th_core::ViewCamera;
use th_core::resolver::circle_basis;

use crate::constants::{alpha, geometry, thickness};
use crate::vertex::{GizmoVertex, shaded};

/// How a vertex slice is assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    /// Every two vertices form a line segment
    LineList,
    /// Every three vertices form a triangle
    TriangleList,
    /// Every four vertices form a quad, wound around its perimeter
    QuadList,
}

impl PrimitiveTopology {
    /// Vertices per primitive
    pub fn vertices_per_primitive(&self) -> usize {
        match self {
            PrimitiveTopology::LineList => 2,
            PrimitiveTopology::TriangleList => 3,
            PrimitiveTopology::QuadList => 4,
        }
    }
}

/// Receives flushed batches, e.g. an immediate-mode GL wrapper or a GPU
/// pipeline uploading the slice with `bytemuck::cast_slice`
pub trait DrawBackend {
    /// Draw one batch of primitives
    fn draw(&mut self, topology: PrimitiveTopology, vertices: &[GizmoVertex]);
}

/// Per-frame geometry buffers
#[derive(Debug, Clone, Default)]
pub struct BatchedDrawCollector {
    lines: Vec<GizmoVertex>,
    triangles: Vec<GizmoVertex>,
    quads: Vec<GizmoVertex>,
}

impl BatchedDrawCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's geometry, keeping the allocations
    pub fn begin_frame(&mut self) {
        self.lines.clear();
        self.triangles.clear();
        self.quads.clear();
    }

    /// Whether nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.triangles.is_empty() && self.quads.is_empty()
    }

    /// Collected line vertices
    pub fn line_vertices(&self) -> &[GizmoVertex] {
        &self.lines
    }

    /// Collected triangle vertices
    pub fn triangle_vertices(&self) -> &[GizmoVertex] {
        &self.triangles
    }

    /// Collected quad vertices
    pub fn quad_vertices(&self) -> &[GizmoVertex] {
        &self.quads
    }

    /// Number of line segments
    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Number of quads
    pub fn quad_count(&self) -> usize {
        self.quads.len() / 4
    }

    // ============== Primitives ==============

    /// One-pixel line segment
    pub fn add_line(&mut self, start: Vec3, end: Vec3, color: [f32; 4]) {
        self.lines.push(GizmoVertex::new(start, color));
        self.lines.push(GizmoVertex::new(end, color));
    }

    /// Triangle
    pub fn add_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: [f32; 4]) {
        for p in [a, b, c] {
            self.triangles.push(GizmoVertex::new(p, color));
        }
    }

    /// Quad with corners in perimeter order
    pub fn add_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3, color: [f32; 4]) {
        for p in [a, b, c, d] {
            self.quads.push(GizmoVertex::new(p, color));
        }
    }

    /// Line drawn `thickness` pixels wide as parallel strokes.
    ///
    /// Strokes are offset perpendicular to both the line and the view
    /// direction. Their count grows with the requested width.
    pub fn add_thick_line<C: ViewCamera + ?Sized>(
        &mut self,
        camera: &C,
        start: Vec3,
        end: Vec3,
        color: [f32; 4],
        thickness: f32,
    ) {
        let direction = (end - start).normalize_or_zero();
        let perpendicular = direction
            .cross(camera.forward())
            .try_normalize()
            .or_else(|| direction.cross(Vec3::Y).try_normalize())
            .unwrap_or(Vec3::ZERO);

        let midpoint = (start + end) * 0.5;
        let pixel = stroke_pixel(camera, midpoint);
        for offset in stroke_offsets(thickness) {
            let shift = perpendicular * offset * pixel;
            self.add_line(start + shift, end + shift, color);
        }
    }

    /// Circle drawn as `segments` chords, widened by concentric rings
    #[allow(clippy::too_many_arguments)]
    pub fn add_circle<C: ViewCamera + ?Sized>(
        &mut self,
        camera: &C,
        center: Vec3,
        normal: Vec3,
        radius: f32,
        color: [f32; 4],
        segments: usize,
        thickness: f32,
    ) {
        let (t1, t2) = circle_basis(normal);
        let segments = segments.max(3);
        let pixel = stroke_pixel(camera, center);

        for offset in stroke_offsets(thickness) {
            let ring = radius + offset * pixel;
            let point = |i: usize| {
                let angle = i as f32 / segments as f32 * TAU;
                center + (t1 * angle.cos() + t2 * angle.sin()) * ring
            };
            for i in 0..segments {
                self.add_line(point(i), point(i + 1), color);
            }
        }
    }

    /// Four-sided pyramid pointing along `direction`, `size` long
    pub fn add_arrow_head(&mut self, tip: Vec3, direction: Vec3, color: [f32; 4], size: f32) {
        let (p1, p2) = circle_basis(direction);
        let base = tip - direction * size;
        let half = size * geometry::ARROW_BASE_RATIO;
        let corners = [base + p1 * half, base - p1 * half, base + p2 * half, base - p2 * half];

        for i in 0..4 {
            self.add_triangle(tip, corners[i], corners[(i + 1) % 4], color);
        }
        self.add_triangle(corners[0], corners[1], corners[2], color);
        self.add_triangle(corners[1], corners[3], corners[2], color);

        let outline = shaded(color, alpha::OUTLINE_SHADE);
        for i in 0..4 {
            self.add_line(tip, corners[i], outline);
            self.add_line(corners[i], corners[(i + 1) % 4], outline);
        }
    }

    /// Cube of edge `size` centered at `center`, one face normal along
    /// `forward`, with darker edges
    pub fn add_box(&mut self, center: Vec3, forward: Vec3, size: f32, color: [f32; 4]) {
        let forward = forward.normalize_or(Vec3::Z);
        let hint = if forward.dot(Vec3::Y).abs() > geometry::BOX_UP_SWITCH {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let right = forward.cross(hint).normalize();
        let up = right.cross(forward).normalize();

        let corners: [Vec3; 8] = std::array::from_fn(|i| {
            let sign = |bit: usize| if i & bit == 0 { -1.0 } else { 1.0 };
            center + (right * sign(1) + up * sign(2) + forward * sign(4)) * size * 0.5
        });

        const FACES: [[usize; 3]; 12] = [
            [0, 1, 2],
            [1, 3, 2],
            [5, 4, 6],
            [5, 6, 7],
            [4, 0, 2],
            [4, 2, 6],
            [1, 5, 7],
            [1, 7, 3],
            [4, 5, 1],
            [4, 1, 0],
            [2, 3, 7],
            [2, 7, 6],
        ];
        const EDGES: [[usize; 2]; 12] = [
            [0, 1],
            [1, 3],
            [3, 2],
            [2, 0],
            [4, 5],
            [5, 7],
            [7, 6],
            [6, 4],
            [0, 4],
            [1, 5],
            [2, 6],
            [3, 7],
        ];

        for [a, b, c] in FACES {
            self.add_triangle(corners[a], corners[b], corners[c], color);
        }
        let edge = shaded(color, alpha::OUTLINE_SHADE);
        for [a, b] in EDGES {
            self.add_line(corners[a], corners[b], edge);
        }
    }

    // ============== Submission ==============

    /// Hand the batches to `backend`: triangles, then quads, then lines.
    ///
    /// Empty batches are skipped. Returns the number of draw calls issued.
    pub fn flush<B: DrawBackend + ?Sized>(&self, backend: &mut B) -> usize {
        let batches = [
            (PrimitiveTopology::TriangleList, &self.triangles),
            (PrimitiveTopology::QuadList, &self.quads),
            (PrimitiveTopology::LineList, &self.lines),
        ];

        let mut calls = 0;
        for (topology, vertices) in batches {
            if vertices.is_empty() {
                continue;
            }
            backend.draw(topology, vertices);
            calls += 1;
        }

        tracing::trace!(
            "Flushed {} triangles, {} quads, {} lines in {} calls",
            self.triangle_count(),
            self.quad_count(),
            self.line_count(),
            calls
        );
        calls
    }
}

/// World-space spacing unit for strokes around `point`
fn stroke_pixel<C: ViewCamera + ?Sized>(camera: &C, point: Vec3) -> f32 {
    let distance = camera.position().distance(point);
    camera.world_units_per_pixel(distance) * thickness::STROKE_SPACING
}

/// Stroke offsets in pixels, centered on zero
fn stroke_offsets(width: f32) -> impl Iterator<Item = f32> {
    let count = ((width * thickness::STROKES_PER_PIXEL).round() as usize).max(1);
    let step = width / count as f32;
    let center = (count - 1) as f32 * 0.5;
    (0..count).map(move |i| (i as f32 - center) * step)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use th_core::PerspectiveCamera;

    /// Records every batch it receives
    #[derive(Default)]
    pub(crate) struct RecordingBackend {
        pub calls: Vec<(PrimitiveTopology, usize)>,
    }

    impl DrawBackend for RecordingBackend {
        fn draw(&mut self, topology: PrimitiveTopology, vertices: &[GizmoVertex]) {
            self.calls.push((topology, vertices.len()));
        }
    }

    pub(crate) fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, 800.0, 600.0)
    }

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_stroke_counts() {
        assert_eq!(stroke_offsets(6.0).count(), 2);
        assert_eq!(stroke_offsets(12.0).count(), 4);
        assert_eq!(stroke_offsets(1.0).count(), 1);

        let offsets: Vec<f32> = stroke_offsets(6.0).collect();
        assert_relative_eq!(offsets[0], -1.5);
        assert_relative_eq!(offsets[1], 1.5);
    }

    #[test]
    fn test_thick_line_strokes_are_parallel_and_screen_aligned() {
        let mut collector = BatchedDrawCollector::new();
        collector.add_thick_line(&camera(), Vec3::ZERO, Vec3::X, RED, 12.0);
        assert_eq!(collector.line_count(), 4);

        for pair in collector.line_vertices().chunks(2) {
            let a = pair[0].position();
            let b = pair[1].position();
            assert_relative_eq!((b - a).normalize().dot(Vec3::X), 1.0, epsilon = 1e-5);
            // Offsets are along screen up, never along the view direction
            assert_relative_eq!(a.z, 0.0, epsilon = 1e-6);
            assert_relative_eq!(a.x, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_thick_line_along_view_falls_back() {
        let mut collector = BatchedDrawCollector::new();
        collector.add_thick_line(&camera(), Vec3::ZERO, Vec3::Z, RED, 6.0);
        assert_eq!(collector.line_count(), 2);
        let a = collector.line_vertices()[0].position();
        let b = collector.line_vertices()[2].position();
        assert!(a.distance(b) > 0.0);
    }

    #[test]
    fn test_circle_stays_on_radius() {
        let mut collector = BatchedDrawCollector::new();
        collector.add_circle(&camera(), Vec3::ZERO, Vec3::Y, 2.0, RED, 32, 1.0);
        assert_eq!(collector.line_count(), 32);
        for vertex in collector.line_vertices() {
            let p = vertex.position();
            assert_relative_eq!(p.length(), 2.0, epsilon = 1e-4);
            assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_arrow_head_shape() {
        let mut collector = BatchedDrawCollector::new();
        let tip = Vec3::new(0.0, 1.0, 0.0);
        collector.add_arrow_head(tip, Vec3::Y, RED, 0.2);

        assert_eq!(collector.triangle_count(), 6);
        assert_eq!(collector.line_count(), 8);
        for vertex in collector.triangle_vertices() {
            let p = vertex.position();
            assert!(p.y >= 0.8 - 1e-5 && p.y <= 1.0 + 1e-5);
        }
        // Outlines are darker than the fill
        assert_eq!(collector.line_vertices()[0].color, [0.8, 0.0, 0.0, 0.8]);
    }

    #[test]
    fn test_box_corners_within_half_size() {
        let mut collector = BatchedDrawCollector::new();
        let center = Vec3::new(1.0, 0.0, 0.0);
        collector.add_box(center, Vec3::X, 0.2, RED);

        assert_eq!(collector.triangle_count(), 12);
        assert_eq!(collector.line_count(), 12);
        for vertex in collector.triangle_vertices() {
            let d = vertex.position() - center;
            assert_relative_eq!(d.abs().max_element(), 0.1, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_box_facing_up_uses_forward_hint() {
        let mut collector = BatchedDrawCollector::new();
        collector.add_box(Vec3::ZERO, Vec3::Y, 1.0, RED);
        for vertex in collector.triangle_vertices() {
            assert!(vertex.position().is_finite());
        }
    }

    #[test]
    fn test_flush_order_and_empty_batches() {
        let mut collector = BatchedDrawCollector::new();
        let mut backend = RecordingBackend::default();
        assert_eq!(collector.flush(&mut backend), 0);
        assert!(backend.calls.is_empty());

        collector.add_line(Vec3::ZERO, Vec3::X, RED);
        collector.add_quad(Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y, RED);
        collector.add_triangle(Vec3::ZERO, Vec3::X, Vec3::Y, RED);
        assert_eq!(collector.flush(&mut backend), 3);
        assert_eq!(
            backend.calls,
            vec![
                (PrimitiveTopology::TriangleList, 3),
                (PrimitiveTopology::QuadList, 4),
                (PrimitiveTopology::LineList, 2),
            ]
        );
    }

    #[test]
    fn test_begin_frame_clears() {
        let mut collector = BatchedDrawCollector::new();
        collector.add_box(Vec3::ZERO, Vec3::Z, 1.0, RED);
        assert!(!collector.is_empty());
        collector.begin_frame();
        assert!(collector.is_empty());
    }
}
