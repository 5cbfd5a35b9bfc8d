//! Screen-space projection utilities
//!
//! Pure functions shared by the hover detectors, the drag handlers and the
//! renderer. Nothing here keeps state.

use glam::{Vec2, Vec3};

use crate::camera::{Ray, ViewCamera};
use crate::constants::epsilon;

/// Project a world point to pixels, or `None` when it lies behind the camera.
///
/// Callers must treat `None` as non-hoverable and non-drawable.
pub fn project_visible<C: ViewCamera + ?Sized>(camera: &C, point: Vec3) -> Option<Vec2> {
    let screen = camera.world_to_screen(point);
    screen.is_visible().then_some(screen.position)
}

/// Distance from `p` to the segment `a`-`b`.
///
/// The projection of `p` onto the segment is clamped to its endpoints. A
/// segment shorter than [`epsilon::SEGMENT_LENGTH`] degrades to the
/// point-to-point distance from `p` to `a`.
pub fn distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq < epsilon::SEGMENT_LENGTH * epsilon::SEGMENT_LENGTH {
        return p.distance(a);
    }

    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Whether `p` lies inside the convex quad `quad`.
///
/// # Algorithm
///
/// Walks the four edges in order and takes the 2D cross product of each edge
/// with the vector from the edge start to `p`. The point is inside when every
/// non-zero cross product has the same sign, so either winding works. Points
/// exactly on an edge count as inside.
pub fn point_in_convex_quad(p: Vec2, quad: &[Vec2; 4]) -> bool {
    let mut sign = 0.0_f32;
    for i in 0..4 {
        let a = quad[i];
        let b = quad[(i + 1) % 4];
        let cross = (b - a).perp_dot(p - a);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

/// World-space length covered by one screen pixel at `distance` from the eye.
///
/// Under a perspective projection the visible frustum height at `distance`
/// is `2 * distance * tan(fov_y / 2)`; dividing by the viewport height in
/// pixels gives the size of one pixel at that depth:
///
/// ```text
/// units_per_pixel = 2 * distance * tan(fov_y / 2) / screen_height
/// ```
///
/// Used to turn a pixel offset along a projected axis into a world-space
/// translation.
pub fn screen_pixels_to_world_units(fov_y_degrees: f32, screen_height: f32, distance: f32) -> f32 {
    let half_fov = fov_y_degrees.to_radians() * 0.5;
    2.0 * distance * half_fov.tan() / screen_height.max(1.0)
}

/// Ray-plane intersection.
///
/// # Arguments
///
/// * `ray` - Ray with a normalized direction.
/// * `plane_point` - Any point on the plane.
/// * `plane_normal` - The plane normal.
///
/// # Returns
///
/// * `Some(point)` - The hit point in front of the ray origin.
/// * `None` - If the ray is parallel to the plane or the plane is behind it.
pub fn ray_plane_intersection(ray: &Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<Vec3> {
    let denom = ray.direction.dot(plane_normal);
    if denom.abs() < epsilon::RAY_PLANE {
        return None;
    }

    let t = (plane_point - ray.origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;
    }

    Some(ray.at(t))
}

/// Screen-space unit direction of `axis` drawn from `origin`.
///
/// Returns `None` when either end is behind the camera or when the axis is
/// seen end-on and its projection collapses to a point.
pub fn screen_direction<C: ViewCamera + ?Sized>(
    camera: &C,
    origin: Vec3,
    axis: Vec3,
) -> Option<Vec2> {
    let start = project_visible(camera, origin)?;
    let end = project_visible(camera, origin + axis)?;
    let delta = end - start;
    if delta.length() < epsilon::SCREEN_DIRECTION {
        return None;
    }
    Some(delta / delta.length())
}
