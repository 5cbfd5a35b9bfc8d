//! Axis and plane resolution
//!
//! Maps a [`HandleAxis`] plus a [`HandleSpace`] to world-space directions,
//! colors and plane geometry. The hover detectors, the drag handlers and the
//! renderer all go through these functions so that what is drawn is exactly
//! what is picked and dragged.

use glam::Vec3;

use crate::constants::{colors, epsilon};
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleSpace};

/// The three axis directions of `space` for `target`
pub fn basis<T: HandleTarget + ?Sized>(target: &T, space: HandleSpace) -> [Vec3; 3] {
    match space {
        HandleSpace::Local => [target.right(), target.up(), target.forward()],
        HandleSpace::Global => [Vec3::X, Vec3::Y, Vec3::Z],
    }
}

/// Unit direction of a principal axis, `None` for any other sub-handle
pub fn axis_direction<T: HandleTarget + ?Sized>(
    target: &T,
    axis: HandleAxis,
    space: HandleSpace,
) -> Option<Vec3> {
    axis.component().map(|i| basis(target, space)[i])
}

/// Stable color of a sub-handle.
///
/// Planes take the color of the axis they do not contain.
pub fn axis_color(axis: HandleAxis) -> [f32; 4] {
    match axis {
        HandleAxis::X | HandleAxis::PlaneYZ => colors::X_AXIS,
        HandleAxis::Y | HandleAxis::PlaneXZ => colors::Y_AXIS,
        HandleAxis::Z | HandleAxis::PlaneXY => colors::Z_AXIS,
        HandleAxis::Free | HandleAxis::None => colors::NEUTRAL,
    }
}

/// The two in-plane axes of a plane handle
pub fn plane_axes<T: HandleTarget + ?Sized>(
    target: &T,
    plane: HandleAxis,
    space: HandleSpace,
) -> Option<(Vec3, Vec3)> {
    let [x, y, z] = basis(target, space);
    match plane {
        HandleAxis::PlaneXY => Some((x, y)),
        HandleAxis::PlaneXZ => Some((x, z)),
        HandleAxis::PlaneYZ => Some((y, z)),
        _ => None,
    }
}

/// Normal of a plane handle (the axis it does not contain)
pub fn plane_normal<T: HandleTarget + ?Sized>(
    target: &T,
    plane: HandleAxis,
    space: HandleSpace,
) -> Option<Vec3> {
    let [x, y, z] = basis(target, space);
    match plane {
        HandleAxis::PlaneXY => Some(z),
        HandleAxis::PlaneXZ => Some(y),
        HandleAxis::PlaneYZ => Some(x),
        _ => None,
    }
}

/// Offset that moves a plane quad onto the camera-facing side of the origin.
///
/// Each in-plane axis whose direction has a positive dot product with
/// `-camera_forward` contributes `axis * size`.
pub fn plane_corner_offset(axis1: Vec3, axis2: Vec3, size: f32, camera_forward: Vec3) -> Vec3 {
    let to_camera = -camera_forward;
    let mut offset = Vec3::ZERO;
    if axis1.dot(to_camera) > 0.0 {
        offset += axis1 * size;
    }
    if axis2.dot(to_camera) > 0.0 {
        offset += axis2 * size;
    }
    offset
}

/// The four corners of a plane quad, in winding order.
///
/// The quad starts at the offset corner and extends back towards the
/// handle origin along both axes.
pub fn plane_corners(
    origin: Vec3,
    axis1: Vec3,
    axis2: Vec3,
    size: f32,
    camera_forward: Vec3,
) -> [Vec3; 4] {
    let corner = origin + plane_corner_offset(axis1, axis2, size, camera_forward);
    let a = axis1 * size;
    let b = axis2 * size;
    [corner, corner - a, corner - a - b, corner - b]
}

/// Two unit vectors spanning the plane perpendicular to `normal`.
///
/// The first is `normal x up`; when `normal` is nearly parallel to world up
/// it falls back to `normal x right`. The second is `normal x first`.
pub fn circle_basis(normal: Vec3) -> (Vec3, Vec3) {
    let mut t1 = normal.cross(Vec3::Y);
    if t1.length_squared() < epsilon::PERPENDICULAR_SQ {
        t1 = normal.cross(Vec3::X);
    }
    let t1 = t1.normalize_or_zero();
    let t2 = normal.cross(t1).normalize_or_zero();
    (t1, t2)
}
