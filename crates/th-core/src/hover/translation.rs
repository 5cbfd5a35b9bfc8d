//! Translation handle picking: axis segments and camera-facing plane quads

use glam::Vec2;

use super::Probe;
use crate::camera::ViewCamera;
use crate::constants::handle;
use crate::projection::{distance_point_to_segment, point_in_convex_quad, project_visible};
use crate::resolver::{axis_direction, plane_axes, plane_corners};
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleSpace};

pub(super) fn distance<T, C>(probe: &Probe<'_, T, C>, axis: HandleAxis, space: HandleSpace) -> Option<f32>
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    if axis.is_plane() {
        return plane_distance(probe, axis, space);
    }

    let direction = axis_direction(probe.target, axis, space)?;
    let start = project_visible(probe.camera, probe.origin)?;
    let end = project_visible(probe.camera, probe.origin + direction * probe.handle_scale)?;
    Some(distance_point_to_segment(probe.cursor, start, end))
}

/// Zero inside the projected quad, otherwise the distance to its nearest edge
fn plane_distance<T, C>(probe: &Probe<'_, T, C>, plane: HandleAxis, space: HandleSpace) -> Option<f32>
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let (axis1, axis2) = plane_axes(probe.target, plane, space)?;
    let size = probe.handle_scale * handle::PLANE_SIZE_MULTIPLIER;
    let corners = plane_corners(probe.origin, axis1, axis2, size, probe.camera.forward());

    let mut quad = [Vec2::ZERO; 4];
    for (screen, corner) in quad.iter_mut().zip(corners) {
        *screen = project_visible(probe.camera, corner)?;
    }

    if point_in_convex_quad(probe.cursor, &quad) {
        return Some(0.0);
    }

    (0..4)
        .map(|i| distance_point_to_segment(probe.cursor, quad[i], quad[(i + 1) % 4]))
        .reduce(f32::min)
}

#[cfg(test)]
mod tests {
    use super::super::tests::angled_camera;
    use super::*;
    use crate::hover::HoverDetector;
    use crate::profile::HandleProfile;
    use crate::transform::Transform;
    use crate::types::HandleKind;
    use glam::Vec3;

    #[test]
    fn test_plane_interior_is_zero_distance() {
        let camera = angled_camera();
        let target = Transform::default();
        let size = handle::PLANE_SIZE_MULTIPLIER;
        let corners = plane_corners(Vec3::ZERO, Vec3::X, Vec3::Z, size, camera.forward());
        let center = corners.iter().copied().sum::<Vec3>() / 4.0;

        let probe = Probe {
            target: &target,
            camera: &camera,
            cursor: camera.world_to_screen(center).position,
            origin: Vec3::ZERO,
            handle_scale: 1.0,
        };
        assert_eq!(
            distance(&probe, HandleAxis::PlaneXZ, HandleSpace::Global),
            Some(0.0)
        );
    }

    #[test]
    fn test_outside_plane_measures_nearest_edge() {
        let camera = angled_camera();
        let target = Transform::default();
        let corners = plane_corners(
            Vec3::ZERO,
            Vec3::X,
            Vec3::Z,
            handle::PLANE_SIZE_MULTIPLIER,
            camera.forward(),
        );
        let quad = corners.map(|c| camera.world_to_screen(c).position);
        let center = quad.iter().copied().sum::<Vec2>() / 4.0;

        // Edge farthest from the axis lines, which meet at the origin
        let origin = camera.world_to_screen(Vec3::ZERO).position;
        let (a, b) = (0..4)
            .map(|i| (quad[i], quad[(i + 1) % 4]))
            .max_by(|(a1, b1), (a2, b2)| {
                let d1 = ((*a1 + *b1) * 0.5).distance(origin);
                let d2 = ((*a2 + *b2) * 0.5).distance(origin);
                d1.total_cmp(&d2)
            })
            .unwrap();
        let mid = (a + b) * 0.5;
        let mut outward = (b - a).perp().normalize();
        if outward.dot(mid - center) < 0.0 {
            outward = -outward;
        }

        let probe = Probe {
            target: &target,
            camera: &camera,
            cursor: mid + outward * 3.0,
            origin: Vec3::ZERO,
            handle_scale: 1.0,
        };
        let d = distance(&probe, HandleAxis::PlaneXZ, HandleSpace::Global).unwrap();
        assert!((d - 3.0).abs() < 1.0e-3, "distance {d}");
    }

    #[test]
    fn test_plane_is_detected_on_camera_side() {
        // Camera sits at -X/+Y/-Z, so the XZ quad is offset towards -X/-Z
        let camera = angled_camera();
        let corners = plane_corners(
            Vec3::ZERO,
            Vec3::X,
            Vec3::Z,
            handle::PLANE_SIZE_MULTIPLIER,
            camera.forward(),
        );
        assert!(corners.iter().all(|c| c.x <= 0.0 && c.z <= 0.0));

        let center = corners.iter().copied().sum::<Vec3>() / 4.0;
        let hit = HoverDetector::default()
            .detect(
                HandleKind::Translation,
                &Transform::default(),
                &camera,
                camera.world_to_screen(center).position,
                &HandleProfile::single_space(HandleSpace::Global),
                1.0,
            )
            .unwrap();
        assert_eq!(hit.axis, HandleAxis::PlaneXZ);
        assert_eq!(hit.distance, 0.0);
    }
}
