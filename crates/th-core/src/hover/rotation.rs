//! Rotation handle picking against sampled circles

use std::f32::consts::TAU;

use glam::Vec3;

use super::Probe;
use crate::camera::ViewCamera;
use crate::constants::{handle, hover};
use crate::projection::project_visible;
use crate::resolver::{axis_direction, circle_basis};
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleSpace};

/// Normal and world radius of the circle drawn for a rotation sub-handle.
///
/// Axis circles have the axis as normal and the handle scale as radius. The
/// free ring faces the camera and is slightly larger.
pub fn circle_normal_and_radius<T, C>(
    target: &T,
    camera: &C,
    axis: HandleAxis,
    space: HandleSpace,
    handle_scale: f32,
) -> Option<(Vec3, f32)>
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    match axis {
        HandleAxis::Free => {
            let normal = (camera.position() - target.position()).try_normalize()?;
            Some((normal, handle_scale * handle::FREE_ROTATION_SCALE))
        }
        _ => Some((axis_direction(target, axis, space)?, handle_scale)),
    }
}

pub(super) fn distance<T, C>(probe: &Probe<'_, T, C>, axis: HandleAxis, space: HandleSpace) -> Option<f32>
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let (normal, radius) =
        circle_normal_and_radius(probe.target, probe.camera, axis, space, probe.handle_scale)?;
    let (t1, t2) = circle_basis(normal);
    let to_camera = (probe.camera.position() - probe.origin).normalize_or_zero();
    // Every point of the free ring is equally far from the camera
    let cull = axis != HandleAxis::Free;

    (0..hover::CIRCLE_SEGMENTS)
        .filter_map(|i| {
            let angle = i as f32 / hover::CIRCLE_SEGMENTS as f32 * TAU;
            let radial = t1 * angle.cos() + t2 * angle.sin();
            if cull && radial.dot(to_camera) < hover::BACK_FACE_CUTOFF {
                return None;
            }
            let screen = project_visible(probe.camera, probe.origin + radial * radius)?;
            Some(probe.cursor.distance(screen))
        })
        .reduce(f32::min)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{angled_camera, front_camera};
    use super::*;
    use crate::hover::HoverDetector;
    use crate::profile::HandleProfile;
    use crate::transform::Transform;
    use crate::types::HandleKind;
    use glam::Vec2;

    fn probe_at<'a>(
        target: &'a Transform,
        camera: &'a crate::camera::PerspectiveCamera,
        cursor: Vec2,
    ) -> Probe<'a, Transform, crate::camera::PerspectiveCamera> {
        Probe {
            target,
            camera,
            cursor,
            origin: target.position,
            handle_scale: 1.0,
        }
    }

    #[test]
    fn test_point_on_front_of_circle_is_zero_distance() {
        let camera = angled_camera();
        let target = Transform::default();
        // -X is on the camera side of the Y circle
        let cursor = camera.world_to_screen(Vec3::NEG_X).position;
        let d = distance(&probe_at(&target, &camera, cursor), HandleAxis::Y, HandleSpace::Global)
            .unwrap();
        assert!(d < 1.0e-3, "distance {d}");
    }

    #[test]
    fn test_back_of_circle_is_culled() {
        let camera = angled_camera();
        let target = Transform::default();
        // +X faces away from the camera, so the nearest front sample is far off
        let back = camera.world_to_screen(Vec3::X).position;
        let d = distance(&probe_at(&target, &camera, back), HandleAxis::Y, HandleSpace::Global)
            .unwrap();
        assert!(d > 1.0, "distance {d}");
    }

    #[test]
    fn test_rotation_threshold() {
        let camera = front_camera();
        let target = Transform::default();
        let mut profile = HandleProfile::single_space(HandleSpace::Global);
        profile.rotation.global.x = false;
        profile.rotation.global.z = false;
        profile.rotation.global.free = false;

        // Seen edge-on, the front half of the Y circle lies on the horizon
        let front = camera.world_to_screen(Vec3::NEG_Z).position;
        let detect = |cursor: Vec2| {
            HoverDetector::default().detect(HandleKind::Rotation, &target, &camera, cursor, &profile, 1.0)
        };

        let hit = detect(front + Vec2::new(0.0, 14.0)).unwrap();
        assert_eq!(hit.axis, HandleAxis::Y);
        assert!(hit.distance >= 14.0 - 1.0e-3, "distance {}", hit.distance);

        assert_eq!(detect(front + Vec2::new(0.0, 16.0)), None);
    }

    #[test]
    fn test_free_ring_hovered_outside_axis_circles() {
        let camera = front_camera();
        let target = Transform::default();
        let ring_point = camera
            .world_to_screen(Vec3::X * handle::FREE_ROTATION_SCALE)
            .position;

        let hit = HoverDetector::default()
            .detect(
                HandleKind::Rotation,
                &target,
                &camera,
                ring_point,
                &HandleProfile::single_space(HandleSpace::Global),
                1.0,
            )
            .unwrap();
        assert_eq!(hit.axis, HandleAxis::Free);
    }

    #[test]
    fn test_free_ring_faces_camera() {
        let camera = front_camera();
        let target = Transform::default();
        let (normal, radius) =
            circle_normal_and_radius(&target, &camera, HandleAxis::Free, HandleSpace::Local, 2.0)
                .unwrap();
        assert_eq!(normal, Vec3::NEG_Z);
        assert_eq!(radius, 2.0 * handle::FREE_ROTATION_SCALE);
    }
}
