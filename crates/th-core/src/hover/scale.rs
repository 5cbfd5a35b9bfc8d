//! Scale handle picking by distance to the projected box centers

use super::Probe;
use crate::camera::ViewCamera;
use crate::projection::project_visible;
use crate::resolver::axis_direction;
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleSpace};

pub(super) fn distance<T, C>(probe: &Probe<'_, T, C>, axis: HandleAxis, space: HandleSpace) -> Option<f32>
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let center = match axis {
        HandleAxis::Free => probe.origin,
        _ => probe.origin + axis_direction(probe.target, axis, space)? * probe.handle_scale,
    };
    let screen = project_visible(probe.camera, center)?;
    Some(probe.cursor.distance(screen))
}

#[cfg(test)]
mod tests {
    use super::super::tests::angled_camera;
    use crate::camera::ViewCamera;
    use crate::hover::HoverDetector;
    use crate::profile::HandleProfile;
    use crate::transform::Transform;
    use crate::types::{HandleAxis, HandleKind, HandleSpace};
    use glam::{Vec2, Vec3};

    fn detect_at(cursor: Vec2) -> Option<HandleAxis> {
        HoverDetector::default()
            .detect(
                HandleKind::Scale,
                &Transform::default(),
                &angled_camera(),
                cursor,
                &HandleProfile::single_space(HandleSpace::Local),
                1.0,
            )
            .map(|hit| hit.axis)
    }

    #[test]
    fn test_box_and_center_hits() {
        let camera = angled_camera();
        let x_box = camera.world_to_screen(Vec3::X).position;
        let center = camera.world_to_screen(Vec3::ZERO).position;

        assert_eq!(detect_at(x_box + Vec2::new(5.0, 5.0)), Some(HandleAxis::X));
        assert_eq!(detect_at(center + Vec2::new(3.0, 0.0)), Some(HandleAxis::Free));
    }

    #[test]
    fn test_scale_threshold() {
        let camera = angled_camera();
        let y_box = camera.world_to_screen(Vec3::Y).position;
        assert_eq!(detect_at(y_box + Vec2::new(0.0, -19.0)), Some(HandleAxis::Y));
        assert_eq!(detect_at(y_box + Vec2::new(0.0, -21.0)), None);
    }
}
