//! Translation dragging
//!
//! Axis drags convert cursor travel along the projected axis into world
//! distance with the perspective pixel size at the start depth. Plane drags
//! intersect the cursor ray with the handle plane, which is exact.

use glam::{Vec2, Vec3};

use super::{DragStart, accepts};
use crate::camera::ViewCamera;
use crate::constants::handle;
use crate::projection::{ray_plane_intersection, screen_direction};
use crate::resolver::{axis_direction, plane_axes, plane_corner_offset, plane_normal};
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleKind, HandleSpace};

#[derive(Debug, Clone, PartialEq)]
enum Constraint {
    Axis {
        direction: Vec3,
        /// World units per pixel at the start position
        units_per_pixel: f32,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
        /// Target origin minus the first ray hit
        grab_offset: Vec3,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Session {
    axis: HandleAxis,
    space: HandleSpace,
    start_position: Vec3,
    start_cursor: Vec2,
    constraint: Constraint,
}

/// Moves the target along one axis or within one plane
#[derive(Debug, Clone, Default)]
pub struct TranslationDrag {
    session: Option<Session>,
}

impl TranslationDrag {
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Axis of the active session
    pub fn axis(&self) -> Option<HandleAxis> {
        self.session.as_ref().map(|s| s.axis)
    }

    pub fn space(&self) -> Option<HandleSpace> {
        self.session.as_ref().map(|s| s.space)
    }

    pub fn start<T, C>(&mut self, target: &T, camera: &C, start: DragStart) -> bool
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        self.end();
        if !accepts(HandleKind::Translation, start.axis) {
            return false;
        }

        let start_position = target.position();
        let constraint = if start.axis.is_plane() {
            let Some(constraint) = plane_constraint(target, camera, start) else {
                tracing::warn!("Cursor ray misses the {:?} drag plane", start.axis);
                return false;
            };
            constraint
        } else {
            let Some(direction) = axis_direction(target, start.axis, start.space) else {
                return false;
            };
            let distance = camera.position().distance(start_position);
            Constraint::Axis {
                direction,
                units_per_pixel: camera.world_units_per_pixel(distance),
            }
        };

        tracing::debug!(
            "Translation drag started on {:?} ({:?})",
            start.axis,
            start.space
        );
        self.session = Some(Session {
            axis: start.axis,
            space: start.space,
            start_position,
            start_cursor: start.cursor,
            constraint,
        });
        true
    }

    /// Move the target for the current cursor; `false` without a session or
    /// when the cursor cannot be mapped this frame
    pub fn update<T, C>(&mut self, target: &mut T, camera: &C, cursor: Vec2) -> bool
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        let Some(session) = &self.session else {
            return false;
        };

        let position = match session.constraint {
            Constraint::Axis {
                direction,
                units_per_pixel,
            } => {
                let Some(screen_axis) = screen_direction(camera, session.start_position, direction)
                else {
                    return false;
                };
                let pixels = (cursor - session.start_cursor).dot(screen_axis);
                session.start_position + direction * (pixels * units_per_pixel)
            }
            Constraint::Plane {
                point,
                normal,
                grab_offset,
            } => {
                let Some(hit) = ray_plane_intersection(&camera.screen_ray(cursor), point, normal)
                else {
                    return false;
                };
                let moved = hit + grab_offset - session.start_position;
                // Keep only the in-plane part so the constrained coordinate stays put
                session.start_position + (moved - normal * moved.dot(normal))
            }
        };

        target.set_position(position);
        true
    }

    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!("Translation drag ended on {:?}", session.axis);
        }
    }
}

fn plane_constraint<T, C>(target: &T, camera: &C, start: DragStart) -> Option<Constraint>
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let (axis1, axis2) = plane_axes(target, start.axis, start.space)?;
    let normal = plane_normal(target, start.axis, start.space)?;
    let size = start.handle_scale * handle::PLANE_SIZE_MULTIPLIER;
    let point = target.position() + plane_corner_offset(axis1, axis2, size, camera.forward());

    let hit = ray_plane_intersection(&camera.screen_ray(start.cursor), point, normal)?;
    Some(Constraint::Plane {
        point,
        normal,
        grab_offset: target.position() - hit,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::{drag_start, front_camera};
    use super::*;
    use crate::camera::PerspectiveCamera;
    use crate::transform::Transform;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_drag_follows_cursor() {
        let camera = front_camera();
        let mut target = Transform::default();
        let mut drag = TranslationDrag::default();
        let center = Vec2::new(400.0, 300.0);

        assert!(drag.start(
            &target,
            &camera,
            drag_start(HandleAxis::X, HandleSpace::Global, center)
        ));
        assert!(drag.update(&mut target, &camera, center + Vec2::new(50.0, 0.0)));

        // 50 px at depth 10 with a 60 degree fov over 600 px
        let expected = 50.0 * 2.0 * 10.0 * 30.0_f32.to_radians().tan() / 600.0;
        assert!(target.position.x > 0.0);
        assert_relative_eq!(target.position.x, expected, epsilon = 1e-4);
        assert_relative_eq!(target.position.y, 0.0);
        assert_relative_eq!(target.position.z, 0.0);
    }

    #[test]
    fn test_axis_drag_ignores_perpendicular_motion() {
        let camera = front_camera();
        let mut target = Transform::default();
        let mut drag = TranslationDrag::default();
        let center = Vec2::new(400.0, 300.0);

        drag.start(
            &target,
            &camera,
            drag_start(HandleAxis::X, HandleSpace::Global, center),
        );
        drag.update(&mut target, &camera, center + Vec2::new(0.0, 80.0));
        assert_relative_eq!(target.position.x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_screen_up_moves_world_up() {
        let camera = front_camera();
        let mut target = Transform::default();
        let mut drag = TranslationDrag::default();
        let center = Vec2::new(400.0, 300.0);

        drag.start(
            &target,
            &camera,
            drag_start(HandleAxis::Y, HandleSpace::Global, center),
        );
        drag.update(&mut target, &camera, center - Vec2::new(0.0, 40.0));
        assert!(target.position.y > 0.0);
    }

    #[test]
    fn test_plane_drag_keeps_normal_coordinate() {
        let camera = PerspectiveCamera::new(Vec3::new(3.0, 6.0, -9.0), Vec3::new(0.5, 1.0, 0.0), 800.0, 600.0);
        let mut target = Transform::from_position(Vec3::new(0.5, 1.0, 0.0));
        let mut drag = TranslationDrag::default();

        let grab = camera.world_to_screen(Vec3::new(0.4, 1.0, -0.1)).position;
        assert!(drag.start(
            &target,
            &camera,
            drag_start(HandleAxis::PlaneXZ, HandleSpace::Global, grab)
        ));

        for offset in [
            Vec2::new(30.0, 0.0),
            Vec2::new(-45.0, 20.0),
            Vec2::new(12.5, -33.0),
            Vec2::new(-80.0, -60.0),
        ] {
            assert!(drag.update(&mut target, &camera, grab + offset));
            assert_relative_eq!(target.position.y, 1.0, epsilon = 1e-5);
        }
        assert!((target.position - Vec3::new(0.5, 1.0, 0.0)).length() > 0.1);
    }

    #[test]
    fn test_plane_drag_without_motion_keeps_position() {
        let camera = PerspectiveCamera::new(Vec3::new(3.0, 6.0, -9.0), Vec3::ZERO, 800.0, 600.0);
        let mut target = Transform::default();
        let mut drag = TranslationDrag::default();

        let grab = camera.world_to_screen(Vec3::new(-0.1, 0.0, -0.1)).position;
        drag.start(
            &target,
            &camera,
            drag_start(HandleAxis::PlaneXZ, HandleSpace::Global, grab),
        );
        drag.update(&mut target, &camera, grab);
        assert_relative_eq!(target.position.length(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_local_axis_follows_rotation() {
        let camera = front_camera();
        let mut target = Transform::default().with_rotation(glam::Quat::from_rotation_z(90.0_f32.to_radians()));
        let mut drag = TranslationDrag::default();
        let center = Vec2::new(400.0, 300.0);

        // Local X now points along world Y, i.e. screen up
        drag.start(
            &target,
            &camera,
            drag_start(HandleAxis::X, HandleSpace::Local, center),
        );
        drag.update(&mut target, &camera, center - Vec2::new(0.0, 50.0));
        assert!(target.position.y > 0.5);
        assert_relative_eq!(target.position.x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_end_stops_updates() {
        let camera = front_camera();
        let mut target = Transform::default();
        let mut drag = TranslationDrag::default();
        let center = Vec2::new(400.0, 300.0);

        drag.start(
            &target,
            &camera,
            drag_start(HandleAxis::Z, HandleSpace::Global, center),
        );
        drag.end();
        assert!(!drag.is_active());
        assert!(!drag.update(&mut target, &camera, center + Vec2::new(10.0, 10.0)));
        assert_eq!(target, Transform::default());
    }
}
