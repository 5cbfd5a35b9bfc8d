//! Rotation dragging
//!
//! The cursor delta is projected onto the screen-space tangent of the
//! grabbed circle at the clicked point. Every 30 pixels of travel along that
//! tangent (configurable) is one 15 degree increment; fractional increments
//! are applied with [`quat_pow`]. Sensitivity therefore does not depend on the
//! circle radius or the camera distance.

use std::f32::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use super::{DragStart, accepts};
use crate::camera::ViewCamera;
use crate::config::HandleSettings;
use crate::constants::{drag, epsilon};
use crate::hover::circle_normal_and_radius;
use crate::projection::{project_visible, screen_direction};
use crate::resolver::circle_basis;
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleKind, HandleSpace};

/// Raise a unit quaternion to a real power.
///
/// For a rotation of angle `θ` about `n` the result rotates by `θ * t`
/// about the same axis. The quaternion is first flipped onto the positive
/// hemisphere (`w >= 0`) so the shorter arc is used. Half-angles below
/// [`epsilon::QUAT_POW_ANGLE`] take a linear path instead of dividing by
/// `sin(α)`.
pub fn quat_pow(q: Quat, t: f32) -> Quat {
    let q = if q.w < 0.0 { -q } else { q };
    let alpha = q.w.clamp(-1.0, 1.0).acos();

    if alpha.abs() < epsilon::QUAT_POW_ANGLE {
        return Quat::from_xyzw(q.x * t, q.y * t, q.z * t, (alpha * t).cos()).normalize();
    }

    let scale = (alpha * t).sin() / alpha.sin();
    Quat::from_xyzw(q.x * scale, q.y * scale, q.z * scale, (alpha * t).cos())
}

#[derive(Debug, Clone, PartialEq)]
struct Session {
    axis: HandleAxis,
    space: HandleSpace,
    start_rotation: Quat,
    start_cursor: Vec2,
    /// One increment about the world-space rotation axis
    increment: Quat,
    /// Screen direction of a small positive rotation at the clicked point
    tangent: Option<Vec2>,
}

/// Rotates the target about one axis or about the view axis
#[derive(Debug, Clone)]
pub struct RotationDrag {
    session: Option<Session>,
    increment_degrees: f32,
    pixels_per_increment: f32,
}

impl Default for RotationDrag {
    fn default() -> Self {
        Self::from_settings(&HandleSettings::default())
    }
}

impl RotationDrag {
    pub fn from_settings(settings: &HandleSettings) -> Self {
        Self {
            session: None,
            increment_degrees: settings.rotation_increment_degrees,
            pixels_per_increment: settings.rotation_pixels_per_increment,
        }
    }

    pub(super) fn apply_settings(&mut self, settings: &HandleSettings) {
        self.increment_degrees = settings.rotation_increment_degrees;
        self.pixels_per_increment = settings.rotation_pixels_per_increment;
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn axis(&self) -> Option<HandleAxis> {
        self.session.as_ref().map(|s| s.axis)
    }

    pub fn space(&self) -> Option<HandleSpace> {
        self.session.as_ref().map(|s| s.space)
    }

    /// Begin rotating about the circle of `start.axis`.
    ///
    /// Axis circles turn about their own normal taken from the starting
    /// orientation; the free ring turns about the target-to-camera
    /// direction at the moment of the click.
    pub fn start<T, C>(&mut self, target: &T, camera: &C, start: DragStart) -> bool
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        self.end();
        if !accepts(HandleKind::Rotation, start.axis) {
            return false;
        }

        let Some((normal, radius)) =
            circle_normal_and_radius(target, camera, start.axis, start.space, start.handle_scale)
        else {
            tracing::warn!("Degenerate rotation axis for {:?}", start.axis);
            return false;
        };

        let tangent = click_tangent(camera, target.position(), normal, radius, start.cursor);
        if tangent.is_none() {
            tracing::warn!("Rotation circle {:?} is edge-on; drag will not rotate", start.axis);
        }

        tracing::debug!("Rotation drag started on {:?} ({:?})", start.axis, start.space);
        self.session = Some(Session {
            axis: start.axis,
            space: start.space,
            start_rotation: target.rotation(),
            start_cursor: start.cursor,
            increment: Quat::from_axis_angle(normal, self.increment_degrees.to_radians()),
            tangent,
        });
        true
    }

    pub fn update<T, C>(&mut self, target: &mut T, _camera: &C, cursor: Vec2) -> bool
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        let Some(session) = &self.session else {
            return false;
        };
        let Some(tangent) = session.tangent else {
            return false;
        };

        let steps = (cursor - session.start_cursor).dot(tangent) / self.pixels_per_increment;
        let rotation = (quat_pow(session.increment, steps) * session.start_rotation).normalize();
        target.set_rotation(rotation);
        true
    }

    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!("Rotation drag ended on {:?}", session.axis);
        }
    }
}

/// Screen tangent of the circle at the sample that lies in the click direction.
///
/// The circle is sampled at [`drag::TANGENT_SAMPLES`] angles; the sample
/// whose screen direction from the center best matches the direction from
/// the center to the cursor is taken as the grabbed point. The tangent at a
/// radial `t1 cos a + t2 sin a` is `normal x radial = t2 cos a - t1 sin a`,
/// the direction a point travels under a small positive rotation.
fn click_tangent<C>(camera: &C, center: Vec3, normal: Vec3, radius: f32, cursor: Vec2) -> Option<Vec2>
where
    C: ViewCamera + ?Sized,
{
    let center_screen = project_visible(camera, center)?;
    let click = (cursor - center_screen).try_normalize()?;
    let (t1, t2) = circle_basis(normal);

    let mut best: Option<(f32, f32)> = None;
    for i in 0..drag::TANGENT_SAMPLES {
        let angle = i as f32 / drag::TANGENT_SAMPLES as f32 * TAU;
        let radial = t1 * angle.cos() + t2 * angle.sin();
        let Some(direction) = screen_direction(camera, center, radial * radius) else {
            continue;
        };
        let alignment = direction.dot(click);
        if best.is_none_or(|(_, b)| alignment > b) {
            best = Some((angle, alignment));
        }
    }

    let (angle, _) = best?;
    let point = center + (t1 * angle.cos() + t2 * angle.sin()) * radius;
    let tangent = t2 * angle.cos() - t1 * angle.sin();
    screen_direction(camera, point, tangent * radius * 0.1)
}
