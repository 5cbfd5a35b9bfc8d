//! Scale dragging
//!
//! Cursor travel along a fixed screen direction becomes a multiplicative
//! factor `1 + pixels * sensitivity`. Axis drags apply it to one component,
//! the uniform handle to all three.

use glam::{Vec2, Vec3};

use super::{DragStart, accepts};
use crate::camera::ViewCamera;
use crate::config::HandleSettings;
use crate::projection::screen_direction;
use crate::resolver::axis_direction;
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleKind, HandleSpace};

#[derive(Debug, Clone, PartialEq)]
struct Session {
    axis: HandleAxis,
    space: HandleSpace,
    start_scale: Vec3,
    start_cursor: Vec2,
    /// Per-component weight of the factor: one-hot for an axis, all ones
    /// for the uniform handle
    mask: Vec3,
    screen_axis: Option<Vec2>,
}

/// Scales the target along one local axis or uniformly
#[derive(Debug, Clone)]
pub struct ScaleDrag {
    session: Option<Session>,
    sensitivity: f32,
    min_scale: Option<f32>,
}

impl Default for ScaleDrag {
    fn default() -> Self {
        Self::from_settings(&HandleSettings::default())
    }
}

impl ScaleDrag {
    pub fn from_settings(settings: &HandleSettings) -> Self {
        Self {
            session: None,
            sensitivity: settings.scale_sensitivity,
            min_scale: settings.min_scale,
        }
    }

    pub(super) fn apply_settings(&mut self, settings: &HandleSettings) {
        self.sensitivity = settings.scale_sensitivity;
        self.min_scale = settings.min_scale;
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

    /// Begin scaling.
    ///
    /// Scale is always applied to the target's local components, so axis
    /// handles follow the projection of their local axis whatever `space`
    /// says. The uniform handle uses the projection of the local right axis,
    /// or screen +x when that collapses. The screen direction is fixed here.
    pub fn start<T, C>(&mut self, target: &T, camera: &C, start: DragStart) -> bool
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        self.end();
        if !accepts(HandleKind::Scale, start.axis) {
            return false;
        }

        let origin = target.position();
        let (mask, screen_axis) = match start.axis.component() {
            Some(i) => {
                let mut mask = Vec3::ZERO;
                mask[i] = 1.0;
                let screen_axis = axis_direction(target, start.axis, HandleSpace::Local)
                    .and_then(|direction| screen_direction(camera, origin, direction));
                (mask, screen_axis)
            }
            None => {
                let screen_axis =
                    screen_direction(camera, origin, target.right()).unwrap_or(Vec2::X);
                (Vec3::ONE, Some(screen_axis))
            }
        };
        if screen_axis.is_none() {
            tracing::warn!("Scale axis {:?} is seen end-on; drag will not scale", start.axis);
        }

        tracing::debug!("Scale drag started on {:?} ({:?})", start.axis, start.space);
        self.session = Some(Session {
            axis: start.axis,
            space: start.space,
            start_scale: target.local_scale(),
            start_cursor: start.cursor,
            mask,
            screen_axis,
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
        let Some(screen_axis) = session.screen_axis else {
            return false;
        };

        let pixels = (cursor - session.start_cursor).dot(screen_axis);
        let factor = 1.0 + pixels * self.sensitivity;
        // lerp(1, factor, mask) per component
        let mut scale = session.start_scale * (Vec3::ONE + (factor - 1.0) * session.mask);
        if let Some(min) = self.min_scale {
            // Floor the magnitude of the driven components only, keeping the
            // sign they had at drag start
            for i in 0..3 {
                if session.mask[i] == 0.0 {
                    continue;
                }
                let sign = if session.start_scale[i] < 0.0 { -1.0 } else { 1.0 };
                scale[i] = sign * (scale[i] * sign).max(min);
            }
        }

        target.set_local_scale(scale);
        true
    }

    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!("Scale drag ended on {:?}", session.axis);
        }
    }
}
