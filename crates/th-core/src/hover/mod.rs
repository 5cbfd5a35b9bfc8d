//! Hover detection
//!
//! Every handle kind uses the same threshold-and-minimum pass: measure a
//! screen-space distance from the cursor to each enabled sub-handle in each
//! enabled space, keep the closest, and accept it if it is under the kind's
//! pixel threshold. Only the distance metric differs per kind.

mod rotation;
mod scale;
mod translation;

use glam::{Vec2, Vec3};

use crate::camera::ViewCamera;
use crate::config::HandleSettings;
use crate::profile::HandleProfile;
use crate::projection::project_visible;
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleKind, HandleSpace};

pub use rotation::circle_normal_and_radius;

/// A sub-handle under the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverHit {
    pub axis: HandleAxis,
    /// Space the winning sub-handle was tested in
    pub space: HandleSpace,
    /// Screen distance from the cursor (pixels)
    pub distance: f32,
}

/// Inputs shared by every per-axis distance query
pub(crate) struct Probe<'a, T: ?Sized, C: ?Sized> {
    pub target: &'a T,
    pub camera: &'a C,
    pub cursor: Vec2,
    pub origin: Vec3,
    pub handle_scale: f32,
}

/// Finds the sub-handle under the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverDetector {
    pub translation_threshold: f32,
    pub rotation_threshold: f32,
    pub scale_threshold: f32,
}

impl Default for HoverDetector {
    fn default() -> Self {
        Self::from_settings(&HandleSettings::default())
    }
}

impl HoverDetector {
    pub fn from_settings(settings: &HandleSettings) -> Self {
        Self {
            translation_threshold: settings.translation_threshold_px,
            rotation_threshold: settings.rotation_threshold_px,
            scale_threshold: settings.scale_threshold_px,
        }
    }

    /// Pixel threshold of `kind`
    pub fn threshold(&self, kind: HandleKind) -> f32 {
        match kind {
            HandleKind::Translation => self.translation_threshold,
            HandleKind::Rotation => self.rotation_threshold,
            HandleKind::Scale => self.scale_threshold,
        }
    }

    /// Closest enabled sub-handle of `kind` within its threshold.
    ///
    /// Returns `None` immediately when the target origin is behind the
    /// camera. When the same axis is enabled in both spaces each is tested
    /// on its own and the closer one wins; on an exact tie the Local one,
    /// tested first, is kept.
    pub fn detect<T, C>(
        &self,
        kind: HandleKind,
        target: &T,
        camera: &C,
        cursor: Vec2,
        profile: &HandleProfile,
        handle_scale: f32,
    ) -> Option<HoverHit>
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        let origin = target.position();
        project_visible(camera, origin)?;

        let probe = Probe {
            target,
            camera,
            cursor,
            origin,
            handle_scale,
        };

        let mut best: Option<HoverHit> = None;
        for (axis, space) in profile.enabled_axes(kind) {
            let distance = match kind {
                HandleKind::Translation => translation::distance(&probe, axis, space),
                HandleKind::Rotation => rotation::distance(&probe, axis, space),
                HandleKind::Scale => scale::distance(&probe, axis, space),
            };
            let Some(distance) = distance else {
                continue;
            };
            if best.is_none_or(|hit| distance < hit.distance) {
                best = Some(HoverHit {
                    axis,
                    space,
                    distance,
                });
            }
        }

        best.filter(|hit| hit.distance < self.threshold(kind))
    }
}
