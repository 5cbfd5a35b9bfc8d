//! Drag handlers
//!
//! Each handle kind has its own handler with the same two-phase protocol:
//! `start` captures a baseline (starting transform values, starting cursor
//! and whatever geometric basis the kind needs), `update` maps the current
//! cursor to a new transform value relative to that baseline, and `end`
//! drops the session. A handler holds at most one session; starting a new
//! one ends the previous session first.

mod rotation;
mod scale;
mod translation;

pub use rotation::{RotationDrag, quat_pow};
pub use scale::ScaleDrag;
pub use translation::TranslationDrag;

use glam::Vec2;

use crate::camera::ViewCamera;
use crate::config::HandleSettings;
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleKind, HandleSpace};

/// Everything `start` needs besides the target and camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStart {
    pub axis: HandleAxis,
    pub space: HandleSpace,
    pub cursor: Vec2,
    /// World-space handle length at drag start
    pub handle_scale: f32,
}

/// The three drag handlers, dispatched by handle kind
#[derive(Debug, Clone, Default)]
pub struct DragHandlers {
    pub translation: TranslationDrag,
    pub rotation: RotationDrag,
    pub scale: ScaleDrag,
}

impl DragHandlers {
    pub fn from_settings(settings: &HandleSettings) -> Self {
        Self {
            translation: TranslationDrag::default(),
            rotation: RotationDrag::from_settings(settings),
            scale: ScaleDrag::from_settings(settings),
        }
    }

    /// Re-read sensitivities without touching an active session
    pub fn apply_settings(&mut self, settings: &HandleSettings) {
        self.rotation.apply_settings(settings);
        self.scale.apply_settings(settings);
    }

    /// Start a drag on the handler of `kind`.
    ///
    /// Returns `false` when the handler refused the start. Any session held
    /// by another kind is ended first so that only one is ever active.
    pub fn start<T, C>(&mut self, kind: HandleKind, target: &T, camera: &C, start: DragStart) -> bool
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        self.end_all();
        match kind {
            HandleKind::Translation => self.translation.start(target, camera, start),
            HandleKind::Rotation => self.rotation.start(target, camera, start),
            HandleKind::Scale => self.scale.start(target, camera, start),
        }
    }

    /// Forward the cursor to the handler of `kind`; `true` if the target changed
    pub fn update<T, C>(&mut self, kind: HandleKind, target: &mut T, camera: &C, cursor: Vec2) -> bool
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        match kind {
            HandleKind::Translation => self.translation.update(target, camera, cursor),
            HandleKind::Rotation => self.rotation.update(target, camera, cursor),
            HandleKind::Scale => self.scale.update(target, camera, cursor),
        }
    }

    pub fn end(&mut self, kind: HandleKind) {
        match kind {
            HandleKind::Translation => self.translation.end(),
            HandleKind::Rotation => self.rotation.end(),
            HandleKind::Scale => self.scale.end(),
        }
    }

    pub fn end_all(&mut self) {
        self.translation.end();
        self.rotation.end();
        self.scale.end();
    }

    pub fn is_active(&self, kind: HandleKind) -> bool {
        match kind {
            HandleKind::Translation => self.translation.is_active(),
            HandleKind::Rotation => self.rotation.is_active(),
            HandleKind::Scale => self.scale.is_active(),
        }
    }
}

/// Refuse sub-handles the kind does not have
fn accepts(kind: HandleKind, axis: HandleAxis) -> bool {
    if axis.is_valid_for(kind) {
        return true;
    }
    tracing::warn!("Ignoring {:?} drag start on invalid axis {:?}", kind, axis);
    false
}
