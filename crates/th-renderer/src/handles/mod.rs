//! Handle geometry
//!
//! Collects the geometry of the current handle kind into a
//! [`BatchedDrawCollector`]. Every sub-handle is placed with the same
//! resolver functions the hover detectors pick against, and only the
//! (axis, space) pairs the effective profile enables are drawn.

mod rotation;
mod scale;
mod translation;

use glam::Vec3;
use th_core::{HandleAxis, HandleKind, HandleProfile, HandleSpace, HandleTarget, TransformHandles, ViewCamera};

use crate::batch::{BatchedDrawCollector, DrawBackend};
use crate::constants::{alpha, thickness};

/// Everything the per-kind collectors need for one frame
pub(crate) struct HandleFrame<'a, T: ?Sized, C: ?Sized> {
    pub target: &'a T,
    pub camera: &'a C,
    pub origin: Vec3,
    pub handle_scale: f32,
    pub profile: &'a HandleProfile,
    /// Dragged sub-handle, else the hovered one
    pub highlighted: Option<(HandleAxis, HandleSpace)>,
}

impl<T, C> HandleFrame<'_, T, C>
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    /// Whether `(axis, space)` is hovered or dragged.
    ///
    /// The free handle exists once regardless of space.
    pub fn is_active(&self, axis: HandleAxis, space: HandleSpace) -> bool {
        match self.highlighted {
            Some((HandleAxis::Free, _)) => axis == HandleAxis::Free,
            Some(highlighted) => highlighted == (axis, space),
            None => false,
        }
    }

    pub fn alpha(&self, active: bool) -> f32 {
        if active { alpha::ACTIVE } else { alpha::IDLE }
    }

    pub fn thickness(&self, active: bool) -> f32 {
        if active {
            thickness::ACTIVE
        } else {
            thickness::BASE
        }
    }

    /// Unit vector from the handle origin towards the eye
    pub fn to_camera(&self) -> Vec3 {
        (self.camera.position() - self.origin).normalize_or_zero()
    }
}

/// Collect the handles of `handles`' current kind for `target`.
///
/// Appends to `collector` without clearing it so that several targets or
/// overlays can share one batch.
pub fn collect_handles<T, C>(
    handles: &TransformHandles,
    target: &T,
    camera: &C,
    collector: &mut BatchedDrawCollector,
) where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let origin = target.position();
    let frame = HandleFrame {
        target,
        camera,
        origin,
        handle_scale: handles.handle_scale(camera, origin),
        profile: handles.effective_profile(),
        highlighted: handles.interaction().highlighted(),
    };

    let kind = handles.kind();
    if !frame.profile.has_any_axis_enabled(kind) {
        return;
    }

    match kind {
        HandleKind::Translation => translation::collect(&frame, collector),
        HandleKind::Rotation => rotation::collect(&frame, collector),
        HandleKind::Scale => scale::collect(&frame, collector),
    }
}

/// Owns a collector and renders one target per frame
#[derive(Debug, Clone, Default)]
pub struct HandleRenderer {
    collector: BatchedDrawCollector,
}

impl HandleRenderer {
    /// Create a renderer with empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry of the last collected frame
    pub fn collector(&self) -> &BatchedDrawCollector {
        &self.collector
    }

    /// Replace last frame's geometry with the handles for `target`
    pub fn collect<T, C>(&mut self, handles: &TransformHandles, target: &T, camera: &C) -> &BatchedDrawCollector
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        self.collector.begin_frame();
        collect_handles(handles, target, camera, &mut self.collector);
        &self.collector
    }

    /// Collect and flush into `backend`, returning the draw call count
    pub fn render<T, C, B>(&mut self, handles: &TransformHandles, target: &T, camera: &C, backend: &mut B) -> usize
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
        B: DrawBackend + ?Sized,
    {
        self.collect(handles, target, camera).flush(backend)
    }
}
