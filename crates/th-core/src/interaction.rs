//! Interaction coordinator
//!
//! Drives the hover detector and the drag handlers once per frame from the
//! pointer state:
//!
//! 1. Not dragging: refresh the hover result; on a primary press over a
//!    sub-handle, start a drag in the space the hover detector reported.
//! 2. Dragging: feed the cursor to the active handler; on a primary release,
//!    end the drag. A press and release in one frame starts and ends the
//!    drag together, and a button found up without a release edge (lost
//!    focus, dropped event) ends it without moving the target.
//!
//! There is never more than one drag session.

use glam::Vec2;

use crate::camera::ViewCamera;
use crate::config::HandleSettings;
use crate::drag::{DragHandlers, DragStart};
use crate::hover::{HoverDetector, HoverHit};
use crate::input::PointerInput;
use crate::profile::HandleProfile;
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleKind, HandleSpace};

/// Something the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEvent {
    KindChanged(HandleKind),
    SpaceChanged(HandleSpace),
    DragStarted { axis: HandleAxis, space: HandleSpace },
    /// The target was written this frame
    TransformModified,
    DragEnded { axis: HandleAxis },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    kind: HandleKind,
    axis: HandleAxis,
    space: HandleSpace,
}

/// Per-frame hover and drag state machine
#[derive(Debug, Clone, Default)]
pub struct InteractionCoordinator {
    detector: HoverDetector,
    drags: DragHandlers,
    hovered: Option<HoverHit>,
    active: Option<ActiveDrag>,
}

impl InteractionCoordinator {
    pub fn new(settings: &HandleSettings) -> Self {
        Self {
            detector: HoverDetector::from_settings(settings),
            drags: DragHandlers::from_settings(settings),
            hovered: None,
            active: None,
        }
    }

    /// Pick up new thresholds and sensitivities
    pub fn apply_settings(&mut self, settings: &HandleSettings) {
        self.detector = HoverDetector::from_settings(settings);
        self.drags.apply_settings(settings);
    }

    pub fn hovered(&self) -> Option<HoverHit> {
        self.hovered
    }

    /// Hovered sub-handle, `HandleAxis::None` when nothing is hovered
    pub fn hovered_axis(&self) -> HandleAxis {
        self.hovered.map_or(HandleAxis::None, |hit| hit.axis)
    }

    /// Dragged sub-handle, `HandleAxis::None` when idle
    pub fn dragged_axis(&self) -> HandleAxis {
        self.active.map_or(HandleAxis::None, |drag| drag.axis)
    }

    /// Space of the active drag
    pub fn dragged_space(&self) -> Option<HandleSpace> {
        self.active.map(|drag| drag.space)
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Axis to highlight: the dragged one, else the hovered one
    pub fn highlighted(&self) -> Option<(HandleAxis, HandleSpace)> {
        match (self.active, self.hovered) {
            (Some(drag), _) => Some((drag.axis, drag.space)),
            (None, Some(hit)) => Some((hit.axis, hit.space)),
            (None, None) => None,
        }
    }

    /// Run one frame
    pub fn update<T, C, I>(
        &mut self,
        kind: HandleKind,
        target: &mut T,
        camera: &C,
        input: &I,
        profile: &HandleProfile,
        handle_scale: f32,
    ) -> Vec<HandleEvent>
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
        I: PointerInput + ?Sized,
    {
        let mut events = Vec::new();
        let cursor = input.cursor_position();

        if self.active.is_none() {
            self.refresh_hover(kind, &*target, camera, cursor, profile, handle_scale);

            if !input.primary_pressed_this_frame() {
                return events;
            }
            if let Some(hit) = self.hovered {
                if self.start_drag(kind, &*target, camera, hit.axis, hit.space, cursor, handle_scale) {
                    events.push(HandleEvent::DragStarted {
                        axis: hit.axis,
                        space: hit.space,
                    });
                    // Press and release in the same frame: a click, not a drag
                    if input.primary_released_this_frame() {
                        self.finish(&mut events);
                    }
                }
            }
            return events;
        }

        let released = input.primary_released_this_frame();
        if !released && !input.primary_held() {
            tracing::debug!("Primary button up without a release edge, ending drag");
            self.finish(&mut events);
            return events;
        }

        if self.update_drag(target, camera, cursor) {
            events.push(HandleEvent::TransformModified);
        }
        if released {
            self.finish(&mut events);
        }
        events
    }

    /// Start a drag directly. An active drag is ended first.
    #[allow(clippy::too_many_arguments)]
    pub fn start_drag<T, C>(
        &mut self,
        kind: HandleKind,
        target: &T,
        camera: &C,
        axis: HandleAxis,
        space: HandleSpace,
        cursor: Vec2,
        handle_scale: f32,
    ) -> bool
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        self.end_drag();
        let start = DragStart {
            axis,
            space,
            cursor,
            handle_scale,
        };
        if !self.drags.start(kind, target, camera, start) {
            return false;
        }
        self.active = Some(ActiveDrag { kind, axis, space });
        true
    }

    /// Forward the cursor to the active drag; `false` when idle
    pub fn update_drag<T, C>(&mut self, target: &mut T, camera: &C, cursor: Vec2) -> bool
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        match self.active {
            Some(drag) => self.drags.update(drag.kind, target, camera, cursor),
            None => false,
        }
    }

    /// End the active drag, returning its axis
    pub fn end_drag(&mut self) -> Option<HandleAxis> {
        let drag = self.active.take()?;
        self.drags.end(drag.kind);
        Some(drag.axis)
    }

    fn finish(&mut self, events: &mut Vec<HandleEvent>) {
        if let Some(axis) = self.end_drag() {
            events.push(HandleEvent::DragEnded { axis });
        }
    }

    /// End any drag and forget the hover result
    pub fn reset(&mut self) -> Option<HandleAxis> {
        let ended = self.end_drag();
        self.drags.end_all();
        self.clear_hover();
        ended
    }

    pub fn clear_hover(&mut self) {
        if self.hovered.take().is_some() {
            tracing::trace!("Hover cleared");
        }
    }

    fn refresh_hover<T, C>(
        &mut self,
        kind: HandleKind,
        target: &T,
        camera: &C,
        cursor: Vec2,
        profile: &HandleProfile,
        handle_scale: f32,
    ) where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
    {
        let hit = self
            .detector
            .detect(kind, target, camera, cursor, profile, handle_scale);
        let before = self.hovered.map(|h| (h.axis, h.space));
        let after = hit.map(|h| (h.axis, h.space));
        if before != after {
            tracing::trace!("Hover {:?} -> {:?}", before, after);
        }
        self.hovered = hit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PerspectiveCamera;
    use crate::input::PointerState;
    use crate::transform::Transform;
    use glam::Vec3;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, 800.0, 600.0)
    }

    fn global() -> HandleProfile {
        HandleProfile::single_space(HandleSpace::Global)
    }

    fn frame(
        coordinator: &mut InteractionCoordinator,
        kind: HandleKind,
        target: &mut Transform,
        input: PointerState,
    ) -> Vec<HandleEvent> {
        coordinator.update(kind, target, &camera(), &input, &global(), 1.0)
    }

    #[test]
    fn test_full_translation_drag_cycle() {
        let mut coordinator = InteractionCoordinator::default();
        let mut target = Transform::default();
        let on_x = camera().world_to_screen(Vec3::new(0.9, 0.0, 0.0)).position;
        let kind = HandleKind::Translation;

        assert!(frame(&mut coordinator, kind, &mut target, PointerState::at(on_x)).is_empty());
        assert_eq!(coordinator.hovered_axis(), HandleAxis::X);

        let events = frame(&mut coordinator, kind, &mut target, PointerState::press(on_x));
        assert_eq!(
            events,
            vec![HandleEvent::DragStarted {
                axis: HandleAxis::X,
                space: HandleSpace::Global
            }]
        );
        assert!(coordinator.is_dragging());
        assert_eq!(coordinator.dragged_axis(), HandleAxis::X);

        let moved = on_x + Vec2::new(50.0, 30.0);
        let events = frame(&mut coordinator, kind, &mut target, PointerState::hold(moved));
        assert_eq!(events, vec![HandleEvent::TransformModified]);
        assert!(target.position.x > 0.5);
        assert_eq!(target.position.y, 0.0);

        let events = frame(&mut coordinator, kind, &mut target, PointerState::release(moved));
        assert_eq!(
            events,
            vec![
                HandleEvent::TransformModified,
                HandleEvent::DragEnded { axis: HandleAxis::X }
            ]
        );
        assert!(!coordinator.is_dragging());
        assert_eq!(coordinator.dragged_axis(), HandleAxis::None);
    }

    #[test]
    fn test_press_off_handle_does_nothing() {
        let mut coordinator = InteractionCoordinator::default();
        let mut target = Transform::default();
        let events = frame(
            &mut coordinator,
            HandleKind::Rotation,
            &mut target,
            PointerState::press(Vec2::new(10.0, 10.0)),
        );
        assert!(events.is_empty());
        assert!(!coordinator.is_dragging());
        assert_eq!(coordinator.hovered_axis(), HandleAxis::None);
    }

    #[test]
    fn test_hover_frozen_while_dragging() {
        let mut coordinator = InteractionCoordinator::default();
        let mut target = Transform::default();
        let on_x = camera().world_to_screen(Vec3::new(0.9, 0.0, 0.0)).position;
        let kind = HandleKind::Translation;

        frame(&mut coordinator, kind, &mut target, PointerState::press(on_x));
        frame(
            &mut coordinator,
            kind,
            &mut target,
            PointerState::hold(Vec2::new(5.0, 5.0)),
        );
        assert_eq!(coordinator.hovered_axis(), HandleAxis::X);
        assert_eq!(
            coordinator.highlighted(),
            Some((HandleAxis::X, HandleSpace::Global))
        );
    }

    #[test]
    fn test_start_while_dragging_replaces_session() {
        let mut coordinator = InteractionCoordinator::default();
        let target = Transform::default();
        let cursor = Vec2::new(400.0, 300.0);

        assert!(coordinator.start_drag(
            HandleKind::Translation,
            &target,
            &camera(),
            HandleAxis::X,
            HandleSpace::Global,
            cursor,
            1.0
        ));
        assert!(coordinator.start_drag(
            HandleKind::Scale,
            &target,
            &camera(),
            HandleAxis::Free,
            HandleSpace::Local,
            cursor,
            1.0
        ));
        assert_eq!(coordinator.dragged_axis(), HandleAxis::Free);
        assert_eq!(coordinator.dragged_space(), Some(HandleSpace::Local));

        // Only the scale session is alive: ending once returns to idle
        assert_eq!(coordinator.end_drag(), Some(HandleAxis::Free));
        assert_eq!(coordinator.end_drag(), None);
    }

    #[test]
    fn test_update_drag_when_idle_is_noop() {
        let mut coordinator = InteractionCoordinator::default();
        let mut target = Transform::from_position(Vec3::ONE);
        assert!(!coordinator.update_drag(&mut target, &camera(), Vec2::new(1.0, 2.0)));
        assert_eq!(target.position, Vec3::ONE);
    }

    #[test]
    fn test_click_in_one_frame_does_not_leave_drag_running() {
        let mut coordinator = InteractionCoordinator::default();
        let mut target = Transform::default();
        let on_x = camera().world_to_screen(Vec3::new(0.9, 0.0, 0.0)).position;
        let kind = HandleKind::Translation;

        frame(&mut coordinator, kind, &mut target, PointerState::at(on_x));
        let click = PointerState {
            primary_released: true,
            ..PointerState::press(on_x)
        };
        let events = frame(&mut coordinator, kind, &mut target, click);
        assert_eq!(
            events,
            vec![
                HandleEvent::DragStarted {
                    axis: HandleAxis::X,
                    space: HandleSpace::Global
                },
                HandleEvent::DragEnded { axis: HandleAxis::X }
            ]
        );
        assert!(!coordinator.is_dragging());

        let events = frame(
            &mut coordinator,
            kind,
            &mut target,
            PointerState::at(on_x + Vec2::new(100.0, 0.0)),
        );
        assert!(events.is_empty());
        assert_eq!(target.position, Vec3::ZERO);
    }

    #[test]
    fn test_missed_release_ends_drag_without_moving() {
        let mut coordinator = InteractionCoordinator::default();
        let mut target = Transform::default();
        let on_x = camera().world_to_screen(Vec3::new(0.9, 0.0, 0.0)).position;
        let kind = HandleKind::Translation;

        frame(&mut coordinator, kind, &mut target, PointerState::press(on_x));
        assert!(coordinator.is_dragging());

        // Button is up but no release edge was ever reported
        let events = frame(
            &mut coordinator,
            kind,
            &mut target,
            PointerState::at(on_x + Vec2::new(100.0, 0.0)),
        );
        assert_eq!(events, vec![HandleEvent::DragEnded { axis: HandleAxis::X }]);
        assert!(!coordinator.is_dragging());
        assert_eq!(target.position, Vec3::ZERO);
    }

    #[test]
    fn test_reset_ends_drag_and_clears_hover() {
        let mut coordinator = InteractionCoordinator::default();
        let mut target = Transform::default();
        let on_x = camera().world_to_screen(Vec3::new(0.9, 0.0, 0.0)).position;

        frame(
            &mut coordinator,
            HandleKind::Translation,
            &mut target,
            PointerState::press(on_x),
        );
        assert_eq!(coordinator.reset(), Some(HandleAxis::X));
        assert!(!coordinator.is_dragging());
        assert_eq!(coordinator.hovered(), None);
    }
}
