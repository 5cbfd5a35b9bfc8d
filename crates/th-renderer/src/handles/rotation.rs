//! Rotation handle: axis circles and the camera-facing free ring
//!
//! Axis circles hide the half that faces away from the camera and fade out
//! towards the horizon. A circle whose plane is seen nearly face-on from the
//! camera axis is skipped entirely.

use std::f32::consts::TAU;

use th_core::constants::{colors, hover};
use th_core::hover::circle_normal_and_radius;
use th_core::resolver::{axis_color, circle_basis};
use th_core::{HandleAxis, HandleKind, HandleSpace, HandleTarget, ViewCamera};

use super::HandleFrame;
use crate::batch::BatchedDrawCollector;
use crate::constants::{alpha, geometry, thickness};
use crate::vertex::with_alpha;

pub(super) fn collect<T, C>(frame: &HandleFrame<'_, T, C>, collector: &mut BatchedDrawCollector)
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    for (axis, space) in frame.profile.enabled_axes(HandleKind::Rotation) {
        if axis.is_principal() {
            collect_circle(frame, axis, space, collector);
        }
    }

    if frame
        .profile
        .is_axis_enabled(HandleKind::Rotation, HandleAxis::Free, HandleSpace::Local)
    {
        collect_free_ring(frame, collector);
    }
}

fn collect_circle<T, C>(
    frame: &HandleFrame<'_, T, C>,
    axis: HandleAxis,
    space: HandleSpace,
    collector: &mut BatchedDrawCollector,
) where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let Some((normal, radius)) =
        circle_normal_and_radius(frame.target, frame.camera, axis, space, frame.handle_scale)
    else {
        return;
    };
    let to_camera = frame.to_camera();
    if normal.dot(to_camera).abs() > geometry::EDGE_ON_CUTOFF {
        return;
    }

    let active = frame.is_active(axis, space);
    let color = with_alpha(axis_color(axis), frame.alpha(active));
    let width = frame.thickness(active);
    let (t1, t2) = circle_basis(normal);
    let segments = geometry::CIRCLE_SEGMENTS;
    let point = |angle: f32| frame.origin + (t1 * angle.cos() + t2 * angle.sin()) * radius;

    for i in 0..segments {
        let a = i as f32 / segments as f32 * TAU;
        let b = (i + 1) as f32 / segments as f32 * TAU;
        let mid = (a + b) * 0.5;
        let facing = (t1 * mid.cos() + t2 * mid.sin()).dot(to_camera);
        if facing < hover::BACK_FACE_CUTOFF {
            continue;
        }

        let fade = ((facing - hover::BACK_FACE_CUTOFF) / geometry::HORIZON_FADE).clamp(0.0, 1.0);
        let segment_color = with_alpha(color, color[3] * fade);
        collector.add_thick_line(frame.camera, point(a), point(b), segment_color, width);
    }
}

fn collect_free_ring<T, C>(frame: &HandleFrame<'_, T, C>, collector: &mut BatchedDrawCollector)
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let Some((normal, radius)) = circle_normal_and_radius(
        frame.target,
        frame.camera,
        HandleAxis::Free,
        HandleSpace::Local,
        frame.handle_scale,
    ) else {
        return;
    };

    let active = frame.is_active(HandleAxis::Free, HandleSpace::Local);
    let ring_alpha = if active { alpha::ACTIVE } else { alpha::FREE_RING };
    collector.add_circle(
        frame.camera,
        frame.origin,
        normal,
        radius,
        with_alpha(colors::NEUTRAL, ring_alpha),
        geometry::CIRCLE_SEGMENTS,
        thickness::FREE_RING,
    );
}
