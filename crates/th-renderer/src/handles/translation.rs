//! Translation handle: arrows, plane quads and a center cross

use glam::Vec3;
use th_core::constants::{colors, handle};
use th_core::resolver::{axis_color, axis_direction, plane_axes, plane_corners};
use th_core::{HandleAxis, HandleKind, HandleSpace, HandleTarget, ViewCamera};

use super::HandleFrame;
use crate::batch::BatchedDrawCollector;
use crate::constants::alpha;
use crate::vertex::with_alpha;

pub(super) fn collect<T, C>(frame: &HandleFrame<'_, T, C>, collector: &mut BatchedDrawCollector)
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    // Planes first so the translucent quads sit under the axis lines
    let enabled: Vec<_> = frame.profile.enabled_axes(HandleKind::Translation).collect();
    for &(axis, space) in enabled.iter().filter(|(axis, _)| axis.is_plane()) {
        collect_plane(frame, axis, space, collector);
    }
    for &(axis, space) in enabled.iter().filter(|(axis, _)| axis.is_principal()) {
        collect_axis(frame, axis, space, collector);
    }

    let size = frame.handle_scale * handle::CENTER_CROSS_SIZE;
    let color = with_alpha(colors::NEUTRAL, alpha::CENTER_CROSS);
    for direction in [Vec3::X, Vec3::Y, Vec3::Z] {
        collector.add_line(
            frame.origin + direction * size,
            frame.origin - direction * size,
            color,
        );
    }
}

fn collect_axis<T, C>(
    frame: &HandleFrame<'_, T, C>,
    axis: HandleAxis,
    space: HandleSpace,
    collector: &mut BatchedDrawCollector,
) where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let Some(direction) = axis_direction(frame.target, axis, space) else {
        return;
    };
    let active = frame.is_active(axis, space);
    let color = with_alpha(axis_color(axis), frame.alpha(active));
    let end = frame.origin + direction * frame.handle_scale;

    collector.add_thick_line(frame.camera, frame.origin, end, color, frame.thickness(active));
    collector.add_arrow_head(end, direction, color, frame.handle_scale * handle::ARROW_HEAD_SIZE);
}

fn collect_plane<T, C>(
    frame: &HandleFrame<'_, T, C>,
    plane: HandleAxis,
    space: HandleSpace,
    collector: &mut BatchedDrawCollector,
) where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let Some((axis1, axis2)) = plane_axes(frame.target, plane, space) else {
        return;
    };
    let size = frame.handle_scale * handle::PLANE_SIZE_MULTIPLIER;
    let corners = plane_corners(frame.origin, axis1, axis2, size, frame.camera.forward());

    let fill_alpha = if frame.is_active(plane, space) {
        alpha::PLANE_FILL_ACTIVE
    } else {
        alpha::PLANE_FILL
    };
    let color = axis_color(plane);
    let outline = with_alpha(color, fill_alpha * 2.0);

    let [a, b, c, d] = corners;
    collector.add_quad(a, b, c, d, with_alpha(color, fill_alpha));
    for i in 0..4 {
        collector.add_line(corners[i], corners[(i + 1) % 4], outline);
    }
}
