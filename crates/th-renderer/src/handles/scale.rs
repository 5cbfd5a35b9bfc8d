//! Scale handle: axis lines ending in boxes, plus the uniform center box

use glam::Vec3;
use th_core::constants::{colors, handle};
use th_core::resolver::{axis_color, axis_direction};
use th_core::{HandleAxis, HandleKind, HandleSpace, HandleTarget, ViewCamera};

use super::HandleFrame;
use crate::batch::BatchedDrawCollector;
use crate::constants::{alpha, geometry};
use crate::vertex::{shaded, with_alpha};

pub(super) fn collect<T, C>(frame: &HandleFrame<'_, T, C>, collector: &mut BatchedDrawCollector)
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    for (axis, space) in frame.profile.enabled_axes(HandleKind::Scale) {
        if axis.is_principal() {
            collect_axis(frame, axis, space, collector);
        }
    }

    if frame
        .profile
        .is_axis_enabled(HandleKind::Scale, HandleAxis::Free, HandleSpace::Local)
    {
        collect_center(frame, collector);
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

    let mut size = frame.handle_scale * handle::SCALE_BOX_SIZE;
    if active {
        size *= geometry::HOVERED_BOX_GROWTH;
    }

    collector.add_thick_line(frame.camera, frame.origin, end, color, frame.thickness(active));
    collector.add_box(end, direction, size, color);
}

fn collect_center<T, C>(frame: &HandleFrame<'_, T, C>, collector: &mut BatchedDrawCollector)
where
    T: HandleTarget + ?Sized,
    C: ViewCamera + ?Sized,
{
    let active = frame.is_active(HandleAxis::Free, HandleSpace::Local);
    let color = with_alpha(colors::NEUTRAL, frame.alpha(active));
    let size = frame.handle_scale * handle::CENTER_BOX_SIZE;
    let facing = frame.to_camera();

    collector.add_box(frame.origin, facing, size, color);

    let reach = size * 2.0;
    let cross = shaded(color, alpha::CENTER_BOX_CROSS_SHADE);
    for direction in [Vec3::X, Vec3::Y, Vec3::Z] {
        collector.add_line(
            frame.origin - direction * reach,
            frame.origin + direction * reach,
            cross,
        );
    }
}
