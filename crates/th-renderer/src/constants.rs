//! Rendering constants

/// Line widths in pixels
pub mod thickness {
    /// Idle axis lines and circles
    pub const BASE: f32 = 6.0;
    /// Hovered or dragged axis lines and circles
    pub const ACTIVE: f32 = 12.0;
    /// Free rotation ring
    pub const FREE_RING: f32 = BASE * 0.8;
    /// Parallel strokes emitted per pixel of requested thickness
    pub const STROKES_PER_PIXEL: f32 = 0.3;
    /// Spacing of parallel strokes relative to one pixel
    pub const STROKE_SPACING: f32 = 0.2;
}

/// Color alphas
pub mod alpha {
    /// Idle sub-handle
    pub const IDLE: f32 = 0.8;
    /// Hovered or dragged sub-handle
    pub const ACTIVE: f32 = 1.0;
    /// Plane fill, idle
    pub const PLANE_FILL: f32 = 0.1;
    /// Plane fill, hovered or dragged
    pub const PLANE_FILL_ACTIVE: f32 = 0.3;
    /// Free rotation ring
    pub const FREE_RING: f32 = 0.3;
    /// Translation center cross
    pub const CENTER_CROSS: f32 = 0.5;
    /// Multiplier for box edges and arrow head outlines
    pub const OUTLINE_SHADE: f32 = 0.8;
    /// Multiplier for the faint cross through the uniform scale box
    pub const CENTER_BOX_CROSS_SHADE: f32 = 0.5;
}

/// Geometry proportions
pub mod geometry {
    /// Default circle tessellation
    pub const CIRCLE_SEGMENTS: usize = 64;
    /// Arrow head base half-width relative to its length
    pub const ARROW_BASE_RATIO: f32 = 0.4;
    /// Growth of a hovered scale box
    pub const HOVERED_BOX_GROWTH: f32 = 1.3;
    /// Rotation circles whose normal dots the view direction above this
    /// are seen edge-on and skipped
    pub const EDGE_ON_CUTOFF: f32 = 0.98;
    /// Width of the alpha fade at the horizon of a rotation circle
    pub const HORIZON_FADE: f32 = 0.2;
    /// `|forward . Y|` above which a box uses Z as its up hint
    pub const BOX_UP_SWITCH: f32 = 0.9;
}
