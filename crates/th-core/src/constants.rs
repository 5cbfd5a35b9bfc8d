//! Interaction constants
//!
//! This module centralizes the pixel thresholds, handle proportions and
//! numerical guards shared by hover detection, dragging and rendering.

/// Hover detection constants
pub mod hover {
    /// Pick distance for translation axes and planes (pixels)
    pub const TRANSLATION_THRESHOLD: f32 = 10.0;
    /// Pick distance for rotation circles (pixels)
    pub const ROTATION_THRESHOLD: f32 = 15.0;
    /// Pick distance for scale boxes (pixels)
    pub const SCALE_THRESHOLD: f32 = 20.0;
    /// Number of samples taken around a rotation circle
    pub const CIRCLE_SEGMENTS: usize = 64;
    /// Circle samples whose radial direction dots the to-camera vector below
    /// this value are treated as the hidden back half
    pub const BACK_FACE_CUTOFF: f32 = -0.1;
}

/// Handle proportions, relative to the handle scale
pub mod handle {
    /// Plane handle edge length
    pub const PLANE_SIZE_MULTIPLIER: f32 = 0.3;
    /// Free rotation ring radius
    pub const FREE_ROTATION_SCALE: f32 = 1.2;
    /// Scale box edge length
    pub const SCALE_BOX_SIZE: f32 = 0.09;
    /// Uniform scale center box edge length
    pub const CENTER_BOX_SIZE: f32 = SCALE_BOX_SIZE * 1.5;
    /// Translation center cross half-length
    pub const CENTER_CROSS_SIZE: f32 = 0.1;
    /// Arrow head length
    pub const ARROW_HEAD_SIZE: f32 = 0.2;
}

/// Drag constants
pub mod drag {
    /// Angle of one rotation step (degrees)
    pub const ROTATION_INCREMENT_DEGREES: f32 = 15.0;
    /// Cursor travel along the circle tangent that produces one rotation step
    pub const PIXELS_PER_INCREMENT: f32 = 30.0;
    /// Angular samples used to locate the clicked point on a rotation circle
    pub const TANGENT_SAMPLES: usize = 36;
    /// Scale change per pixel of cursor travel
    pub const SCALE_SENSITIVITY: f32 = 0.01;
}

/// Numerical guards
pub mod epsilon {
    /// Screen segments shorter than this are treated as points (pixels)
    pub const SEGMENT_LENGTH: f32 = 0.001;
    /// Cross products with a squared length below this are degenerate
    pub const PERPENDICULAR_SQ: f32 = 0.1;
    /// Quaternion half-angles below this use the linear power fallback
    pub const QUAT_POW_ANGLE: f32 = 1.0e-4;
    /// Screen-space directions shorter than this are degenerate (pixels)
    pub const SCREEN_DIRECTION: f32 = 1.0e-4;
    /// Ray/plane denominators below this are treated as parallel
    pub const RAY_PLANE: f32 = 1.0e-6;
}

/// Handle colors (RGBA)
pub mod colors {
    /// X-axis color (red)
    pub const X_AXIS: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
    /// Y-axis color (green)
    pub const Y_AXIS: [f32; 4] = [0.2, 1.0, 0.2, 1.0];
    /// Z-axis color (blue)
    pub const Z_AXIS: [f32; 4] = [0.2, 0.2, 1.0, 1.0];
    /// Free rotation ring, uniform scale box and center cross
    pub const NEUTRAL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
