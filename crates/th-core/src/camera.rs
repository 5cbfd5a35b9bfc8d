//! Camera contract and a perspective implementation
//!
//! World space is left-handed with Y up and Z forward. Screen space is in
//! pixels with the origin at the top-left corner and Y pointing down.

use glam::{Mat4, Vec2, Vec3};

use crate::projection::screen_pixels_to_world_units;

/// A point projected to screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Pixel position
    pub position: Vec2,
    /// Distance in front of the camera along its forward axis
    pub depth: f32,
}

impl ScreenPoint {
    /// Points at or behind the camera plane must not be drawn or picked
    pub fn is_visible(&self) -> bool {
        self.depth > 0.0
    }
}

/// A world-space ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Camera the handles are viewed through
pub trait ViewCamera {
    /// Eye position
    fn position(&self) -> Vec3;

    /// Unit view direction
    fn forward(&self) -> Vec3;

    /// Unit screen-right direction in world space
    fn right(&self) -> Vec3;

    /// Unit screen-up direction in world space
    fn up(&self) -> Vec3;

    /// Vertical field of view in degrees
    fn fov_y_degrees(&self) -> f32;

    /// Viewport width and height in pixels
    fn viewport_size(&self) -> Vec2;

    /// Project a world point to pixel coordinates plus depth
    fn world_to_screen(&self, point: Vec3) -> ScreenPoint;

    /// World-space length covered by one pixel at `distance` from the eye
    fn world_units_per_pixel(&self, distance: f32) -> f32 {
        screen_pixels_to_world_units(self.fov_y_degrees(), self.viewport_size().y, distance)
    }

    /// Ray from the eye through a pixel
    fn screen_ray(&self, cursor: Vec2) -> Ray {
        let size = self.viewport_size().max(Vec2::ONE);
        let ndc_x = 2.0 * cursor.x / size.x - 1.0;
        let ndc_y = 1.0 - 2.0 * cursor.y / size.y;

        let tan_half = (self.fov_y_degrees().to_radians() * 0.5).tan();
        let aspect = size.x / size.y;

        let direction = (self.forward()
            + self.right() * (ndc_x * tan_half * aspect)
            + self.up() * (ndc_y * tan_half))
            .normalize();

        Ray {
            origin: self.position(),
            direction,
        }
    }
}

/// Pinhole perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    forward: Vec3,
    up_hint: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub width: f32,
    pub height: f32,
}

impl PerspectiveCamera {
    /// Create a camera at `position` looking at `target`
    pub fn new(position: Vec3, target: Vec3, width: f32, height: f32) -> Self {
        let mut camera = Self {
            position,
            forward: Vec3::Z,
            up_hint: Vec3::Y,
            fov: 60.0_f32.to_radians(),
            near: 0.1,
            far: 10000.0,
            width: width.max(1.0),
            height: height.max(1.0),
        };
        camera.look_at(target);
        camera
    }

    /// Point the camera at `target`
    pub fn look_at(&mut self, target: Vec3) {
        self.look_to(target - self.position);
    }

    /// Point the camera along `direction`
    pub fn look_to(&mut self, direction: Vec3) {
        let forward = direction.try_normalize().unwrap_or(Vec3::Z);
        self.forward = forward;
        // Fall back to Z as the up reference when looking straight up or down
        self.up_hint = if forward.dot(Vec3::Y).abs() > 0.999 {
            Vec3::Z
        } else {
            Vec3::Y
        };
    }

    /// Update the viewport size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Set field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.clamp(10.0, 120.0).to_radians();
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.forward, self.up_hint)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov, self.aspect(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl ViewCamera for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn right(&self) -> Vec3 {
        self.up_hint.cross(self.forward).normalize()
    }

    fn up(&self) -> Vec3 {
        self.forward.cross(self.right())
    }

    fn fov_y_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn world_to_screen(&self, point: Vec3) -> ScreenPoint {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w.abs() <= 1.0e-6 {
            return ScreenPoint {
                position: Vec2::ZERO,
                depth: 0.0,
            };
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        ScreenPoint {
            position: Vec2::new(
                (ndc_x * 0.5 + 0.5) * self.width,
                (0.5 - ndc_y * 0.5) * self.height,
            ),
            depth: clip.w,
        }
    }
}
