//! Manipulated transform
//!
//! The host owns the node being manipulated. Handles only need to read and
//! write its position, rotation and local scale, so they work against the
//! [`HandleTarget`] trait and never keep a reference past a single call.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A mutable transform node driven by the handles
pub trait HandleTarget {
    /// World-space position
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    /// World-space orientation (unit quaternion)
    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);

    /// Scale relative to the parent
    fn local_scale(&self) -> Vec3;
    fn set_local_scale(&mut self, scale: Vec3);

    /// Local +X in world space
    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Local +Y in world space
    fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Local +Z in world space
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }
}

/// Plain position/rotation/scale transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Builder-style rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder-style scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Model matrix (scale, then rotation, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl HandleTarget for Transform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn local_scale(&self) -> Vec3 {
        self.scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}
