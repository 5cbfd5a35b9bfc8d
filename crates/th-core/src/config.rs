//! Handle settings
//!
//! Sizing, pick thresholds and drag sensitivities. Settings are plain serde
//! structs stored as RON, the same way profiles and shortcut maps are.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::camera::ViewCamera;
use crate::constants::{drag, hover};
use crate::error::{ConfigError, ConfigResult};

/// Tunable handle behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HandleSettings {
    /// Overall handle size multiplier
    pub handle_size: f32,
    /// Keep handles the same size on screen regardless of distance
    pub maintain_constant_screen_size: bool,
    /// Fraction of the camera distance used as the handle length
    pub screen_size_multiplier: f32,
    /// Pick distance for translation axes and planes (pixels)
    pub translation_threshold_px: f32,
    /// Pick distance for rotation circles (pixels)
    pub rotation_threshold_px: f32,
    /// Pick distance for scale boxes (pixels)
    pub scale_threshold_px: f32,
    /// Cursor travel along the circle tangent for one rotation step (pixels)
    pub rotation_pixels_per_increment: f32,
    /// Angle of one rotation step (degrees)
    pub rotation_increment_degrees: f32,
    /// Scale change per pixel
    pub scale_sensitivity: f32,
    /// Lower bound applied to every scale component while dragging.
    /// `None` lets a drag pass through zero and invert the object.
    pub min_scale: Option<f32>,
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            handle_size: 1.0,
            maintain_constant_screen_size: true,
            screen_size_multiplier: 0.1,
            translation_threshold_px: hover::TRANSLATION_THRESHOLD,
            rotation_threshold_px: hover::ROTATION_THRESHOLD,
            scale_threshold_px: hover::SCALE_THRESHOLD,
            rotation_pixels_per_increment: drag::PIXELS_PER_INCREMENT,
            rotation_increment_degrees: drag::ROTATION_INCREMENT_DEGREES,
            scale_sensitivity: drag::SCALE_SENSITIVITY,
            min_scale: None,
        }
    }
}

impl HandleSettings {
    /// World-space length of a handle drawn at `target_position`
    pub fn handle_scale<C: ViewCamera + ?Sized>(&self, camera: &C, target_position: Vec3) -> f32 {
        if self.maintain_constant_screen_size {
            let distance = camera.position().distance(target_position);
            distance * self.screen_size_multiplier * self.handle_size
        } else {
            self.handle_size
        }
    }

    /// Reject non-positive sizes, thresholds and increments
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("handle_size", self.handle_size),
            ("screen_size_multiplier", self.screen_size_multiplier),
            ("translation_threshold_px", self.translation_threshold_px),
            ("rotation_threshold_px", self.rotation_threshold_px),
            ("scale_threshold_px", self.scale_threshold_px),
            (
                "rotation_pixels_per_increment",
                self.rotation_pixels_per_increment,
            ),
            ("rotation_increment_degrees", self.rotation_increment_degrees),
            ("scale_sensitivity", self.scale_sensitivity),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }

        match self.min_scale {
            Some(min) if !min.is_finite() => Err(ConfigError::Invalid {
                field: "min_scale",
                reason: format!("must be finite, got {min}"),
            }),
            _ => Ok(()),
        }
    }

    /// Parse and validate settings from RON text
    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        let settings: Self = from_ron_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to pretty RON text
    pub fn to_ron_string(&self) -> ConfigResult<String> {
        to_ron_string(self)
    }

    /// Load and validate settings from a file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let settings: Self = load_ron(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        save_ron(self, path)
    }
}

pub(crate) fn from_ron_str<T: DeserializeOwned>(content: &str) -> ConfigResult<T> {
    ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
}

pub(crate) fn to_ron_string<T: Serialize>(value: &T) -> ConfigResult<String> {
    ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
        .map_err(|e| ConfigError::Serialize(e.to_string()))
}

pub(crate) fn load_ron<T: DeserializeOwned>(path: impl AsRef<Path>) -> ConfigResult<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    let value = from_ron_str(&content)?;
    tracing::debug!("Loaded {}", path.display());
    Ok(value)
}

pub(crate) fn save_ron<T: Serialize>(value: &T, path: impl AsRef<Path>) -> ConfigResult<()> {
    let path = path.as_ref();
    let content = to_ron_string(value)?;
    std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
    tracing::debug!("Saved {}", path.display());
    Ok(())
}
