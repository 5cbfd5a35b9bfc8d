//! Handle profiles
//!
//! A profile says which sub-handles exist for each handle kind and in which
//! space. Hosts attach a profile to customize a target; without one the
//! manager derives a single-space profile from its current kind and space.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{from_ron_str, load_ron, save_ron, to_ron_string};
use crate::error::ConfigResult;
use crate::types::{HandleAxis, HandleKind, HandleSpace};

/// Per-axis switches of one handle kind in one space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisToggles {
    pub x: bool,
    pub y: bool,
    pub z: bool,
    pub xy: bool,
    pub xz: bool,
    pub yz: bool,
    /// Free rotation ring or uniform scale box
    pub free: bool,
}

impl AxisToggles {
    /// Everything off
    pub const NONE: Self = Self {
        x: false,
        y: false,
        z: false,
        xy: false,
        xz: false,
        yz: false,
        free: false,
    };

    /// X, Y and Z on
    pub const PRINCIPAL: Self = Self {
        x: true,
        y: true,
        z: true,
        ..Self::NONE
    };

    pub fn get(&self, axis: HandleAxis) -> bool {
        match axis {
            HandleAxis::None => false,
            HandleAxis::X => self.x,
            HandleAxis::Y => self.y,
            HandleAxis::Z => self.z,
            HandleAxis::Free => self.free,
            HandleAxis::PlaneXY => self.xy,
            HandleAxis::PlaneXZ => self.xz,
            HandleAxis::PlaneYZ => self.yz,
        }
    }

    pub fn set(&mut self, axis: HandleAxis, enabled: bool) {
        match axis {
            HandleAxis::None => {}
            HandleAxis::X => self.x = enabled,
            HandleAxis::Y => self.y = enabled,
            HandleAxis::Z => self.z = enabled,
            HandleAxis::Free => self.free = enabled,
            HandleAxis::PlaneXY => self.xy = enabled,
            HandleAxis::PlaneXZ => self.xz = enabled,
            HandleAxis::PlaneYZ => self.yz = enabled,
        }
    }

    /// Builder-style: also enable the three planes
    pub fn with_planes(mut self) -> Self {
        self.xy = true;
        self.xz = true;
        self.yz = true;
        self
    }

    /// Builder-style: also enable the free handle
    pub fn with_free(mut self) -> Self {
        self.free = true;
        self
    }
}

/// Local and global switches of one handle kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KindToggles {
    pub local: AxisToggles,
    pub global: AxisToggles,
}

impl KindToggles {
    pub fn space(&self, space: HandleSpace) -> &AxisToggles {
        match space {
            HandleSpace::Local => &self.local,
            HandleSpace::Global => &self.global,
        }
    }

    pub fn space_mut(&mut self, space: HandleSpace) -> &mut AxisToggles {
        match space {
            HandleSpace::Local => &mut self.local,
            HandleSpace::Global => &mut self.global,
        }
    }

    fn only(space: HandleSpace, toggles: AxisToggles) -> Self {
        let mut kind = Self::default();
        *kind.space_mut(space) = toggles;
        kind
    }
}

/// Which sub-handles are shown and pickable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleProfile {
    pub name: String,
    pub translation: KindToggles,
    pub rotation: KindToggles,
    pub scale: KindToggles,
}

impl Default for HandleProfile {
    fn default() -> Self {
        Self {
            name: "Default Handle Profile".to_string(),
            translation: KindToggles {
                local: AxisToggles::PRINCIPAL.with_planes(),
                global: AxisToggles::NONE,
            },
            rotation: KindToggles {
                local: AxisToggles {
                    x: true,
                    z: true,
                    free: true,
                    ..AxisToggles::NONE
                },
                global: AxisToggles {
                    y: true,
                    ..AxisToggles::NONE
                },
            },
            scale: KindToggles {
                local: AxisToggles::PRINCIPAL.with_free(),
                global: AxisToggles::NONE,
            },
        }
    }
}

impl HandleProfile {
    /// Profile with every handle of every kind in one space.
    ///
    /// Scale handles are always object-local, so the scale toggles ignore
    /// `space`.
    pub fn single_space(space: HandleSpace) -> Self {
        Self {
            name: format!("{space:?}"),
            translation: KindToggles::only(space, AxisToggles::PRINCIPAL.with_planes()),
            rotation: KindToggles::only(space, AxisToggles::PRINCIPAL.with_free()),
            scale: KindToggles::only(HandleSpace::Local, AxisToggles::PRINCIPAL.with_free()),
        }
    }

    pub fn toggles(&self, kind: HandleKind) -> &KindToggles {
        match kind {
            HandleKind::Translation => &self.translation,
            HandleKind::Rotation => &self.rotation,
            HandleKind::Scale => &self.scale,
        }
    }

    pub fn toggles_mut(&mut self, kind: HandleKind) -> &mut KindToggles {
        match kind {
            HandleKind::Translation => &mut self.translation,
            HandleKind::Rotation => &mut self.rotation,
            HandleKind::Scale => &mut self.scale,
        }
    }

    /// Whether `axis` of `kind` exists in `space`.
    ///
    /// Axes that a kind does not have are never enabled. The free handle has
    /// no space of its own and is enabled if either space enables it. Scale
    /// writes local components, so its axis handles exist in Local only.
    pub fn is_axis_enabled(&self, kind: HandleKind, axis: HandleAxis, space: HandleSpace) -> bool {
        if !axis.is_valid_for(kind) {
            return false;
        }
        let toggles = self.toggles(kind);
        if axis == HandleAxis::Free {
            return toggles.local.free || toggles.global.free;
        }
        if kind == HandleKind::Scale && space == HandleSpace::Global {
            return false;
        }
        toggles.space(space).get(axis)
    }

    /// Whether `kind` has anything to show
    pub fn has_any_axis_enabled(&self, kind: HandleKind) -> bool {
        self.enabled_axes(kind).next().is_some()
    }

    /// Every enabled (axis, space) pair of `kind`, Local before Global.
    ///
    /// The free handle is listed once, under Local.
    pub fn enabled_axes(
        &self,
        kind: HandleKind,
    ) -> impl Iterator<Item = (HandleAxis, HandleSpace)> + '_ {
        HandleSpace::ALL.into_iter().flat_map(move |space| {
            (0..=6)
                .map(HandleAxis::from_index)
                .filter(move |&axis| axis != HandleAxis::Free || space == HandleSpace::Local)
                .filter(move |&axis| self.is_axis_enabled(kind, axis, space))
                .map(move |axis| (axis, space))
        })
    }

    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        from_ron_str(content)
    }

    pub fn to_ron_string(&self) -> ConfigResult<String> {
        to_ron_string(self)
    }

    /// Load a profile from a file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        load_ron(path)
    }

    /// Save the profile to a file
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        save_ron(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_default_profile_matches_stock_layout() {
        let profile = HandleProfile::default();
        assert!(profile.is_axis_enabled(HandleKind::Translation, HandleAxis::X, HandleSpace::Local));
        assert!(profile.is_axis_enabled(
            HandleKind::Translation,
            HandleAxis::PlaneXZ,
            HandleSpace::Local
        ));
        assert!(!profile.is_axis_enabled(
            HandleKind::Translation,
            HandleAxis::X,
            HandleSpace::Global
        ));
        assert!(!profile.is_axis_enabled(HandleKind::Rotation, HandleAxis::Y, HandleSpace::Local));
        assert!(profile.is_axis_enabled(HandleKind::Rotation, HandleAxis::Y, HandleSpace::Global));
        assert!(profile.is_axis_enabled(HandleKind::Scale, HandleAxis::Free, HandleSpace::Global));
    }

    #[test]
    fn test_invalid_axes_never_enabled() {
        let mut profile = HandleProfile::default();
        profile.translation.local.free = true;
        profile.scale.local.xy = true;
        assert!(!profile.is_axis_enabled(
            HandleKind::Translation,
            HandleAxis::Free,
            HandleSpace::Local
        ));
        assert!(!profile.is_axis_enabled(HandleKind::Scale, HandleAxis::PlaneXY, HandleSpace::Local));
        assert!(!profile.is_axis_enabled(HandleKind::Scale, HandleAxis::None, HandleSpace::Local));
    }

    #[test]
    fn test_single_space_scale_is_local() {
        let profile = HandleProfile::single_space(HandleSpace::Global);
        assert!(profile.is_axis_enabled(
            HandleKind::Translation,
            HandleAxis::Z,
            HandleSpace::Global
        ));
        assert!(!profile.is_axis_enabled(
            HandleKind::Translation,
            HandleAxis::Z,
            HandleSpace::Local
        ));
        assert!(profile.is_axis_enabled(HandleKind::Scale, HandleAxis::X, HandleSpace::Local));
        assert!(!profile.is_axis_enabled(HandleKind::Scale, HandleAxis::X, HandleSpace::Global));
    }

    #[test]
    fn test_enabled_axes_lists_local_first() {
        let profile = HandleProfile::default();
        let rotation: Vec<_> = profile.enabled_axes(HandleKind::Rotation).collect();
        assert_eq!(rotation.first(), Some(&(HandleAxis::X, HandleSpace::Local)));
        assert!(rotation.contains(&(HandleAxis::Y, HandleSpace::Global)));
        assert!(rotation.contains(&(HandleAxis::Free, HandleSpace::Local)));
    }

    #[test]
    fn test_free_handle_listed_once() {
        let mut profile = HandleProfile::single_space(HandleSpace::Global);
        profile.rotation.local.free = true;
        let free: Vec<_> = profile
            .enabled_axes(HandleKind::Rotation)
            .filter(|(axis, _)| *axis == HandleAxis::Free)
            .collect();
        assert_eq!(free, vec![(HandleAxis::Free, HandleSpace::Local)]);

        // Enabled only under Global still shows up under Local
        let profile = HandleProfile::single_space(HandleSpace::Global);
        assert!(
            profile
                .enabled_axes(HandleKind::Rotation)
                .any(|entry| entry == (HandleAxis::Free, HandleSpace::Local))
        );
    }

    #[test]
    fn test_global_scale_toggles_are_ignored() {
        let mut profile = HandleProfile::default();
        profile.scale.global = AxisToggles::PRINCIPAL;
        assert!(!profile.is_axis_enabled(HandleKind::Scale, HandleAxis::X, HandleSpace::Global));
        assert!(
            profile
                .enabled_axes(HandleKind::Scale)
                .all(|(_, space)| space == HandleSpace::Local)
        );
    }

    #[test]
    fn test_has_any_axis_enabled() {
        let mut profile = HandleProfile::default();
        assert!(profile.has_any_axis_enabled(HandleKind::Scale));
        *profile.toggles_mut(HandleKind::Scale) = KindToggles::default();
        assert!(!profile.has_any_axis_enabled(HandleKind::Scale));
    }

    #[test]
    fn test_partial_ron_defaults_missing_fields() {
        let profile = HandleProfile::from_ron_str(
            "(name: \"Lift only\", translation: (global: (y: true)))",
        )
        .unwrap();
        assert_eq!(profile.name, "Lift only");
        assert!(profile.is_axis_enabled(
            HandleKind::Translation,
            HandleAxis::Y,
            HandleSpace::Global
        ));
        assert!(!profile.is_axis_enabled(
            HandleKind::Translation,
            HandleAxis::X,
            HandleSpace::Global
        ));
    }

    #[test]
    fn test_profile_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.ron");

        let mut profile = HandleProfile::single_space(HandleSpace::Global);
        profile.rotation.global.set(HandleAxis::X, false);
        profile.save(&path).unwrap();

        assert_eq!(HandleProfile::load(&path).unwrap(), profile);
    }

    #[test]
    fn test_malformed_profile() {
        assert!(matches!(
            HandleProfile::from_ron_str("(translation: 5)"),
            Err(ConfigError::Deserialize(_))
        ));
    }
}
