//! Handle kinds, spaces and axis identifiers

use serde::{Deserialize, Serialize};

/// Which manipulator is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HandleKind {
    #[default]
    Translation,
    Rotation,
    Scale,
}

impl HandleKind {
    /// All kinds, in display order
    pub const ALL: [HandleKind; 3] = [
        HandleKind::Translation,
        HandleKind::Rotation,
        HandleKind::Scale,
    ];
}

/// Axis space of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HandleSpace {
    /// Axes follow the target's orientation
    #[default]
    Local,
    /// Axes are the fixed world basis
    Global,
}

impl HandleSpace {
    /// Both spaces, Local first so that it wins exact ties
    pub const ALL: [HandleSpace; 2] = [HandleSpace::Local, HandleSpace::Global];

    /// The other space
    pub fn toggled(self) -> Self {
        match self {
            HandleSpace::Local => HandleSpace::Global,
            HandleSpace::Global => HandleSpace::Local,
        }
    }
}

/// Which sub-handle is hovered or manipulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HandleAxis {
    #[default]
    None,
    X,
    Y,
    Z,
    /// Free rotation ring (rotation) or uniform scale box (scale)
    Free,
    PlaneXY,
    PlaneXZ,
    PlaneYZ,
}

impl HandleAxis {
    /// The three principal axes
    pub const PRINCIPAL: [HandleAxis; 3] = [HandleAxis::X, HandleAxis::Y, HandleAxis::Z];
    /// The three translation planes
    pub const PLANES: [HandleAxis; 3] = [
        HandleAxis::PlaneXY,
        HandleAxis::PlaneXZ,
        HandleAxis::PlaneYZ,
    ];

    /// Integer form used by renderers: -1 for none, 0..=6 otherwise
    pub fn to_index(&self) -> i32 {
        match self {
            HandleAxis::None => -1,
            HandleAxis::X => 0,
            HandleAxis::Y => 1,
            HandleAxis::Z => 2,
            HandleAxis::Free => 3,
            HandleAxis::PlaneXY => 4,
            HandleAxis::PlaneXZ => 5,
            HandleAxis::PlaneYZ => 6,
        }
    }

    /// Inverse of [`HandleAxis::to_index`]; out-of-range values map to `None`
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => HandleAxis::X,
            1 => HandleAxis::Y,
            2 => HandleAxis::Z,
            3 => HandleAxis::Free,
            4 => HandleAxis::PlaneXY,
            5 => HandleAxis::PlaneXZ,
            6 => HandleAxis::PlaneYZ,
            _ => HandleAxis::None,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == HandleAxis::None
    }

    /// X, Y or Z
    pub fn is_principal(&self) -> bool {
        matches!(self, HandleAxis::X | HandleAxis::Y | HandleAxis::Z)
    }

    pub fn is_plane(&self) -> bool {
        matches!(
            self,
            HandleAxis::PlaneXY | HandleAxis::PlaneXZ | HandleAxis::PlaneYZ
        )
    }

    /// Component index (0..=2) of a principal axis
    pub fn component(&self) -> Option<usize> {
        match self {
            HandleAxis::X => Some(0),
            HandleAxis::Y => Some(1),
            HandleAxis::Z => Some(2),
            _ => None,
        }
    }

    /// Whether a handle of `kind` has this sub-handle
    pub fn is_valid_for(&self, kind: HandleKind) -> bool {
        match kind {
            HandleKind::Translation => self.is_principal() || self.is_plane(),
            HandleKind::Rotation | HandleKind::Scale => {
                self.is_principal() || *self == HandleAxis::Free
            }
        }
    }
}
