//! Transform Handles Core
//!
//! Screen-space interaction math for translate/rotate/scale manipulators:
//! - Projection utilities and the axis/plane resolver
//! - Hover detectors: which sub-handle is under the cursor
//! - Drag handlers: cursor motion to position, rotation and scale
//! - Interaction coordinator and the [`TransformHandles`] manager
//! - Profiles, settings and shortcut maps stored as RON
//!
//! The host supplies the target ([`HandleTarget`]), the camera
//! ([`ViewCamera`]) and the pointer ([`PointerInput`]); drawing lives in
//! `th-renderer`.

pub mod camera;
pub mod config;
pub mod constants;
pub mod drag;
pub mod error;
pub mod hover;
pub mod input;
pub mod interaction;
pub mod manager;
pub mod profile;
pub mod projection;
pub mod resolver;
pub mod shortcuts;
pub mod transform;
pub mod types;

pub use camera::{PerspectiveCamera, Ray, ScreenPoint, ViewCamera};
pub use config::HandleSettings;
pub use drag::{DragHandlers, DragStart, RotationDrag, ScaleDrag, TranslationDrag, quat_pow};
pub use error::{ConfigError, ConfigResult};
pub use hover::{HoverDetector, HoverHit};
pub use input::{PointerInput, PointerState};
pub use interaction::{HandleEvent, InteractionCoordinator};
pub use manager::TransformHandles;
pub use profile::{AxisToggles, HandleProfile, KindToggles};
pub use shortcuts::{HandleCommand, ShortcutMap};
pub use transform::{HandleTarget, Transform};
pub use types::{HandleAxis, HandleKind, HandleSpace};
