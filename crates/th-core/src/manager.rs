//! Transform handle manager
//!
//! [`TransformHandles`] is the one object a host keeps: it owns the
//! settings, the current handle kind and space, an optional attached
//! profile, the shortcut map and the interaction coordinator. The host
//! constructs it, calls [`TransformHandles::update`] once per frame and
//! hands it to the renderer.

use glam::Vec3;

use crate::camera::ViewCamera;
use crate::config::HandleSettings;
use crate::error::ConfigResult;
use crate::input::PointerInput;
use crate::interaction::{HandleEvent, InteractionCoordinator};
use crate::profile::HandleProfile;
use crate::shortcuts::{HandleCommand, ShortcutMap};
use crate::transform::HandleTarget;
use crate::types::{HandleAxis, HandleKind, HandleSpace};

/// Handle state for one selected target
#[derive(Debug, Clone)]
pub struct TransformHandles {
    settings: HandleSettings,
    shortcuts: ShortcutMap,
    kind: HandleKind,
    space: HandleSpace,
    /// Attached profile; overrides `space`
    profile: Option<HandleProfile>,
    /// Profile used when none is attached, kept in sync with `space`
    implicit_profile: HandleProfile,
    interaction: InteractionCoordinator,
}

impl Default for TransformHandles {
    fn default() -> Self {
        Self::new(HandleSettings::default())
    }
}

impl TransformHandles {
    pub fn new(settings: HandleSettings) -> Self {
        let space = HandleSpace::default();
        Self {
            interaction: InteractionCoordinator::new(&settings),
            settings,
            shortcuts: ShortcutMap::default(),
            kind: HandleKind::default(),
            space,
            profile: None,
            implicit_profile: HandleProfile::single_space(space),
        }
    }

    /// Builder-style shortcut map
    pub fn with_shortcuts(mut self, shortcuts: ShortcutMap) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    pub fn settings(&self) -> &HandleSettings {
        &self.settings
    }

    /// Replace the settings after validating them
    pub fn set_settings(&mut self, settings: HandleSettings) -> ConfigResult<()> {
        settings.validate()?;
        self.interaction.apply_settings(&settings);
        self.settings = settings;
        Ok(())
    }

    pub fn shortcuts(&self) -> &ShortcutMap {
        &self.shortcuts
    }

    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    pub fn space(&self) -> HandleSpace {
        self.space
    }

    pub fn interaction(&self) -> &InteractionCoordinator {
        &self.interaction
    }

    // ============== Mode ==============

    /// Switch handle kind; any drag of the previous kind is ended
    pub fn set_kind(&mut self, kind: HandleKind) -> Option<HandleEvent> {
        if kind == self.kind {
            return None;
        }
        if let Some(axis) = self.interaction.reset() {
            tracing::debug!("Drag on {:?} ended by kind change", axis);
        }
        tracing::debug!("Handle kind {:?} -> {:?}", self.kind, kind);
        self.kind = kind;
        Some(HandleEvent::KindChanged(kind))
    }

    pub fn set_translation_mode(&mut self) -> Option<HandleEvent> {
        self.set_kind(HandleKind::Translation)
    }

    pub fn set_rotation_mode(&mut self) -> Option<HandleEvent> {
        self.set_kind(HandleKind::Rotation)
    }

    pub fn set_scale_mode(&mut self) -> Option<HandleEvent> {
        self.set_kind(HandleKind::Scale)
    }

    /// Switch axis space. Ignored while a profile is attached, since the
    /// profile decides the spaces.
    pub fn set_space(&mut self, space: HandleSpace) -> Option<HandleEvent> {
        if self.profile.is_some() {
            tracing::debug!("Space change to {:?} ignored: profile attached", space);
            return None;
        }
        if space == self.space {
            return None;
        }
        self.interaction.reset();
        self.space = space;
        self.implicit_profile = HandleProfile::single_space(space);
        tracing::debug!("Handle space -> {:?}", space);
        Some(HandleEvent::SpaceChanged(space))
    }

    pub fn toggle_space(&mut self) -> Option<HandleEvent> {
        self.set_space(self.space.toggled())
    }

    // ============== Profile ==============

    pub fn attach_profile(&mut self, profile: HandleProfile) {
        tracing::debug!("Attached handle profile '{}'", profile.name);
        self.interaction.reset();
        self.profile = Some(profile);
    }

    pub fn detach_profile(&mut self) -> Option<HandleProfile> {
        let profile = self.profile.take()?;
        tracing::debug!("Detached handle profile '{}'", profile.name);
        self.interaction.reset();
        Some(profile)
    }

    pub fn profile(&self) -> Option<&HandleProfile> {
        self.profile.as_ref()
    }

    /// The attached profile, or the single-space one for the current space
    pub fn effective_profile(&self) -> &HandleProfile {
        self.profile.as_ref().unwrap_or(&self.implicit_profile)
    }

    // ============== Commands ==============

    /// Execute a shortcut command
    pub fn apply_command(&mut self, command: HandleCommand) -> Option<HandleEvent> {
        match command {
            HandleCommand::SetTranslation => self.set_translation_mode(),
            HandleCommand::SetRotation => self.set_rotation_mode(),
            HandleCommand::SetScale => self.set_scale_mode(),
            HandleCommand::ToggleSpace => self.toggle_space(),
        }
    }

    /// Look up `key` in the shortcut map and execute its command
    pub fn handle_key<I: PointerInput + ?Sized>(&mut self, key: char, input: &I) -> Option<HandleEvent> {
        let command = self.shortcuts.resolve(key, input)?;
        self.apply_command(command)
    }

    // ============== Frame ==============

    /// World-space handle length for a target at `target_position`
    pub fn handle_scale<C: ViewCamera + ?Sized>(&self, camera: &C, target_position: Vec3) -> f32 {
        self.settings.handle_scale(camera, target_position)
    }

    /// Run one frame of interaction.
    ///
    /// Without a target any drag is ended and the hover result cleared.
    pub fn update<T, C, I>(&mut self, target: Option<&mut T>, camera: &C, input: &I) -> Vec<HandleEvent>
    where
        T: HandleTarget + ?Sized,
        C: ViewCamera + ?Sized,
        I: PointerInput + ?Sized,
    {
        let Some(target) = target else {
            return self.force_end_drag().into_iter().collect();
        };

        let profile = self.profile.as_ref().unwrap_or(&self.implicit_profile);
        if !profile.has_any_axis_enabled(self.kind) {
            self.interaction.clear_hover();
            return Vec::new();
        }

        let scale = self.settings.handle_scale(camera, target.position());
        self.interaction
            .update(self.kind, target, camera, input, profile, scale)
    }

    /// The selected target changed; drop any drag and hover state
    pub fn target_changed(&mut self) -> Option<HandleEvent> {
        self.force_end_drag()
    }

    /// End any drag without a release event, e.g. on focus loss
    pub fn force_end_drag(&mut self) -> Option<HandleEvent> {
        let axis = self.interaction.reset()?;
        tracing::debug!("Drag on {:?} force-ended", axis);
        Some(HandleEvent::DragEnded { axis })
    }

    // ============== Renderer-facing state ==============

    pub fn hovered_axis(&self) -> HandleAxis {
        self.interaction.hovered_axis()
    }

    pub fn dragged_axis(&self) -> HandleAxis {
        self.interaction.dragged_axis()
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }
}
