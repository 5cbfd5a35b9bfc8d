//! Keyboard shortcuts
//!
//! Maps single keys to handle commands. Keys are ignored while the
//! secondary button is held, since hosts typically use WASD-style camera
//! navigation during that time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{from_ron_str, load_ron, save_ron, to_ron_string};
use crate::error::ConfigResult;
use crate::input::PointerInput;

/// What a shortcut does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleCommand {
    SetTranslation,
    SetRotation,
    SetScale,
    ToggleSpace,
}

/// Key bindings for the handle commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutMap {
    pub translation: char,
    pub rotation: char,
    pub scale: char,
    pub toggle_space: char,
}

impl Default for ShortcutMap {
    fn default() -> Self {
        Self {
            translation: 'w',
            rotation: 'e',
            scale: 'r',
            toggle_space: 'x',
        }
    }
}

impl ShortcutMap {
    /// Command bound to `key`, ignoring case
    pub fn command_for(&self, key: char) -> Option<HandleCommand> {
        let bindings = [
            (self.translation, HandleCommand::SetTranslation),
            (self.rotation, HandleCommand::SetRotation),
            (self.scale, HandleCommand::SetScale),
            (self.toggle_space, HandleCommand::ToggleSpace),
        ];
        bindings
            .into_iter()
            .find(|(bound, _)| bound.eq_ignore_ascii_case(&key))
            .map(|(_, command)| command)
    }

    /// Like [`ShortcutMap::command_for`], but nothing while the secondary
    /// button is held
    pub fn resolve<I: PointerInput + ?Sized>(&self, key: char, input: &I) -> Option<HandleCommand> {
        if input.secondary_held() {
            return None;
        }
        self.command_for(key)
    }

    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        from_ron_str(content)
    }

    pub fn to_ron_string(&self) -> ConfigResult<String> {
        to_ron_string(self)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        load_ron(path)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        save_ron(self, path)
    }
}
