//! Pointer input

use glam::Vec2;

/// Pointer state for the current frame
pub trait PointerInput {
    /// Cursor position in screen pixels
    fn cursor_position(&self) -> Vec2;

    /// Primary button went down this frame
    fn primary_pressed_this_frame(&self) -> bool;

    /// Primary button went up this frame
    fn primary_released_this_frame(&self) -> bool;

    /// Primary button is down, including the frame it was pressed
    fn primary_held(&self) -> bool;

    /// Secondary button is held (camera navigation)
    fn secondary_held(&self) -> bool;
}

/// Snapshot of the pointer taken by the host once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub cursor: Vec2,
    pub primary_pressed: bool,
    pub primary_released: bool,
    pub primary_held: bool,
    pub secondary_held: bool,
}

impl PointerState {
    /// Cursor resting at `cursor` with no buttons down
    pub fn at(cursor: Vec2) -> Self {
        Self {
            cursor,
            ..Default::default()
        }
    }

    /// Primary button pressed this frame
    pub fn press(cursor: Vec2) -> Self {
        Self {
            cursor,
            primary_pressed: true,
            primary_held: true,
            ..Default::default()
        }
    }

    /// Primary button still held
    pub fn hold(cursor: Vec2) -> Self {
        Self {
            cursor,
            primary_held: true,
            ..Default::default()
        }
    }

    /// Primary button released this frame
    pub fn release(cursor: Vec2) -> Self {
        Self {
            cursor,
            primary_released: true,
            ..Default::default()
        }
    }
}

impl PointerInput for PointerState {
    fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    fn primary_pressed_this_frame(&self) -> bool {
        self.primary_pressed
    }

    fn primary_released_this_frame(&self) -> bool {
        self.primary_released
    }

    fn primary_held(&self) -> bool {
        self.primary_held
    }

    fn secondary_held(&self) -> bool {
        self.secondary_held
    }
}
