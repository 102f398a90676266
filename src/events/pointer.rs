use crate::geometry::Point;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Modifiers;

/// Действие указателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    ButtonDown,
    ButtonUp,
    Motion,
    Enter,
    Leave,
}

bitflags! {
    /// Зажатые кнопки указателя
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PointerButtons: u32 {
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
        const TERTIARY = 1 << 2;
        const BACK = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

/// Событие указателя
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Point,
    #[serde(default)]
    pub buttons: PointerButtons,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(
        action: PointerAction,
        position: Point,
        buttons: PointerButtons,
        modifiers: Modifiers,
    ) -> Self {
        Self {
            action,
            position,
            buttons,
            modifiers,
        }
    }

    pub fn button_down(position: Point, buttons: PointerButtons, modifiers: Modifiers) -> Self {
        Self::new(PointerAction::ButtonDown, position, buttons, modifiers)
    }

    pub fn motion(position: Point, buttons: PointerButtons, modifiers: Modifiers) -> Self {
        Self::new(PointerAction::Motion, position, buttons, modifiers)
    }

    pub fn is_pressed(&self, button: PointerButtons) -> bool {
        self.buttons.contains(button)
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pointer {:?} at {} buttons={:?} [{}]",
            self.action, self.position, self.buttons, self.modifiers
        )
    }
}
