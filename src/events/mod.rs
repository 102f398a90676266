pub mod keyboard;
pub mod pointer;
pub mod touch;

pub use keyboard::{KeyAction, KeyCode, KeyboardEvent};
pub use pointer::{PointerAction, PointerButtons, PointerEvent};
pub use touch::{Contact, TouchAction, TouchEvent};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Модификаторы ввода, как их сообщает хост
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u32 {
        const ALT = 1 << 0;
        const SHIFT = 1 << 1;
        const SYM = 1 << 2;
        const CTRL = 1 << 3;
        const META = 1 << 4;
        const CAPS_LOCK = 1 << 5;
        const NUM_LOCK = 1 << 6;
        const SCROLL_LOCK = 1 << 7;
    }
}

impl Modifiers {
    /// Маска модификаторов, участвующих в сравнении "только Alt".
    /// Lock-флаги в неё не входят.
    pub const SHIFT_STATES: Self = Self::ALT
        .union(Self::SHIFT)
        .union(Self::SYM)
        .union(Self::CTRL)
        .union(Self::META);

    pub fn shift_state(self) -> Self {
        self & Self::SHIFT_STATES
    }

    /// Ровно Alt среди пяти модификаторов маски, без любых других
    pub fn is_alt_only(self) -> bool {
        self.shift_state() == Self::ALT
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self
            .iter_names()
            .map(|(name, _)| name)
            .collect();
        write!(f, "{}", names.join("+").to_lowercase())
    }
}

/// Событие ввода, уже классифицированное хостом
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
    Keyboard(KeyboardEvent),
}

impl InputEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            InputEvent::Pointer(_) => "pointer",
            InputEvent::Touch(_) => "touch",
            InputEvent::Keyboard(_) => "keyboard",
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Pointer(event) => write!(f, "{}", event),
            InputEvent::Touch(event) => write!(f, "{}", event),
            InputEvent::Keyboard(event) => write!(f, "{}", event),
        }
    }
}
