use crate::error::WmError;
use crate::mappings::KeyNames;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Modifiers;

/// Действие клавиши
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    Down,
    Up,
    Repeat,
}

/// Скан-код клавиши (evdev коды)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "KeyRepr", into = "u16")]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl From<evdev::KeyCode> for KeyCode {
    fn from(key: evdev::KeyCode) -> Self {
        Self(key.code())
    }
}

impl From<KeyCode> for u16 {
    fn from(key: KeyCode) -> u16 {
        key.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match KeyNames::name_of(self.0) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "KEY_{}", self.0),
        }
    }
}

/// Клавиша во входном потоке: числовой код или имя из таблицы
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum KeyRepr {
    Code(u16),
    Name(String),
}

impl TryFrom<KeyRepr> for KeyCode {
    type Error = WmError;

    fn try_from(repr: KeyRepr) -> Result<Self, Self::Error> {
        match repr {
            KeyRepr::Code(code) => Ok(Self(code)),
            KeyRepr::Name(name) => KeyNames::code_of(&name).map(Self),
        }
    }
}

/// Событие клавиатуры
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    pub action: KeyAction,
    pub key: KeyCode,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    pub fn new(action: KeyAction, key: impl Into<KeyCode>, modifiers: Modifiers) -> Self {
        Self {
            action,
            key: key.into(),
            modifiers,
        }
    }

    pub fn down(key: impl Into<KeyCode>, modifiers: Modifiers) -> Self {
        Self::new(KeyAction::Down, key, modifiers)
    }
}

impl fmt::Display for KeyboardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key {:?} {} [{}]", self.action, self.key, self.modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_from_evdev() {
        assert_eq!(KeyCode::from(evdev::KeyCode::KEY_TAB), KeyCode::new(15));
        assert_eq!(KeyCode::from(evdev::KeyCode::KEY_F4).value(), 62);
    }

    #[test]
    fn test_key_code_display() {
        assert_eq!(KeyCode::new(41).to_string(), "grave");
        assert_eq!(KeyCode::new(999).to_string(), "KEY_999");
    }

    #[test]
    fn test_key_code_deserialize_by_name_and_code() {
        let by_name: KeyCode = serde_json::from_str("\"F4\"").unwrap();
        let by_code: KeyCode = serde_json::from_str("62").unwrap();
        assert_eq!(by_name, by_code);

        assert!(serde_json::from_str::<KeyCode>("\"no_such_key\"").is_err());
    }
}
