use crate::error::Result;
use crate::wm_error;
use evdev::KeyCode;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Таблица имён клавиш <-> скан-коды evdev.
/// Нужна источникам событий, чтобы принимать `"tab"` вместо `15`.
pub struct KeyNames;

static KEY_NAME_TO_CODE: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    let keys = [
        // Команды политики
        ("tab", KeyCode::KEY_TAB),
        ("grave", KeyCode::KEY_GRAVE),
        ("f4", KeyCode::KEY_F4),

        // Модификаторы
        ("alt", KeyCode::KEY_LEFTALT),
        ("rightalt", KeyCode::KEY_RIGHTALT),
        ("ctrl", KeyCode::KEY_LEFTCTRL),
        ("shift", KeyCode::KEY_LEFTSHIFT),
        ("super", KeyCode::KEY_LEFTMETA),

        // Специальные клавиши
        ("escape", KeyCode::KEY_ESC),
        ("enter", KeyCode::KEY_ENTER),
        ("space", KeyCode::KEY_SPACE),
        ("backspace", KeyCode::KEY_BACKSPACE),
        ("up", KeyCode::KEY_UP),
        ("down", KeyCode::KEY_DOWN),
        ("left", KeyCode::KEY_LEFT),
        ("right", KeyCode::KEY_RIGHT),

        // Функциональный ряд
        ("f1", KeyCode::KEY_F1),
        ("f2", KeyCode::KEY_F2),
        ("f3", KeyCode::KEY_F3),
        ("f5", KeyCode::KEY_F5),
        ("f6", KeyCode::KEY_F6),
        ("f7", KeyCode::KEY_F7),
        ("f8", KeyCode::KEY_F8),
        ("f9", KeyCode::KEY_F9),
        ("f10", KeyCode::KEY_F10),
        ("f11", KeyCode::KEY_F11),
        ("f12", KeyCode::KEY_F12),

        // Буквы, которые встречаются в сценариях
        ("a", KeyCode::KEY_A),
        ("q", KeyCode::KEY_Q),
        ("w", KeyCode::KEY_W),
    ];

    keys.into_iter().map(|(name, key)| (name, key.code())).collect()
});

static CODE_TO_KEY_NAME: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    KEY_NAME_TO_CODE.iter().map(|(&name, &code)| (code, name)).collect()
});

impl KeyNames {
    /// Получить код клавиши по её имени (регистр не важен)
    pub fn code_of(key_name: &str) -> Result<u16> {
        let normalized = key_name.to_lowercase();
        KEY_NAME_TO_CODE
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| wm_error!(unknown_key, "{}", key_name))
    }

    /// Получить имя клавиши по её коду
    pub fn name_of(code: u16) -> Option<&'static str> {
        CODE_TO_KEY_NAME.get(&code).copied()
    }
}
