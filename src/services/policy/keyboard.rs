use crate::events::{KeyAction, KeyCode, KeyboardEvent};
use crate::services::tools::WindowManagerTools;
use std::sync::Arc;
use tracing::info;

/// Команды Alt+клавиша
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Alt+F4
    CloseActiveWindow,
    /// Alt+Tab
    NextApplication,
    /// Alt+`
    NextWindowInApplication,
}

impl KeyCommand {
    pub fn for_key(key: KeyCode) -> Option<Self> {
        match evdev::KeyCode::new(key.value()) {
            evdev::KeyCode::KEY_F4 => Some(KeyCommand::CloseActiveWindow),
            evdev::KeyCode::KEY_TAB => Some(KeyCommand::NextApplication),
            evdev::KeyCode::KEY_GRAVE => Some(KeyCommand::NextWindowInApplication),
            _ => None,
        }
    }
}

/// Статическая таблица клавиатурных команд, состояния нет
pub struct KeyboardCommands {
    tools: Arc<dyn WindowManagerTools>,
}

impl KeyboardCommands {
    pub fn new(tools: Arc<dyn WindowManagerTools>) -> Self {
        Self { tools }
    }

    pub fn handle(&self, event: &KeyboardEvent) -> bool {
        if event.action != KeyAction::Down || !event.modifiers.is_alt_only() {
            return false;
        }

        let Some(command) = KeyCommand::for_key(event.key) else {
            return false;
        };

        info!("Команда {:?} по {}", command, event);
        match command {
            KeyCommand::CloseActiveWindow => {
                if let Some(window) = self.tools.active_window() {
                    self.tools.ask_client_to_close(window);
                }
            }
            KeyCommand::NextApplication => self.tools.focus_next_application(),
            KeyCommand::NextWindowInApplication => self.tools.focus_next_within_application(),
        }

        true
    }
}
