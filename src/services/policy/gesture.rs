use crate::events::{KeyboardEvent, PointerEvent, TouchEvent};
use crate::geometry::Size;
use crate::services::tools::WindowManagerTools;
use std::sync::Arc;

use super::canonical::CanonicalPolicy;
use super::keyboard::KeyboardCommands;
use super::pointer::PointerGesture;
use super::r#trait::WindowManagementPolicy;
use super::touch::TouchGesture;

/// Политика с жестами.
///
/// Переключение приложений: Alt+Tab, клик или касание окна.
/// Переключение окон: Alt+`, клик или касание окна.
/// Закрыть окно: Alt+F4.
/// Перемещение: Alt+левая кнопка или три пальца.
/// Ресайз: Alt+средняя кнопка или щипок тремя пальцами.
///
/// Всё, что жесты не поглотили, уходит в [`CanonicalPolicy`].
pub struct GesturePolicy {
    pointer: PointerGesture,
    touch: TouchGesture,
    keyboard: KeyboardCommands,
    fallback: CanonicalPolicy,
}

impl GesturePolicy {
    pub fn new(tools: Arc<dyn WindowManagerTools>, minimum: Size) -> Self {
        Self {
            pointer: PointerGesture::new(tools.clone(), minimum),
            touch: TouchGesture::new(tools.clone(), minimum),
            keyboard: KeyboardCommands::new(tools.clone()),
            fallback: CanonicalPolicy::new(tools),
        }
    }
}

impl WindowManagementPolicy for GesturePolicy {
    fn name(&self) -> &'static str {
        "gesture"
    }

    fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.pointer.handle(event) || self.fallback.handle_pointer_event(event)
    }

    fn handle_touch_event(&mut self, event: &TouchEvent) -> bool {
        self.touch.handle(event) || self.fallback.handle_touch_event(event)
    }

    fn handle_keyboard_event(&mut self, event: &KeyboardEvent) -> bool {
        self.keyboard.handle(event) || self.fallback.handle_keyboard_event(event)
    }
}
