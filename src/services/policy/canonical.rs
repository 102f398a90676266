use crate::events::{KeyboardEvent, PointerAction, PointerEvent, TouchEvent};
use crate::services::tools::WindowManagerTools;
use std::sync::Arc;

use super::r#trait::WindowManagementPolicy;

/// Политика по умолчанию: click-to-focus и больше ничего.
/// Никакие события не поглощаются.
pub struct CanonicalPolicy {
    tools: Arc<dyn WindowManagerTools>,
}

impl CanonicalPolicy {
    pub fn new(tools: Arc<dyn WindowManagerTools>) -> Self {
        Self { tools }
    }
}

impl WindowManagementPolicy for CanonicalPolicy {
    fn name(&self) -> &'static str {
        "canonical"
    }

    fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if event.action == PointerAction::ButtonDown {
            if let Some(window) = self.tools.window_at(event.position) {
                self.tools.select_active_window(window);
            }
        }
        false
    }

    fn handle_touch_event(&mut self, _event: &TouchEvent) -> bool {
        false
    }

    fn handle_keyboard_event(&mut self, _event: &KeyboardEvent) -> bool {
        false
    }
}
