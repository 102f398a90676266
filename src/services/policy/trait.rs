use crate::config::{PolicyConfig, PolicyKind};
use crate::events::{KeyboardEvent, PointerEvent, TouchEvent};
use crate::services::tools::WindowManagerTools;
use std::sync::Arc;
use tracing::info;

use super::canonical::CanonicalPolicy;
use super::gesture::GesturePolicy;

/// Политика оконного менеджера: по обработчику на каждый вид событий.
///
/// `true` означает, что событие поглощено и хост не должен обрабатывать
/// его по умолчанию. Обработчики вызываются по одному, в порядке доставки,
/// и не должны блокироваться.
pub trait WindowManagementPolicy: Send {
    fn name(&self) -> &'static str;

    fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool;

    fn handle_touch_event(&mut self, event: &TouchEvent) -> bool;

    fn handle_keyboard_event(&mut self, event: &KeyboardEvent) -> bool;
}

/// Factory function: политика выбирается один раз при старте
pub fn create_policy(
    config: &PolicyConfig,
    tools: Arc<dyn WindowManagerTools>,
) -> Box<dyn WindowManagementPolicy> {
    info!(
        "Политика: {:?}, минимальный размер окна {}",
        config.kind,
        config.minimum_size()
    );

    match config.kind {
        PolicyKind::Gesture => Box::new(GesturePolicy::new(tools, config.minimum_size())),
        PolicyKind::Canonical => Box::new(CanonicalPolicy::new(tools)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Modifiers;
    use crate::services::tools::InMemoryTools;

    #[test]
    fn test_factory_selects_policy() {
        let tools: Arc<dyn WindowManagerTools> = Arc::new(InMemoryTools::new(None));
        let mut config = PolicyConfig::default();

        let mut gesture = create_policy(&config, tools.clone());
        assert_eq!(gesture.name(), "gesture");

        config.kind = PolicyKind::Canonical;
        let mut canonical = create_policy(&config, tools);
        assert_eq!(canonical.name(), "canonical");

        let alt_tab = KeyboardEvent::down(evdev::KeyCode::KEY_TAB, Modifiers::ALT);
        assert!(gesture.handle_keyboard_event(&alt_tab));
        assert!(!canonical.handle_keyboard_event(&alt_tab));
    }
}
