use crate::events::InputEvent;
use crate::trace_if_enabled;
use std::fmt;

use super::policy::WindowManagementPolicy;

/// Счётчики событий за время работы
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub pointer: u64,
    pub touch: u64,
    pub keyboard: u64,
    pub consumed: u64,
}

impl DispatchStats {
    pub fn total(&self) -> u64 {
        self.pointer + self.touch + self.keyboard
    }
}

impl fmt::Display for DispatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} событий (pointer {}, touch {}, keyboard {}), поглощено {}",
            self.total(),
            self.pointer,
            self.touch,
            self.keyboard,
            self.consumed
        )
    }
}

/// Маршрутизация событий в обработчики политики по виду события.
/// Своей логики нет, результат политики возвращается как есть.
pub struct EventDispatcher {
    policy: Box<dyn WindowManagementPolicy>,
    stats: DispatchStats,
}

impl EventDispatcher {
    pub fn new(policy: Box<dyn WindowManagementPolicy>) -> Self {
        Self {
            policy,
            stats: DispatchStats::default(),
        }
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    pub fn dispatch(&mut self, event: &InputEvent) -> bool {
        let consumed = match event {
            InputEvent::Pointer(pointer) => {
                self.stats.pointer += 1;
                self.policy.handle_pointer_event(pointer)
            }
            InputEvent::Touch(touch) => {
                self.stats.touch += 1;
                self.policy.handle_touch_event(touch)
            }
            InputEvent::Keyboard(keyboard) => {
                self.stats.keyboard += 1;
                self.policy.handle_keyboard_event(keyboard)
            }
        };

        if consumed {
            self.stats.consumed += 1;
        }
        trace_if_enabled!("{} -> consumed={}", event, consumed);
        consumed
    }
}
