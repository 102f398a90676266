//! Политики оконного менеджера
//!
//! Ядро синхронное: каждое событие обрабатывается полностью (состояние
//! обновлено, вызовы хоста сделаны, результат возвращён) до следующего.
//! Состояние жестов принадлежит только политике.

mod canonical;
mod gesture;
mod keyboard;
mod pointer;
mod resize;
mod touch;
mod r#trait;

pub use self::canonical::CanonicalPolicy;
pub use self::gesture::GesturePolicy;
pub use self::keyboard::{KeyCommand, KeyboardCommands};
pub use self::pointer::{pointer_resize_target, PointerGesture, ResizeMode};
pub use self::resize::resize;
pub use self::touch::{PinchExtent, TouchFrame, TouchGesture, GESTURE_CONTACTS};
pub use self::r#trait::{create_policy, WindowManagementPolicy};
