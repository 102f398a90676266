use crate::geometry::{Displacement, Point, Rectangle, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Непрозрачный идентификатор окна, выданный хостом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Возможности хоста, которыми пользуется политика.
///
/// Все вызовы синхронные и не ждут подтверждения: хост применяет их
/// до доставки следующего события. Методы принимают `&self`, потому что
/// это ручка к хранилищу хоста, а не само хранилище.
pub trait WindowManagerTools: Send + Sync {
    /// Окно под точкой, если есть
    fn window_at(&self, point: Point) -> Option<WindowId>;

    /// Сделать окно активным. Возвращает активное окно или `None`,
    /// если хост его не знает. Повторный вызов для активного окна безвреден.
    fn select_active_window(&self, window: WindowId) -> Option<WindowId>;

    fn active_window(&self) -> Option<WindowId>;

    /// Текущая геометрия окна
    fn window_geometry(&self, window: WindowId) -> Option<Rectangle>;

    fn drag_active_window(&self, movement: Displacement);

    /// Хост может поправить позицию и размер под свои правила
    /// (границы экрана, пропорции и т.п.)
    fn constrain_resize(&self, window: WindowId, top_left: &mut Point, size: &mut Size);

    fn modify_window_geometry(&self, window: WindowId, top_left: Point, size: Size);

    fn ask_client_to_close(&self, window: WindowId);

    fn focus_next_application(&self);

    fn focus_next_within_application(&self);
}
