//! WindowManagerTools: граница между политикой и хостом
//!
//! Политика никогда не хранит геометрию окон между событиями: окна
//! доступны только по непрозрачному `WindowId`, а все изменения идут
//! через вызовы трейта. Хост является источником истины.

mod in_memory;
mod r#trait;

pub use self::in_memory::{InMemoryTools, ToolCall, WindowRecord};
pub use self::r#trait::{WindowId, WindowManagerTools};
