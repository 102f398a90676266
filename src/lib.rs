//! Политика ввода оконного менеджера.
//!
//! Превращает поток событий указателя, мультитача и клавиатуры в действия
//! над окнами: выбор, перемещение, ресайз, переключение фокуса, закрытие.
//! Окна принадлежат хосту и доступны только через [`services::tools::WindowManagerTools`].

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod mappings;
pub mod services;
pub mod utils;
