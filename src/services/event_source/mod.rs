//! EventSource: откуда берутся события для политики
//!
//! Источник читает события асинхронно, но передаёт их диспетчеру строго
//! по одному: следующее событие не читается, пока предыдущее не
//! обработано. Сама политика про tokio ничего не знает.

mod dry_run;
mod line_source;
mod r#trait;

pub use self::dry_run::{demo_script, DryRunEventSource};
pub use self::line_source::LineEventSource;
pub use self::r#trait::{create_event_source, EventSourceTrait};
