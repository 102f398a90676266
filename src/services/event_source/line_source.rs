use crate::error::Result;
use crate::events::InputEvent;
use crate::services::EventDispatcher;
use crate::debug_if_enabled;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tracing::{info, warn};

use super::r#trait::EventSourceTrait;

/// События построчно в JSON, по одному событию на строку.
/// Пустые строки и строки с `#` пропускаются.
pub struct LineEventSource<R> {
    reader: R,
    dispatcher: EventDispatcher,
}

impl LineEventSource<BufReader<Stdin>> {
    pub fn stdin(dispatcher: EventDispatcher) -> Self {
        info!("Источник событий: stdin (JSON lines)");
        Self::new(BufReader::new(tokio::io::stdin()), dispatcher)
    }
}

impl<R> LineEventSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R, dispatcher: EventDispatcher) -> Self {
        Self { reader, dispatcher }
    }

    async fn run_impl(mut self) -> Result<()> {
        let mut lines = self.reader.lines();
        let mut line_number = 0usize;

        while let Some(line) = lines.next_line().await? {
            line_number += 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let event: InputEvent = match serde_json::from_str(line) {
                Ok(event) => event,
                Err(e) => {
                    warn!("Строка {}: некорректное событие пропущено: {}", line_number, e);
                    continue;
                }
            };

            let consumed = self.dispatcher.dispatch(&event);
            debug_if_enabled!("Строка {}: {} -> consumed={}", line_number, event, consumed);
        }

        info!("Поток событий завершён: {}", self.dispatcher.stats());
        Ok(())
    }
}

#[async_trait::async_trait]
impl<R> EventSourceTrait for LineEventSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn run(self: Box<Self>) -> Result<()> {
        (*self).run_impl().await
    }
}
