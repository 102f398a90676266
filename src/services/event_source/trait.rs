use crate::config::Config;
use crate::error::Result;
use crate::services::EventDispatcher;
use std::sync::Arc;

use super::dry_run::DryRunEventSource;
use super::line_source::LineEventSource;

/// Trait for event sources that can run in different modes
#[async_trait::async_trait]
pub trait EventSourceTrait {
    /// Читать события до конца потока и отдавать их диспетчеру
    async fn run(self: Box<Self>) -> Result<()>;
}

/// Factory function to create an appropriate event source based on the dry_run flag
pub fn create_event_source(
    config: Arc<Config>,
    dispatcher: EventDispatcher,
    dry_run: bool,
) -> Result<Box<dyn EventSourceTrait + Send>> {
    if dry_run {
        Ok(Box::new(DryRunEventSource::new(config, dispatcher)))
    } else {
        Ok(Box::new(LineEventSource::stdin(dispatcher)))
    }
}
