pub mod dispatcher;
pub mod event_source;
pub mod policy;
pub mod tools;

pub use dispatcher::{DispatchStats, EventDispatcher};
pub use event_source::create_event_source;
pub use policy::create_policy;
pub use tools::InMemoryTools;
