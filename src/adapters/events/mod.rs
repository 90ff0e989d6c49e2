//! Payment event publisher implementations.
//!
//! - `TracingEventPublisher` - structured log lines (default sink)
//! - `InMemoryEventPublisher` - captures events for test assertions

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventPublisher;
pub use tracing_publisher::TracingEventPublisher;
