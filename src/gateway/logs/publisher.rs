use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes catalog events to the tracing log.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        info!(event_id = %event.event_id, name = %event.name, kind = ?event.kind,
            key = %event.key, data = %event.json_data, "catalog event");
        Ok(())
    }
}
