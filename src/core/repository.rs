use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryResult, LoadOutcome};
use crate::gateway::GatewayPublisherVia;

pub trait Repository<Entity> {
    // reads every stored entity into sink, in stored order; entities read before
    // a failure stay in sink
    fn load_all(&self, sink: &mut Vec<Entity>) -> LibraryResult<LoadOutcome>;

    // replaces the stored entities
    fn save_all(&self, entities: &[Entity]) -> LibraryResult<usize>;

    // where entities are stored, for reporting
    fn location(&self) -> String;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    FlatFile,
    Memory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::FlatFile => { GatewayPublisherVia::Logs }
            RepositoryStore::Memory => { GatewayPublisherVia::Memory }
        }
    }
}
