//! API server state

use std::sync::Arc;

use crate::collection::{CollectionManager, CollectionService};
use crate::types::Collection;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Collection manager
    pub manager: Arc<CollectionManager>,
}

impl AppState {
    pub fn new(manager: Arc<CollectionManager>) -> Self {
        Self { manager }
    }

    pub fn collection(&self, collection: Collection) -> CollectionService {
        self.manager.collection(collection)
    }
}
