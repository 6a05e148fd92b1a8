//! Collection management
//!
//! A collection service ties together:
//! - Record store (whole-document load/save)
//! - Identifier generator
//! - A per-collection write lock, held across load → append → save so that
//!   concurrent creates cannot lose each other's records

use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::id::IdGenerator;
use crate::storage::StorageBackend;
use crate::store::RecordStore;
use crate::types::{Collection, Record};
use crate::Result;

/// CollectionManager owns the shared store and one write lock per collection
pub struct CollectionManager {
    store: Arc<RecordStore>,
    ids: Arc<IdGenerator>,
    products_lock: Arc<Mutex<()>>,
    orders_lock: Arc<Mutex<()>>,
}

impl CollectionManager {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            store: Arc::new(RecordStore::new(storage)),
            ids: Arc::new(IdGenerator::new()),
            products_lock: Arc::new(Mutex::new(())),
            orders_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Handle for operating on one collection
    pub fn collection(&self, collection: Collection) -> CollectionService {
        let write_lock = match collection {
            Collection::Products => self.products_lock.clone(),
            Collection::Orders => self.orders_lock.clone(),
        };

        CollectionService {
            collection,
            store: self.store.clone(),
            ids: self.ids.clone(),
            write_lock,
        }
    }
}

/// List/create over a single collection
#[derive(Clone)]
pub struct CollectionService {
    collection: Collection,
    store: Arc<RecordStore>,
    ids: Arc<IdGenerator>,
    write_lock: Arc<Mutex<()>>,
}

impl CollectionService {
    /// Every stored record, in insertion order
    pub async fn list_all(&self) -> Vec<Record> {
        self.store.load(self.collection).await
    }

    /// Stamp `fields` with a fresh id, append it and persist the collection.
    pub async fn create(&self, fields: Map<String, Value>) -> Result<Record> {
        let _guard = self.write_lock.lock().await;

        let record = Record::new(self.ids.next_id(), fields);

        let mut records = self.store.load(self.collection).await;
        records.push(record.clone());
        self.store.save(self.collection, &records).await?;

        tracing::info!(
            collection = %self.collection,
            id = record.id(),
            count = records.len(),
            "Created record"
        );

        Ok(record)
    }
}
