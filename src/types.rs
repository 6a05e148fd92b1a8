//! Core types for storefront

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Record ID type
pub type RecordId = u64;

/// Field name carrying the server-assigned identifier
pub const ID_FIELD: &str = "id";

/// A stored item: an open JSON object that always carries an `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Build a record from client fields, stamping `id` in first position.
    ///
    /// A client-supplied `id` is discarded.
    pub fn new(id: RecordId, fields: Map<String, Value>) -> Self {
        let mut map = Map::with_capacity(fields.len() + 1);
        map.insert(ID_FIELD.to_string(), Value::from(id));
        for (key, value) in fields {
            if key != ID_FIELD {
                map.insert(key, value);
            }
        }
        Self(map)
    }

    /// Server-assigned identifier, if the stored value is numeric
    pub fn id(&self) -> Option<RecordId> {
        self.0.get(ID_FIELD).and_then(Value::as_u64)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// The named collections served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Orders,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Orders => "orders",
        }
    }

    /// Storage key of the backing document
    pub fn document_key(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
