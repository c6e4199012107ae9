use std::collections::HashMap;

use crate::errors::{ApiGraphError, Result};
use crate::types::{EndPointId, EndPointKey};

/// Table of endpoints keyed by their (verb, url) identity.
#[derive(Debug, Default)]
pub struct EndPointRegistry {
    by_key: HashMap<EndPointKey, EndPointId>,
    /// Keys indexed by endpoint id.
    keys: Vec<EndPointKey>,
}

impl EndPointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new endpoint and returns its id.
    ///
    /// Ids are handed out sequentially in registration order.
    pub fn register(&mut self, key: EndPointKey) -> Result<EndPointId> {
        if self.by_key.contains_key(&key) {
            return Err(ApiGraphError::duplicate("endpoint", key.to_string()));
        }
        let id = EndPointId(self.keys.len() as u32);
        self.by_key.insert(key.clone(), id);
        self.keys.push(key);
        Ok(id)
    }

    pub fn get(&self, key: &EndPointKey) -> Result<EndPointId> {
        self.by_key
            .get(key)
            .copied()
            .ok_or_else(|| ApiGraphError::unresolved("endpoint", key.to_string()))
    }

    /// Looks up an endpoint from its `"VERB url"` identifier.
    pub fn get_by_identifier(&self, identifier: &str) -> Result<EndPointId> {
        self.get(&EndPointKey::parse(identifier)?)
    }

    pub fn key(&self, id: EndPointId) -> Option<&EndPointKey> {
        self.keys.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
