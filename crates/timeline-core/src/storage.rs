//! Milestone Storage
//!
//! The whole collection lives in one key-value slot as a JSON array. Loading
//! never fails the caller: a missing, `null` or unreadable slot is an empty
//! collection. Saving overwrites the slot with the full collection.

use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, warn};
use serde_json::Value;

use crate::error::TimelineResult;
use crate::milestone::Milestone;

/// String key-value backend, e.g. browser local storage
pub trait KeyValueStore {
    fn read(&self, key: &str) -> TimelineResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> TimelineResult<()>;
}

/// In-memory backend for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot with raw text
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn slot(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> TimelineResult<Option<String>> {
        Ok(self.slot(key))
    }

    fn write(&self, key: &str, value: &str) -> TimelineResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Decode a stored document, keeping every element that reads as a milestone.
pub fn decode_collection(raw: &str) -> Vec<Milestone> {
    let document: Value = match serde_json::from_str(raw) {
        Ok(document) => document,
        Err(e) => {
            warn!(target: "store", "Discarding unparsable milestone data: {}", e);
            return Vec::new();
        }
    };

    match document {
        Value::Null => Vec::new(),
        Value::Array(elements) => elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| match serde_json::from_value::<Milestone>(element) {
                Ok(milestone) => Some(milestone),
                Err(e) => {
                    warn!(target: "store", "Skipping malformed milestone at index {}: {}", index, e);
                    None
                }
            })
            .collect(),
        other => {
            warn!(target: "store", "Expected a milestone array, found {}", json_kind(&other));
            Vec::new()
        }
    }
}

pub fn encode_collection(milestones: &[Milestone]) -> TimelineResult<String> {
    Ok(serde_json::to_string(milestones)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Load/save boundary for the milestone collection
#[derive(Debug, Clone)]
pub struct MilestoneStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> MilestoneStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted collection, empty on any failure
    pub fn load(&self) -> Vec<Milestone> {
        match self.backend.read(&self.key) {
            Ok(Some(raw)) => {
                let milestones = decode_collection(&raw);
                debug!(target: "store", "Loaded {} milestones from '{}'", milestones.len(), self.key);
                milestones
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(target: "store", "Could not read '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted collection
    pub fn save(&self, milestones: &[Milestone]) -> TimelineResult<()> {
        let encoded = encode_collection(milestones)?;
        self.backend.write(&self.key, &encoded)?;
        debug!(target: "store", "Saved {} milestones to '{}'", milestones.len(), self.key);
        Ok(())
    }
}
