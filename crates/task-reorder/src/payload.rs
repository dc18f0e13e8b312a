//! Drag Payload Capability Check
//!
//! Drag data arrives as untyped JSON records. Only records that validate into
//! a known variant are trusted; anything else is foreign.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReorderError, ReorderResult};
use crate::models::Task;

/// Known drag payloads, tagged by `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DndPayload {
    Task { id: u32 },
}

impl DndPayload {
    /// Validate raw drag data. Unknown tags and non-numeric ids are rejected.
    pub fn parse(value: &Value) -> ReorderResult<Self> {
        Self::deserialize(value).map_err(|_| ReorderError::ForeignPayload(value.to_string()))
    }

    pub fn task_id(&self) -> u32 {
        let DndPayload::Task { id } = self;
        *id
    }
}

/// Drag data a list item attaches as source and as drop target
pub fn task_payload(task: &Task) -> Value {
    serde_json::to_value(DndPayload::Task { id: task.id }).unwrap_or(Value::Null)
}
