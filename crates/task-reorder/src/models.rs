//! Reorder Models
//!
//! Data structures shared by the resolver, store and UI.

use serde::{Deserialize, Serialize};

/// A list entry with an explicit 1-based order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, immutable identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Position in the list, dense over 1..=N
    pub order: u32,
}

impl Task {
    pub fn new(id: u32, name: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            name: name.into(),
            order,
        }
    }
}

/// Pending order mutation for one task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChange {
    pub id: u32,
    pub order: u32,
}

/// Edge of the drop target closest to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        }
    }
}

/// The fixed set every store starts from and resets to
pub fn default_tasks() -> Vec<Task> {
    (1..=4).map(|id| Task::new(id, format!("Item {}", id), id)).collect()
}
