//! Reorder Errors
//!
//! Every variant except `InvalidOptions` is recovered inside the event
//! handler that detected it (rollback or no-op).

use std::fmt;

use thiserror::Error;

/// Which side of a drag an id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRole {
    Dragged,
    Target,
}

impl fmt::Display for TaskRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskRole::Dragged => write!(f, "dragged"),
            TaskRole::Target => write!(f, "target"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    #[error("{role} task {id} not in list")]
    NotFound { role: TaskRole, id: u32 },

    #[error("{0} is not a task")]
    ForeignPayload(String),

    #[error("no drop target")]
    NoTarget,

    #[error("invalid order changes: {0}")]
    InvalidChanges(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

pub type ReorderResult<T> = Result<T, ReorderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReorderError::NotFound { role: TaskRole::Target, id: 9 };
        assert_eq!(err.to_string(), "target task 9 not in list");
        assert_eq!(ReorderError::NoTarget.to_string(), "no drop target");
        assert_eq!(
            ReorderError::ForeignPayload("dragged item".to_string()).to_string(),
            "dragged item is not a task"
        );
    }
}
