//! Reorder Options
//!
//! Runtime toggles for the list. Missing JSON fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ReorderError, ReorderResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderOptions {
    /// Allow a task to be its own drop target
    pub allow_self_drop: bool,
    /// Keep the last drop target while the pointer is between targets
    pub sticky: bool,
    /// Prefix trace messages with a millisecond timestamp
    pub timestamps: bool,
    /// Only restamp a trace message when its text changes
    pub timestamp_change_only: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            allow_self_drop: false,
            sticky: true,
            timestamps: true,
            timestamp_change_only: false,
        }
    }
}

impl ReorderOptions {
    pub fn from_json(json: &str) -> ReorderResult<Self> {
        serde_json::from_str(json).map_err(|e| ReorderError::InvalidOptions(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReorderOptions::default();
        assert!(!options.allow_self_drop);
        assert!(options.sticky);
        assert!(options.timestamps);
        assert!(!options.timestamp_change_only);
    }

    #[test]
    fn test_partial_json() {
        let options = ReorderOptions::from_json(r#"{"allow_self_drop": true}"#).unwrap();
        assert!(options.allow_self_drop);
        assert!(options.sticky);
    }

    #[test]
    fn test_invalid_json() {
        let err = ReorderOptions::from_json("{not json").unwrap_err();
        assert!(matches!(err, ReorderError::InvalidOptions(_)));
    }
}
