//! Trace Message Formatting
//!
//! Human-readable diagnostics shown next to the list and each item.

use crate::options::ReorderOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceFormatter {
    pub timestamps: bool,
    pub change_only: bool,
}

impl From<&ReorderOptions> for TraceFormatter {
    fn from(options: &ReorderOptions) -> Self {
        Self {
            timestamps: options.timestamps,
            change_only: options.timestamp_change_only,
        }
    }
}

impl TraceFormatter {
    /// Next text for a trace line currently showing `current`.
    ///
    /// Returns `None` when the line should keep its current text.
    pub fn format(&self, current: &str, message: &str, now_ms: f64) -> Option<String> {
        if !self.timestamps {
            return Some(message.to_string());
        }
        if self.change_only && current.ends_with(message) {
            return None;
        }
        let stamp = now_ms.max(0.0).floor() as u64;
        Some(format!("[{:06}] {}", stamp, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message() {
        let formatter = TraceFormatter { timestamps: false, change_only: true };
        assert_eq!(formatter.format("drag start 1", "drag start 1", 5.0).as_deref(), Some("drag start 1"));
    }

    #[test]
    fn test_timestamp_padding() {
        let formatter = TraceFormatter { timestamps: true, change_only: false };
        assert_eq!(formatter.format("", "drop", 1234.9).as_deref(), Some("[001234] drop"));
        assert_eq!(formatter.format("", "drop", 12345678.0).as_deref(), Some("[12345678] drop"));
    }

    #[test]
    fn test_change_only_suppresses_repeat() {
        let formatter = TraceFormatter { timestamps: true, change_only: true };
        assert_eq!(formatter.format("[000010] near top", "near top", 20.0), None);
        assert_eq!(
            formatter.format("[000010] near top", "near bottom", 20.0).as_deref(),
            Some("[000020] near bottom")
        );
    }

    #[test]
    fn test_from_options() {
        let options = ReorderOptions { timestamp_change_only: true, ..Default::default() };
        let formatter = TraceFormatter::from(&options);
        assert!(formatter.timestamps);
        assert!(formatter.change_only);
    }
}
