//! Rolling Logger
//!
//! Keeps the most recent log lines in a fixed-size circular buffer and
//! forwards every line to a host sink (the browser console in the app).
//!
//! ```ignore
//! let buffer = rolling_logger::init_logger("TaskReorder", 200, Level::DEBUG, |line| {
//!     web_sys::console::log_1(&line.to_string().into());
//! })?;
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("a global logger is already installed")]
    AlreadyInitialized,

    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,
}

/// One captured log event
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )?;
        for (name, value) in &self.fields {
            write!(f, " {}={}", name, value)?;
        }
        Ok(())
    }
}

/// Shared circular buffer of recent lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Result<Self, LoggerError> {
        if capacity == 0 {
            return Err(LoggerError::ZeroCapacity);
        }
        Ok(Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a line, evicting the oldest once full
    pub fn push(&self, line: LogLine) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Lines oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

type Sink = Box<dyn Fn(&LogLine) + Send + Sync>;

/// `tracing_subscriber::Layer` that records events into a [`LogBuffer`]
pub struct RollingLayer {
    app_name: String,
    buffer: LogBuffer,
    sink: Option<Sink>,
}

impl RollingLayer {
    pub fn new(app_name: impl Into<String>, buffer: LogBuffer) -> Self {
        Self {
            app_name: app_name.into(),
            buffer,
            sink: None,
        }
    }

    /// Forward each captured line to `sink` as well
    pub fn with_sink(mut self, sink: impl Fn(&LogLine) + Send + Sync + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }
}

impl<S> Layer<S> for RollingLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let line = LogLine {
            timestamp: Local::now(),
            level: *metadata.level(),
            target: format!("{}::{}", self.app_name, metadata.target()),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        };

        if let Some(sink) = &self.sink {
            sink(&line);
        }
        self.buffer.push(line);
    }
}

/// Extracts the message and structured fields of an event
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(rendered);
        } else {
            self.fields.push((field.name().to_string(), rendered));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }
}

/// Install the global subscriber and return its buffer.
///
/// Call once at startup; a second call fails with `AlreadyInitialized`.
pub fn init_logger(
    app_name: &str,
    capacity: usize,
    max_level: Level,
    sink: impl Fn(&LogLine) + Send + Sync + 'static,
) -> Result<LogBuffer, LoggerError> {
    let buffer = LogBuffer::new(capacity)?;
    let layer = RollingLayer::new(app_name, buffer.clone())
        .with_sink(sink)
        .with_filter(LevelFilter::from_level(max_level));

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn capture<F: FnOnce()>(buffer: &LogBuffer, f: F) {
        let layer = RollingLayer::new("Test", buffer.clone());
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn test_zero_capacity() {
        assert!(matches!(LogBuffer::new(0), Err(LoggerError::ZeroCapacity)));
    }

    #[test]
    fn test_captures_message_and_fields() {
        let buffer = LogBuffer::new(8).unwrap();
        capture(&buffer, || {
            tracing::info!(task_id = 3, "drag start");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::INFO);
        assert_eq!(lines[0].message, "drag start");
        assert_eq!(lines[0].fields, vec![("task_id".to_string(), "3".to_string())]);
        assert!(lines[0].target.starts_with("Test::"));
    }

    #[test]
    fn test_evicts_oldest() {
        let buffer = LogBuffer::new(3).unwrap();
        capture(&buffer, || {
            for i in 0..5 {
                tracing::debug!("line {}", i);
            }
        });

        let messages: Vec<String> = buffer.lines().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
        assert_eq!(buffer.capacity(), 3);
    }

    #[test]
    fn test_sink_receives_lines() {
        let buffer = LogBuffer::new(4).unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let layer = RollingLayer::new("Test", buffer.clone()).with_sink(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), || {
            tracing::warn!("one");
            tracing::error!("two");
        });

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(buffer.len(), 2);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_level_filter_drops_verbose_events() {
        let buffer = LogBuffer::new(4).unwrap();
        let layer = RollingLayer::new("Test", buffer.clone()).with_filter(LevelFilter::from_level(Level::WARN));

        tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), || {
            tracing::debug!("drag over: no changes");
            tracing::warn!("drop rejected");
        });

        let messages: Vec<String> = buffer.lines().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["drop rejected"]);
    }

    #[test]
    fn test_display_format() {
        let buffer = LogBuffer::new(1).unwrap();
        capture(&buffer, || {
            tracing::info!(count = 2, "order changes applied");
        });

        let rendered = buffer.lines()[0].to_string();
        assert!(rendered.contains("INFO"));
        assert!(rendered.ends_with("order changes applied count=2"));
    }
}
