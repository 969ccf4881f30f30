//! Analytics event sink.
//!
//! Every screen transition produces exactly one [`NavigationEvent`],
//! handed to an [`EventSink`] immediately after the push. Recording is
//! fire-and-forget: sinks must not block, and a sink-internal failure
//! is logged and swallowed so it can never fail the navigation action.

use crate::screens::ScreenId;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// A user-triggered transition: which screen the activation originated
/// on, which screen was pushed, and the fixed label of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEvent {
    /// Screen the activation originated on.
    pub source: ScreenId,
    /// Screen that was pushed.
    pub target: ScreenId,
    /// Fixed string token identifying the button.
    pub label: &'static str,
}

/// Narrow injected capability for recording navigation events.
///
/// The single method returns nothing: there is no acknowledgment, no
/// retry, and no way for a sink to veto or fail a transition.
pub trait EventSink {
    /// Record one event. Best-effort; must not block the caller.
    fn record(&mut self, event: NavigationEvent);
}

impl EventSink for Box<dyn EventSink> {
    fn record(&mut self, event: NavigationEvent) {
        (**self).record(event);
    }
}

/// Sink that records events to the tracing log.
///
/// This is the default sink when no event log file is configured.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a tracing-backed sink.
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn record(&mut self, event: NavigationEvent) {
        info!(
            source = %event.source,
            target = %event.target,
            label = event.label,
            "navigation event"
        );
    }
}

/// On-disk record format: one JSON object per line.
#[derive(Serialize)]
struct EventRecord {
    timestamp: DateTime<Utc>,
    source: ScreenId,
    target: ScreenId,
    label: &'static str,
}

/// Sink that appends events to a JSON-lines file for later analytics
/// inspection.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Open (or create) the event log file in append mode.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create event log directory {:?}", parent))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open event log {:?}", path))?;
        Ok(Self { file })
    }

    fn write_record(&mut self, event: NavigationEvent) -> Result<()> {
        let record = EventRecord {
            timestamp: Utc::now(),
            source: event.source,
            target: event.target,
            label: event.label,
        };
        let line = serde_json::to_string(&record)?;
        writeln!(self.file, "{}", line)?;
        self.file.flush()?;
        Ok(())
    }
}

impl EventSink for JsonlSink {
    fn record(&mut self, event: NavigationEvent) {
        // Best-effort: a write failure must not fail the navigation.
        if let Err(e) = self.write_record(event) {
            warn!(label = event.label, error = %e, "failed to record navigation event");
        }
    }
}

/// In-memory sink capturing events in order. Used as a test double for
/// verifying emitted events without a real analytics backend.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Recorded events, oldest first.
    pub events: Vec<NavigationEvent>,
}

impl MemorySink {
    /// Create an empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of the recorded events, in order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.events.iter().map(|e| e.label).collect()
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: NavigationEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> NavigationEvent {
        NavigationEvent {
            source: ScreenId::A,
            target: ScreenId::B,
            label: "button_b_tapped_event",
        }
    }

    #[test]
    fn memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        sink.record(sample_event());
        sink.record(NavigationEvent {
            source: ScreenId::B,
            target: ScreenId::A,
            label: "button_a_tapped_event",
        });
        assert_eq!(
            sink.labels(),
            vec!["button_b_tapped_event", "button_a_tapped_event"]
        );
    }

    #[test]
    fn jsonl_sink_writes_one_parseable_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        let mut sink = JsonlSink::create(&path).unwrap();
        sink.record(sample_event());
        sink.record(sample_event());

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["source"], "A");
            assert_eq!(value["target"], "B");
            assert_eq!(value["label"], "button_b_tapped_event");
            assert!(value["timestamp"].is_string());
        }
    }

    #[test]
    fn jsonl_sink_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");
        let mut sink = JsonlSink::create(&path).unwrap();
        sink.record(sample_event());
        assert!(path.exists());
    }
}
