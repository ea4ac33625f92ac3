//! Port for structured generation logging.
//!
//! Defines the [`GenerationLogger`] trait for recording what happened during a
//! paper run (pool sizes, per-category draws, the written document) to a
//! machine-readable audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a structured
//! record of each run (JSONL).

use serde_json::Value;

/// A structured generation event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. Adapters add the timestamp when writing.
pub struct GenerationEvent {
    /// Event type identifier (e.g., "pool_loaded", "category_selected").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging generation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// `log` is synchronous and non-fallible; logging failures are ignored so
/// they never abort a run.
pub trait GenerationLogger: Send + Sync {
    /// Record a generation event.
    fn log(&self, event: GenerationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationEvent) {}
}
