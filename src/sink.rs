//! Persistence collaborator for created events.
//!
//! There is no real backend in scope; [`LogSink`] stands in for one by
//! emitting each record as a JSON tracing event and always succeeding.

use crate::model::EventRecord;

/// Errors from handing an event to a sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The record could not be serialized.
    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Receives successfully built events.
pub trait EventSink {
    /// Accepts one event record.
    fn save(&mut self, event: &EventRecord) -> Result<(), SinkError>;
}

/// Sink that logs each event as a JSON line and discards it.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn save(&mut self, event: &EventRecord) -> Result<(), SinkError> {
        let json = serde_json::to_string(event)?;
        tracing::info!(event = %json, "event created");
        Ok(())
    }
}
