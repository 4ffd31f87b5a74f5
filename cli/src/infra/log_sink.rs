//! `OutputSink` implementations.

use crate::application::ports::OutputSink;

/// Forwards each captured line to `tracing` at debug level, prefixed `[v]`.
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn line(&self, line: &str) {
        tracing::debug!(target: "evilgenius::vagrant", "[v] {}", line.trim());
    }
}

/// Discards every line.
pub struct NullSink;

impl OutputSink for NullSink {
    fn line(&self, _line: &str) {}
}
