/// A diagnostic event emitted while the recognizer works through its
/// alternatives. The trace channel is a side channel only: sinks observe the
/// parse, they never influence the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// An alternative is about to be tried at the given position.
    TryAlternative { label: &'static str, pos: usize },
    /// The alternative matched, leaving the cursor at `pos`.
    AlternativeMatched { label: &'static str, pos: usize },
    /// A failed alternative restored the cursor from `from` back to `to`.
    Backtrack { from: usize, to: usize },
}

/// Receiver for [`TraceEvent`]s.
pub trait TraceSink {
    fn event(&mut self, event: &TraceEvent);
}

/// The default sink: discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn event(&mut self, _event: &TraceEvent) {}
}

/// Forwards events to the `tracing` ecosystem at TRACE level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn event(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::TryAlternative { label, pos } => {
                tracing::trace!(label, pos, "trying alternative");
            }
            TraceEvent::AlternativeMatched { label, pos } => {
                tracing::trace!(label, pos, "alternative matched");
            }
            TraceEvent::Backtrack { from, to } => {
                tracing::trace!(from, to, "backtracking");
            }
        }
    }
}

/// Records every event in order. Used by tests to assert on the order in
/// which alternatives were tried and positions restored.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<TraceEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events recorded so far, oldest first.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }
}

impl TraceSink for RecordingSink {
    fn event(&mut self, event: &TraceEvent) {
        self.events.push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_preserves_order() {
        let mut sink = RecordingSink::new();
        sink.event(&TraceEvent::TryAlternative {
            label: "a",
            pos: 0,
        });
        sink.event(&TraceEvent::Backtrack { from: 2, to: 0 });

        assert_eq!(
            sink.events(),
            &[
                TraceEvent::TryAlternative {
                    label: "a",
                    pos: 0
                },
                TraceEvent::Backtrack { from: 2, to: 0 },
            ]
        );
    }

    #[test]
    fn test_null_sink_is_silent() {
        let mut sink = NullSink;
        sink.event(&TraceEvent::Backtrack { from: 1, to: 0 });
    }
}
