//! Shared components for the token-stream and recognizer crates: saved-cursor
//! checkpoints, the diagnostic trace channel, and the internal error taxonomy.

pub mod checkpoint;
pub mod error;
pub mod trace;

pub use checkpoint::Checkpoint;
pub use error::StreamError;
pub use trace::{NullSink, RecordingSink, TraceEvent, TraceSink, TracingSink};
