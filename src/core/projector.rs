use crate::domain::ports::OutputSink;
use crate::utils::error::Result;

/// Stateless projector; start and stop may be called in any order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Projector;

impl Projector {
    pub fn new() -> Self {
        Self
    }

    pub fn start<S: OutputSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        tracing::debug!("📽️ Projector start");
        sink.line("Projector started.")
    }

    pub fn stop<S: OutputSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        tracing::debug!("📽️ Projector stop");
        sink.line("Projector stopped.")
    }
}
