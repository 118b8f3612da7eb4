// Application layer: wires settings, the chosen output sink and the session engine together.

use crate::adapters::sink::{CsvSink, JsonSink, TextSink};
use crate::config::{OutputFormat, SessionSettings};
use crate::core::cinema::Cinema;
use crate::core::session::{SessionEngine, SessionReport};
use crate::domain::model::TicketCounter;
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::io::Write;

/// Runs one session with the sink matching the configured output format.
pub fn run_session<C: SessionSettings, W: Write>(
    settings: &C,
    writer: W,
    counter: TicketCounter,
) -> Result<SessionReport> {
    match settings.output_format() {
        OutputFormat::Text => run_with_sink(settings, TextSink::new(writer), counter),
        OutputFormat::Json => run_with_sink(settings, JsonSink::new(writer), counter),
        OutputFormat::Csv => run_with_sink(settings, CsvSink::new(writer)?, counter),
    }
}

pub fn run_with_sink<C: SessionSettings, S: OutputSink>(
    settings: &C,
    sink: S,
    counter: TicketCounter,
) -> Result<SessionReport> {
    let cinema = Cinema::with_capacity(settings.cinema_name(), settings.capacity(), sink)?;
    let mut engine = SessionEngine::new(cinema, counter);
    engine.run(&settings.plan())
}
