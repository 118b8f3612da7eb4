// Adapters layer: concrete output devices behind the OutputSink port.

pub mod sink;

pub use sink::{CsvSink, JsonSink, TextSink};
