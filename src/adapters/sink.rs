use crate::domain::model::TicketDescription;
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::io::Write;

/// Line-oriented console rendering.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
    wrote_any: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            wrote_any: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.wrote_any = true;
        Ok(())
    }
}

impl<W: Write> OutputSink for TextSink<W> {
    fn banner(&mut self, title: &str) -> Result<()> {
        // 除了第一個區塊，標題前都空一行
        if self.wrote_any {
            writeln!(self.writer)?;
        }
        self.write_line(&format!("========== {} ==========", title))
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.write_line(text)
    }

    fn ticket(&mut self, description: &TicketDescription) -> Result<()> {
        for line in description.lines() {
            self.write_line(&line)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects every rendered ticket and writes them as one JSON array on finish.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
    tickets: Vec<TicketDescription>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tickets: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for JsonSink<W> {
    fn banner(&mut self, title: &str) -> Result<()> {
        tracing::debug!("JSON report skips banner '{}'", title);
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        tracing::debug!("JSON report skips line '{}'", text);
        Ok(())
    }

    fn ticket(&mut self, description: &TicketDescription) -> Result<()> {
        self.tickets.push(description.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let tickets = std::mem::take(&mut self.tickets);
        serde_json::to_writer_pretty(&mut self.writer, &tickets)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub const CSV_HEADER: [&str; 6] = [
    "id",
    "kind",
    "movie_name",
    "price",
    "price_after_tax",
    "details",
];

/// One CSV row per rendered ticket.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> Result<W> {
        let writer = self.writer.into_inner().map_err(|e| e.into_error())?;
        Ok(writer)
    }
}

impl<W: Write> OutputSink for CsvSink<W> {
    fn banner(&mut self, title: &str) -> Result<()> {
        tracing::debug!("CSV report skips banner '{}'", title);
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        tracing::debug!("CSV report skips line '{}'", text);
        Ok(())
    }

    fn ticket(&mut self, description: &TicketDescription) -> Result<()> {
        let details = description
            .details
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("; ");

        self.writer.write_record([
            description.id.to_string(),
            description.kind.to_string(),
            description.movie_name.clone(),
            description.price.to_string(),
            format!("{:.2}", description.rounded_price_after_tax()),
            details,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
