pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{toml_config::TomlConfig, OutputFormat, SessionSettings};

pub use adapters::{CsvSink, JsonSink, TextSink};
pub use crate::core::{
    cinema::{Admission, Cinema},
    projector::Projector,
    session::{SessionEngine, SessionPlan, SessionReport},
};
pub use domain::model::{
    total_issued, PriceChange, TicketCounter, TicketDescription, TicketId, TicketKind, TicketOrder,
};
pub use domain::ports::{OutputSink, Ticket};
pub use domain::tickets::{ImaxTicket, StandardTicket, TicketCore, VipTicket};
pub use utils::error::{Result, TicketingError};
