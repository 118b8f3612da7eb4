pub mod cinema;
pub mod projector;
pub mod session;

pub use crate::domain::model::{TicketCounter, TicketDescription, TicketKind, TicketOrder};
pub use crate::domain::ports::{OutputSink, Ticket};
pub use crate::utils::error::Result;
