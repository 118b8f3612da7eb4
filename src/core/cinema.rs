use crate::core::projector::Projector;
use crate::domain::model::CINEMA_CAPACITY;
use crate::domain::ports::{OutputSink, Ticket};
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_number;
use std::sync::Arc;

/// Result of registering a ticket with a [`Cinema`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted { slot: usize },
    Full,
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }
}

/// A cinema owns its projector, its output sink and a fixed number of
/// ticket slots. Occupied slots keep insertion order and are never reused.
pub struct Cinema<S: OutputSink> {
    name: String,
    projector: Projector,
    slots: Vec<Option<Arc<dyn Ticket>>>,
    sink: S,
}

impl<S: OutputSink> Cinema<S> {
    pub fn new(name: impl Into<String>, sink: S) -> Self {
        Self {
            name: name.into(),
            projector: Projector::new(),
            slots: vec![None; CINEMA_CAPACITY],
            sink,
        }
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize, sink: S) -> Result<Self> {
        validate_positive_number("capacity", capacity, 1)?;
        let mut cinema = Self::new(name, sink);
        cinema.slots = vec![None; capacity];
        Ok(cinema)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Registered tickets in insertion order.
    pub fn tickets(&self) -> impl Iterator<Item = &Arc<dyn Ticket>> {
        self.slots.iter().flatten()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn open(&mut self) -> Result<()> {
        tracing::info!("🎬 Opening {}", self.name);
        self.sink.banner("Cinema Opened")?;
        self.projector.start(&mut self.sink)
    }

    pub fn close(&mut self) -> Result<()> {
        tracing::info!("🎬 Closing {}", self.name);
        self.sink.banner("Cinema Closed")?;
        self.projector.stop(&mut self.sink)
    }

    /// 放進第一個空位；滿場時不報錯，只回傳 `Admission::Full`
    pub fn add_ticket(&mut self, ticket: Arc<dyn Ticket>) -> Admission {
        match self.slots.iter().position(Option::is_none) {
            Some(slot) => {
                tracing::debug!("Ticket #{} placed in slot {}", ticket.id(), slot);
                self.slots[slot] = Some(ticket);
                Admission::Admitted { slot }
            }
            None => {
                tracing::warn!(
                    "⚠️ {} is full ({} slots), ticket #{} was not added",
                    self.name,
                    self.capacity(),
                    ticket.id()
                );
                Admission::Full
            }
        }
    }

    pub fn print_all(&mut self) -> Result<()> {
        self.sink.banner("All Tickets")?;
        for ticket in self.slots.iter().flatten() {
            self.sink.ticket(&ticket.describe())?;
        }
        Ok(())
    }

    /// Renders a single ticket without touching any cinema state.
    pub fn process_ticket(sink: &mut S, ticket: &dyn Ticket) -> Result<()> {
        sink.banner("Process Single Ticket")?;
        sink.ticket(&ticket.describe())
    }
}

impl<S: OutputSink> std::fmt::Debug for Cinema<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cinema")
            .field("name", &self.name)
            .field("capacity", &self.capacity())
            .field("tickets", &self.len())
            .finish()
    }
}
