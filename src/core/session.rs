use crate::core::cinema::Cinema;
use crate::domain::model::{PriceChange, TicketCounter, TicketOrder};
use crate::domain::ports::{OutputSink, Ticket};
use crate::utils::error::Result;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Tickets to issue during one session, in issuing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPlan {
    pub orders: Vec<TicketOrder>,
}

impl SessionPlan {
    pub fn new(orders: Vec<TicketOrder>) -> Self {
        Self { orders }
    }

    /// 內建示範場次：三種票各一張，Inception 重新定價兩次，Avengers 單獨處理
    pub fn demo() -> Self {
        Self::new(vec![
            TicketOrder::standard("Inception", Decimal::from(120), "A-5")
                .with_reprice(PriceChange::Direct {
                    price: Decimal::from(150),
                })
                .with_reprice(PriceChange::Scaled {
                    base: Decimal::from(100),
                    multiplier: Decimal::new(15, 1),
                }),
            TicketOrder::vip("Avengers", Decimal::from(200), true).featured(),
            TicketOrder::imax("Dune", Decimal::from(180), false),
        ])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub issued: usize,
    pub admitted: usize,
    pub rejected: usize,
    pub total_issued: u64,
}

/// Drives a cinema through one session: open, issue, register, print, close.
pub struct SessionEngine<S: OutputSink> {
    cinema: Cinema<S>,
    counter: TicketCounter,
}

impl<S: OutputSink> SessionEngine<S> {
    pub fn new(cinema: Cinema<S>, counter: TicketCounter) -> Self {
        Self { cinema, counter }
    }

    pub fn cinema(&self) -> &Cinema<S> {
        &self.cinema
    }

    pub fn into_cinema(self) -> Cinema<S> {
        self.cinema
    }

    /// Any rejected price aborts the session with the validation error.
    pub fn run(&mut self, plan: &SessionPlan) -> Result<SessionReport> {
        tracing::info!(
            "🚀 Starting session at {} with {} ticket orders",
            self.cinema.name(),
            plan.orders.len()
        );

        // Open
        self.cinema.open()?;

        // Issue
        self.cinema.sink_mut().banner("Ticket Issuing")?;
        let mut issued: Vec<(Arc<dyn Ticket>, bool)> = Vec::with_capacity(plan.orders.len());
        for order in &plan.orders {
            let mut ticket = order.issue(&self.counter)?;
            self.cinema
                .sink_mut()
                .line(&format!("Setting price directly: {}", ticket.price()))?;

            for change in &order.reprice {
                apply_price_change(&mut *ticket, change, self.cinema.sink_mut())?;
            }
            issued.push((Arc::from(ticket), order.featured));
        }

        // Register
        let mut report = SessionReport {
            issued: issued.len(),
            ..SessionReport::default()
        };
        for (ticket, _) in &issued {
            if self.cinema.add_ticket(Arc::clone(ticket)).is_admitted() {
                report.admitted += 1;
            } else {
                report.rejected += 1;
            }
        }

        // Print
        self.cinema.print_all()?;
        for (ticket, _) in issued.iter().filter(|(_, featured)| *featured) {
            Cinema::process_ticket(self.cinema.sink_mut(), &**ticket)?;
        }

        // Close
        self.cinema.close()?;
        self.cinema.sink_mut().finish()?;

        report.total_issued = self.counter.total_issued();
        tracing::info!(
            "✅ Session finished: {} issued, {} admitted, {} rejected",
            report.issued,
            report.admitted,
            report.rejected
        );
        if report.rejected > 0 {
            tracing::warn!("⚠️ {} tickets did not fit into {}", report.rejected, self.cinema.name());
        }

        Ok(report)
    }
}

pub fn apply_price_change<S: OutputSink + ?Sized>(
    ticket: &mut dyn Ticket,
    change: &PriceChange,
    sink: &mut S,
) -> Result<()> {
    let price = change.resolve()?;
    let text = match *change {
        PriceChange::Direct { .. } => format!("Setting price directly: {}", price),
        PriceChange::Scaled { base, multiplier } => format!(
            "Setting price with multiplier: {} x {} = {}",
            base, multiplier, price
        ),
    };
    sink.line(&text)?;
    ticket.set_price(price)
}
