use rust_decimal::{Decimal, RoundingStrategy};
use crate::utils::error::{Result, TicketingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// 14% 稅率，以乘數表示 (1.14)
pub const TAX_RATE: Decimal = Decimal::from_parts(114, 0, 0, false, 2);
pub const VIP_SERVICE_FEE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
pub const IMAX_3D_SURCHARGE: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
pub const CINEMA_CAPACITY: usize = 20;
pub const CURRENCY: &str = "EGP";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketId(pub u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static GLOBAL_COUNTER: OnceLock<TicketCounter> = OnceLock::new();

/// Monotonic ticket id source. Clones share the same underlying count.
#[derive(Debug, Clone, Default)]
pub struct TicketCounter {
    issued: Arc<AtomicU64>,
}

impl TicketCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide counter shared by every ticket built against it.
    pub fn global() -> &'static TicketCounter {
        GLOBAL_COUNTER.get_or_init(TicketCounter::new)
    }

    /// 先遞增再回傳，第一張票的編號為 1
    pub fn issue(&self) -> TicketId {
        TicketId(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn total_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

/// Number of tickets ever issued through [`TicketCounter::global`].
pub fn total_issued() -> u64 {
    TicketCounter::global().total_issued()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    Standard,
    Vip,
    Imax,
}

impl fmt::Display for TicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TicketKind::Standard => "Standard",
            TicketKind::Vip => "VIP",
            TicketKind::Imax => "IMAX",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DetailLine {
    pub fields: Vec<DetailField>,
}

impl DetailLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, label: &'static str, value: impl ToString) -> Self {
        self.fields.push(DetailField {
            label,
            value: value.to_string(),
        });
        self
    }
}

impl fmt::Display for DetailLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

/// Structured rendering of a ticket. The base fields come first, each
/// variant appends its own detail lines in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketDescription {
    pub id: TicketId,
    pub kind: TicketKind,
    pub movie_name: String,
    pub price: Decimal,
    pub price_after_tax: Decimal,
    pub details: Vec<DetailLine>,
}

impl TicketDescription {
    pub fn push_line(&mut self, line: DetailLine) {
        self.details.push(line);
    }

    /// 含稅價格，四捨五入到小數第二位
    pub fn rounded_price_after_tax(&self) -> Decimal {
        self.price_after_tax
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn headline(&self) -> String {
        format!(
            "Ticket #{} | {} | Price: {} {} | After Tax: {:.2} {}",
            self.id,
            self.movie_name,
            self.price,
            CURRENCY,
            self.rounded_price_after_tax(),
            CURRENCY
        )
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.headline()];
        lines.extend(self.details.iter().map(|line| format!("  {}", line)));
        lines
    }
}

impl fmt::Display for TicketDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// `base * multiplier`, failing instead of overflowing.
pub fn scale_price(base: Decimal, multiplier: Decimal) -> Result<Decimal> {
    base.checked_mul(multiplier).ok_or_else(|| {
        TicketingError::invalid_argument(
            "price",
            format!("{} x {}", base, multiplier),
            "Scaled price overflows",
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceChange {
    Scaled { base: Decimal, multiplier: Decimal },
    Direct { price: Decimal },
}

impl PriceChange {
    pub fn resolve(&self) -> Result<Decimal> {
        match *self {
            PriceChange::Scaled { base, multiplier } => scale_price(base, multiplier),
            PriceChange::Direct { price } => Ok(price),
        }
    }
}

/// Declarative ticket request, as read from a session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketOrder {
    pub kind: TicketKind,
    pub movie: String,
    pub price: Decimal,
    pub seat: Option<String>,
    pub lounge: Option<bool>,
    pub is_3d: Option<bool>,
    #[serde(default)]
    pub reprice: Vec<PriceChange>,
    #[serde(default)]
    pub featured: bool,
}

impl TicketOrder {
    fn base(kind: TicketKind, movie: &str, price: Decimal) -> Self {
        Self {
            kind,
            movie: movie.to_string(),
            price,
            seat: None,
            lounge: None,
            is_3d: None,
            reprice: Vec::new(),
            featured: false,
        }
    }

    pub fn standard(movie: &str, price: Decimal, seat: &str) -> Self {
        Self {
            seat: Some(seat.to_string()),
            ..Self::base(TicketKind::Standard, movie, price)
        }
    }

    pub fn vip(movie: &str, price: Decimal, lounge: bool) -> Self {
        Self {
            lounge: Some(lounge),
            ..Self::base(TicketKind::Vip, movie, price)
        }
    }

    pub fn imax(movie: &str, price: Decimal, is_3d: bool) -> Self {
        Self {
            is_3d: Some(is_3d),
            ..Self::base(TicketKind::Imax, movie, price)
        }
    }

    pub fn with_reprice(mut self, change: PriceChange) -> Self {
        self.reprice.push(change);
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}
