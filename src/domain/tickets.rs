use crate::domain::model::{
    scale_price, DetailLine, TicketCounter, TicketDescription, TicketId, TicketKind, TicketOrder,
    CURRENCY, IMAX_3D_SURCHARGE, TAX_RATE, VIP_SERVICE_FEE,
};
use crate::domain::ports::Ticket;
use crate::utils::error::{Result, TicketingError};
use crate::utils::validation::{validate_positive_price, validate_required_field};
use rust_decimal::Decimal;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Fields every ticket carries. The price is always strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketCore {
    id: TicketId,
    movie_name: String,
    price: Decimal,
}

impl TicketCore {
    /// 先驗證價格再取號，失敗的建構不會佔用編號
    pub fn new(counter: &TicketCounter, movie_name: impl Into<String>, price: Decimal) -> Result<Self> {
        validate_positive_price("price", price)?;
        let id = counter.issue();
        let movie_name = movie_name.into();
        tracing::debug!("🎟️ Issued ticket #{} for '{}' at {}", id, movie_name, price);

        Ok(Self {
            id,
            movie_name,
            price,
        })
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn movie_name(&self) -> &str {
        &self.movie_name
    }

    pub fn set_movie_name(&mut self, movie_name: String) {
        self.movie_name = movie_name;
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// 價格在寫入時已確認乘上稅率不會溢位
    pub fn price_after_tax(&self) -> Decimal {
        self.price * TAX_RATE
    }

    pub fn set_price(&mut self, price: Decimal) -> Result<()> {
        validate_positive_price("price", price)?;
        tracing::debug!("Ticket #{} price set directly: {}", self.id, price);
        self.price = price;
        Ok(())
    }

    pub fn set_price_scaled(&mut self, base_price: Decimal, multiplier: Decimal) -> Result<()> {
        let price = scale_price(base_price, multiplier)?;
        tracing::debug!(
            "Ticket #{} price set with multiplier: {} x {} = {}",
            self.id,
            base_price,
            multiplier,
            price
        );
        self.set_price(price)
    }

    pub fn describe(&self, kind: TicketKind) -> TicketDescription {
        TicketDescription {
            id: self.id,
            kind,
            movie_name: self.movie_name.clone(),
            price: self.price,
            price_after_tax: self.price_after_tax(),
            details: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardTicket {
    core: TicketCore,
    seat_number: String,
}

impl StandardTicket {
    pub fn new(
        counter: &TicketCounter,
        movie_name: impl Into<String>,
        price: Decimal,
        seat_number: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            core: TicketCore::new(counter, movie_name, price)?,
            seat_number: seat_number.into(),
        })
    }

    pub fn seat_number(&self) -> &str {
        &self.seat_number
    }

    pub fn set_seat_number(&mut self, seat_number: String) {
        self.seat_number = seat_number;
    }
}

impl Ticket for StandardTicket {
    fn core(&self) -> &TicketCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TicketCore {
        &mut self.core
    }

    fn kind(&self) -> TicketKind {
        TicketKind::Standard
    }

    fn describe(&self) -> TicketDescription {
        let mut description = self.core.describe(self.kind());
        description.push_line(DetailLine::new().field("Seat", &self.seat_number));
        description
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VipTicket {
    core: TicketCore,
    lounge_access: bool,
    service_fee: Decimal,
}

impl VipTicket {
    pub fn new(
        counter: &TicketCounter,
        movie_name: impl Into<String>,
        price: Decimal,
        lounge_access: bool,
    ) -> Result<Self> {
        Ok(Self {
            core: TicketCore::new(counter, movie_name, price)?,
            lounge_access,
            service_fee: VIP_SERVICE_FEE,
        })
    }

    pub fn lounge_access(&self) -> bool {
        self.lounge_access
    }

    pub fn set_lounge_access(&mut self, lounge_access: bool) {
        self.lounge_access = lounge_access;
    }

    pub fn service_fee(&self) -> Decimal {
        self.service_fee
    }
}

impl Ticket for VipTicket {
    fn core(&self) -> &TicketCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TicketCore {
        &mut self.core
    }

    fn kind(&self) -> TicketKind {
        TicketKind::Vip
    }

    fn describe(&self) -> TicketDescription {
        let mut description = self.core.describe(self.kind());
        description.push_line(
            DetailLine::new()
                .field("Lounge", yes_no(self.lounge_access))
                .field("Service Fee", format!("{} {}", self.service_fee, CURRENCY)),
        );
        description
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImaxTicket {
    core: TicketCore,
    is_3d: bool,
}

impl ImaxTicket {
    /// 3D 場次在驗證前先加上附加費
    pub fn new(
        counter: &TicketCounter,
        movie_name: impl Into<String>,
        price: Decimal,
        is_3d: bool,
    ) -> Result<Self> {
        let price = if is_3d {
            price.checked_add(IMAX_3D_SURCHARGE).ok_or_else(|| {
                TicketingError::invalid_argument("price", price, "Price plus 3D surcharge overflows")
            })?
        } else {
            price
        };
        Ok(Self {
            core: TicketCore::new(counter, movie_name, price)?,
            is_3d,
        })
    }

    pub fn is_3d(&self) -> bool {
        self.is_3d
    }
}

impl Ticket for ImaxTicket {
    fn core(&self) -> &TicketCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TicketCore {
        &mut self.core
    }

    fn kind(&self) -> TicketKind {
        TicketKind::Imax
    }

    fn describe(&self) -> TicketDescription {
        let mut description = self.core.describe(self.kind());
        description.push_line(DetailLine::new().field("IMAX 3D", yes_no(self.is_3d)));
        description
    }
}

impl TicketOrder {
    /// Builds the ticket variant this order asks for.
    pub fn issue(&self, counter: &TicketCounter) -> Result<Box<dyn Ticket>> {
        let ticket: Box<dyn Ticket> = match self.kind {
            TicketKind::Standard => {
                let seat = validate_required_field("seat", &self.seat)?;
                Box::new(StandardTicket::new(counter, &self.movie, self.price, seat)?)
            }
            TicketKind::Vip => {
                let lounge = validate_required_field("lounge", &self.lounge)?;
                Box::new(VipTicket::new(counter, &self.movie, self.price, *lounge)?)
            }
            TicketKind::Imax => {
                let is_3d = validate_required_field("is_3d", &self.is_3d)?;
                Box::new(ImaxTicket::new(counter, &self.movie, self.price, *is_3d)?)
            }
        };
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TicketingError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_ticket_repricing() {
        let counter = TicketCounter::new();
        let mut ticket = StandardTicket::new(&counter, "Inception", dec!(120), "A-5").unwrap();

        ticket.set_price(dec!(150)).unwrap();
        assert_eq!(ticket.price(), dec!(150));

        ticket.set_price_scaled(dec!(100), dec!(1.5)).unwrap();
        assert_eq!(ticket.price(), dec!(150));
        assert_eq!(ticket.price_after_tax(), dec!(171.00));
    }

    #[test]
    fn test_scaled_setter_matches_direct_setter() {
        let counter = TicketCounter::new();
        let mut scaled = StandardTicket::new(&counter, "Heat", dec!(10), "B-1").unwrap();
        let mut direct = scaled.clone();

        scaled.set_price_scaled(dec!(80), dec!(0.75)).unwrap();
        direct.set_price(dec!(80) * dec!(0.75)).unwrap();
        assert_eq!(scaled.price(), direct.price());

        assert!(scaled.set_price_scaled(dec!(80), dec!(-1)).is_err());
        assert!(direct.set_price(dec!(-80)).is_err());
        assert_eq!(scaled.price(), direct.price());
    }

    #[test]
    fn test_scaled_setter_rejects_overflow() {
        let counter = TicketCounter::new();
        let mut ticket = StandardTicket::new(&counter, "Heat", dec!(90), "B-2").unwrap();

        let err = ticket.set_price_scaled(Decimal::MAX, dec!(2)).unwrap_err();
        assert!(matches!(err, TicketingError::InvalidArgument { .. }));
        assert_eq!(ticket.price(), dec!(90));

        // 乘積本身不溢位，但含稅價格會溢位
        assert!(ticket.set_price_scaled(dec!(35000000000000000000000000000), dec!(2)).is_err());
        assert_eq!(ticket.price(), dec!(90));
    }

    #[test]
    fn test_invalid_price_is_rejected_and_keeps_old_value() {
        let counter = TicketCounter::new();
        let mut ticket = VipTicket::new(&counter, "Avengers", dec!(200), true).unwrap();

        let err = ticket.set_price(dec!(0)).unwrap_err();
        assert!(matches!(err, TicketingError::InvalidArgument { .. }));
        assert_eq!(ticket.price(), dec!(200));
    }

    #[test]
    fn test_failed_construction_does_not_consume_an_id() {
        let counter = TicketCounter::new();
        assert!(StandardTicket::new(&counter, "Inception", dec!(0), "A-1").is_err());
        assert!(VipTicket::new(&counter, "Inception", dec!(-10), false).is_err());
        assert_eq!(counter.total_issued(), 0);

        let ticket = StandardTicket::new(&counter, "Inception", dec!(1), "A-1").unwrap();
        assert_eq!(ticket.id(), TicketId(1));
    }

    #[test]
    fn test_vip_ticket() {
        let counter = TicketCounter::new();
        let ticket = VipTicket::new(&counter, "Avengers", dec!(200), true).unwrap();
        assert_eq!(ticket.service_fee(), dec!(50));
        assert_eq!(ticket.price_after_tax(), dec!(228.00));
        assert!(ticket.lounge_access());
    }

    #[test]
    fn test_imax_surcharge() {
        let counter = TicketCounter::new();
        let flat = ImaxTicket::new(&counter, "Dune", dec!(180), false).unwrap();
        let three_d = ImaxTicket::new(&counter, "Dune", dec!(180), true).unwrap();
        assert_eq!(flat.price(), dec!(180));
        assert_eq!(three_d.price(), dec!(210));

        // 附加費在驗證之前計算
        assert!(ImaxTicket::new(&counter, "Dune", dec!(-20), true).is_ok());
        assert!(ImaxTicket::new(&counter, "Dune", dec!(-30), true).is_err());
        assert!(ImaxTicket::new(&counter, "Dune", dec!(-20), false).is_err());
    }

    #[test]
    fn test_imax_rejects_prices_near_decimal_max() {
        let counter = TicketCounter::new();

        let err = ImaxTicket::new(&counter, "Dune", Decimal::MAX, true).unwrap_err();
        assert!(matches!(err, TicketingError::InvalidArgument { .. }));
        assert!(ImaxTicket::new(&counter, "Dune", Decimal::MAX - dec!(10), false).is_err());
        assert!(ImaxTicket::new(&counter, "Dune", dec!(69999999999999999999999999970), true).is_err());
        assert_eq!(counter.total_issued(), 0);

        let ticket = ImaxTicket::new(&counter, "Dune", dec!(50000000000000000000000000000), true).unwrap();
        assert_eq!(ticket.price(), dec!(50000000000000000000000000030));
        assert_eq!(ticket.id(), TicketId(1));
    }

    #[test]
    fn test_ids_are_shared_across_variants() {
        let counter = TicketCounter::new();
        let a = StandardTicket::new(&counter, "A", dec!(1), "A-1").unwrap();
        let b = VipTicket::new(&counter, "B", dec!(1), false).unwrap();
        let c = ImaxTicket::new(&counter, "C", dec!(1), true).unwrap();
        assert_eq!(
            vec![a.id(), b.id(), c.id()],
            vec![TicketId(1), TicketId(2), TicketId(3)]
        );
        assert_eq!(counter.total_issued(), 3);
    }

    #[test]
    fn test_variant_descriptions_extend_the_base() {
        let counter = TicketCounter::new();
        let standard = StandardTicket::new(&counter, "Inception", dec!(150), "A-5").unwrap();
        let vip = VipTicket::new(&counter, "Avengers", dec!(200), false).unwrap();
        let imax = ImaxTicket::new(&counter, "Dune", dec!(180), true).unwrap();

        assert_eq!(
            standard.describe().lines(),
            vec![
                "Ticket #1 | Inception | Price: 150 EGP | After Tax: 171.00 EGP",
                "  Seat: A-5",
            ]
        );
        assert_eq!(
            vip.describe().lines(),
            vec![
                "Ticket #2 | Avengers | Price: 200 EGP | After Tax: 228.00 EGP",
                "  Lounge: No | Service Fee: 50 EGP",
            ]
        );
        assert_eq!(
            imax.describe().lines(),
            vec![
                "Ticket #3 | Dune | Price: 210 EGP | After Tax: 239.40 EGP",
                "  IMAX 3D: Yes",
            ]
        );
    }

    #[test]
    fn test_description_tracks_current_price() {
        let counter = TicketCounter::new();
        let mut ticket = StandardTicket::new(&counter, "Inception", dec!(120), "A-5").unwrap();
        ticket.set_price(dec!(100)).unwrap();
        ticket.set_movie_name("Tenet".to_string());

        let description = ticket.describe();
        assert_eq!(description.movie_name, "Tenet");
        assert_eq!(description.price, dec!(100));
        assert_eq!(description.price_after_tax, dec!(114));
    }

    #[test]
    fn test_order_issue_requires_kind_fields() {
        let counter = TicketCounter::new();
        let mut order = TicketOrder::standard("Inception", dec!(120), "A-5");
        order.seat = None;

        let err = order.issue(&counter).unwrap_err();
        assert!(matches!(err, TicketingError::MissingField { .. }));
        assert_eq!(counter.total_issued(), 0);

        let ticket = TicketOrder::imax("Dune", dec!(180), true)
            .issue(&counter)
            .unwrap();
        assert_eq!(ticket.kind(), TicketKind::Imax);
        assert_eq!(ticket.price(), dec!(210));
    }
}
