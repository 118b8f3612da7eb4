use crate::domain::model::{TicketDescription, TicketId, TicketKind};
use crate::domain::tickets::TicketCore;
use crate::utils::error::Result;
use rust_decimal::Decimal;
use std::fmt::Debug;

/// Shared ticket behaviour. Implementors only expose their [`TicketCore`];
/// pricing and the base rendering come from the provided methods.
pub trait Ticket: Debug + Send + Sync {
    fn core(&self) -> &TicketCore;
    fn core_mut(&mut self) -> &mut TicketCore;
    fn kind(&self) -> TicketKind;

    fn id(&self) -> TicketId {
        self.core().id()
    }

    fn movie_name(&self) -> &str {
        self.core().movie_name()
    }

    fn set_movie_name(&mut self, movie_name: String) {
        self.core_mut().set_movie_name(movie_name);
    }

    fn price(&self) -> Decimal {
        self.core().price()
    }

    fn price_after_tax(&self) -> Decimal {
        self.core().price_after_tax()
    }

    fn set_price(&mut self, price: Decimal) -> Result<()> {
        self.core_mut().set_price(price)
    }

    fn set_price_scaled(&mut self, base_price: Decimal, multiplier: Decimal) -> Result<()> {
        self.core_mut().set_price_scaled(base_price, multiplier)
    }

    /// 子類別覆寫時應先取得基底描述，再附加自己的欄位
    fn describe(&self) -> TicketDescription {
        self.core().describe(self.kind())
    }
}

/// Destination for everything a cinema session prints.
pub trait OutputSink {
    fn banner(&mut self, title: &str) -> Result<()>;
    fn line(&mut self, text: &str) -> Result<()>;
    fn ticket(&mut self, description: &TicketDescription) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
