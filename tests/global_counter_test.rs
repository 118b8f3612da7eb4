use cinema_ticketing::{total_issued, ImaxTicket, StandardTicket, Ticket, TicketCounter, VipTicket};
use rust_decimal_macros::dec;

// 全域計數器在同一個測試執行檔內共用，因此這裡只放一個測試
#[test]
fn test_total_issued_counts_every_variant() {
    let counter = TicketCounter::global();
    let before = total_issued();

    let first = StandardTicket::new(counter, "Inception", dec!(120), "A-5").unwrap();
    assert_eq!(total_issued(), before + 1);

    VipTicket::new(counter, "Avengers", dec!(200), true).unwrap();
    ImaxTicket::new(counter, "Dune", dec!(180), true).unwrap();
    assert_eq!(total_issued(), before + 3);

    assert!(StandardTicket::new(counter, "Inception", dec!(0), "A-6").is_err());
    assert_eq!(total_issued(), before + 3);

    assert_eq!(first.id().0, before + 1);
}
