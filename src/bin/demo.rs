//! Cinema Tickets Demo
//!
//! Walks one purchase session end to end: ticket selection with validation,
//! payment, and seat reservation against the mock gateways.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin demo
//! ```

use cinema_tickets::{
    AccountId, BoxOffice, MockPaymentService, MockSeatReservationService, PaymentAdapter,
    SeatReservationAdapter, TicketRequest, TicketType,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cinema_tickets=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("\n🎫 ============================================");
    println!("   Cinema Tickets - Purchase Demo");
    println!("============================================\n");

    let mut session = BoxOffice::new(
        PaymentAdapter::new(MockPaymentService::shared()),
        SeatReservationAdapter::new(MockSeatReservationService::shared()),
    );

    println!("📋 Selecting tickets: 2 adults, 2 children, 1 infant");
    session.add_batch(&[
        TicketRequest::new(TicketType::Adult, 2)?,
        TicketRequest::new(TicketType::Child, 2)?,
        TicketRequest::new(TicketType::Infant, 1)?,
    ])?;
    println!(
        "✓ Cart: {} tickets, {} seats, total {}\n",
        session.cart().ticket_count(),
        session.cart().seat_eligible_count(),
        session.cart().total_price(),
    );

    println!("🚫 Trying an infant-only addition (should be rejected)...");
    match session.add(&TicketRequest::new(TicketType::Infant, 5)?) {
        Ok(()) => println!("  unexpectedly accepted"),
        Err(err) => println!("  rejected as expected: {err}"),
    }
    println!(
        "✓ Cart unchanged: total {}\n",
        session.cart().total_price()
    );

    println!("💳 Purchasing for account 1...");
    let receipt = session.purchase(AccountId::new(1))?;
    println!(
        "✓ Charged {} and reserved {} seats for {} tickets\n",
        receipt.amount_charged, receipt.seats_reserved, receipt.tickets,
    );

    Ok(())
}
