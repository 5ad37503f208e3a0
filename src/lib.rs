//! Cinema ticket purchasing: validation, pricing, and purchase coordination.
//!
//! This crate validates and prices cinema ticket purchase requests, then
//! coordinates payment and seat reservation through two external services.
//! The core is the [`Cart`]: it enforces the business rules (ticket-type
//! eligibility, the 20-ticket cap, the infant-to-adult ratio), computes the
//! running total, and determines how many seats to allocate. The payment and
//! seat reservation gateways are opaque collaborators behind thin adapters.
//!
//! # Flow
//!
//! ```text
//! TicketRequest ──▶ Cart::accept ──▶ validated entries + running total
//!                                          │
//!                         BoxOffice::purchase(account_id)
//!                                          │
//!                    PaymentAdapter::charge(total_price)
//!                                          │ on success
//!               SeatReservationAdapter::reserve(seat_eligible_count)
//! ```
//!
//! # Business rules
//!
//! - Prices are fixed: ADULT=£20, CHILD=£10, INFANT=£0.
//! - At most [`MAX_TICKETS`] tickets per purchase.
//! - Child and infant tickets require an adult in the same cart; the adult
//!   must be submitted first or in the same batch.
//! - Infants sit on adult laps: they occupy no seat, and a request may not
//!   bring more infants than there are adults to seat them.
//!
//! Every failure is a typed [`PurchaseError`]; rejections never mutate the
//! cart, so callers can correct their input and resubmit.
//!
//! # Example
//!
//! ```
//! use cinema_tickets::{
//!     AccountId, BoxOffice, MockPaymentService, MockSeatReservationService,
//!     Money, PaymentAdapter, SeatReservationAdapter, TicketRequest, TicketType,
//! };
//!
//! # fn main() -> Result<(), cinema_tickets::PurchaseError> {
//! let mut session = BoxOffice::new(
//!     PaymentAdapter::new(MockPaymentService::shared()),
//!     SeatReservationAdapter::new(MockSeatReservationService::shared()),
//! );
//! session.add(&TicketRequest::new(TicketType::Adult, 2)?)?;
//! session.add(&TicketRequest::new(TicketType::Child, 1)?)?;
//!
//! let receipt = session.purchase(AccountId::new(1))?;
//! assert_eq!(receipt.amount_charged, Money::new(50));
//! assert_eq!(receipt.seats_reserved, 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Single-threaded and synchronous by design: a cart is owned by exactly one
//! purchase session and is never shared. A host that parallelizes purchase
//! sessions gives each session its own [`Cart`]; there is no cross-cart
//! shared mutable state and no locking.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod box_office;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod gateway;
pub mod types;

pub use box_office::{BoxOffice, Receipt};
pub use cart::{Cart, CartEntry, MAX_TICKETS};
pub use catalog::TicketCatalog;
pub use error::{GatewayError, PurchaseError};
pub use gateway::{
    MockPaymentService, MockSeatReservationService, PaymentAdapter, SeatReservationAdapter,
    SeatReservationService, TicketPaymentService,
};
pub use types::{AccountId, Money, TicketRequest, TicketType};
