//! Adapters for the two external collaborators: payment and seat reservation.
//!
//! Both services are opaque beyond their call signature. The adapters enforce
//! the call preconditions, pass validated calls through synchronously, and
//! propagate service failures to the caller unmodified — no retries, no
//! timeouts, no masking. A caller wanting resilience adds that policy at this
//! boundary, not inside the cart.

pub mod payment;
pub mod seats;

pub use payment::{MockPaymentService, PaymentAdapter, TicketPaymentService};
pub use seats::{MockSeatReservationService, SeatReservationAdapter, SeatReservationService};
