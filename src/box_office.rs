//! One purchase session from ticket selection through seat reservation.
//!
//! [`BoxOffice`] ties the pieces together in the order the flow requires:
//! requests are validated into the [`Cart`], the cart total is charged
//! through the payment adapter, and only after a successful charge are the
//! seat-eligible tickets reserved. Each session owns its cart exclusively
//! and is discarded once the purchase completes.

use crate::cart::Cart;
use crate::error::PurchaseError;
use crate::gateway::{PaymentAdapter, SeatReservationAdapter};
use crate::types::{AccountId, Money, TicketRequest};
use serde::{Deserialize, Serialize};

/// Summary of a completed purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Account that was charged.
    pub account_id: AccountId,
    /// Amount charged through the payment gateway.
    pub amount_charged: Money,
    /// Seats reserved through the reservation gateway (infants excluded).
    pub seats_reserved: u32,
    /// Total tickets purchased, infants included.
    pub tickets: u32,
}

/// A single purchase session.
pub struct BoxOffice {
    cart: Cart,
    payments: PaymentAdapter,
    seating: SeatReservationAdapter,
}

impl BoxOffice {
    /// Opens a purchase session with an empty cart.
    #[must_use]
    pub fn new(payments: PaymentAdapter, seating: SeatReservationAdapter) -> Self {
        Self {
            cart: Cart::new(),
            payments,
            seating,
        }
    }

    /// Adds a validated ticket request to the session's cart.
    ///
    /// # Errors
    ///
    /// Returns the cart's rejection; see [`Cart::accept`].
    pub fn add(&mut self, request: &TicketRequest) -> Result<(), PurchaseError> {
        self.cart.accept(request)
    }

    /// Adds a batch of requests as a single submission.
    ///
    /// # Errors
    ///
    /// Returns the cart's rejection; see [`Cart::accept_batch`].
    pub fn add_batch(&mut self, requests: &[TicketRequest]) -> Result<(), PurchaseError> {
        self.cart.accept_batch(requests)
    }

    /// Read-only view of the session's cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Charges the cart total and reserves the seat-eligible tickets.
    ///
    /// Payment runs first; seats are only reserved after the charge
    /// succeeds. The cart itself is not consumed on failure, so a caller can
    /// retry with corrected input (a valid account id, for example).
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::NoTicketsToReserve`] if the cart holds no
    ///   seat-eligible tickets (checked before any external call)
    /// - any error of [`PaymentAdapter::charge`] or
    ///   [`SeatReservationAdapter::reserve`]
    pub fn purchase(&self, account_id: AccountId) -> Result<Receipt, PurchaseError> {
        let seats = self.cart.seat_eligible_count();
        if seats == 0 {
            return Err(PurchaseError::NoTicketsToReserve);
        }

        let amount = self.cart.total_price();
        self.payments.charge(account_id, amount)?;
        self.seating.reserve(account_id, seats)?;

        tracing::info!(
            %account_id,
            %amount,
            seats,
            tickets = self.cart.ticket_count(),
            "purchase completed"
        );
        Ok(Receipt {
            account_id,
            amount_charged: amount,
            seats_reserved: seats,
            tickets: self.cart.ticket_count(),
        })
    }
}
