//! Seat reservation gateway adapter.
//!
//! Mirrors the payment adapter: [`SeatReservationService`] abstracts the
//! external seat allocation capability, and [`SeatReservationAdapter`] checks
//! preconditions before passing the call through. The seat count handed to
//! [`SeatReservationAdapter::reserve`] must come from
//! [`Cart::seat_eligible_count`](crate::Cart::seat_eligible_count) — infants
//! sit on laps and are never allocated seats.

use crate::error::{GatewayError, PurchaseError};
use crate::types::AccountId;
use std::sync::Arc;

/// Abstraction over the external seat allocation service.
pub trait SeatReservationService: Send + Sync {
    /// Reserves `seat_count` seats for the given account.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the external service rejects the
    /// allocation.
    fn reserve_seats(&self, account_id: AccountId, seat_count: u32) -> Result<(), GatewayError>;
}

/// Thin call-through to a [`SeatReservationService`].
#[derive(Clone)]
pub struct SeatReservationAdapter {
    service: Arc<dyn SeatReservationService>,
}

impl SeatReservationAdapter {
    /// Creates an adapter over the given reservation service.
    #[must_use]
    pub fn new(service: Arc<dyn SeatReservationService>) -> Self {
        Self { service }
    }

    /// Reserves `seat_count` seats for `account_id`.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::NoTicketsToReserve`] if `seat_count` is zero
    /// - [`PurchaseError::InvalidAccount`] if `account_id` is zero
    /// - [`PurchaseError::Reservation`] carrying the service's own failure,
    ///   unmodified, if the external allocation is rejected
    pub fn reserve(&self, account_id: AccountId, seat_count: u32) -> Result<(), PurchaseError> {
        if seat_count == 0 {
            return Err(PurchaseError::NoTicketsToReserve);
        }
        if account_id.value() == 0 {
            return Err(PurchaseError::InvalidAccount);
        }

        tracing::info!(%account_id, seat_count, "reserving seats");
        self.service
            .reserve_seats(account_id, seat_count)
            .map_err(PurchaseError::Reservation)
    }
}

/// Mock seat reservation service that accepts every allocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockSeatReservationService;

impl MockSeatReservationService {
    /// Creates a new mock reservation service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationService> {
        Arc::new(Self::new())
    }
}

impl SeatReservationService for MockSeatReservationService {
    fn reserve_seats(&self, account_id: AccountId, seat_count: u32) -> Result<(), GatewayError> {
        tracing::info!(%account_id, seat_count, "mock seats reserved");
        Ok(())
    }
}
