//! Payment gateway adapter.
//!
//! [`TicketPaymentService`] is the abstraction over the external payment
//! processor; in production it would be backed by a real provider
//! integration. [`PaymentAdapter`] is the thin call-through the purchase flow
//! uses: it checks the charge preconditions and delegates, propagating any
//! service failure unchanged.

use crate::error::{GatewayError, PurchaseError};
use crate::types::{AccountId, Money};
use std::sync::Arc;

/// Abstraction over the external payment authorization service.
pub trait TicketPaymentService: Send + Sync {
    /// Charges `amount` to the given account.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the external service rejects the charge.
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), GatewayError>;
}

/// Thin call-through to a [`TicketPaymentService`].
#[derive(Clone)]
pub struct PaymentAdapter {
    service: Arc<dyn TicketPaymentService>,
}

impl PaymentAdapter {
    /// Creates an adapter over the given payment service.
    #[must_use]
    pub fn new(service: Arc<dyn TicketPaymentService>) -> Self {
        Self { service }
    }

    /// Charges `amount` to `account_id` after checking the preconditions.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::InvalidAmount`] if `amount` is zero
    /// - [`PurchaseError::InvalidAccount`] if `account_id` is zero
    /// - [`PurchaseError::Payment`] carrying the service's own failure,
    ///   unmodified, if the external charge is rejected
    pub fn charge(&self, account_id: AccountId, amount: Money) -> Result<(), PurchaseError> {
        if amount.is_zero() {
            return Err(PurchaseError::InvalidAmount);
        }
        if account_id.value() == 0 {
            return Err(PurchaseError::InvalidAccount);
        }

        tracing::info!(%account_id, %amount, "charging payment service");
        self.service
            .make_payment(account_id, amount)
            .map_err(PurchaseError::Payment)
    }
}

/// Mock payment service that accepts every charge.
///
/// Stands in for a real provider integration in the demo and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockPaymentService;

impl MockPaymentService {
    /// Creates a new mock payment service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    #[must_use]
    pub fn shared() -> Arc<dyn TicketPaymentService> {
        Arc::new(Self::new())
    }
}

impl TicketPaymentService for MockPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), GatewayError> {
        tracing::info!(%account_id, %amount, "mock payment accepted");
        Ok(())
    }
}
