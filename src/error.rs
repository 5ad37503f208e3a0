//! Failure taxonomy for the purchase flow.
//!
//! Every failure in the core is recoverable and surfaces to the caller as a
//! typed [`PurchaseError`]; nothing is logged-and-swallowed. Failures raised
//! by the external gateways are wrapped without modification so callers see
//! the service's own message.

use thiserror::Error;

/// Failure reported by an external gateway (payment or seat reservation).
///
/// The gateways are opaque collaborators: beyond their call signature the
/// only thing the core knows about a failure is its message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    /// Human-readable failure description from the external service.
    pub message: String,
}

impl GatewayError {
    /// Creates a gateway error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors raised while validating, pricing, or completing a ticket purchase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Malformed purchase request value reached the cart boundary.
    #[error("invalid request: a validated ticket request is required")]
    InvalidRequest,

    /// Ticket type outside the enumerated set.
    #[error("invalid ticket type: {given} (expected ADULT, CHILD, or INFANT)")]
    InvalidTicketType {
        /// The rejected type name.
        given: String,
    },

    /// Non-positive or non-integer ticket count.
    #[error("invalid ticket count: {given} (must be a positive integer)")]
    InvalidTicketCount {
        /// The rejected count.
        given: i64,
    },

    /// Child or infant tickets submitted with no adult ticket in the cart
    /// or in the same submission batch.
    #[error("cannot add infant or child tickets without purchasing an adult ticket first")]
    UnaccompaniedMinor,

    /// Accepting the request would exceed the per-purchase ticket limit.
    #[error("cannot purchase more than {limit} tickets at a time")]
    TicketLimitExceeded {
        /// The per-purchase maximum.
        limit: u32,
    },

    /// More infants than there are adult laps to seat them on.
    #[error("{infants} infant tickets exceed the {adults} adult tickets in the cart")]
    InfantAdultRatioExceeded {
        /// Infant tickets in the rejected request.
        infants: u32,
        /// Adult tickets currently accepted.
        adults: u32,
    },

    /// Payment attempted with a zero amount.
    #[error("payment amount must be greater than zero")]
    InvalidAmount,

    /// Payment or reservation attempted with a non-positive account id.
    #[error("invalid account id: purchase cannot be confirmed")]
    InvalidAccount,

    /// Seat reservation attempted with no seat-eligible tickets.
    #[error("no tickets eligible for seat reservation")]
    NoTicketsToReserve,

    /// The external payment service rejected the charge.
    #[error("payment failed: {0}")]
    Payment(#[source] GatewayError),

    /// The external seat reservation service rejected the allocation.
    #[error("seat reservation failed: {0}")]
    Reservation(#[source] GatewayError),
}

impl PurchaseError {
    /// Short machine-readable name of the error kind, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidTicketType { .. } => "invalid_ticket_type",
            Self::InvalidTicketCount { .. } => "invalid_ticket_count",
            Self::UnaccompaniedMinor => "unaccompanied_minor",
            Self::TicketLimitExceeded { .. } => "ticket_limit_exceeded",
            Self::InfantAdultRatioExceeded { .. } => "infant_adult_ratio_exceeded",
            Self::InvalidAmount => "invalid_amount",
            Self::InvalidAccount => "invalid_account",
            Self::NoTicketsToReserve => "no_tickets_to_reserve",
            Self::Payment(_) => "payment_failed",
            Self::Reservation(_) => "reservation_failed",
        }
    }
}
