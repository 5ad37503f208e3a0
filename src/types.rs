//! Domain value objects for the cinema ticketing core.
//!
//! Everything here is validated at construction and immutable afterwards.
//! Callers that start from untyped input (strings, raw integers) go through
//! [`TicketRequest::parse`]; callers that already hold typed values use
//! [`TicketRequest::new`].

use crate::error::PurchaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Ticket Type
// ============================================================================

/// The kinds of cinema ticket that can be purchased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    /// Full-price adult ticket.
    Adult,
    /// Reduced-price child ticket. Requires an accompanying adult.
    Child,
    /// Free infant ticket. Sits on an adult's lap and occupies no seat.
    Infant,
}

impl TicketType {
    /// Returns the wire name of the ticket type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Whether this ticket type occupies a seat of its own.
    #[must_use]
    pub const fn occupies_seat(&self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(PurchaseError::InvalidTicketType {
                given: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Money Value Object
// ============================================================================

/// Represents money in whole currency units.
///
/// Ticket prices are whole amounts, so there is no sub-unit precision to
/// track. Arithmetic is integer-only to avoid floating-point errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a `Money` value from whole currency units.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the amount in whole currency units.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Adds two money amounts.
    ///
    /// # Panics
    ///
    /// Panics if the addition would overflow.
    /// Use [`Money::checked_add`] for non-panicking addition.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn add(self, other: Self) -> Self {
        match self.checked_add(other) {
            Some(result) => result,
            None => panic!("Money::add overflow"),
        }
    }

    /// Multiplies money by a quantity with overflow checking.
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity.
    ///
    /// # Panics
    ///
    /// Panics if the multiplication would overflow.
    /// Use [`Money::checked_multiply`] for non-panicking multiplication.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn multiply(self, quantity: u32) -> Self {
        match self.checked_multiply(quantity) {
            Some(result) => result,
            None => panic!("Money::multiply overflow"),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}", self.0)
    }
}

// ============================================================================
// Account Identifier
// ============================================================================

/// Identifier for the account being charged.
///
/// The external payment and reservation contracts take a plain integer, so
/// zero is representable here; the gateway adapters reject it with
/// [`PurchaseError::InvalidAccount`] before any external call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(u64);

impl AccountId {
    /// Creates an `AccountId` from a raw integer.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw account id.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ticket Request
// ============================================================================

/// A validated request for `count` tickets of one type.
///
/// Immutable after construction: the only way to obtain one is through
/// [`TicketRequest::new`] or [`TicketRequest::parse`], both of which reject
/// invalid input, and there are no mutation paths afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketRequest {
    /// Creates a request for `count` tickets of `ticket_type`.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidTicketCount`] if `count` is zero.
    pub const fn new(ticket_type: TicketType, count: u32) -> Result<Self, PurchaseError> {
        if count == 0 {
            return Err(PurchaseError::InvalidTicketCount { given: 0 });
        }
        Ok(Self { ticket_type, count })
    }

    /// Creates a request from untyped boundary input.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidTicketType`] for an unknown type name
    /// and [`PurchaseError::InvalidTicketCount`] for a non-positive or
    /// out-of-range count.
    pub fn parse(ticket_type: &str, count: i64) -> Result<Self, PurchaseError> {
        let ticket_type = ticket_type.parse::<TicketType>()?;
        let count = u32::try_from(count)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(PurchaseError::InvalidTicketCount { given: count })?;
        Ok(Self { ticket_type, count })
    }

    /// Returns the requested ticket type.
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the number of tickets requested.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}
