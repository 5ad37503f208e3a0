//! Purchase cart: validation, pricing, and seat accounting.
//!
//! The cart is the core of the system. It accumulates validated
//! [`TicketRequest`]s one call at a time, enforces the cross-request business
//! rules (adult accompaniment, per-purchase ticket limit, infant-to-adult
//! ratio), and maintains two derived figures the rest of the flow depends on:
//! the running total and the seat-eligible ticket count.
//!
//! A cart belongs to exactly one purchase session. It is mutated only through
//! [`Cart::accept`] and [`Cart::accept_batch`], and every rejection leaves it
//! byte-for-byte unchanged, so a caller can correct its input and resubmit.
//!
//! # Validation order
//!
//! The checks run in a fixed order because later checks depend on earlier
//! ones having passed:
//!
//! 1. request value is well-formed (boundary guard)
//! 2. child/infant tickets have an accompanying adult
//! 3. the cumulative ticket count stays within [`MAX_TICKETS`]
//! 4. the ticket type has a catalog entry
//! 5. infants do not outnumber the adults whose laps they sit on

use crate::catalog::TicketCatalog;
use crate::error::PurchaseError;
use crate::types::{Money, TicketRequest, TicketType};
use serde::{Deserialize, Serialize};

/// Maximum number of tickets a single purchase may contain.
pub const MAX_TICKETS: u32 = 20;

/// One accepted ticket: its type and the unit price it was accepted at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Type of the accepted ticket.
    pub ticket_type: TicketType,
    /// Catalog unit price at acceptance time.
    pub unit_price: Money,
}

/// Accumulates validated ticket requests for one purchase session.
///
/// Invariants, which hold after every call:
/// - the running total equals the sum of `unit_price` over all entries
/// - the entry count never exceeds [`MAX_TICKETS`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
    total: Money,
}

impl Cart {
    /// Creates an empty cart priced against [`TicketCatalog::STANDARD`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            total: Money::new(0),
        }
    }

    /// Validates a request and, on success, adds its tickets to the cart.
    ///
    /// All-or-nothing: a rejected request leaves the cart's entries and total
    /// exactly as they were before the call.
    ///
    /// Accompaniment is judged against tickets already accepted at the time
    /// of this call. Callers must submit the adult request before dependent
    /// child or infant requests, or submit them together via
    /// [`Cart::accept_batch`].
    ///
    /// # Errors
    ///
    /// Returns the first failing check among [`PurchaseError::InvalidRequest`],
    /// [`PurchaseError::UnaccompaniedMinor`],
    /// [`PurchaseError::TicketLimitExceeded`],
    /// [`PurchaseError::InvalidTicketType`], and
    /// [`PurchaseError::InfantAdultRatioExceeded`].
    pub fn accept(&mut self, request: &TicketRequest) -> Result<(), PurchaseError> {
        let unit_price = self
            .validate(request, false)
            .inspect_err(|err| {
                tracing::debug!(kind = err.kind(), %err, "ticket request rejected");
            })?;
        self.commit(request, unit_price);
        Ok(())
    }

    /// Validates and accepts a batch of requests as one submission.
    ///
    /// The adult-accompaniment check treats an adult request anywhere in the
    /// batch as accompanying the batch's child and infant requests. The
    /// infant-to-adult ratio still counts accepted adults only, so an adult
    /// request must precede the infant requests it seats within the batch.
    ///
    /// All-or-nothing: if any request in the batch is rejected, the cart is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered, with the same kinds as
    /// [`Cart::accept`].
    pub fn accept_batch(&mut self, requests: &[TicketRequest]) -> Result<(), PurchaseError> {
        let adult_in_batch = requests
            .iter()
            .any(|request| request.ticket_type() == TicketType::Adult);

        let mut staged = self.clone();
        for request in requests {
            let unit_price = staged
                .validate(request, adult_in_batch)
                .inspect_err(|err| {
                    tracing::debug!(kind = err.kind(), %err, "ticket batch rejected");
                })?;
            staged.commit(request, unit_price);
        }
        *self = staged;
        Ok(())
    }

    /// Total price of all accepted tickets.
    #[must_use]
    pub const fn total_price(&self) -> Money {
        self.total
    }

    /// Number of accepted tickets that occupy a seat (infants excluded).
    #[must_use]
    pub fn seat_eligible_count(&self) -> u32 {
        self.count_where(|entry| entry.ticket_type.occupies_seat())
    }

    /// Total number of accepted tickets, infants included.
    #[must_use]
    pub fn ticket_count(&self) -> u32 {
        self.count_where(|_| true)
    }

    /// Whether the cart holds no accepted tickets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of the accepted entries, in acceptance order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Runs the validation chain and returns the catalog unit price the
    /// request would be accepted at. Does not mutate the cart.
    fn validate(
        &self,
        request: &TicketRequest,
        adult_in_batch: bool,
    ) -> Result<Money, PurchaseError> {
        // A TicketRequest is validated at construction, but a value
        // deserialized from untrusted input can still carry a zero count.
        if request.count() == 0 {
            return Err(PurchaseError::InvalidRequest);
        }

        let ticket_type = request.ticket_type();
        if ticket_type != TicketType::Adult
            && !adult_in_batch
            && self.count_of(TicketType::Adult) == 0
        {
            return Err(PurchaseError::UnaccompaniedMinor);
        }

        if self.ticket_count().saturating_add(request.count()) > MAX_TICKETS {
            return Err(PurchaseError::TicketLimitExceeded {
                limit: MAX_TICKETS,
            });
        }

        let unit_price = TicketCatalog::STANDARD
            .unit_price(ticket_type)
            .ok_or_else(|| PurchaseError::InvalidTicketType {
                given: ticket_type.to_string(),
            })?;

        if ticket_type == TicketType::Infant {
            let adults = self.count_of(TicketType::Adult);
            if request.count() > adults {
                return Err(PurchaseError::InfantAdultRatioExceeded {
                    infants: request.count(),
                    adults,
                });
            }
        }

        Ok(unit_price)
    }

    /// Appends the request's tickets and updates the running total.
    fn commit(&mut self, request: &TicketRequest, unit_price: Money) {
        let entry = CartEntry {
            ticket_type: request.ticket_type(),
            unit_price,
        };
        for _ in 0..request.count() {
            self.entries.push(entry);
        }
        // Bounded by MAX_TICKETS and the fixed catalog, so cannot overflow.
        self.total = self.total.add(unit_price.multiply(request.count()));
        tracing::debug!(
            ticket_type = %entry.ticket_type,
            count = request.count(),
            total = %self.total,
            "tickets accepted into cart"
        );
    }

    fn count_of(&self, ticket_type: TicketType) -> u32 {
        self.count_where(|entry| entry.ticket_type == ticket_type)
    }

    fn count_where(&self, predicate: impl Fn(&CartEntry) -> bool) -> u32 {
        let count = self.entries.iter().filter(|entry| predicate(entry)).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}
