//! Fixed per-type ticket price table.
//!
//! The catalog is process-wide read-only configuration: initialized once as
//! a `const`, never mutated. There is deliberately no runtime pricing
//! configuration.

use crate::types::{Money, TicketType};

/// Static mapping from ticket type to unit price.
#[derive(Clone, Copy, Debug)]
pub struct TicketCatalog {
    entries: [(TicketType, Money); 3],
}

impl TicketCatalog {
    /// The standard cinema price table: ADULT=£20, CHILD=£10, INFANT=£0.
    pub const STANDARD: Self = Self {
        entries: [
            (TicketType::Adult, Money::new(20)),
            (TicketType::Child, Money::new(10)),
            (TicketType::Infant, Money::new(0)),
        ],
    };

    /// Looks up the unit price for a ticket type.
    ///
    /// Returns `None` for a type with no catalog entry. Every [`TicketType`]
    /// variant has an entry in [`TicketCatalog::STANDARD`], so callers treat
    /// `None` as a defense-in-depth branch rather than an expected outcome.
    #[must_use]
    pub fn unit_price(&self, ticket_type: TicketType) -> Option<Money> {
        self.entries
            .iter()
            .find(|(entry_type, _)| *entry_type == ticket_type)
            .map(|&(_, price)| price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_prices() {
        let catalog = TicketCatalog::STANDARD;
        assert_eq!(catalog.unit_price(TicketType::Adult).unwrap(), Money::new(20));
        assert_eq!(catalog.unit_price(TicketType::Child).unwrap(), Money::new(10));
        assert_eq!(catalog.unit_price(TicketType::Infant).unwrap(), Money::new(0));
    }

    #[test]
    fn test_every_type_has_an_entry() {
        for ticket_type in [TicketType::Adult, TicketType::Child, TicketType::Infant] {
            assert!(TicketCatalog::STANDARD.unit_price(ticket_type).is_some());
        }
    }
}
