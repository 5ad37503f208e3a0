//! Property tests for the cart invariants: for any sequence of requests, the
//! running total matches the catalog, the ticket cap holds, and rejections
//! never change observable state.

#![allow(clippy::unwrap_used)]

use cinema_tickets::{Cart, MAX_TICKETS, TicketCatalog, TicketRequest, TicketType};
use proptest::prelude::*;

fn ticket_type_strategy() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

fn request_sequence() -> impl Strategy<Value = Vec<(TicketType, u32)>> {
    prop::collection::vec((ticket_type_strategy(), 1u32..=8), 0..12)
}

proptest! {
    #[test]
    fn invariants_hold_for_any_request_sequence(sequence in request_sequence()) {
        let mut cart = Cart::new();

        for (ticket_type, count) in sequence {
            let request = TicketRequest::new(ticket_type, count).unwrap();
            let total_before = cart.total_price();
            let count_before = cart.ticket_count();

            match cart.accept(&request) {
                Ok(()) => prop_assert_eq!(cart.ticket_count(), count_before + count),
                Err(_) => {
                    // Rejections are all-or-nothing.
                    prop_assert_eq!(cart.total_price(), total_before);
                    prop_assert_eq!(cart.ticket_count(), count_before);
                }
            }

            // Total always equals the catalog-priced sum over accepted entries.
            let catalog_sum: u64 = cart
                .entries()
                .iter()
                .map(|entry| {
                    TicketCatalog::STANDARD
                        .unit_price(entry.ticket_type)
                        .unwrap()
                        .amount()
                })
                .sum();
            prop_assert_eq!(cart.total_price().amount(), catalog_sum);

            // The per-purchase cap is never exceeded.
            prop_assert!(cart.ticket_count() <= MAX_TICKETS);
        }
    }

    #[test]
    fn seat_count_excludes_exactly_the_infants(sequence in request_sequence()) {
        let mut cart = Cart::new();
        for (ticket_type, count) in sequence {
            let request = TicketRequest::new(ticket_type, count).unwrap();
            let _ = cart.accept(&request);
        }

        let infants = cart
            .entries()
            .iter()
            .filter(|entry| entry.ticket_type == TicketType::Infant)
            .count();
        let seats = usize::try_from(cart.seat_eligible_count()).unwrap();
        prop_assert_eq!(seats + infants, cart.entries().len());
    }

    #[test]
    fn minors_are_never_accepted_into_an_empty_cart(
        ticket_type in prop_oneof![Just(TicketType::Child), Just(TicketType::Infant)],
        count in 1u32..=8,
    ) {
        let mut cart = Cart::new();
        let request = TicketRequest::new(ticket_type, count).unwrap();
        prop_assert!(cart.accept(&request).is_err());
        prop_assert!(cart.is_empty());
    }

    #[test]
    fn infants_never_outnumber_adult_laps(sequence in request_sequence()) {
        let mut cart = Cart::new();

        for (ticket_type, count) in sequence {
            let request = TicketRequest::new(ticket_type, count).unwrap();
            let adults_before = cart
                .entries()
                .iter()
                .filter(|entry| entry.ticket_type == TicketType::Adult)
                .count();

            if cart.accept(&request).is_ok() && ticket_type == TicketType::Infant {
                // An accepted infant request fit within the adult laps
                // available at the time of the call.
                prop_assert!(count <= u32::try_from(adults_before).unwrap());
            }
        }
    }
}
