//! End-to-end purchase scenarios exercising the cart together with the
//! gateway adapters, using recording service doubles to verify exactly what
//! reaches the external collaborators.

#![allow(clippy::unwrap_used)]

use cinema_tickets::{
    AccountId, BoxOffice, GatewayError, Money, PaymentAdapter, PurchaseError,
    SeatReservationAdapter, SeatReservationService, TicketPaymentService, TicketRequest,
    TicketType,
};
use std::sync::{Arc, Mutex};

/// Payment double that records every charge it accepts.
#[derive(Default)]
struct RecordingPaymentService {
    charges: Mutex<Vec<(AccountId, Money)>>,
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), GatewayError> {
        self.charges.lock().unwrap().push((account_id, amount));
        Ok(())
    }
}

/// Reservation double that records every allocation it accepts.
#[derive(Default)]
struct RecordingSeatService {
    reservations: Mutex<Vec<(AccountId, u32)>>,
}

impl SeatReservationService for RecordingSeatService {
    fn reserve_seats(&self, account_id: AccountId, seat_count: u32) -> Result<(), GatewayError> {
        self.reservations
            .lock()
            .unwrap()
            .push((account_id, seat_count));
        Ok(())
    }
}

/// Payment double that declines every charge.
struct DecliningPaymentService;

impl TicketPaymentService for DecliningPaymentService {
    fn make_payment(&self, _: AccountId, _: Money) -> Result<(), GatewayError> {
        Err(GatewayError::new("insufficient funds"))
    }
}

fn request(ticket_type: TicketType, count: u32) -> TicketRequest {
    TicketRequest::new(ticket_type, count).unwrap()
}

#[test]
fn family_purchase_charges_total_and_reserves_non_infant_seats() {
    let payments = Arc::new(RecordingPaymentService::default());
    let seating = Arc::new(RecordingSeatService::default());

    let mut session = BoxOffice::new(
        PaymentAdapter::new(payments.clone()),
        SeatReservationAdapter::new(seating.clone()),
    );
    session.add(&request(TicketType::Adult, 2)).unwrap();
    session.add(&request(TicketType::Child, 3)).unwrap();
    session.add(&request(TicketType::Infant, 2)).unwrap();

    let receipt = session.purchase(AccountId::new(42)).unwrap();

    // 2×£20 + 3×£10 + 2×£0
    assert_eq!(receipt.amount_charged, Money::new(70));
    assert_eq!(receipt.seats_reserved, 5);
    assert_eq!(
        payments.charges.lock().unwrap().as_slice(),
        &[(AccountId::new(42), Money::new(70))]
    );
    assert_eq!(
        seating.reservations.lock().unwrap().as_slice(),
        &[(AccountId::new(42), 5)]
    );
}

#[test]
fn declined_payment_surfaces_and_skips_reservation() {
    let seating = Arc::new(RecordingSeatService::default());

    let mut session = BoxOffice::new(
        PaymentAdapter::new(Arc::new(DecliningPaymentService)),
        SeatReservationAdapter::new(seating.clone()),
    );
    session.add(&request(TicketType::Adult, 1)).unwrap();

    let result = session.purchase(AccountId::new(1));
    assert_eq!(
        result,
        Err(PurchaseError::Payment(GatewayError::new(
            "insufficient funds"
        )))
    );
    assert!(seating.reservations.lock().unwrap().is_empty());
}

#[test]
fn invalid_account_blocks_purchase_before_any_external_call() {
    let payments = Arc::new(RecordingPaymentService::default());
    let seating = Arc::new(RecordingSeatService::default());

    let mut session = BoxOffice::new(
        PaymentAdapter::new(payments.clone()),
        SeatReservationAdapter::new(seating.clone()),
    );
    session.add(&request(TicketType::Adult, 2)).unwrap();

    let result = session.purchase(AccountId::new(0));
    assert_eq!(result, Err(PurchaseError::InvalidAccount));
    assert!(payments.charges.lock().unwrap().is_empty());
    assert!(seating.reservations.lock().unwrap().is_empty());
}

#[test]
fn rejected_requests_never_reach_the_gateways() {
    let payments = Arc::new(RecordingPaymentService::default());
    let seating = Arc::new(RecordingSeatService::default());

    let mut session = BoxOffice::new(
        PaymentAdapter::new(payments.clone()),
        SeatReservationAdapter::new(seating.clone()),
    );

    assert_eq!(
        session.add(&request(TicketType::Child, 2)),
        Err(PurchaseError::UnaccompaniedMinor)
    );
    assert_eq!(
        session.add(&request(TicketType::Adult, 21)),
        Err(PurchaseError::TicketLimitExceeded { limit: 20 })
    );
    assert_eq!(
        session.purchase(AccountId::new(1)),
        Err(PurchaseError::NoTicketsToReserve)
    );
    assert!(payments.charges.lock().unwrap().is_empty());
    assert!(seating.reservations.lock().unwrap().is_empty());
}

#[test]
fn untyped_boundary_input_is_validated_at_construction() {
    assert!(matches!(
        TicketRequest::parse("STUDENT", 2),
        Err(PurchaseError::InvalidTicketType { .. })
    ));
    assert!(matches!(
        TicketRequest::parse("ADULT", 0),
        Err(PurchaseError::InvalidTicketCount { given: 0 })
    ));

    let request = TicketRequest::parse("ADULT", 5).unwrap();
    let mut session = BoxOffice::new(
        PaymentAdapter::new(Arc::new(RecordingPaymentService::default())),
        SeatReservationAdapter::new(Arc::new(RecordingSeatService::default())),
    );
    session.add(&request).unwrap();
    assert_eq!(session.cart().total_price(), Money::new(100));
}
