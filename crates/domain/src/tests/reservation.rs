// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::{date, datetime};

use crate::{DomainError, ItemId, ReservationTicket, ReservedLine, validate_reservation};

fn line(name: &str, quantity: u32) -> ReservedLine {
    ReservedLine {
        item_id: ItemId::new(&format!("id-{name}")),
        item_name: name.to_string(),
        quantity,
    }
}

#[test]
fn test_validate_reservation_accepts_valid_ticket() {
    assert!(validate_reservation("Bob", &[line("Lamp", 1), line("Rug", 2)]).is_ok());
}

#[test]
fn test_validate_reservation_rejects_blank_customer() {
    assert!(matches!(
        validate_reservation("  ", &[line("Lamp", 1)]),
        Err(DomainError::InvalidCustomerName(_))
    ));
}

#[test]
fn test_validate_reservation_rejects_empty_ticket() {
    assert_eq!(
        validate_reservation("Bob", &[]),
        Err(DomainError::EmptyReservation)
    );
}

#[test]
fn test_validate_reservation_rejects_zero_quantity_line() {
    assert!(matches!(
        validate_reservation("Bob", &[line("Lamp", 1), line("Rug", 0)]),
        Err(DomainError::InvalidQuantity { quantity: 0, .. })
    ));
}

#[test]
fn test_ticket_total_quantity_and_date_format() {
    let ticket = ReservationTicket {
        id: String::from("r-1"),
        customer_name: String::from("Bob"),
        customer_email: None,
        customer_phone: None,
        items: vec![line("Lamp", 1), line("Rug", 2)],
        reserved_date: date!(2026 - 04 - 12),
        is_paid: false,
        is_picked_up: false,
        notes: None,
        created_by: String::from("admin-1"),
        created_at: datetime!(2026-04-10 09:30 UTC),
    };

    assert_eq!(ticket.total_quantity(), 3);
    let json = serde_json::to_value(&ticket).unwrap();
    assert_eq!(json["reserved_date"], "2026-04-12");
}

#[test]
fn test_ticket_total_quantity_does_not_overflow() {
    let line = |id: &str| ReservedLine {
        item_id: ItemId::new(id),
        item_name: String::from("Pallet of towels"),
        quantity: 3_000_000_000,
    };
    let ticket = ReservationTicket {
        id: String::from("ticket-big"),
        customer_name: String::from("Bob"),
        customer_email: None,
        customer_phone: None,
        items: vec![line("item-1"), line("item-2")],
        reserved_date: date!(2026 - 04 - 12),
        is_paid: false,
        is_picked_up: false,
        notes: None,
        created_by: String::from("admin-1"),
        created_at: datetime!(2026-04-10 09:30 UTC),
    };

    assert_eq!(ticket.total_quantity(), 6_000_000_000);
}
