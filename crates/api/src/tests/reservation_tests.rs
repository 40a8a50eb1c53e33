// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use loppis_domain::ItemStatus;
use loppis_persistence::{ItemRepository, Persistence};
use time::macros::date;

use crate::{
    ApiError, CreateReservationRequest, ReservedLineRequest, create_reservation,
    delete_reservation, list_reservations, mark_reservation_paid, mark_reservation_picked_up,
};

use super::helpers::{create_test_admin, create_test_donor, donate_one, setup_test_persistence};

fn create_request(persistence: &mut Persistence) -> CreateReservationRequest {
    let item = donate_one(persistence, &create_test_admin(), "Bike", 1);
    CreateReservationRequest {
        customer_name: String::from("  Bob Builder "),
        customer_email: Some(String::from("bob@example.com")),
        customer_phone: Some(String::from("   ")),
        items: vec![ReservedLineRequest {
            item_id: item.id.to_string(),
            item_name: item.name,
            quantity: 1,
        }],
        reserved_date: Some(String::from("2026-05-02")),
        notes: None,
    }
}

#[test]
fn test_create_and_list_reservation() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin();
    let request = create_request(&mut persistence);

    let created = create_reservation(&mut persistence, &admin, request).unwrap();

    assert_eq!(created.ticket.customer_name, "Bob Builder");
    assert_eq!(created.ticket.customer_phone, None);
    assert_eq!(created.ticket.reserved_date, date!(2026 - 05 - 02));
    assert_eq!(created.ticket.created_by, "admin-1");
    assert_eq!(created.total_quantity, 1);
    assert!(!created.ticket.is_paid);

    let listed = list_reservations(&mut persistence, &admin).unwrap();
    assert_eq!(listed.total, 1);
    assert_eq!(listed.reservations[0].ticket.id, created.ticket.id);
}

#[test]
fn test_reservation_does_not_change_item_status() {
    let mut persistence = setup_test_persistence();
    let request = create_request(&mut persistence);
    let item_id = request.items[0].item_id.clone();

    create_reservation(&mut persistence, &create_test_admin(), request).unwrap();

    let item = persistence
        .get(&loppis_domain::ItemId::new(&item_id))
        .unwrap()
        .unwrap();
    assert_eq!(item.status, ItemStatus::Available);
}

#[test]
fn test_flags_and_delete() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin();
    let request = create_request(&mut persistence);
    let created = create_reservation(&mut persistence, &admin, request).unwrap();
    let id = created.ticket.id;

    let paid = mark_reservation_paid(&mut persistence, &admin, &id, true).unwrap();
    assert!(paid.ticket.is_paid);
    assert!(!paid.ticket.is_picked_up);

    let picked = mark_reservation_picked_up(&mut persistence, &admin, &id, true).unwrap();
    assert!(picked.ticket.is_paid);
    assert!(picked.ticket.is_picked_up);

    delete_reservation(&mut persistence, &admin, &id).unwrap();
    assert_eq!(list_reservations(&mut persistence, &admin).unwrap().total, 0);
    assert!(matches!(
        delete_reservation(&mut persistence, &admin, &id),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_reservations_are_admin_only() {
    let mut persistence = setup_test_persistence();
    let donor = create_test_donor();
    let request = create_request(&mut persistence);

    assert!(matches!(
        list_reservations(&mut persistence, &donor),
        Err(ApiError::Unauthorized { .. })
    ));
    assert!(matches!(
        create_reservation(&mut persistence, &donor, request),
        Err(ApiError::Unauthorized { .. })
    ));
    assert!(matches!(
        mark_reservation_paid(&mut persistence, &donor, "any", true),
        Err(ApiError::Unauthorized { .. })
    ));
}

#[test]
fn test_reservation_validation() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin();

    let mut blank_name = create_request(&mut persistence);
    blank_name.customer_name = String::from(" ");
    assert!(matches!(
        create_reservation(&mut persistence, &admin, blank_name),
        Err(ApiError::InvalidInput { field, .. }) if field == "customer_name"
    ));

    let mut no_lines = create_request(&mut persistence);
    no_lines.items.clear();
    assert!(matches!(
        create_reservation(&mut persistence, &admin, no_lines),
        Err(ApiError::InvalidInput { field, .. }) if field == "items"
    ));

    let mut bad_date = create_request(&mut persistence);
    bad_date.reserved_date = Some(String::from("02/05/2026"));
    assert!(matches!(
        create_reservation(&mut persistence, &admin, bad_date),
        Err(ApiError::InvalidInput { field, .. }) if field == "reserved_date"
    ));

    let mut unknown_item = create_request(&mut persistence);
    unknown_item.items[0].item_id = String::from("missing");
    assert!(matches!(
        create_reservation(&mut persistence, &admin, unknown_item),
        Err(ApiError::ResourceNotFound { .. })
    ));

    assert_eq!(list_reservations(&mut persistence, &admin).unwrap().total, 0);
}

#[test]
fn test_large_ticket_totals_are_stored_and_listed() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin();
    let mut request = create_request(&mut persistence);
    let line = request.items[0].clone();
    request.items = vec![
        ReservedLineRequest {
            quantity: 3_000_000_000,
            ..line.clone()
        },
        ReservedLineRequest {
            quantity: 3_000_000_000,
            ..line
        },
    ];

    let created = create_reservation(&mut persistence, &admin, request).unwrap();
    assert_eq!(created.total_quantity, 6_000_000_000);

    let listed = list_reservations(&mut persistence, &admin).unwrap();
    assert_eq!(listed.total, 1);
    assert_eq!(listed.reservations[0].total_quantity, 6_000_000_000);
}
