// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use loppis_domain::{
    Category, Condition, Item, ItemId, ItemStatus, ReservationTicket, ReservedLine,
};
use time::OffsetDateTime;
use time::macros::{date, datetime};

pub fn create_test_item(id: &str, created_at: OffsetDateTime) -> Item {
    Item {
        id: ItemId::new(id),
        name: String::from("Winter Duvet"),
        description: Some(String::from("Warm duvet, 150x200")),
        category: Category::Bedding,
        subcategory: String::from("duvet"),
        condition: Condition::LightlyUsed,
        quantity: 5,
        original_quantity: None,
        original_price: 200.0,
        suggested_price: 100.0,
        final_price: None,
        status: ItemStatus::PendingApproval,
        reserved_by: None,
        location: Some(String::from("Shelf A")),
        photos: vec![String::from("items/duvet.jpg")],
        internal_notes: None,
        donor_name: Some(String::from("Dana Donor")),
        created_by: String::from("donor-1"),
        updated_by: String::from("donor-1"),
        created_at,
        updated_at: created_at,
    }
}

pub const fn base_time() -> OffsetDateTime {
    datetime!(2026-03-01 10:00 UTC)
}

pub fn create_test_ticket(id: &str, created_at: OffsetDateTime) -> ReservationTicket {
    ReservationTicket {
        id: id.to_string(),
        customer_name: String::from("Bob"),
        customer_email: Some(String::from("bob@example.com")),
        customer_phone: None,
        items: vec![ReservedLine {
            item_id: ItemId::new("item-1"),
            item_name: String::from("Winter Duvet"),
            quantity: 2,
        }],
        reserved_date: date!(2026 - 03 - 05),
        is_paid: false,
        is_picked_up: false,
        notes: Some(String::from("pickup after 17:00")),
        created_by: String::from("admin-1"),
        created_at,
    }
}
