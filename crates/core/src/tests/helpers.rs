// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use loppis_domain::{Actor, Category, Condition, Item, ItemDraft, ItemId, ItemStatus, Role};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_admin() -> Actor {
    Actor::new(String::from("admin-1"), Role::Admin, String::from("Ada Admin"))
}

pub fn create_test_donor() -> Actor {
    Actor::new(String::from("donor-1"), Role::Donor, String::from("Dana Donor"))
}

pub fn create_test_buyer() -> Actor {
    Actor::new(String::from("buyer-1"), Role::Buyer, String::from("Bo Buyer"))
}

pub const fn created_at() -> OffsetDateTime {
    datetime!(2026-03-01 10:00 UTC)
}

pub const fn later() -> OffsetDateTime {
    datetime!(2026-03-02 12:30 UTC)
}

pub fn create_test_draft() -> ItemDraft {
    ItemDraft {
        name: String::from("Winter Duvet"),
        description: Some(String::from("Warm duvet, 150x200")),
        category: Category::Bedding,
        subcategory: String::from("duvet"),
        condition: Condition::LightlyUsed,
        quantity: 5,
        original_price: 200.0,
        suggested_price: None,
        location: Some(String::from("Shelf A")),
        donor_name: None,
    }
}

pub fn create_test_item(id: &str, status: ItemStatus) -> Item {
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
        status,
        reserved_by: (status == ItemStatus::Reserved).then(|| String::from("Bob")),
        location: Some(String::from("Shelf A")),
        photos: Vec::new(),
        internal_notes: None,
        donor_name: Some(String::from("Dana Donor")),
        created_by: String::from("donor-1"),
        updated_by: String::from("donor-1"),
        created_at: created_at(),
        updated_at: created_at(),
    }
}

/// Builds an item with the fields the aggregator cares about.
pub fn item_with(
    id: &str,
    name: &str,
    category: Category,
    status: ItemStatus,
    quantity: u32,
    original_quantity: Option<u32>,
) -> Item {
    Item {
        name: name.to_string(),
        description: None,
        category,
        subcategory: String::from("general"),
        quantity,
        original_quantity,
        ..create_test_item(id, status)
    }
}
