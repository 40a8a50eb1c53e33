// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use loppis_domain::{Category, Condition, Item, ItemId, ItemStatus, Role};
use time::OffsetDateTime;

/// An item as presented to one viewer.
///
/// Admin-only fields are `None` for everyone else, whatever the record
/// holds. Photos are reduced to valid storage paths.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub subcategory: String,
    pub condition: Condition,
    pub quantity: u32,
    pub original_quantity: Option<u32>,
    pub original_price: f64,
    pub suggested_price: f64,
    pub final_price: Option<f64>,
    pub status: ItemStatus,
    pub reserved_by: Option<String>,
    pub location: Option<String>,
    pub photos: Vec<String>,
    pub internal_notes: Option<String>,
    pub donor_name: Option<String>,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl ItemView {
    /// Builds the view of an item for a viewer with the given role.
    #[must_use]
    pub fn new(item: &Item, role: Role) -> Self {
        let internal: bool = role.can_see_internal_fields();

        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category,
            subcategory: item.subcategory.clone(),
            condition: item.condition,
            quantity: item.quantity,
            original_quantity: item.original_quantity,
            original_price: item.original_price,
            suggested_price: item.suggested_price,
            final_price: item.final_price.filter(|_| internal),
            status: item.status,
            reserved_by: item.reserved_by.clone(),
            location: item.location.clone(),
            photos: item.valid_photos().map(str::to_string).collect(),
            internal_notes: item.internal_notes.clone().filter(|_| internal),
            donor_name: item.donor_name.clone(),
            created_by: item.created_by.clone(),
            updated_by: item.updated_by.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
