// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Category, Condition, ItemId, ItemStatus};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Marker left behind by clients that serialized an object instead of a path.
const SERIALIZED_OBJECT_MARKER: &str = "_type";

/// Returns whether a stored photo path refers to a real object.
///
/// Empty strings, the literal `"undefined"`, and anything containing
/// `"_type"` are leftovers from broken uploads.
#[must_use]
pub fn is_valid_photo_path(path: &str) -> bool {
    let path: &str = path.trim();
    !path.is_empty() && path != "undefined" && !path.contains(SERIALIZED_OBJECT_MARKER)
}

/// Drops invalid entries from a list of photo paths, preserving order.
#[must_use]
pub fn sanitize_photos(photos: Vec<String>) -> Vec<String> {
    photos
        .into_iter()
        .filter(|path| is_valid_photo_path(path))
        .collect()
}

/// One inventory record: a quantity-group of a donated good.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub subcategory: String,
    pub condition: Condition,
    /// Units currently held by this record.
    pub quantity: u32,
    /// Size of the logical item group before its first split.
    pub original_quantity: Option<u32>,
    pub original_price: f64,
    pub suggested_price: f64,
    /// Settlement price. Admin-only.
    pub final_price: Option<f64>,
    pub status: ItemStatus,
    /// Customer holding the item; set only while reserved.
    pub reserved_by: Option<String>,
    pub location: Option<String>,
    /// Storage paths. May contain invalid leftovers; see [`Item::valid_photos`].
    pub photos: Vec<String>,
    /// Staff notes. Admin-only.
    pub internal_notes: Option<String>,
    pub donor_name: Option<String>,
    pub created_by: String,
    pub updated_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Item {
    /// Iterates over the photo paths that refer to real objects.
    pub fn valid_photos(&self) -> impl Iterator<Item = &str> {
        self.photos
            .iter()
            .map(String::as_str)
            .filter(|path| is_valid_photo_path(path))
    }

    /// The size of the logical group this record belongs to, as far as this
    /// record knows.
    #[must_use]
    pub fn group_quantity(&self) -> u32 {
        self.original_quantity.unwrap_or(self.quantity)
    }

    /// The key under which split records of one donation are grouped.
    #[must_use]
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            name: self.name.clone(),
            category: self.category,
            subcategory: self.subcategory.clone(),
        }
    }

    /// The price this record is worth: the settled price when known,
    /// otherwise the suggestion.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.final_price.unwrap_or(self.suggested_price)
    }
}

/// Grouping key shared by all records split from one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub name: String,
    pub category: Category,
    pub subcategory: String,
}

/// A partial update of an item record.
///
/// `None` leaves a field untouched. For nullable fields the inner option
/// distinguishes "clear" (`Some(None)`) from "set" (`Some(Some(_))`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub condition: Option<Condition>,
    pub quantity: Option<u32>,
    pub original_quantity: Option<Option<u32>>,
    pub original_price: Option<f64>,
    pub suggested_price: Option<f64>,
    pub final_price: Option<Option<f64>>,
    pub status: Option<ItemStatus>,
    pub reserved_by: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub photos: Option<Vec<String>>,
    pub internal_notes: Option<Option<String>>,
    pub donor_name: Option<Option<String>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<OffsetDateTime>,
}

impl ItemPatch {
    /// Builds the patch that turns `before` into `after`.
    ///
    /// Only changed fields are included, so concurrent edits of other fields
    /// are not overwritten.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn diff(before: &Item, after: &Item) -> Self {
        fn changed<T: PartialEq + Clone>(before: &T, after: &T) -> Option<T> {
            (before != after).then(|| after.clone())
        }

        Self {
            name: changed(&before.name, &after.name),
            description: changed(&before.description, &after.description),
            category: changed(&before.category, &after.category),
            subcategory: changed(&before.subcategory, &after.subcategory),
            condition: changed(&before.condition, &after.condition),
            quantity: changed(&before.quantity, &after.quantity),
            original_quantity: changed(&before.original_quantity, &after.original_quantity),
            original_price: changed(&before.original_price, &after.original_price),
            suggested_price: changed(&before.suggested_price, &after.suggested_price),
            final_price: changed(&before.final_price, &after.final_price),
            status: changed(&before.status, &after.status),
            reserved_by: changed(&before.reserved_by, &after.reserved_by),
            location: changed(&before.location, &after.location),
            photos: changed(&before.photos, &after.photos),
            internal_notes: changed(&before.internal_notes, &after.internal_notes),
            donor_name: changed(&before.donor_name, &after.donor_name),
            updated_by: changed(&before.updated_by, &after.updated_by),
            updated_at: changed(&before.updated_at, &after.updated_at),
        }
    }

    /// Returns whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the patch to an item in place.
    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            item.subcategory = subcategory;
        }
        if let Some(condition) = self.condition {
            item.condition = condition;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(original_quantity) = self.original_quantity {
            item.original_quantity = original_quantity;
        }
        if let Some(original_price) = self.original_price {
            item.original_price = original_price;
        }
        if let Some(suggested_price) = self.suggested_price {
            item.suggested_price = suggested_price;
        }
        if let Some(final_price) = self.final_price {
            item.final_price = final_price;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(reserved_by) = self.reserved_by {
            item.reserved_by = reserved_by;
        }
        if let Some(location) = self.location {
            item.location = location;
        }
        if let Some(photos) = self.photos {
            item.photos = photos;
        }
        if let Some(internal_notes) = self.internal_notes {
            item.internal_notes = internal_notes;
        }
        if let Some(donor_name) = self.donor_name {
            item.donor_name = donor_name;
        }
        if let Some(updated_by) = self.updated_by {
            item.updated_by = updated_by;
        }
        if let Some(updated_at) = self.updated_at {
            item.updated_at = updated_at;
        }
    }
}

/// A donor-submitted item before it becomes a record.
///
/// Server-assigned fields (id, authorship, timestamps, status) are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub subcategory: String,
    pub condition: Condition,
    pub quantity: u32,
    pub original_price: f64,
    /// Explicit suggestion; derived from `original_price` when absent.
    pub suggested_price: Option<f64>,
    pub location: Option<String>,
    pub donor_name: Option<String>,
}
