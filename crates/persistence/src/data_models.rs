// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversion to and from domain types.
//!
//! Enumerations are stored by their `as_str` names, timestamps as RFC 3339
//! text in UTC, photo paths and reservation lines as JSON arrays.

use diesel::prelude::*;
use loppis_domain::{
    Category, Condition, DomainError, Item, ItemId, ItemPatch, ItemStatus, ReservationTicket,
    ReservedLine, sanitize_photos,
};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::diesel_schema::{items, reservations};
use crate::error::PersistenceError;

/// Diesel row for the `items` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ItemRow {
    pub item_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub subcategory: String,
    pub item_condition: String,
    pub quantity: i64,
    pub original_quantity: Option<i64>,
    pub original_price: f64,
    pub suggested_price: f64,
    pub final_price: Option<f64>,
    pub status: String,
    pub reserved_by: Option<String>,
    pub location: Option<String>,
    pub photos_json: String,
    pub internal_notes: Option<String>,
    pub donor_name: Option<String>,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Partial update of an `items` row. `None` columns are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = items)]
pub struct ItemChangeset {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub item_condition: Option<String>,
    pub quantity: Option<i64>,
    pub original_quantity: Option<Option<i64>>,
    pub original_price: Option<f64>,
    pub suggested_price: Option<f64>,
    pub final_price: Option<Option<f64>>,
    pub status: Option<String>,
    pub reserved_by: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub photos_json: Option<String>,
    pub internal_notes: Option<Option<String>>,
    pub donor_name: Option<Option<String>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<String>,
}

/// Diesel row for the `reservations` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReservationRow {
    pub reservation_id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub items_json: String,
    pub reserved_date: String,
    pub is_paid: i32,
    pub is_picked_up: i32,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

/// Paid and picked-up flags of a reservation.
#[derive(Debug, Clone, Copy, Default, AsChangeset)]
#[diesel(table_name = reservations)]
pub struct ReservationFlags {
    pub is_paid: Option<i32>,
    pub is_picked_up: Option<i32>,
}

/// Formats a timestamp for storage.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be represented as RFC 3339.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(value.to_offset(UtcOffset::UTC).format(&Rfc3339)?)
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns an error if the text is not RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    Ok(OffsetDateTime::parse(value, &Rfc3339)?)
}

fn format_date(value: Date) -> Result<String, PersistenceError> {
    Ok(value.format(format_description!("[year]-[month]-[day]"))?)
}

fn parse_date(value: &str) -> Result<Date, PersistenceError> {
    Ok(Date::parse(value, format_description!("[year]-[month]-[day]"))?)
}

fn quantity_to_column(quantity: u32) -> i64 {
    i64::from(quantity)
}

fn quantity_from_column(item_id: &str, quantity: i64) -> Result<u32, PersistenceError> {
    u32::try_from(quantity).map_err(|_| {
        PersistenceError::SerializationError(format!(
            "Item '{item_id}' has an out-of-range quantity {quantity}"
        ))
    })
}

fn encode_photos(photos: &[String]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&sanitize_photos(photos.to_vec()))?)
}

fn flag_to_column(flag: bool) -> i32 {
    i32::from(flag)
}

impl ItemRow {
    /// Builds the row for a new item. Invalid photo paths are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp or the photo list cannot be encoded.
    pub fn from_item(item: &Item) -> Result<Self, PersistenceError> {
        Ok(Self {
            item_id: item.id.as_str().to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.as_str().to_string(),
            subcategory: item.subcategory.clone(),
            item_condition: item.condition.as_str().to_string(),
            quantity: quantity_to_column(item.quantity),
            original_quantity: item.original_quantity.map(quantity_to_column),
            original_price: item.original_price,
            suggested_price: item.suggested_price,
            final_price: item.final_price,
            status: item.status.as_str().to_string(),
            reserved_by: item.reserved_by.clone(),
            location: item.location.clone(),
            photos_json: encode_photos(&item.photos)?,
            internal_notes: item.internal_notes.clone(),
            donor_name: item.donor_name.clone(),
            created_by: item.created_by.clone(),
            updated_by: item.updated_by.clone(),
            created_at: format_timestamp(item.created_at)?,
            updated_at: format_timestamp(item.updated_at)?,
        })
    }

    /// Converts a stored row back into an item.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError` if a stored value is
    /// not a valid domain value.
    pub fn into_item(self) -> Result<Item, PersistenceError> {
        let invalid = |err: DomainError| {
            PersistenceError::SerializationError(format!(
                "Item '{}' holds an invalid value: {err}",
                self.item_id
            ))
        };

        let category: Category = self.category.parse().map_err(invalid)?;
        let condition: Condition = self.item_condition.parse().map_err(invalid)?;
        let status: ItemStatus = self.status.parse().map_err(invalid)?;
        let quantity: u32 = quantity_from_column(&self.item_id, self.quantity)?;
        let original_quantity: Option<u32> = self
            .original_quantity
            .map(|value| quantity_from_column(&self.item_id, value))
            .transpose()?;
        let photos: Vec<String> = serde_json::from_str(&self.photos_json)?;
        let created_at: OffsetDateTime = parse_timestamp(&self.created_at)?;
        let updated_at: OffsetDateTime = parse_timestamp(&self.updated_at)?;

        Ok(Item {
            id: ItemId::from(self.item_id),
            name: self.name,
            description: self.description,
            category,
            subcategory: self.subcategory,
            condition,
            quantity,
            original_quantity,
            original_price: self.original_price,
            suggested_price: self.suggested_price,
            final_price: self.final_price,
            status,
            reserved_by: self.reserved_by,
            location: self.location,
            photos,
            internal_notes: self.internal_notes,
            donor_name: self.donor_name,
            created_by: self.created_by,
            updated_by: self.updated_by,
            created_at,
            updated_at,
        })
    }
}

impl ItemChangeset {
    /// Translates a domain patch into column updates.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp or the photo list cannot be encoded.
    pub fn from_patch(patch: &ItemPatch) -> Result<Self, PersistenceError> {
        Ok(Self {
            name: patch.name.clone(),
            description: patch.description.clone(),
            category: patch.category.map(|value| value.as_str().to_string()),
            subcategory: patch.subcategory.clone(),
            item_condition: patch.condition.map(|value| value.as_str().to_string()),
            quantity: patch.quantity.map(quantity_to_column),
            original_quantity: patch
                .original_quantity
                .map(|value| value.map(quantity_to_column)),
            original_price: patch.original_price,
            suggested_price: patch.suggested_price,
            final_price: patch.final_price,
            status: patch.status.map(|value| value.as_str().to_string()),
            reserved_by: patch.reserved_by.clone(),
            location: patch.location.clone(),
            photos_json: patch.photos.as_deref().map(encode_photos).transpose()?,
            internal_notes: patch.internal_notes.clone(),
            donor_name: patch.donor_name.clone(),
            updated_by: patch.updated_by.clone(),
            updated_at: patch.updated_at.map(format_timestamp).transpose()?,
        })
    }
}

impl ReservationRow {
    /// Builds the row for a new reservation ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines, date or timestamp cannot be encoded.
    pub fn from_ticket(ticket: &ReservationTicket) -> Result<Self, PersistenceError> {
        Ok(Self {
            reservation_id: ticket.id.clone(),
            customer_name: ticket.customer_name.clone(),
            customer_email: ticket.customer_email.clone(),
            customer_phone: ticket.customer_phone.clone(),
            items_json: serde_json::to_string(&ticket.items)?,
            reserved_date: format_date(ticket.reserved_date)?,
            is_paid: flag_to_column(ticket.is_paid),
            is_picked_up: flag_to_column(ticket.is_picked_up),
            notes: ticket.notes.clone(),
            created_by: ticket.created_by.clone(),
            created_at: format_timestamp(ticket.created_at)?,
        })
    }

    /// Converts a stored row back into a ticket.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError` if the lines, date or
    /// timestamp cannot be decoded.
    pub fn into_ticket(self) -> Result<ReservationTicket, PersistenceError> {
        let items: Vec<ReservedLine> = serde_json::from_str(&self.items_json)?;

        Ok(ReservationTicket {
            id: self.reservation_id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            items,
            reserved_date: parse_date(&self.reserved_date)?,
            is_paid: self.is_paid != 0,
            is_picked_up: self.is_picked_up != 0,
            notes: self.notes,
            created_by: self.created_by,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

impl ReservationFlags {
    #[must_use]
    pub fn new(is_paid: Option<bool>, is_picked_up: Option<bool>) -> Self {
        Self {
            is_paid: is_paid.map(flag_to_column),
            is_picked_up: is_picked_up.map(flag_to_column),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_paid.is_none() && self.is_picked_up.is_none()
    }
}
