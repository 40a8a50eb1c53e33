// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry category, condition and status as strings so that parse
//! failures surface as `InvalidInput` naming the field rather than as a
//! body rejection.

use loppis::{
    CategoryCount, Command, DisposalTarget, ExportSummary, InventoryStats, ItemEdit, ItemFilter,
    ItemView,
};
use loppis_domain::{
    Category, Condition, ItemDraft, ItemId, ItemStatus, ReservationTicket, ReservedLine,
};
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use crate::capabilities::{GlobalCapabilities, ItemCapabilities};
use crate::error::ApiError;
use crate::photos::{PhotoUrlResolver, resolve_photo_urls};

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn parse_field<T>(field: &str, value: &str) -> Result<T, ApiError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|err: T::Err| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })
}

fn parse_quantity(field: &str, value: i64) -> Result<u32, ApiError> {
    u32::try_from(value).map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("Invalid quantity {value}: must be a non-negative whole number"),
    })
}

/// Parses an optional list filter; absent, empty or `all` means no constraint.
fn parse_filter<T>(field: &str, value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.map(str::trim) {
        None | Some("" | "all") => Ok(None),
        Some(value) => parse_field(field, value).map(Some),
    }
}

// ========================================================================
// Items
// ========================================================================

/// One item as returned to a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemResponse {
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
    /// Present only for admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_price: Option<f64>,
    pub status: ItemStatus,
    pub reserved_by: Option<String>,
    pub location: Option<String>,
    pub photos: Vec<String>,
    pub photo_urls: Vec<String>,
    /// Present only for admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    pub donor_name: Option<String>,
    pub created_by: String,
    pub updated_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Sold-quantity annotation such as `"2/5 sold"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_display: Option<String>,
    pub capabilities: ItemCapabilities,
}

impl ItemResponse {
    /// Builds a response from a role-gated view.
    #[must_use]
    pub fn from_view<R>(
        view: ItemView,
        quantity_display: Option<String>,
        capabilities: ItemCapabilities,
        photos: &R,
    ) -> Self
    where
        R: PhotoUrlResolver + ?Sized,
    {
        let photo_urls: Vec<String> = resolve_photo_urls(&view.photos, photos);
        Self {
            id: view.id,
            name: view.name,
            description: view.description,
            category: view.category,
            subcategory: view.subcategory,
            condition: view.condition,
            quantity: view.quantity,
            original_quantity: view.original_quantity,
            original_price: view.original_price,
            suggested_price: view.suggested_price,
            final_price: view.final_price,
            status: view.status,
            reserved_by: view.reserved_by,
            location: view.location,
            photos: view.photos,
            photo_urls,
            internal_notes: view.internal_notes,
            donor_name: view.donor_name,
            created_by: view.created_by,
            updated_by: view.updated_by,
            created_at: view.created_at,
            updated_at: view.updated_at,
            quantity_display,
            capabilities,
        }
    }
}

/// A list of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemListResponse {
    pub items: Vec<ItemResponse>,
    pub total: usize,
    /// `true` when served from the cache after a storage failure.
    pub stale: bool,
}

/// Query parameters of the item list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListItemsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub condition: Option<String>,
}

impl ListItemsQuery {
    /// Parses the query into a filter.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` naming the parameter that does not
    /// parse.
    pub fn into_filter(self) -> Result<ItemFilter, ApiError> {
        Ok(ItemFilter {
            search_term: self.search.unwrap_or_default(),
            category: parse_filter("category", self.category.as_deref())?,
            status: parse_filter("status", self.status.as_deref())?,
            condition: parse_filter("condition", self.condition.as_deref())?,
        })
    }
}

/// Confirmation that a record was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedResponse {
    pub id: String,
    pub message: String,
}

// ========================================================================
// Donation intake
// ========================================================================

/// One donated item as submitted by a client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDraftRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub subcategory: String,
    pub condition: String,
    pub quantity: i64,
    pub original_price: f64,
    #[serde(default)]
    pub suggested_price: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub donor_name: Option<String>,
}

impl ItemDraftRequest {
    /// Parses the request into a draft.
    ///
    /// # Arguments
    ///
    /// * `index` - Position of the draft in its batch, used in field names
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` naming `items[index].<field>` if the
    /// category, condition or quantity does not parse.
    pub fn into_draft(self, index: usize) -> Result<ItemDraft, ApiError> {
        let field = |name: &str| format!("items[{index}].{name}");
        Ok(ItemDraft {
            category: parse_field(&field("category"), &self.category)?,
            condition: parse_field(&field("condition"), &self.condition)?,
            quantity: parse_quantity(&field("quantity"), self.quantity)?,
            name: self.name,
            description: self.description,
            subcategory: self.subcategory,
            original_price: self.original_price,
            suggested_price: self.suggested_price,
            location: self.location,
            donor_name: self.donor_name,
        })
    }
}

/// A batch of donated items.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DonationRequest {
    pub items: Vec<ItemDraftRequest>,
}

/// The stored records of a donation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationResponse {
    pub items: Vec<ItemResponse>,
    pub persisted: usize,
    pub message: String,
}

// ========================================================================
// Lifecycle commands
// ========================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReserveRequest {
    pub reserved_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SellRequest {
    #[serde(default)]
    pub final_price: Option<f64>,
}

/// A partial sale or reservation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisposeRequest {
    pub quantity: i64,
    /// `sold` or `reserved`.
    pub target: String,
    #[serde(default)]
    pub reserved_by: Option<String>,
    #[serde(default)]
    pub final_price: Option<f64>,
}

impl DisposeRequest {
    /// Parses the request into a dispose command.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the quantity is negative or the
    /// target is neither `sold` nor `reserved`.
    pub fn into_command(self) -> Result<Command, ApiError> {
        let target: DisposalTarget = match self.target.trim() {
            "sold" => DisposalTarget::Sold,
            "reserved" => DisposalTarget::Reserved {
                by: self.reserved_by.unwrap_or_default(),
            },
            other => {
                return Err(ApiError::InvalidInput {
                    field: String::from("target"),
                    message: format!("Unknown disposal target: '{other}'"),
                });
            }
        };

        Ok(Command::Dispose {
            quantity: parse_quantity("quantity", self.quantity)?,
            target,
            final_price: self.final_price,
        })
    }
}

/// Result of a dispose: the original record and, after a split, the new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisposeResponse {
    pub item: ItemResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposed: Option<ItemResponse>,
}

/// A field edit. Absent fields are left unchanged; `null` clears nullable
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub suggested_price: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub final_price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub internal_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub donor_name: Option<Option<String>>,
}

impl EditItemRequest {
    /// Parses the request into an edit.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` naming the field that does not parse.
    pub fn into_edit(self) -> Result<ItemEdit, ApiError> {
        Ok(ItemEdit {
            category: self
                .category
                .as_deref()
                .map(|value| parse_field("category", value))
                .transpose()?,
            condition: self
                .condition
                .as_deref()
                .map(|value| parse_field("condition", value))
                .transpose()?,
            quantity: self
                .quantity
                .map(|value| parse_quantity("quantity", value))
                .transpose()?,
            name: self.name,
            description: self.description,
            subcategory: self.subcategory,
            original_price: self.original_price,
            suggested_price: self.suggested_price,
            final_price: self.final_price,
            location: self.location,
            internal_notes: self.internal_notes,
            donor_name: self.donor_name,
        })
    }
}

/// Storage paths returned by a photo upload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttachPhotosRequest {
    pub paths: Vec<String>,
}

// ========================================================================
// Aggregates
// ========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCountResponse {
    pub category: Category,
    pub count: usize,
}

impl From<CategoryCount> for CategoryCountResponse {
    fn from(count: CategoryCount) -> Self {
        Self {
            category: count.category,
            count: count.count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InventoryStatsResponse {
    pub total_items: usize,
    pub available: usize,
    pub reserved: usize,
    pub sold: usize,
    pub donated: usize,
    pub pending: usize,
    pub total_sold_quantity: u64,
    pub total_value: f64,
}

impl From<InventoryStats> for InventoryStatsResponse {
    fn from(stats: InventoryStats) -> Self {
        Self {
            total_items: stats.total_items,
            available: stats.available,
            reserved: stats.reserved,
            sold: stats.sold,
            donated: stats.donated,
            pending: stats.pending,
            total_sold_quantity: stats.total_sold_quantity,
            total_value: stats.total_value,
        }
    }
}

/// Category counts and global figures for one viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewResponse {
    pub categories: Vec<CategoryCountResponse>,
    pub stats: InventoryStatsResponse,
    pub capabilities: GlobalCapabilities,
    pub stale: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportSummaryResponse {
    pub total_items: usize,
    pub sold_items: usize,
    pub available: usize,
    pub reserved: usize,
    pub total_sold_quantity: u64,
    pub stale: bool,
}

impl ExportSummaryResponse {
    #[must_use]
    pub const fn new(summary: ExportSummary, stale: bool) -> Self {
        Self {
            total_items: summary.total_items,
            sold_items: summary.sold_items,
            available: summary.available,
            reserved: summary.reserved,
            total_sold_quantity: summary.total_sold_quantity,
            stale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcategoriesResponse {
    pub category: Category,
    pub subcategories: Vec<String>,
}

// ========================================================================
// Reservation tickets
// ========================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReservedLineRequest {
    pub item_id: String,
    pub item_name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateReservationRequest {
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub items: Vec<ReservedLineRequest>,
    /// `YYYY-MM-DD`; today when absent.
    #[serde(default)]
    pub reserved_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateReservationRequest {
    /// Parses the ticket lines.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` naming `items[index].quantity` for a
    /// negative quantity.
    pub fn lines(&self) -> Result<Vec<ReservedLine>, ApiError> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, line)| {
                Ok(ReservedLine {
                    item_id: ItemId::new(line.item_id.trim()),
                    item_name: line.item_name.clone(),
                    quantity: parse_quantity(&format!("items[{index}].quantity"), line.quantity)?,
                })
            })
            .collect()
    }
}

/// Sets one flag of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReservationFlagRequest {
    #[serde(default = "flag_default")]
    pub value: bool,
}

const fn flag_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationResponse {
    #[serde(flatten)]
    pub ticket: ReservationTicket,
    pub total_quantity: u64,
}

impl From<ReservationTicket> for ReservationResponse {
    fn from(ticket: ReservationTicket) -> Self {
        Self {
            total_quantity: ticket.total_quantity(),
            ticket,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationListResponse {
    pub reservations: Vec<ReservationResponse>,
    pub total: usize,
}
