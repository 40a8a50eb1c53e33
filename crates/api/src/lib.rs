// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod capabilities;
mod catalog;
mod error;
mod handlers;
mod photos;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthorizationService, authenticate_identity};
pub use capabilities::{
    Capability, GlobalCapabilities, ItemCapabilities, compute_global_capabilities,
    compute_item_capabilities,
};
pub use catalog::{CatalogSnapshot, ItemCatalog};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    approve_item, attach_photos, create_reservation, delete_item, delete_reservation,
    dispose_item, donate_item, edit_item, export_summary_figures, get_item, inventory_overview,
    list_items, list_my_items, list_reservations, mark_reservation_paid,
    mark_reservation_picked_up, reject_item, release_item, reserve_item, sell_item,
    submit_donation, subcategory_suggestions,
};
pub use photos::{PhotoUrlResolver, PublicBucket, resolve_photo_urls};
pub use request_response::{
    AttachPhotosRequest, CategoryCountResponse, CreateReservationRequest, DeletedResponse,
    DisposeRequest, DisposeResponse, DonationRequest, DonationResponse, EditItemRequest,
    ExportSummaryResponse, InventoryStatsResponse, ItemDraftRequest, ItemListResponse,
    ItemResponse, ListItemsQuery, OverviewResponse, ReservationFlagRequest,
    ReservationListResponse, ReservationResponse, ReservedLineRequest, ReserveRequest,
    SellRequest, SubcategoriesResponse,
};
