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

mod error;
mod item;
mod pricing;
mod reservation;
mod role;
mod subcategory;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use item::{GroupKey, Item, ItemDraft, ItemPatch, is_valid_photo_path, sanitize_photos};
pub use pricing::{
    PriceFields, SUGGESTED_PRICE_RATIO, is_price_linked, reprice_suggested, suggested_price_for,
    validate_price,
};
pub use reservation::{ReservationTicket, ReservedLine, validate_reservation};
pub use role::{Actor, Role};
pub use subcategory::{is_suggested_subcategory, suggested_subcategories};
pub use types::{Category, Condition, ItemId, ItemStatus};
pub use validation::{validate_draft, validate_name, validate_reserved_by};
