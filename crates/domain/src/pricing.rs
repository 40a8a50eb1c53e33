// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pricing rules.
//!
//! The suggested price is half the original price, rounded up to whole
//! kronor. It stays linked to the original price until someone sets it by
//! hand.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The fraction of the original price used for the suggested price.
pub const SUGGESTED_PRICE_RATIO: f64 = 0.5;

/// Derives the suggested price from an original price.
#[must_use]
pub fn suggested_price_for(original_price: f64) -> f64 {
    (original_price * SUGGESTED_PRICE_RATIO).ceil()
}

/// Returns whether a stored suggested price still follows its original price.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_price_linked(original_price: f64, suggested_price: f64) -> bool {
    suggested_price_for(original_price) == suggested_price
}

/// Computes the suggested price after `original_price` changes on a stored
/// record.
///
/// A stored record carries no explicit link flag, so the link is inferred:
/// the suggested price follows the new original price only if it still
/// equals the value derived from the old one.
#[must_use]
pub fn reprice_suggested(old_original: f64, current_suggested: f64, new_original: f64) -> f64 {
    if is_price_linked(old_original, current_suggested) {
        suggested_price_for(new_original)
    } else {
        current_suggested
    }
}

/// Validates a price value.
///
/// # Errors
///
/// Returns `DomainError::InvalidPrice` if the value is negative, NaN or
/// infinite.
pub fn validate_price(field: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::InvalidPrice {
            field,
            reason: String::from("must be a finite number"),
        });
    }
    if value < 0.0 {
        return Err(DomainError::InvalidPrice {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

/// Price fields of a draft being filled in.
///
/// Starts linked: every `original_price` edit recomputes the suggested
/// price. The first direct edit of the suggested price breaks the link for
/// good.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceFields {
    original_price: f64,
    suggested_price: f64,
    linked: bool,
}

impl PriceFields {
    /// Creates linked price fields for an original price.
    #[must_use]
    pub fn new(original_price: f64) -> Self {
        Self {
            original_price,
            suggested_price: suggested_price_for(original_price),
            linked: true,
        }
    }

    /// Updates the original price, recomputing the suggestion while linked.
    pub fn set_original_price(&mut self, original_price: f64) {
        self.original_price = original_price;
        if self.linked {
            self.suggested_price = suggested_price_for(original_price);
        }
    }

    /// Overrides the suggested price and unlinks it from the original price.
    pub const fn set_suggested_price(&mut self, suggested_price: f64) {
        self.suggested_price = suggested_price;
        self.linked = false;
    }

    /// Returns the original price.
    #[must_use]
    pub const fn original_price(&self) -> f64 {
        self.original_price
    }

    /// Returns the suggested price.
    #[must_use]
    pub const fn suggested_price(&self) -> f64 {
        self.suggested_price
    }

    /// Returns whether the suggested price still follows the original price.
    #[must_use]
    pub const fn is_linked(&self) -> bool {
        self.linked
    }
}
