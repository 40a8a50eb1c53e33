// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::item::ItemDraft;
use crate::pricing::validate_price;

/// Validates the fields of a single donation draft.
///
/// This function checks structural rules only. Category and condition are
/// typed and therefore always present once a draft exists.
///
/// # Arguments
///
/// * `draft` - The draft to validate
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty after trimming
/// - The subcategory is empty after trimming
/// - The quantity is zero
/// - The original or suggested price is negative or not finite
pub fn validate_draft(draft: &ItemDraft) -> Result<(), DomainError> {
    validate_name(&draft.name)?;

    // Rule: subcategory must be chosen
    if draft.subcategory.trim().is_empty() {
        return Err(DomainError::InvalidSubcategory(String::from(
            "Subcategory cannot be empty",
        )));
    }

    // Rule: at least one unit must be donated
    if draft.quantity == 0 {
        return Err(DomainError::InvalidQuantity {
            quantity: 0,
            reason: String::from("quantity must be greater than 0"),
        });
    }

    validate_price("original_price", draft.original_price)?;
    if let Some(suggested_price) = draft.suggested_price {
        validate_price("suggested_price", suggested_price)?;
    }

    Ok(())
}

/// Validates an item name.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is empty after trimming.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates the name of the customer an item is reserved for.
///
/// # Errors
///
/// Returns `DomainError::InvalidReservedBy` if the name is empty after
/// trimming.
pub fn validate_reserved_by(reserved_by: &str) -> Result<(), DomainError> {
    if reserved_by.trim().is_empty() {
        return Err(DomainError::InvalidReservedBy(String::from(
            "A reservation needs the name of the person holding it",
        )));
    }
    Ok(())
}
