// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::DisposalTarget;
use crate::error::CoreError;
use crate::state::SplitPlan;
use loppis_domain::{
    Actor, DomainError, Item, ItemId, ItemStatus, validate_price, validate_reserved_by,
};
use time::OffsetDateTime;

/// Plans splitting `quantity` units off an item into a new record.
///
/// The new record copies the original with a fresh id, the disposed
/// quantity and the target status. The original keeps its id and status and
/// holds the remaining units. Both records remember the size of the group
/// before its first split in `original_quantity`.
///
/// # Errors
///
/// Returns an error if:
/// - `quantity` is zero or not less than the item's quantity
/// - The item is not available or reserved
/// - The reservation holder or settlement price is invalid
pub fn plan_split(
    item: &Item,
    quantity: u32,
    target: DisposalTarget,
    final_price: Option<f64>,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<SplitPlan, CoreError> {
    if quantity == 0 || quantity >= item.quantity {
        return Err(CoreError::DomainViolation(DomainError::InvalidQuantity {
            quantity: i64::from(quantity),
            reason: format!(
                "a split must leave between 1 and {} units on the original",
                item.quantity.saturating_sub(1)
            ),
        }));
    }

    if !item.status.is_disposable() {
        return Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition {
                from: item.status.as_str().to_string(),
                to: target_status(&target).as_str().to_string(),
                reason: String::from("only available or reserved items can be split"),
            },
        ));
    }

    if let Some(price) = final_price {
        validate_price("final_price", price)?;
    }

    let reserved_by: Option<String> = match &target {
        DisposalTarget::Sold => None,
        DisposalTarget::Reserved { by } => {
            validate_reserved_by(by)?;
            Some(by.trim().to_string())
        }
    };

    let remaining_quantity: u32 = item.quantity - quantity;
    let original_quantity: u32 = item.original_quantity.unwrap_or(item.quantity);

    let disposed = Item {
        id: ItemId::generate(),
        quantity,
        original_quantity: Some(original_quantity),
        status: target_status(&target),
        reserved_by,
        final_price,
        updated_by: actor.id.clone(),
        updated_at: now,
        ..item.clone()
    };

    let remaining = Item {
        quantity: remaining_quantity,
        original_quantity: Some(original_quantity),
        updated_by: actor.id.clone(),
        updated_at: now,
        ..item.clone()
    };

    Ok(SplitPlan {
        remaining,
        disposed,
    })
}

const fn target_status(target: &DisposalTarget) -> ItemStatus {
    match target {
        DisposalTarget::Sold => ItemStatus::Sold,
        DisposalTarget::Reserved { .. } => ItemStatus::Reserved,
    }
}
