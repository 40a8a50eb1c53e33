// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, DisposalTarget, ItemEdit};
use crate::error::CoreError;
use crate::split::plan_split;
use crate::state::Transition;
use loppis_domain::{
    Actor, DomainError, Item, ItemStatus, Role, is_valid_photo_path, reprice_suggested,
    validate_name, validate_price, validate_reserved_by,
};
use time::OffsetDateTime;

/// Applies a command to an item, producing the transition to persist.
///
/// The item is never mutated; on error nothing needs to be written.
///
/// # Arguments
///
/// * `item` - The current record
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `now` - The timestamp recorded as `updated_at`
///
/// # Errors
///
/// Returns an error if:
/// - The actor's role does not permit the command
/// - The item's status does not allow the transition
/// - A supplied field value is invalid
pub fn apply(
    item: &Item,
    command: Command,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Transition, CoreError> {
    authorize(item, &command, actor)?;

    match command {
        Command::Approve => {
            item.status.validate_transition(ItemStatus::Available)?;
            Ok(Transition::Updated(touch(
                Item {
                    status: ItemStatus::Available,
                    ..item.clone()
                },
                actor,
                now,
            )))
        }
        Command::Reject => {
            if item.status != ItemStatus::PendingApproval {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidStatusTransition {
                        from: item.status.as_str().to_string(),
                        to: String::from("rejected"),
                        reason: String::from("only items awaiting approval can be rejected"),
                    },
                ));
            }
            Ok(Transition::Removed(item.id.clone()))
        }
        Command::Reserve { reserved_by } => reserve(item, &reserved_by, None, actor, now),
        Command::Release => {
            item.status.validate_transition(ItemStatus::Available)?;
            if item.status != ItemStatus::Reserved {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidStatusTransition {
                        from: item.status.as_str().to_string(),
                        to: ItemStatus::Available.as_str().to_string(),
                        reason: String::from("item is not reserved"),
                    },
                ));
            }
            Ok(Transition::Updated(touch(
                Item {
                    status: ItemStatus::Available,
                    reserved_by: None,
                    ..item.clone()
                },
                actor,
                now,
            )))
        }
        Command::MarkSold { final_price } => mark_sold(item, final_price, actor, now),
        Command::Donate => {
            item.status.validate_transition(ItemStatus::Donated)?;
            Ok(Transition::Updated(touch(
                Item {
                    status: ItemStatus::Donated,
                    reserved_by: None,
                    ..item.clone()
                },
                actor,
                now,
            )))
        }
        Command::Dispose {
            quantity,
            target,
            final_price,
        } => dispose(item, quantity, target, final_price, actor, now),
        Command::Edit(edit) => edit_item(item, edit, actor, now),
        Command::AttachPhotos { paths } => {
            let mut updated: Item = item.clone();
            updated.photos.retain(|path| is_valid_photo_path(path));
            updated
                .photos
                .extend(paths.into_iter().filter(|path| is_valid_photo_path(path)));
            Ok(Transition::Updated(touch(updated, actor, now)))
        }
        Command::Delete => Ok(Transition::Removed(item.id.clone())),
    }
}

/// Checks that the actor may run the command against this item.
fn authorize(item: &Item, command: &Command, actor: &Actor) -> Result<(), CoreError> {
    let allowed: bool = match command {
        Command::Approve | Command::Reject => actor.role.can_approve(),
        Command::AttachPhotos { .. } => {
            actor.role.can_manage_inventory()
                || (item.created_by == actor.id && item.status == ItemStatus::PendingApproval)
        }
        Command::Reserve { .. }
        | Command::Release
        | Command::MarkSold { .. }
        | Command::Donate
        | Command::Dispose { .. }
        | Command::Edit(_)
        | Command::Delete => actor.role.can_manage_inventory(),
    };

    if allowed {
        Ok(())
    } else {
        Err(CoreError::PermissionDenied {
            action: command.name().to_string(),
            required_role: Role::Admin.as_str().to_string(),
        })
    }
}

/// Refreshes authorship fields.
fn touch(mut item: Item, actor: &Actor, now: OffsetDateTime) -> Item {
    item.updated_by.clone_from(&actor.id);
    item.updated_at = now;
    item
}

fn reserve(
    item: &Item,
    reserved_by: &str,
    final_price: Option<f64>,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Transition, CoreError> {
    item.status.validate_transition(ItemStatus::Reserved)?;
    validate_reserved_by(reserved_by)?;
    if let Some(price) = final_price {
        validate_price("final_price", price)?;
    }

    Ok(Transition::Updated(touch(
        Item {
            status: ItemStatus::Reserved,
            reserved_by: Some(reserved_by.trim().to_string()),
            final_price: final_price.or(item.final_price),
            ..item.clone()
        },
        actor,
        now,
    )))
}

fn mark_sold(
    item: &Item,
    final_price: Option<f64>,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Transition, CoreError> {
    item.status.validate_transition(ItemStatus::Sold)?;
    if let Some(price) = final_price {
        validate_price("final_price", price)?;
    }

    Ok(Transition::Updated(touch(
        Item {
            status: ItemStatus::Sold,
            reserved_by: None,
            final_price: final_price.or(item.final_price),
            ..item.clone()
        },
        actor,
        now,
    )))
}

/// Sells or reserves `quantity` units. Splits when fewer than all units are
/// disposed of, otherwise transitions the whole record.
fn dispose(
    item: &Item,
    quantity: u32,
    target: DisposalTarget,
    final_price: Option<f64>,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Transition, CoreError> {
    if quantity == 0 || quantity > item.quantity {
        return Err(CoreError::DomainViolation(DomainError::InvalidQuantity {
            quantity: i64::from(quantity),
            reason: format!("must be between 1 and {}", item.quantity),
        }));
    }

    if quantity == item.quantity {
        return match target {
            DisposalTarget::Sold => mark_sold(item, final_price, actor, now),
            DisposalTarget::Reserved { by } => reserve(item, &by, final_price, actor, now),
        };
    }

    let plan = plan_split(item, quantity, target, final_price, actor, now)?;
    Ok(Transition::Split(plan))
}

fn edit_item(
    item: &Item,
    edit: ItemEdit,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Transition, CoreError> {
    let mut updated: Item = item.clone();

    if let Some(name) = edit.name {
        validate_name(&name)?;
        updated.name = name.trim().to_string();
    }
    if let Some(subcategory) = edit.subcategory {
        if subcategory.trim().is_empty() {
            return Err(CoreError::DomainViolation(DomainError::InvalidSubcategory(
                String::from("Subcategory cannot be empty"),
            )));
        }
        updated.subcategory = subcategory.trim().to_string();
    }
    if let Some(quantity) = edit.quantity {
        validate_edited_quantity(item, quantity)?;
        updated.quantity = quantity;
    }
    if let Some(original_price) = edit.original_price {
        validate_price("original_price", original_price)?;
        updated.suggested_price =
            reprice_suggested(item.original_price, item.suggested_price, original_price);
        updated.original_price = original_price;
    }
    if let Some(suggested_price) = edit.suggested_price {
        validate_price("suggested_price", suggested_price)?;
        updated.suggested_price = suggested_price;
    }
    if let Some(final_price) = edit.final_price {
        if let Some(price) = final_price {
            validate_price("final_price", price)?;
        }
        updated.final_price = final_price;
    }
    if let Some(description) = edit.description {
        updated.description = description;
    }
    if let Some(category) = edit.category {
        updated.category = category;
    }
    if let Some(condition) = edit.condition {
        updated.condition = condition;
    }
    if let Some(location) = edit.location {
        updated.location = location;
    }
    if let Some(internal_notes) = edit.internal_notes {
        updated.internal_notes = internal_notes;
    }
    if let Some(donor_name) = edit.donor_name {
        updated.donor_name = donor_name;
    }

    Ok(Transition::Updated(touch(updated, actor, now)))
}

fn validate_edited_quantity(item: &Item, quantity: u32) -> Result<(), DomainError> {
    if quantity == 0 {
        return Err(DomainError::InvalidQuantity {
            quantity: 0,
            reason: String::from("quantity must be greater than 0"),
        });
    }

    match item.original_quantity {
        Some(original_quantity) if quantity > original_quantity => {
            Err(DomainError::InvalidQuantity {
                quantity: i64::from(quantity),
                reason: format!("cannot exceed the original quantity of {original_quantity}"),
            })
        }
        _ => Ok(()),
    }
}
